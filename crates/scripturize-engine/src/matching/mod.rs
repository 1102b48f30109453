//! # Reference Matching
//!
//! Cursor-based scanning of text for Bible references, with markup treated
//! as raw zones.
//!
//! ## Modules
//!
//! - **`types`**: [`Reference`], [`VerseRange`] and [`MalformedReference`]
//! - **`kinds`**: delimiter constants for markup and reference syntax
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: [`find_references`] and the `try_*` helpers behind it
//!
//! ## Grammar
//!
//! ```text
//! reference := book "."? WS+ chapter (":" verse (dash verse)?)?
//! dash      := "-" | en dash
//! ```
//!
//! A candidate that fits the grammar but fails a semantic check (verse 0, a
//! backwards range, digits running into letters) is a [`MalformedReference`]
//! and is left as plain text.
//!
//! ## Raw Zone Precedence
//!
//! Markup is checked before references. Tags (including their attribute
//! values), comments, and the bodies of `a`, `code`, `pre`, `script` and
//! `style` elements are stepped over whole, so existing links are never
//! linked twice and attributes are never rewritten.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{References, find_references, find_references_with};
pub use types::{MalformedReference, Reference, VerseRange};
