//! # Matching Kinds
//!
//! Types that own the delimiters of the syntax the matcher understands.
//!
//! ## Types
//!
//! - **`Markup`**: `<`, `>`, comment delimiters and the elements whose
//!   bodies are raw zones
//! - **`ReferenceSyntax`**: the chapter/verse separator, range dashes and
//!   abbreviation period
//!
//! The scanner calls these constants; it never hardcodes `<` or `:`.

pub mod markup;
pub mod reference;

pub use markup::Markup;
pub use reference::ReferenceSyntax;
