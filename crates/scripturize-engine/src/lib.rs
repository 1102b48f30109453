//! Recognises Bible references in text and links them to an online Bible.
//!
//! ```
//! let html = scripturize_engine::scripturize("See John 3:16.", "ESV");
//! assert!(html.contains(">John 3:16</a>"));
//! ```

pub mod books;
pub mod matching;
pub mod render;
pub mod scripturizer;
pub mod span;
pub mod translation;

// Re-export key types for easier usage
pub use books::{Book, BookTable, lookup_book};
pub use matching::{MalformedReference, Reference, VerseRange, find_references};
pub use render::{BibleGateway, LinkTemplate, RenderError, render};
pub use scripturizer::{Scripturizer, TextFilter, scripturize};
pub use span::Span;
pub use translation::TranslationCode;
