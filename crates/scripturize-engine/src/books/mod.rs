//! # Books
//!
//! The 66 books of the Bible and the table of spellings that name them.
//!
//! - **`data`**: static canonical names, numerals and abbreviation stems
//! - **`table`**: [`BookTable`], the alias index built from that data, with
//!   whole-token lookup and longest-alias matching inside running text

mod data;
pub mod table;

use std::fmt;

use serde::{Serialize, Serializer};

pub use table::{AliasMatch, BookTable, lookup_book};

use data::BOOKS;

/// A canonical book of the Bible.
///
/// Cheap to copy; the canonical name is looked up from static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Book(u8);

impl Book {
    /// Number of books known to the table.
    pub const COUNT: usize = 66;

    /// Returns every book in canonical order, Genesis to Revelation.
    pub fn all() -> impl Iterator<Item = Book> {
        (0..BOOKS.len()).map(|i| Book(i as u8))
    }

    /// Finds a book by its exact canonical name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Book> {
        Book::all().find(|b| b.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }

    /// The leading numeral of books such as `2 Kings`, if any.
    pub fn numeral(self) -> Option<u8> {
        self.data().numeral
    }

    fn data(self) -> &'static data::BookData {
        &BOOKS[self.0 as usize]
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
