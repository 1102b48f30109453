use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::books::Book;
use crate::span::Span;

/// The verse part of a reference: a single verse or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerseRange {
    pub start: u32,
    /// Always `>= start` when present.
    pub end: Option<u32>,
}

/// A Bible reference found in text.
///
/// Stores the span of the original wording rather than a copy of it; slice
/// the scanned text with `span` to get what the author wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Reference {
    pub book: Book,
    pub chapter: u32,
    /// `None` means the whole chapter.
    pub verses: Option<VerseRange>,
    pub span: Span,
}

impl Reference {
    pub fn verse_start(&self) -> Option<u32> {
        self.verses.map(|v| v.start)
    }

    pub fn verse_end(&self) -> Option<u32> {
        self.verses.and_then(|v| v.end)
    }

    pub fn is_whole_chapter(&self) -> bool {
        self.verses.is_none()
    }
}

/// Canonical passage notation: `John 3`, `John 3:16` or `John 3:16-18`.
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(verses) = self.verses {
            write!(f, ":{}", verses.start)?;
            if let Some(end) = verses.end {
                write!(f, "-{end}")?;
            }
        }
        Ok(())
    }
}

/// Why a book-plus-chapter candidate was not accepted as a reference.
///
/// The candidate's text is left exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReference {
    #[error("chapter 0 does not exist")]
    ZeroChapter,

    #[error("verse 0 does not exist")]
    ZeroVerse,

    #[error("number {digits} is too large")]
    NumberTooLarge { digits: String },

    #[error("verse range runs backwards ({start}-{end})")]
    ReversedRange { start: u32, end: u32 },

    #[error("ranges across chapters are not linked")]
    CrossChapterRange,

    #[error("chapter ranges are not linked")]
    ChapterRange,

    #[error("reference runs into trailing text")]
    TrailingText,
}
