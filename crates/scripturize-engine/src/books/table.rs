use std::collections::HashMap;
use std::sync::LazyLock;

use super::Book;
use super::data::NUMERAL_PREFIXES;

/// A book recognised at some offset of a text, and where its alias ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMatch {
    pub book: Book,
    /// Byte offset just past the alias (any trailing period is not included).
    pub end: usize,
    /// Shortened spellings (`Gen`, `1 Cor`) may be followed by a period.
    pub abbreviated: bool,
}

/// The book a spelling stands for, and whether it is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spelling {
    book: Book,
    abbreviated: bool,
}

#[derive(Debug)]
struct Alias {
    /// Lowercase, single-spaced form.
    text: String,
    spelling: Spelling,
}

/// Index of every accepted spelling of every book.
///
/// Built once and never mutated afterwards, so a single table can serve any
/// number of threads. [`BookTable::shared`] hands out the process-wide one.
#[derive(Debug)]
pub struct BookTable {
    by_alias: HashMap<String, Spelling>,
    /// Aliases grouped by first byte, longest first.
    by_initial: HashMap<u8, Vec<Alias>>,
}

static SHARED: LazyLock<BookTable> = LazyLock::new(BookTable::new);

/// Whole-token lookup against the shared table.
///
/// Case-insensitive, tolerant of extra whitespace and one trailing period.
pub fn lookup_book(token: &str) -> Option<Book> {
    BookTable::shared().lookup(token)
}

impl BookTable {
    pub fn new() -> Self {
        let mut by_alias = HashMap::new();
        for book in Book::all() {
            for (alias, abbreviated) in aliases_for(book) {
                // First book in canonical order keeps a contested spelling
                by_alias
                    .entry(alias)
                    .or_insert(Spelling { book, abbreviated });
            }
        }

        let mut by_initial: HashMap<u8, Vec<Alias>> = HashMap::new();
        for (text, &spelling) in &by_alias {
            by_initial
                .entry(text.as_bytes()[0])
                .or_default()
                .push(Alias {
                    text: text.clone(),
                    spelling,
                });
        }
        for bucket in by_initial.values_mut() {
            bucket.sort_by(|a, b| b.text.len().cmp(&a.text.len()).then(a.text.cmp(&b.text)));
        }

        Self {
            by_alias,
            by_initial,
        }
    }

    /// The process-wide table, built on first use.
    pub fn shared() -> &'static BookTable {
        &SHARED
    }

    /// Number of distinct aliases.
    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }

    pub fn lookup(&self, token: &str) -> Option<Book> {
        self.by_alias.get(&normalise(token)).map(|s| s.book)
    }

    /// All normalised aliases of `book`, sorted.
    pub fn aliases(&self, book: Book) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .by_alias
            .iter()
            .filter(|(_, s)| s.book == book)
            .map(|(a, _)| a.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// Matches the longest alias starting exactly at byte offset `at`.
    ///
    /// The alias must sit on word boundaries: the character before `at` and
    /// the character after the alias may not be alphanumeric (Unicode, so
    /// `éJohn` is one word). A space in an alias matches any run of ASCII
    /// whitespace in the text.
    pub fn match_at(&self, s: &str, at: usize) -> Option<AliasMatch> {
        let bytes = s.as_bytes();
        let first = bytes.get(at)?.to_ascii_lowercase();
        let bucket = self.by_initial.get(&first)?;

        if s.get(..at)?.chars().next_back().is_some_and(char::is_alphanumeric) {
            return None;
        }

        bucket.iter().find_map(|alias| {
            let end = match_alias(bytes, at, &alias.text)?;
            if starts_word(&s[end..]) {
                return None;
            }
            Some(AliasMatch {
                book: alias.spelling.book,
                end,
                abbreviated: alias.spelling.abbreviated,
            })
        })
    }
}

impl Default for BookTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `rest` begins with a letter or digit, so that whatever precedes
/// it does not end on a word boundary.
pub(crate) fn starts_word(rest: &str) -> bool {
    rest.chars().next().is_some_and(char::is_alphanumeric)
}

/// Lowercases, collapses whitespace runs and drops one trailing period.
fn normalise(token: &str) -> String {
    let token = token.trim();
    let token = token.strip_suffix('.').unwrap_or(token);
    token
        .split_ascii_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every spelling of `book`, each flagged when it is an abbreviation.
fn aliases_for(book: Book) -> Vec<(String, bool)> {
    let data = book.data();
    let mut out = vec![(normalise(data.name), false)];
    for (index, stem) in data.stems.iter().enumerate() {
        let abbreviated = data.is_abbreviation(index);
        match data.numeral {
            None => out.push((normalise(stem), abbreviated)),
            Some(n) => {
                for &(prefix, glues) in NUMERAL_PREFIXES[usize::from(n) - 1] {
                    out.push((normalise(&format!("{prefix} {stem}")), abbreviated));
                    if glues {
                        out.push((normalise(&format!("{prefix}{stem}")), abbreviated));
                    }
                }
            }
        }
    }
    out
}

fn match_alias(bytes: &[u8], at: usize, alias: &str) -> Option<usize> {
    let mut i = at;
    for &want in alias.as_bytes() {
        if want == b' ' {
            let ws_start = i;
            while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
                i += 1;
            }
            if i == ws_start {
                return None;
            }
        } else {
            if !bytes.get(i)?.eq_ignore_ascii_case(&want) {
                return None;
            }
            i += 1;
        }
    }
    Some(i)
}
