use std::iter::FusedIterator;

use log::{debug, trace};

use crate::books::{BookTable, table::starts_word};
use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Markup, ReferenceSyntax},
    types::{MalformedReference, Reference, VerseRange},
};

/// Finds Bible references in `text` using the shared book table.
///
/// The returned iterator is lazy and makes a single left-to-right pass.
/// References come out in order and never overlap; markup raw zones are
/// stepped over without looking inside.
pub fn find_references(text: &str) -> References<'_, 'static> {
    find_references_with(text, BookTable::shared())
}

/// Like [`find_references`] but with a caller-supplied book table.
pub fn find_references_with<'s, 't>(text: &'s str, table: &'t BookTable) -> References<'s, 't> {
    References {
        cur: Cursor::new(text),
        table,
    }
}

/// Lazy iterator over the references in a text.
pub struct References<'s, 't> {
    cur: Cursor<'s>,
    table: &'t BookTable,
}

impl Iterator for References<'_, '_> {
    type Item = Reference;

    fn next(&mut self) -> Option<Reference> {
        while !self.cur.eof() {
            // Raw zones first: nothing inside markup is ever a candidate
            if let Some(zone) = try_skip_markup(&mut self.cur) {
                trace!("skipped markup at {}..{}", zone.start, zone.end);
                continue;
            }
            match try_parse_reference(&mut self.cur, self.table) {
                Some(Ok(reference)) => return Some(reference),
                Some(Err(reason)) => {
                    debug!("rejected reference candidate at {}: {reason}", self.cur.pos());
                }
                None => {}
            }
            self.cur.bump_char();
        }
        None
    }
}

impl FusedIterator for References<'_, '_> {}

/// Steps over a tag, comment or raw element starting at the cursor.
///
/// Returns the skipped span, or `None` (cursor untouched) if the `<` does not
/// open markup. Anything left unterminated runs to the end of the input.
fn try_skip_markup(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Markup::OPEN) {
        return None;
    }
    let s = cur.s;
    let bytes = s.as_bytes();
    let start = cur.pos();

    if cur.starts_with(Markup::COMMENT_OPEN) {
        let end = find(bytes, start + Markup::COMMENT_OPEN.len(), Markup::COMMENT_CLOSE)
            .map_or(bytes.len(), |i| i + Markup::COMMENT_CLOSE.len());
        cur.jump_to(end);
        return Some(Span::new(start, end));
    }

    let next = cur.peek_at(1)?;
    if !(next.is_ascii_alphabetic() || matches!(next, Markup::END_TAG | b'!' | b'?')) {
        return None;
    }

    let mut end = tag_end(bytes, start + 1);
    if next.is_ascii_alphabetic() && !bytes[..end].ends_with(b"/>") {
        let name = element_name(bytes, start + 1);
        if let Some(raw) = Markup::RAW_ELEMENTS
            .iter()
            .find(|e| e.as_bytes().eq_ignore_ascii_case(name))
        {
            end = closing_tag_end(bytes, end, raw.as_bytes());
        }
    }

    cur.jump_to(end);
    Some(Span::new(start, end))
}

/// Offset just past the `>` closing a tag whose body starts at `from`.
///
/// Quoted attribute values may contain `>`. A quote only opens a value right
/// after `=`, so a stray apostrophe does not swallow the document.
fn tag_end(bytes: &[u8], from: usize) -> usize {
    let mut quote = None;
    let mut after_eq = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if after_eq && (b == b'"' || b == b'\'') => {
                quote = Some(b);
                after_eq = false;
            }
            None if b == Markup::CLOSE => return i + 1,
            None if b == b'=' => after_eq = true,
            None if b.is_ascii_whitespace() => {}
            None => after_eq = false,
        }
    }
    bytes.len()
}

fn element_name(bytes: &[u8], from: usize) -> &[u8] {
    let len = bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
        .count();
    &bytes[from..from + len]
}

/// Offset just past the `</name>` that closes a raw element.
fn closing_tag_end(bytes: &[u8], from: usize, name: &[u8]) -> usize {
    let mut i = from;
    while let Some(found) = find(bytes, i, b"</") {
        let name_start = found + 2;
        let name_end = name_start + name.len();
        let same_name = bytes
            .get(name_start..name_end)
            .is_some_and(|n| n.eq_ignore_ascii_case(name));
        if same_name && bytes.get(name_end).is_none_or(|b| !b.is_ascii_alphanumeric()) {
            return tag_end(bytes, name_end);
        }
        i = name_start;
    }
    bytes.len()
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Attempts to parse a reference starting at the current position.
///
/// `None` means there is no candidate here (no book alias followed by
/// whitespace and a digit). `Some(Err(_))` means a candidate failed a
/// semantic check. In both cases the cursor is restored; on success it sits
/// just past the reference.
fn try_parse_reference(
    cur: &mut Cursor<'_>,
    table: &BookTable,
) -> Option<Result<Reference, MalformedReference>> {
    let start = cur.pos();
    let alias = table.match_at(cur.s, start)?;
    let saved = cur.clone();

    cur.jump_to(alias.end);
    // `Gen. 1` but not `John. 3`, which is a sentence ending
    if alias.abbreviated && cur.peek() == Some(ReferenceSyntax::ABBREV_DOT) {
        cur.bump();
    }
    if cur.eat_while(|b| b.is_ascii_whitespace()) == 0 || !next_is_digit(cur, 0) {
        *cur = saved;
        return None;
    }

    let result = parse_chapter_and_verses(cur).map(|(chapter, verses)| Reference {
        book: alias.book,
        chapter,
        verses,
        span: Span::new(start, cur.pos()),
    });
    if result.is_err() {
        *cur = saved;
    }
    Some(result)
}

fn parse_chapter_and_verses(
    cur: &mut Cursor<'_>,
) -> Result<(u32, Option<VerseRange>), MalformedReference> {
    let chapter = parse_number(cur)?;
    if chapter == 0 {
        return Err(MalformedReference::ZeroChapter);
    }

    let mut verses = None;
    if cur.peek() == Some(ReferenceSyntax::VERSE_SEP) && next_is_digit(cur, 1) {
        cur.bump();
        let start = parse_verse(cur)?;
        let mut end = None;
        if let Some(width) = range_dash_width(cur) {
            cur.bump_n(width);
            let last = parse_verse(cur)?;
            if cur.peek() == Some(ReferenceSyntax::VERSE_SEP) && next_is_digit(cur, 1) {
                return Err(MalformedReference::CrossChapterRange);
            }
            if last < start {
                return Err(MalformedReference::ReversedRange { start, end: last });
            }
            end = Some(last);
        }
        verses = Some(VerseRange { start, end });
    } else if range_dash_width(cur).is_some() {
        return Err(MalformedReference::ChapterRange);
    }

    let runs_on = cur.s.get(cur.pos()..).is_some_and(starts_word)
        || (cur.peek() == Some(ReferenceSyntax::ABBREV_DOT) && next_is_digit(cur, 1));
    if runs_on {
        return Err(MalformedReference::TrailingText);
    }
    Ok((chapter, verses))
}

fn parse_number(cur: &mut Cursor<'_>) -> Result<u32, MalformedReference> {
    let digits = cur.eat_digits();
    digits
        .parse()
        .map_err(|_| MalformedReference::NumberTooLarge {
            digits: digits.to_string(),
        })
}

fn parse_verse(cur: &mut Cursor<'_>) -> Result<u32, MalformedReference> {
    match parse_number(cur)? {
        0 => Err(MalformedReference::ZeroVerse),
        n => Ok(n),
    }
}

fn next_is_digit(cur: &Cursor<'_>, n: usize) -> bool {
    cur.peek_at(n).is_some_and(|b| b.is_ascii_digit())
}

/// Width of a range dash at the cursor, if one is followed by a digit.
fn range_dash_width(cur: &Cursor<'_>) -> Option<usize> {
    if cur.peek() == Some(ReferenceSyntax::RANGE_DASH) && next_is_digit(cur, 1) {
        return Some(1);
    }
    let width = ReferenceSyntax::RANGE_EN_DASH.len();
    (cur.starts_with(ReferenceSyntax::RANGE_EN_DASH) && next_is_digit(cur, width)).then_some(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// `(canonical passage, original text)` for every reference found.
    fn found(text: &str) -> Vec<(String, &str)> {
        find_references(text)
            .map(|r| (r.to_string(), &text[r.span.range()]))
            .collect()
    }

    fn candidate(text: &str) -> Option<Result<Reference, MalformedReference>> {
        let mut cur = Cursor::new(text);
        try_parse_reference(&mut cur, BookTable::shared())
    }

    #[test]
    fn single_verse_with_offsets() {
        let text = "See John 3:16 for details.";
        let refs: Vec<_> = find_references(text).collect();
        assert_eq!(refs.len(), 1);
        let r = refs[0];
        assert_eq!(r.book.name(), "John");
        assert_eq!(r.chapter, 3);
        assert_eq!(r.verse_start(), Some(16));
        assert_eq!(r.verse_end(), None);
        assert_eq!(r.span, Span::new(4, 13));
    }

    #[test]
    fn whole_chapter() {
        let refs: Vec<_> = find_references("Read 1 Corinthians 13.").collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book.name(), "1 Corinthians");
        assert_eq!(refs[0].chapter, 13);
        assert!(refs[0].is_whole_chapter());
    }

    #[test]
    fn verse_range() {
        let refs: Vec<_> = find_references("Romans 8:28-30 is comforting.").collect();
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].verse_start(), Some(28));
        assert_eq!(refs[0].verse_end(), Some(30));
    }

    #[rstest]
    #[case("John 3:16", "John 3:16", "John 3:16")]
    #[case("jn 3:16", "John 3:16", "jn 3:16")]
    #[case("1 Cor 15:3-5", "1 Corinthians 15:3-5", "1 Cor 15:3-5")]
    #[case("1Cor 15:3", "1 Corinthians 15:3", "1Cor 15:3")]
    #[case("I Corinthians 13", "1 Corinthians 13", "I Corinthians 13")]
    #[case("First Peter 1:3", "1 Peter 1:3", "First Peter 1:3")]
    #[case("Gen. 1:1", "Genesis 1:1", "Gen. 1:1")]
    #[case("1 Cor. 13", "1 Corinthians 13", "1 Cor. 13")]
    #[case("1stCor 13:4", "1 Corinthians 13:4", "1stCor 13:4")]
    #[case("Ps 23", "Psalms 23", "Ps 23")]
    #[case("Song of Songs 2:4", "Song of Solomon 2:4", "Song of Songs 2:4")]
    #[case("Isa 53:5\u{2013}6", "Isaiah 53:5-6", "Isa 53:5\u{2013}6")]
    #[case("Rev 22:21.", "Revelation 22:21", "Rev 22:21")]
    #[case("(Heb 11:1)", "Hebrews 11:1", "Heb 11:1")]
    #[case("John 3:", "John 3", "John 3")]
    #[case("John 3:16-", "John 3:16", "John 3:16")]
    #[case("John 3:16, 18", "John 3:16", "John 3:16")]
    #[case("Jude 3:3-3", "Jude 3:3-3", "Jude 3:3-3")]
    fn recognises(#[case] text: &str, #[case] passage: &str, #[case] original: &str) {
        assert_eq!(found(text), vec![(passage.to_string(), original)]);
    }

    #[rstest]
    #[case("Romans 8:30-28 is odd.")]
    #[case("Johnson 3:16")]
    #[case("John3:16")]
    #[case("John 0:1")]
    #[case("John 3:0")]
    #[case("John 3:16a")]
    #[case("John 3:16é")]
    #[case("Mark 2nd")]
    #[case("Psalm 23.4")]
    #[case("John 3:16-4:2")]
    #[case("John 3-4")]
    #[case("John 99999999999")]
    #[case("Isaiah is 3 chapters in")]
    #[case("I am 5 feet tall")]
    #[case("I spoke with John. 3 people agreed.")]
    #[case("Read Mark. 2 chapters later")]
    #[case("nothing to see here")]
    #[case("")]
    fn rejects(#[case] text: &str) {
        assert_eq!(found(text), vec![]);
    }

    #[rstest]
    #[case("Romans 8:30-28", MalformedReference::ReversedRange { start: 30, end: 28 })]
    #[case("John 0", MalformedReference::ZeroChapter)]
    #[case("John 3:0", MalformedReference::ZeroVerse)]
    #[case("John 1:2-3:4", MalformedReference::CrossChapterRange)]
    #[case("John 3-4", MalformedReference::ChapterRange)]
    #[case("John 3:16a", MalformedReference::TrailingText)]
    #[case("John 3:16ü", MalformedReference::TrailingText)]
    #[case(
        "John 4294967296",
        MalformedReference::NumberTooLarge { digits: "4294967296".to_string() }
    )]
    fn classifies_malformed(#[case] text: &str, #[case] expected: MalformedReference) {
        assert_eq!(candidate(text), Some(Err(expected)));
    }

    #[test]
    fn period_only_follows_abbreviations() {
        assert_eq!(
            found("Ps. 23 and Psalms. 23"),
            vec![("Psalms 23".to_string(), "Ps. 23")]
        );
        assert_eq!(candidate("John. 3"), None);
    }

    #[test]
    fn not_a_candidate_without_chapter() {
        assert_eq!(candidate("John said"), None);
        assert_eq!(candidate("John"), None);
        assert_eq!(candidate("Mark."), None);
    }

    #[test]
    fn failed_candidate_restores_cursor() {
        let mut cur = Cursor::new("John 3:16a");
        assert!(try_parse_reference(&mut cur, BookTable::shared()).is_some());
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn several_references_in_order() {
        let text = "Compare Gen 1:1, John 1:1-3 and Heb 11.";
        let passages: Vec<_> = found(text).into_iter().map(|(p, _)| p).collect();
        assert_eq!(passages, vec!["Genesis 1:1", "John 1:1-3", "Hebrews 11"]);
    }

    #[test]
    fn spans_never_overlap_and_increase() {
        let text = "John 3:16 1 John 4:8 2 John 1 III John 1:4 Jude 1";
        let refs: Vec<_> = find_references(text).collect();
        assert_eq!(refs.len(), 5);
        for pair in refs.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn numbered_book_wins_over_bare_stem() {
        assert_eq!(
            found("see 1 John 4:8"),
            vec![("1 John 4:8".to_string(), "1 John 4:8")]
        );
    }

    #[test]
    fn non_ascii_text_is_stepped_over() {
        let text = "Voilà — «John 3:16» über alles";
        assert_eq!(found(text), vec![("John 3:16".to_string(), "John 3:16")]);
    }

    #[test]
    fn skips_tag_attributes() {
        let text = r#"<img alt="John 3:16" title='Rom 8:28'>"#;
        assert_eq!(found(text), vec![]);
    }

    #[test]
    fn quoted_gt_does_not_end_tag() {
        let text = r#"<span data-x="a > John 3:16">Luke 2:1</span>"#;
        assert_eq!(found(text), vec![("Luke 2:1".to_string(), "Luke 2:1")]);
    }

    #[test]
    fn stray_apostrophe_in_tag_is_not_a_quote() {
        let text = "<p class=O'Brien>Luke 2:1</p>";
        assert_eq!(found(text), vec![("Luke 2:1".to_string(), "Luke 2:1")]);
    }

    #[test]
    fn skips_existing_anchor_href_and_body() {
        let text = r#"<a href="John 3:16">John 3:16</a> and Acts 2:38"#;
        assert_eq!(found(text), vec![("Acts 2:38".to_string(), "Acts 2:38")]);
    }

    #[test]
    fn anchor_close_is_case_insensitive() {
        let text = "<A HREF=x>Acts 1:8</A > Acts 2:1";
        assert_eq!(found(text), vec![("Acts 2:1".to_string(), "Acts 2:1")]);
    }

    #[test]
    fn abbr_is_not_an_anchor() {
        let text = "<abbr>Acts 1:8</abbr>";
        assert_eq!(found(text), vec![("Acts 1:8".to_string(), "Acts 1:8")]);
    }

    #[test]
    fn skips_code_pre_script_style() {
        let text = "<code>John 1:1</code><pre>John 1:2</pre>\
                    <script>var r = 'John 1:3';</script><style>/* John 1:4 */</style>";
        assert_eq!(found(text), vec![]);
    }

    #[test]
    fn skips_comments() {
        let text = "<!-- John 3:16 --> John 3:17";
        assert_eq!(found(text), vec![("John 3:17".to_string(), "John 3:17")]);
    }

    #[rstest]
    #[case("<!DOCTYPE html John 3:16> Luke 2:1")]
    #[case("<?xml version=\"1.0\" note=\"John 3:16\"?> Luke 2:1")]
    #[case("<![CDATA[John 3:16]]> Luke 2:1")]
    fn skips_declarations(#[case] text: &str) {
        assert_eq!(found(text), vec![("Luke 2:1".to_string(), "Luke 2:1")]);
    }

    #[test]
    fn self_closing_raw_element_has_no_body() {
        let text = "<a name=top/> John 3:16";
        assert_eq!(found(text), vec![("John 3:16".to_string(), "John 3:16")]);
    }

    #[test]
    fn unterminated_markup_swallows_rest() {
        assert_eq!(found("<p class='x John 3:16"), vec![]);
        assert_eq!(found("<a href=x>John 3:16"), vec![]);
        assert_eq!(found("<!-- John 3:16"), vec![]);
    }

    #[test]
    fn lone_less_than_is_text() {
        let text = "1 < 2 and John 3:16";
        assert_eq!(found(text), vec![("John 3:16".to_string(), "John 3:16")]);
    }

    #[test]
    fn markup_between_book_and_chapter_breaks_candidate() {
        assert_eq!(found("John <b>3:16</b>"), vec![]);
    }

    #[test]
    fn iterator_is_fused() {
        let mut refs = find_references("John 1");
        assert!(refs.next().is_some());
        assert!(refs.next().is_none());
        assert!(refs.next().is_none());
    }
}
