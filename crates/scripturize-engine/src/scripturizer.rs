use log::warn;

use crate::books::BookTable;
use crate::matching::{Reference, References, find_references_with};
use crate::render::{BibleGateway, LinkTemplate, render};
use crate::translation::TranslationCode;

/// A text-to-text transformation a host can run over a document body.
pub trait TextFilter {
    fn process(&self, text: &str, translation: &str) -> String;
}

/// Finds Bible references in text and wraps each one in a link.
///
/// Holds no mutable state; one instance can process any number of
/// documents, from any number of threads.
pub struct Scripturizer<'t> {
    table: &'t BookTable,
    template: Box<dyn LinkTemplate>,
}

impl Scripturizer<'static> {
    /// Shared book table, Bible Gateway links.
    pub fn new() -> Self {
        Self::with_table(BookTable::shared())
    }
}

impl Default for Scripturizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Scripturizer<'t> {
    pub fn with_table(table: &'t BookTable) -> Self {
        Self {
            table,
            template: Box::new(BibleGateway::new()),
        }
    }

    /// Replaces the link template.
    #[must_use]
    pub fn template(mut self, template: impl LinkTemplate + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    pub fn find_references<'s>(&self, text: &'s str) -> References<'s, 't> {
        find_references_with(text, self.table)
    }

    /// Links every reference in `text`, copying everything else verbatim.
    ///
    /// A reference whose link cannot be built is left as written; the rest
    /// of the document is still processed.
    pub fn scripturize(&self, text: &str, translation: &TranslationCode) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied_to = 0;

        for reference in self.find_references(text) {
            let span = reference.span;
            let (Some(before), Some(original)) =
                (text.get(copied_to..span.start), span.slice(text))
            else {
                warn!("skipping reference with unusable span {span:?}");
                continue;
            };
            out.push_str(before);
            out.push_str(&self.link_or_original(&reference, original, translation));
            copied_to = span.end;
        }

        out.push_str(&text[copied_to..]);
        out
    }

    fn link_or_original(
        &self,
        reference: &Reference,
        original: &str,
        translation: &TranslationCode,
    ) -> String {
        match render(reference, original, translation, &*self.template) {
            Ok(html) => html,
            Err(e) => {
                warn!("leaving {original:?} unlinked: {e}");
                original.to_string()
            }
        }
    }
}

impl TextFilter for Scripturizer<'_> {
    fn process(&self, text: &str, translation: &str) -> String {
        self.scripturize(text, &TranslationCode::from(translation))
    }
}

/// Links every Bible reference in `text` to `translation` on Bible Gateway.
pub fn scripturize(text: &str, translation: &str) -> String {
    Scripturizer::new().process(text, translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderError;
    use pretty_assertions::assert_eq;

    #[test]
    fn scenario_single_verse() {
        let out = scripturize("See John 3:16 for details.", "ESV");
        assert_eq!(
            out,
            "See <a href=\"https://www.biblegateway.com/passage/?search=John%203%3A16&amp;version=ESV\" \
             title=\"John 3:16 (ESV)\">John 3:16</a> for details."
        );
    }

    #[test]
    fn scenario_whole_chapter() {
        let out = scripturize("Read 1 Corinthians 13.", "KJV");
        assert_eq!(
            out,
            "Read <a href=\"https://www.biblegateway.com/passage/?search=1%20Corinthians%2013&amp;version=KJV\" \
             title=\"1 Corinthians 13 (KJV)\">1 Corinthians 13</a>."
        );
    }

    #[test]
    fn scenario_range() {
        let out = scripturize("Romans 8:28-30 is comforting.", "NIV");
        assert!(out.starts_with("<a href=\""));
        assert!(out.contains("search=Romans%208%3A28-30&amp;version=NIV"));
        assert!(out.ends_with(">Romans 8:28-30</a> is comforting."));
    }

    #[test]
    fn scenario_reversed_range_unchanged() {
        let text = "Romans 8:30-28 is odd.";
        assert_eq!(scripturize(text, "ESV"), text);
    }

    #[test]
    fn scenario_existing_anchor_unchanged() {
        let text = "<a href=\"John 3:16\">link</a>";
        assert_eq!(scripturize(text, "ESV"), text);
        let text = "<a href=\"/x\">John 3:16</a>";
        assert_eq!(scripturize(text, "ESV"), text);
    }

    #[test]
    fn scenario_no_reference_unchanged() {
        let text = "Nothing biblical here, just <em>markup</em> & text.";
        assert_eq!(scripturize(text, "ESV"), text);
    }

    #[test]
    fn empty_input() {
        assert_eq!(scripturize("", "ESV"), "");
    }

    #[test]
    fn failed_render_keeps_original_and_continues() {
        let template = |r: &Reference, _: &TranslationCode| -> Result<String, RenderError> {
            if r.book.name() == "Jude" {
                Err(RenderError::Template {
                    passage: r.to_string(),
                    reason: "no".to_string(),
                })
            } else {
                Ok(format!("/{}", r.chapter))
            }
        };
        let s = Scripturizer::new().template(template);
        let out = s.scripturize("Jude 1:3 then Acts 2:1", &TranslationCode::default());
        assert_eq!(
            out,
            "Jude 1:3 then <a href=\"/2\" title=\"Acts 2:1 (ESV)\">Acts 2:1</a>"
        );
    }

    #[test]
    fn empty_translation_fails_closed() {
        let text = "John 3:16 and Acts 2:1";
        assert_eq!(scripturize(text, ""), text);
    }

    #[test]
    fn unknown_translation_passes_through() {
        let out = scripturize("John 1:1", "KLINGON");
        assert!(out.contains("version=KLINGON"));
        assert!(out.contains("title=\"John 1:1 (KLINGON)\""));
    }

    #[test]
    fn text_filter_trait_object() {
        let filter: &dyn TextFilter = &Scripturizer::new();
        assert_eq!(
            filter.process("Ps 23", "WE"),
            scripturize("Ps 23", "WE")
        );
    }

    #[test]
    fn custom_table() {
        let table = BookTable::new();
        let s = Scripturizer::with_table(&table);
        let refs: Vec<_> = s.find_references("Heb 11:1").collect();
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn scripturizer_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<Scripturizer<'static>>();
    }
}
