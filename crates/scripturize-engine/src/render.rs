//! Link rendering: turns a [`Reference`] into anchor markup.
//!
//! The URL scheme is pluggable through [`LinkTemplate`]; [`BibleGateway`]
//! is the default. The anchor's visible text is always the text the author
//! wrote, so a linked document reads exactly as before.

use html_escape::encode_double_quoted_attribute;
use thiserror::Error;

use crate::matching::Reference;
use crate::translation::TranslationCode;

/// A link for one reference could not be built.
///
/// Never fatal to a document: the reference is left as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("translation code is empty")]
    EmptyTranslation,

    #[error("link template produced an empty URL for {passage}")]
    EmptyUrl { passage: String },

    #[error("link template failed for {passage}: {reason}")]
    Template { passage: String, reason: String },
}

/// Builds the URL a reference links to.
pub trait LinkTemplate: Send + Sync {
    fn url(
        &self,
        reference: &Reference,
        translation: &TranslationCode,
    ) -> Result<String, RenderError>;
}

/// Any matching closure is a template.
impl<F> LinkTemplate for F
where
    F: Fn(&Reference, &TranslationCode) -> Result<String, RenderError> + Send + Sync,
{
    fn url(
        &self,
        reference: &Reference,
        translation: &TranslationCode,
    ) -> Result<String, RenderError> {
        self(reference, translation)
    }
}

/// Links to the passage view of Bible Gateway.
#[derive(Debug, Clone)]
pub struct BibleGateway {
    base: String,
}

impl BibleGateway {
    pub const BASE_URL: &'static str = "https://www.biblegateway.com/passage/";

    pub fn new() -> Self {
        Self::with_base(Self::BASE_URL)
    }

    /// Same query layout against another host, e.g. a mirror or test server.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for BibleGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkTemplate for BibleGateway {
    fn url(
        &self,
        reference: &Reference,
        translation: &TranslationCode,
    ) -> Result<String, RenderError> {
        if translation.is_empty() {
            return Err(RenderError::EmptyTranslation);
        }
        Ok(format!(
            "{}?search={}&version={}",
            self.base,
            urlencoding::encode(&reference.to_string()),
            urlencoding::encode(translation.as_str()),
        ))
    }
}

/// Renders `reference` as an anchor whose text is `original`.
///
/// `original` is copied as-is: it is a slice of the document being
/// processed and is already valid in that markup context.
pub fn render(
    reference: &Reference,
    original: &str,
    translation: &TranslationCode,
    template: &dyn LinkTemplate,
) -> Result<String, RenderError> {
    let url = template.url(reference, translation)?;
    if url.is_empty() {
        return Err(RenderError::EmptyUrl {
            passage: reference.to_string(),
        });
    }
    let title = format!("{reference} ({translation})");
    Ok(format!(
        r#"<a href="{}" title="{}">{}</a>"#,
        encode_double_quoted_attribute(&url),
        encode_double_quoted_attribute(&title),
        original
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Book;
    use crate::matching::VerseRange;
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    fn john_3_16() -> Reference {
        Reference {
            book: Book::from_name("John").unwrap(),
            chapter: 3,
            verses: Some(VerseRange {
                start: 16,
                end: None,
            }),
            span: Span::new(0, 9),
        }
    }

    #[test]
    fn bible_gateway_url_encodes_passage_and_version() {
        let url = BibleGateway::new()
            .url(&john_3_16(), &TranslationCode::from("ESV"))
            .unwrap();
        assert_eq!(
            url,
            "https://www.biblegateway.com/passage/?search=John%203%3A16&version=ESV"
        );
    }

    #[test]
    fn unknown_translation_is_encoded_not_rejected() {
        let url = BibleGateway::new()
            .url(&john_3_16(), &TranslationCode::from("MY CODE&x"))
            .unwrap();
        assert!(url.ends_with("&version=MY%20CODE%26x"));
    }

    #[test]
    fn empty_translation_fails() {
        let err = BibleGateway::new()
            .url(&john_3_16(), &TranslationCode::from(""))
            .unwrap_err();
        assert_eq!(err, RenderError::EmptyTranslation);
    }

    #[test]
    fn render_escapes_attributes_and_keeps_original_text() {
        let html = render(
            &john_3_16(),
            "Jn 3:16",
            &TranslationCode::from("KJV"),
            &BibleGateway::new(),
        )
        .unwrap();
        assert_eq!(
            html,
            "<a href=\"https://www.biblegateway.com/passage/?search=John%203%3A16&amp;version=KJV\" \
             title=\"John 3:16 (KJV)\">Jn 3:16</a>"
        );
    }

    #[test]
    fn render_escapes_quotes_in_title() {
        let html = render(
            &john_3_16(),
            "John 3:16",
            &TranslationCode::from("X\"Y"),
            &BibleGateway::new(),
        )
        .unwrap();
        assert!(html.contains("title=\"John 3:16 (X&quot;Y)\""));
    }

    #[test]
    fn closure_template() {
        let template = |r: &Reference, t: &TranslationCode| -> Result<String, RenderError> {
            Ok(format!("/bible/{t}/{}/{}", r.book, r.chapter))
        };
        let html = render(&john_3_16(), "John 3:16", &TranslationCode::default(), &template)
            .unwrap();
        assert_eq!(
            html,
            "<a href=\"/bible/ESV/John/3\" title=\"John 3:16 (ESV)\">John 3:16</a>"
        );
    }

    #[test]
    fn empty_url_fails() {
        let template =
            |_: &Reference, _: &TranslationCode| -> Result<String, RenderError> { Ok(String::new()) };
        let err = render(&john_3_16(), "John 3:16", &TranslationCode::default(), &template)
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::EmptyUrl {
                passage: "John 3:16".to_string()
            }
        );
    }
}
