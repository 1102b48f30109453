//! The curated list of translations offered to users when choosing a
//! default. Presentation only: the engine links any code it is given.

/// One choice in the translation picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationOption {
    pub code: &'static str,
    pub label: &'static str,
}

const fn option(code: &'static str, label: &'static str) -> TranslationOption {
    TranslationOption { code, label }
}

/// Offered translations, in display order.
pub const TRANSLATIONS: &[TranslationOption] = &[
    option("KJ21", "21st Century King James Version"),
    option("ASV", "American Standard Version"),
    option("AMP", "Amplified Bible"),
    option("CEV", "Contemporary English Version"),
    option("DARBY", "Darby Translation"),
    option("ESV", "English Standard Version"),
    option("KJV", "King James Version"),
    option("MSG", "The Message"),
    option("NASB", "New American Standard Bible"),
    option("NET", "New English Translation"),
    option("NIRV", "New International Reader's Version"),
    option("NIV", "New International Version"),
    option("NIV1984", "New International Version 1984"),
    option("NIV-UK", "New International Version - UK"),
    option("NKJV", "New King James Version"),
    option("NLT", "New Living Translation"),
    option("TNIV", "Today's New International Version"),
    option("WE", "Worldwide English New Testament"),
    option("WYC", "Wycliffe New Testament"),
    option("YLT", "Young's Literal Translation"),
];

/// Label for a code from the curated list; exact, case-sensitive match.
pub fn label_for(code: &str) -> Option<&'static str> {
    TRANSLATIONS.iter().find(|t| t.code == code).map(|t| t.label)
}

pub fn is_offered(code: &str) -> bool {
    label_for(code).is_some()
}
