use std::fmt;

use serde::{Deserialize, Serialize};

/// A Bible translation identifier such as `ESV` or `KJV`.
///
/// Opaque: the engine never checks it against a list of known codes and
/// passes it into generated links as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationCode(String);

impl TranslationCode {
    /// Code used when nothing else is configured.
    pub const DEFAULT: &'static str = "ESV";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TranslationCode {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for TranslationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TranslationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TranslationCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for TranslationCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
