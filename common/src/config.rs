//! User configuration record.

use serde::{Deserialize, Serialize};

use crate::locale::{Currency, FontSize, Language};

/// Language, currency and font-size selection.
///
/// The store keeps two of these, the applied (saved) one and the draft being
/// edited on the settings screen. Both are plain values compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Display language.
    pub language: Language,
    /// Display currency.
    pub currency: Currency,
    /// Font scale.
    pub font_size: FontSize,
}

impl Config {
    /// Create a new configuration.
    pub fn new(language: Language, currency: Currency, font_size: FontSize) -> Self {
        Self {
            language,
            currency,
            font_size,
        }
    }

    /// Return a copy with a different language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Return a copy with a different currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Return a copy with a different font size.
    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = font_size;
        self
    }

    /// List the names of the fields that differ from `other`.
    pub fn changed_fields(&self, other: &Config) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.language != other.language {
            fields.push("language");
        }
        if self.currency != other.currency {
            fields.push("currency");
        }
        if self.font_size != other.font_size {
            fields.push("fontSize");
        }
        fields
    }
}
