//! Language, currency and font-size enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Display language of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish. Also the fallback dictionary for missing translations.
    #[default]
    Es,
    /// English.
    En,
    /// German.
    De,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::Es, Language::En, Language::De];

    /// Get the language code as stored.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Get the locale tag used for number formatting.
    pub fn locale_tag(&self) -> &'static str {
        match self {
            Language::Es => "es-ES",
            Language::En => "en-US",
            Language::De => "de-DE",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Currency amounts are displayed in. Amounts are always held in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    #[default]
    Eur,
    /// US dollar, the base currency of every rate table.
    Usd,
    /// Colombian peso.
    Cop,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 3] = [Currency::Eur, Currency::Usd, Currency::Cop];

    /// Get the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Cop => "COP",
        }
    }

    /// Get the key this currency is listed under in a rate table.
    pub fn rate_key(&self) -> &'static str {
        match self {
            Currency::Eur => "eur",
            Currency::Usd => "usd",
            Currency::Cop => "cop",
        }
    }

    /// Get the number of fraction digits shown for this currency.
    pub fn fraction_digits(&self) -> u32 {
        match self {
            Currency::Cop => 0,
            Currency::Eur | Currency::Usd => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "COP" => Ok(Currency::Cop),
            _ => Err(ParseError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Font scale applied to the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// All supported font sizes, smallest first.
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Medium,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    /// Get the font size name as stored.
    pub fn name(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
            FontSize::ExtraLarge => "extra-large",
        }
    }

    /// Get the style-scale token for this size.
    pub fn css_class(&self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Medium => "text-base",
            FontSize::Large => "text-lg",
            FontSize::ExtraLarge => "text-xl",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "extra-large" | "extralarge" | "xlarge" => Ok(FontSize::ExtraLarge),
            _ => Err(ParseError::UnknownFontSize(s.to_string())),
        }
    }
}
