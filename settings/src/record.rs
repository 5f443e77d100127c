//! Encoding of the persisted configuration record.
//!
//! The record is the JSON object `{ "language", "currency", "fontSize" }`.
//! Decoding is lenient: each field is read on its own and falls back to its
//! default when missing or unrecognized.

use std::fmt::Display;
use std::str::FromStr;

use comanda_common::Config;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::SettingsResult;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConfig {
    #[serde(default)]
    language: Option<Value>,
    #[serde(default)]
    currency: Option<Value>,
    #[serde(default)]
    font_size: Option<Value>,
}

fn decode_field<T>(value: Option<Value>, default: T, field: &'static str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None | Some(Value::Null) => default,
        Some(Value::String(text)) => match text.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(field, error = %e, "Ignoring stored value");
                default
            }
        },
        Some(other) => {
            warn!(field, value = %other, "Ignoring stored value of wrong type");
            default
        }
    }
}

/// Decode a stored record merged over the defaults.
pub fn decode_config(raw: &str) -> Config {
    let stored: StoredConfig = match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        Ok(other) => {
            warn!(value = %other, "Stored configuration is not an object, using defaults");
            StoredConfig::default()
        }
        Err(e) => {
            warn!(error = %e, "Stored configuration is not valid JSON, using defaults");
            StoredConfig::default()
        }
    };

    let defaults = Config::default();
    Config {
        language: decode_field(stored.language, defaults.language, "language"),
        currency: decode_field(stored.currency, defaults.currency, "currency"),
        font_size: decode_field(stored.font_size, defaults.font_size, "fontSize"),
    }
}

/// Encode a configuration for storage.
pub fn encode_config(config: &Config) -> SettingsResult<String> {
    Ok(serde_json::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_common::{Currency, FontSize, Language};

    #[test]
    fn test_missing_field_gets_default() {
        let config = decode_config(r#"{"language":"en","currency":"COP"}"#);

        assert_eq!(config, Config::new(Language::En, Currency::Cop, FontSize::Medium));
    }

    #[test]
    fn test_full_record() {
        let config = decode_config(r#"{"language":"de","currency":"USD","fontSize":"extra-large"}"#);

        assert_eq!(config, Config::new(Language::De, Currency::Usd, FontSize::ExtraLarge));
    }

    #[test]
    fn test_unknown_values_fall_back_per_field() {
        let config = decode_config(r#"{"language":"fr","currency":"USD","fontSize":42}"#);

        assert_eq!(config.language, Language::Es);
        assert_eq!(config.currency, Currency::Usd);
        assert_eq!(config.font_size, FontSize::Medium);
    }

    #[test]
    fn test_garbage_gives_defaults() {
        assert_eq!(decode_config("not json"), Config::default());
        assert_eq!(decode_config("[1,2,3]"), Config::default());
        assert_eq!(decode_config("{}"), Config::default());
    }

    #[test]
    fn test_encode_matches_stored_shape() {
        let config = Config::new(Language::En, Currency::Eur, FontSize::Small);
        let raw = encode_config(&config).unwrap();

        assert_eq!(raw, r#"{"language":"en","currency":"EUR","fontSize":"small"}"#);
        assert_eq!(decode_config(&raw), config);
    }
}
