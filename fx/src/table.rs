//! USD-based exchange rate table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use comanda_common::Currency;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FxError, FxResult};

/// Conversion factors from USD, keyed by lowercase currency code.
///
/// A table is either adopted whole from a remote document or replaced whole
/// by [`RateTable::fallback`]. Entries are never merged across sources.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
    as_of: Option<NaiveDate>,
}

/// Document shape served by the rate endpoints.
#[derive(Debug, Deserialize)]
struct UsdDocument {
    #[serde(default)]
    date: Option<String>,
    usd: serde_json::Map<String, serde_json::Value>,
}

impl RateTable {
    /// Create an empty table. Lookups on it never convert.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed table adopted when no source can be reached.
    pub fn fallback() -> Self {
        Self::from_rates([
            ("eur", Decimal::new(85, 2)),
            ("usd", Decimal::ONE),
            ("cop", Decimal::from(4200)),
        ])
    }

    /// Build a table from code/rate pairs. Codes are lowercased.
    pub fn from_rates<K, I>(rates: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Decimal)>,
    {
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.as_ref().to_lowercase(), rate))
                .collect(),
            as_of: None,
        }
    }

    /// Parse a `{ "date": ..., "usd": { "<code>": <rate>, ... } }` document.
    ///
    /// Entries that are not positive numbers are skipped. A document without
    /// a `usd` object, or with no usable entry in it, is rejected.
    pub fn from_usd_document(body: &str) -> FxResult<Self> {
        let document: UsdDocument = serde_json::from_str(body)
            .map_err(|e| FxError::MalformedResponse(e.to_string()))?;

        let mut rates = BTreeMap::new();
        for (code, value) in document.usd {
            let rate = value
                .as_f64()
                .and_then(Decimal::from_f64)
                .filter(|rate| rate.is_sign_positive() && !rate.is_zero());

            match rate {
                Some(rate) => {
                    rates.insert(code.to_lowercase(), rate);
                }
                None => debug!(code = %code, value = %value, "Skipping unusable rate entry"),
            }
        }

        if rates.is_empty() {
            return Err(FxError::MalformedResponse(
                "usd table contains no usable rates".to_string(),
            ));
        }

        let as_of = document
            .date
            .and_then(|date| NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok());

        Ok(Self { rates, as_of })
    }

    /// Look up the rate for a currency code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.to_lowercase()).copied()
    }

    /// Look up the rate for a supported currency.
    pub fn rate_for(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(currency.rate_key()).copied()
    }

    /// Date the remote source quoted these rates for, if it said.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Check if the table has no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over code/rate pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}
