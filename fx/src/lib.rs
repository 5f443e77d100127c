//! Comanda FX
//!
//! Exchange rates and currency display for the dashboard.
//!
//! # Features
//!
//! - USD-based rate table with a fixed fallback
//! - Rate sources over HTTP with ordered failover
//! - One-shot fetcher that always ends with a usable table
//! - Locale-aware currency formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use comanda_fx::{RateFetcher, RateFetcherConfig, format_currency};
//! use comanda_common::{Currency, Language};
//!
//! let fetcher = RateFetcher::from_urls(primary, fallback, RateFetcherConfig::default())?;
//! let outcome = fetcher.fetch_or_fallback().await;
//!
//! let text = format_currency(dec!(100), Currency::Eur, &outcome.table, Language::De);
//! ```

pub mod error;
pub mod fetcher;
pub mod format;
pub mod source;
pub mod table;

pub use error::{FxError, FxResult};
pub use fetcher::{RateFetcher, RateFetcherConfig, RateOrigin, RateOutcome};
pub use format::{convert_from_usd, format_amount, format_currency};
pub use source::{FailoverRateSource, HttpRateSource, RateSource};
pub use table::RateTable;

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockRateSource;
