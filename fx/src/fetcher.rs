//! One-shot rate fetching with fixed fallback.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, instrument, warn};

use crate::error::{FxError, FxResult};
use crate::source::{FailoverRateSource, HttpRateSource, RateSource};
use crate::table::RateTable;

/// Configuration for the rate fetcher.
#[derive(Debug, Clone)]
pub struct RateFetcherConfig {
    /// Upper bound for the whole fetch, across all sources.
    pub timeout: Duration,
    /// Upper bound for a single request to one endpoint.
    pub request_timeout: Duration,
}

impl Default for RateFetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            request_timeout: Duration::from_secs(3),
        }
    }
}

impl RateFetcherConfig {
    /// Per-request timeout that lets every one of `attempts` requests finish
    /// inside the overall bound.
    pub fn per_request_timeout(&self, attempts: u32) -> Duration {
        self.request_timeout.min(self.timeout / attempts.max(1))
    }
}

/// Where the rates currently in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateOrigin {
    /// No fetch has completed yet.
    Pending,
    /// Adopted from a remote document.
    Remote {
        fetched_at: DateTime<Utc>,
        as_of: Option<NaiveDate>,
    },
    /// The fixed fallback table.
    Fallback,
}

/// Result of a fetch that always yields a usable table.
#[derive(Debug, Clone)]
pub struct RateOutcome {
    /// Rates to use.
    pub table: RateTable,
    /// Where they came from.
    pub origin: RateOrigin,
    /// Why the fallback was adopted, if it was.
    pub error: Option<FxError>,
}

impl RateOutcome {
    /// Check if the fallback table was adopted.
    pub fn is_fallback(&self) -> bool {
        self.origin == RateOrigin::Fallback
    }
}

/// Fetches the rate table once, tolerating remote failure.
pub struct RateFetcher {
    source: Arc<dyn RateSource>,
    config: RateFetcherConfig,
}

impl RateFetcher {
    /// Create a new fetcher over the given source.
    pub fn new(source: Arc<dyn RateSource>, config: RateFetcherConfig) -> Self {
        Self { source, config }
    }

    /// Create a fetcher over a primary endpoint with one secondary endpoint.
    pub fn from_urls(
        primary_url: impl Into<String>,
        fallback_url: impl Into<String>,
        config: RateFetcherConfig,
    ) -> FxResult<Self> {
        let request_timeout = config.per_request_timeout(2);
        let primary = HttpRateSource::new("primary", primary_url, request_timeout)?;
        let fallback = HttpRateSource::new("fallback", fallback_url, request_timeout)?;
        let chain =
            FailoverRateSource::primary_with_fallback(Arc::new(primary), Arc::new(fallback));

        Ok(Self::new(Arc::new(chain), config))
    }

    /// Fetch the rate table from the source within the configured timeout.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn fetch(&self) -> FxResult<RateTable> {
        match tokio::time::timeout(self.config.timeout, self.source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FxError::Timeout(self.config.timeout.as_millis() as u64)),
        }
    }

    /// Fetch the rate table, substituting the fallback table on any failure.
    pub async fn fetch_or_fallback(&self) -> RateOutcome {
        match self.fetch().await {
            Ok(table) => {
                info!(
                    currencies = table.len(),
                    as_of = ?table.as_of(),
                    "Adopted remote exchange rates"
                );
                RateOutcome {
                    origin: RateOrigin::Remote {
                        fetched_at: Utc::now(),
                        as_of: table.as_of(),
                    },
                    table,
                    error: None,
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    code = e.error_code(),
                    "Exchange rate fetch failed, using fallback rates"
                );
                RateOutcome {
                    table: RateTable::fallback(),
                    origin: RateOrigin::Fallback,
                    error: Some(e),
                }
            }
        }
    }
}
