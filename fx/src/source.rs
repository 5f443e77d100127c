//! Rate source trait and implementations.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FxError, FxResult};
use crate::table::RateTable;

/// Trait for exchange rate sources.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Get the source name.
    fn name(&self) -> &str;

    /// Fetch a complete USD-based rate table.
    async fn fetch(&self) -> FxResult<RateTable>;
}

/// Fetches a rate document from a single HTTP endpoint.
pub struct HttpRateSource {
    name: String,
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpRateSource {
    /// Create a new HTTP source with a per-request timeout.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> FxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FxError::Setup(e.to_string()))?;

        Ok(Self {
            name: name.into(),
            url: url.into(),
            timeout,
            client,
        })
    }

    fn map_transport(&self, error: reqwest::Error) -> FxError {
        if error.is_timeout() {
            FxError::Timeout(self.timeout.as_millis() as u64)
        } else {
            FxError::Transport {
                url: self.url.clone(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FxResult<RateTable> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.map_transport(e))?;
        RateTable::from_usd_document(&body)
    }
}

/// Tries an ordered list of sources, each at most once.
///
/// The next source is only consulted when the previous one could not be
/// reached or answered with an error status. A reachable source that serves
/// a malformed document ends the chain with that error.
pub struct FailoverRateSource {
    sources: Vec<Arc<dyn RateSource>>,
}

impl FailoverRateSource {
    /// Create a new failover chain, first source first.
    pub fn new(sources: Vec<Arc<dyn RateSource>>) -> Self {
        Self { sources }
    }

    /// Chain a primary and a secondary source.
    pub fn primary_with_fallback(
        primary: Arc<dyn RateSource>,
        fallback: Arc<dyn RateSource>,
    ) -> Self {
        Self::new(vec![primary, fallback])
    }

    /// Check if the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn triggers_failover(error: &FxError) -> bool {
    matches!(
        error,
        FxError::Transport { .. } | FxError::HttpStatus { .. } | FxError::Timeout(_)
    )
}

#[async_trait]
impl RateSource for FailoverRateSource {
    fn name(&self) -> &str {
        "FAILOVER"
    }

    async fn fetch(&self) -> FxResult<RateTable> {
        let mut last_error = FxError::NoSourcesAvailable;

        for source in &self.sources {
            match source.fetch().await {
                Ok(table) => {
                    debug!(
                        source = source.name(),
                        currencies = table.len(),
                        "Got rates from source"
                    );
                    return Ok(table);
                }
                Err(e) => {
                    warn!(
                        source = source.name(),
                        error = %e,
                        "Source failed to return rates"
                    );
                    if !triggers_failover(&e) {
                        return Err(e);
                    }
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Mock rate source for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateSource {
    name: String,
    outcome: FxResult<RateTable>,
    delay: Option<Duration>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateSource {
    /// Create a mock that serves the given table.
    pub fn serving(name: impl Into<String>, table: RateTable) -> Self {
        Self::with_outcome(name, Ok(table))
    }

    /// Create a mock that fails with the given error.
    pub fn failing(name: impl Into<String>, error: FxError) -> Self {
        Self::with_outcome(name, Err(error))
    }

    fn with_outcome(name: impl Into<String>, outcome: FxResult<RateTable>) -> Self {
        Self {
            name: name.into(),
            outcome,
            delay: None,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateSource for MockRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FxResult<RateTable> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_common::Currency;
    use httpmock::prelude::*;
    use rust_decimal_macros::dec;

    fn http_source(name: &str, server: &MockServer) -> HttpRateSource {
        HttpRateSource::new(name, server.url("/usd.json"), Duration::from_secs(5)).unwrap()
    }

    fn transport_error() -> FxError {
        FxError::Transport {
            url: "http://unreachable".to_string(),
            message: "connection refused".to_string(),
        }
    }

    #[tokio::test]
    async fn test_http_source_parses_document() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/usd.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"date":"2024-03-06","usd":{"eur":0.92,"usd":1,"cop":3900}}"#);
        });

        let source = http_source("primary", &server);
        let table = source.fetch().await.unwrap();

        assert_eq!(table.rate_for(Currency::Eur), Some(dec!(0.92)));
        assert_eq!(table.rate_for(Currency::Cop), Some(dec!(3900)));
        mock.assert();
    }

    #[tokio::test]
    async fn test_http_source_status_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/usd.json");
            then.status(503).body("Service Unavailable");
        });

        let source = http_source("primary", &server);
        let result = source.fetch().await;

        assert!(matches!(result, Err(FxError::HttpStatus { status: 503, .. })));
        mock.assert();
    }

    #[tokio::test]
    async fn test_http_source_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/usd.json");
            then.status(200).body(r#"{"rates":{"eur":0.92}}"#);
        });

        let source = http_source("primary", &server);
        let result = source.fetch().await;

        assert!(matches!(result, Err(FxError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_http_failover_to_secondary() {
        let primary_server = MockServer::start();
        let secondary_server = MockServer::start();

        let primary_mock = primary_server.mock(|when, then| {
            when.method(GET).path("/usd.json");
            then.status(500);
        });
        let secondary_mock = secondary_server.mock(|when, then| {
            when.method(GET).path("/usd.json");
            then.status(200).body(r#"{"usd":{"eur":0.9,"usd":1}}"#);
        });

        let primary = http_source("primary", &primary_server);
        let secondary = http_source("secondary", &secondary_server);
        let chain =
            FailoverRateSource::primary_with_fallback(Arc::new(primary), Arc::new(secondary));

        let table = chain.fetch().await.unwrap();

        assert_eq!(table.rate_for(Currency::Eur), Some(dec!(0.9)));
        primary_mock.assert_hits(1);
        secondary_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_failover_stops_at_first_success() {
        let primary = Arc::new(MockRateSource::serving("primary", RateTable::fallback()));
        let secondary = Arc::new(MockRateSource::serving("secondary", RateTable::empty()));
        let chain = FailoverRateSource::primary_with_fallback(primary.clone(), secondary.clone());

        let table = chain.fetch().await.unwrap();

        assert_eq!(table, RateTable::fallback());
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_failover_does_not_skip_malformed_primary() {
        let primary = Arc::new(MockRateSource::failing(
            "primary",
            FxError::MalformedResponse("missing usd".to_string()),
        ));
        let secondary = Arc::new(MockRateSource::serving("secondary", RateTable::fallback()));
        let chain = FailoverRateSource::primary_with_fallback(primary.clone(), secondary.clone());

        let result = chain.fetch().await;

        assert!(matches!(result, Err(FxError::MalformedResponse(_))));
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_failover_all_unreachable() {
        let primary = Arc::new(MockRateSource::failing("primary", transport_error()));
        let secondary = Arc::new(MockRateSource::failing("secondary", transport_error()));
        let chain = FailoverRateSource::primary_with_fallback(primary.clone(), secondary.clone());

        let result = chain.fetch().await;

        assert!(matches!(result, Err(FxError::Transport { .. })));
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let chain = FailoverRateSource::new(Vec::new());

        assert!(chain.is_empty());
        assert!(matches!(chain.fetch().await, Err(FxError::NoSourcesAvailable)));
    }
}
