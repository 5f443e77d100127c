//! Process configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default primary exchange rate endpoint.
pub const DEFAULT_PRIMARY_RATES_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/usd.json";

/// Default secondary exchange rate endpoint.
pub const DEFAULT_FALLBACK_RATES_URL: &str =
    "https://latest.currency-api.pages.dev/v1/currencies/usd.json";

/// Exchange rate endpoint configuration.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Endpoint tried first.
    pub primary_url: String,
    /// Endpoint tried once if the primary cannot be reached.
    pub fallback_url: String,
    /// Upper bound for the whole fetch.
    pub timeout: Duration,
    /// Upper bound for one request to a single endpoint.
    pub request_timeout: Duration,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            primary_url: DEFAULT_PRIMARY_RATES_URL.to_string(),
            fallback_url: DEFAULT_FALLBACK_RATES_URL.to_string(),
            timeout: Duration::from_secs(8),
            request_timeout: Duration::from_secs(3),
        }
    }
}

/// Main process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the durable key-value storage.
    pub data_dir: PathBuf,
    /// Exchange rate endpoints.
    pub rates: RatesConfig,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON log lines.
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".comanda"),
            rates: RatesConfig::default(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("COMANDA_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(url) = lookup("COMANDA_RATES_PRIMARY_URL") {
            config.rates.primary_url = url;
        }

        if let Some(url) = lookup("COMANDA_RATES_FALLBACK_URL") {
            config.rates.fallback_url = url;
        }

        if let Some(secs) = lookup("COMANDA_RATES_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.rates.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(secs) = lookup("COMANDA_RATES_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                config.rates.request_timeout = Duration::from_secs(secs);
            }
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }

        if let Some(json) = lookup("COMANDA_LOG_JSON") {
            config.log_json = matches!(json.as_str(), "1" | "true");
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rates.primary_url.is_empty() || self.rates.fallback_url.is_empty() {
            return Err("Exchange rate URLs cannot be empty".to_string());
        }

        if self.rates.primary_url == self.rates.fallback_url {
            return Err("Primary and fallback rate URLs must differ".to_string());
        }

        if self.rates.timeout.is_zero() || self.rates.request_timeout.is_zero() {
            return Err("Exchange rate timeouts cannot be zero".to_string());
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err("Data directory cannot be empty".to_string());
        }

        Ok(())
    }
}
