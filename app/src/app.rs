//! Store and fetcher assembly.

use std::sync::Arc;

use comanda_fx::{RateFetcher, RateFetcherConfig};
use comanda_settings::{ConfigStorage, ConfigStore, FileStorage, RateState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// One running dashboard: the configuration store and its rate fetcher.
pub struct App {
    store: Arc<ConfigStore>,
    fetcher: RateFetcher,
}

impl App {
    /// Build the app from process configuration, backed by file storage.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        let fetcher = RateFetcher::from_urls(
            config.rates.primary_url.clone(),
            config.rates.fallback_url.clone(),
            RateFetcherConfig {
                timeout: config.rates.timeout,
                request_timeout: config.rates.request_timeout,
            },
        )?;

        info!(data_dir = %config.data_dir.display(), "Opening configuration store");
        Ok(Self::new(storage, fetcher))
    }

    /// Build the app from explicit parts.
    pub fn new(storage: Arc<dyn ConfigStorage>, fetcher: RateFetcher) -> Self {
        Self {
            store: Arc::new(ConfigStore::open(storage)),
            fetcher,
        }
    }

    /// Get the configuration store.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Run the one startup fetch of exchange rates.
    pub async fn load_rates(&self) -> RateState {
        self.store.load_rates(&self.fetcher).await
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
    );

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_common::{Currency, Language};
    use std::time::Duration;

    #[tokio::test]
    async fn test_unreachable_endpoints_leave_usable_app() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        config.rates.primary_url = "http://127.0.0.1:9/usd.json".to_string();
        config.rates.fallback_url = "http://127.0.0.1:9/fallback.json".to_string();
        config.rates.timeout = Duration::from_secs(2);

        let app = App::from_config(&config).unwrap();
        let rates = app.load_rates().await;

        assert!(rates.is_fallback());
        assert_eq!(app.store().saved().language, Language::Es);
    }

    #[test]
    fn test_saved_settings_persist_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        let app = App::from_config(&config).unwrap();
        app.store().set_draft_currency(Currency::Cop);
        app.store().save().unwrap();

        let reopened = App::from_config(&config).unwrap();
        assert_eq!(reopened.store().saved().currency, Currency::Cop);
        assert!(dir.path().join("restaurant-config.json").exists());
    }
}
