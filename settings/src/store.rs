//! Configuration store with draft/commit semantics.

use std::fmt::Display;
use std::sync::Arc;

use comanda_common::{Config, Currency, FontSize, Language};
use comanda_fx::{format_currency, FxError, RateFetcher, RateOrigin, RateOutcome, RateTable};
use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::error::SettingsResult;
use crate::i18n::Catalog;
use crate::record::{decode_config, encode_config};
use crate::storage::{ConfigStorage, CONFIG_STORAGE_KEY};

/// Exchange rates as seen by the store.
#[derive(Debug, Clone)]
pub struct RateState {
    /// Rates in use. Empty until the first fetch completes.
    pub table: Arc<RateTable>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Where the rates came from.
    pub origin: RateOrigin,
    /// Why the fallback table is in use, if it is.
    pub error: Option<FxError>,
}

impl RateState {
    fn pending() -> Self {
        Self {
            table: Arc::new(RateTable::empty()),
            loading: false,
            origin: RateOrigin::Pending,
            error: None,
        }
    }

    /// Check if the fallback table is in use.
    pub fn is_fallback(&self) -> bool {
        self.origin == RateOrigin::Fallback
    }
}

/// Immutable view of the whole store.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Applied configuration.
    pub saved: Config,
    /// Configuration being edited.
    pub draft: Config,
    /// Exchange rates.
    pub rates: RateState,
    version: u64,
}

impl StoreSnapshot {
    /// Check if the draft differs from the saved configuration.
    pub fn has_pending_changes(&self) -> bool {
        self.draft != self.saved
    }

    /// Number of changes applied to the store before this snapshot.
    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Single source of truth for language, currency and font size.
///
/// Setters only touch the draft. [`ConfigStore::save`] commits the draft and
/// persists it; [`ConfigStore::discard`] resets the draft. Everything that
/// renders (translation, currency, font scale) reads the saved configuration.
///
/// Saves are serialized, so the stored record always matches the saved
/// configuration once every `save` has returned.
pub struct ConfigStore {
    state: RwLock<StoreSnapshot>,
    save_lock: Mutex<()>,
    storage: Arc<dyn ConfigStorage>,
    catalog: Catalog,
    changes: watch::Sender<StoreSnapshot>,
}

impl ConfigStore {
    /// Open the store, seeding the saved configuration from `storage`.
    ///
    /// A missing, unreadable or malformed record yields the defaults.
    pub fn open(storage: Arc<dyn ConfigStorage>) -> Self {
        let saved = match storage.read(CONFIG_STORAGE_KEY) {
            Ok(Some(raw)) => decode_config(&raw),
            Ok(None) => {
                debug!("No stored configuration, using defaults");
                Config::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored configuration, using defaults");
                Config::default()
            }
        };

        info!(
            language = %saved.language,
            currency = %saved.currency,
            font_size = %saved.font_size,
            "Configuration loaded"
        );

        let snapshot = StoreSnapshot {
            saved,
            draft: saved,
            rates: RateState::pending(),
            version: 0,
        };
        let (changes, _) = watch::channel(snapshot.clone());

        Self {
            state: RwLock::new(snapshot),
            save_lock: Mutex::new(()),
            storage,
            catalog: Catalog::builtin(),
            changes,
        }
    }

    /// Get a snapshot of the whole store.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.read().clone()
    }

    /// Subscribe to store changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.changes.subscribe()
    }

    /// Get the applied configuration.
    pub fn saved(&self) -> Config {
        self.state.read().saved
    }

    /// Get the configuration being edited.
    pub fn draft(&self) -> Config {
        self.state.read().draft
    }

    /// Get the current exchange rate state.
    pub fn rates(&self) -> RateState {
        self.state.read().rates.clone()
    }

    /// Set the draft language.
    pub fn set_draft_language(&self, language: Language) {
        self.update(|state| state.draft.language = language);
    }

    /// Set the draft currency.
    pub fn set_draft_currency(&self, currency: Currency) {
        self.update(|state| state.draft.currency = currency);
    }

    /// Set the draft font size.
    pub fn set_draft_font_size(&self, font_size: FontSize) {
        self.update(|state| state.draft.font_size = font_size);
    }

    /// Commit the draft and persist it.
    ///
    /// The record is written before the saved configuration changes, so on a
    /// storage error the saved configuration is untouched and the draft keeps
    /// its pending changes.
    pub fn save(&self) -> SettingsResult<()> {
        let _guard = self.save_lock.lock();
        let draft = self.draft();
        let raw = encode_config(&draft)?;

        if let Err(e) = self.storage.write(CONFIG_STORAGE_KEY, &raw) {
            warn!(error = %e, code = e.error_code(), "Failed to persist configuration");
            return Err(e);
        }

        let changed = self.update(|state| {
            let changed = state.saved.changed_fields(&draft);
            state.saved = draft;
            changed
        });

        info!(changed = ?changed, "Configuration saved");
        Ok(())
    }

    /// Reset the draft to the saved configuration.
    pub fn discard(&self) {
        self.update(|state| state.draft = state.saved);
    }

    /// Check if the draft differs from the saved configuration.
    pub fn has_pending_changes(&self) -> bool {
        self.state.read().has_pending_changes()
    }

    /// Translate a key into the saved language.
    pub fn translate(&self, key: &str) -> String {
        self.catalog.translate(self.saved().language, key)
    }

    /// Translate a key into the saved language and fill its placeholders.
    pub fn translate_with(&self, key: &str, vars: &[(&str, &dyn Display)]) -> String {
        self.catalog.translate_with(self.saved().language, key, vars)
    }

    /// Format a USD amount in the saved currency and language.
    pub fn format_currency(&self, amount_usd: Decimal) -> String {
        let state = self.state.read();
        format_currency(
            amount_usd,
            state.saved.currency,
            &state.rates.table,
            state.saved.language,
        )
    }

    /// Format a USD amount as it would look once the draft is saved.
    pub fn format_currency_draft(&self, amount_usd: Decimal) -> String {
        let state = self.state.read();
        format_currency(
            amount_usd,
            state.draft.currency,
            &state.rates.table,
            state.draft.language,
        )
    }

    /// Get the style-scale token for the saved font size.
    pub fn font_size_class(&self) -> &'static str {
        self.saved().font_size.css_class()
    }

    /// Replace the rate table with the outcome of a fetch.
    pub fn apply_rates(&self, outcome: RateOutcome) {
        self.update(|state| {
            state.rates = RateState {
                table: Arc::new(outcome.table),
                loading: false,
                origin: outcome.origin,
                error: outcome.error,
            };
        });
    }

    /// Fetch exchange rates once and adopt the result.
    ///
    /// The store stays usable while the fetch is pending; formatting sees an
    /// empty table and leaves amounts unconverted until rates arrive.
    #[instrument(skip(self, fetcher))]
    pub async fn load_rates(&self, fetcher: &RateFetcher) -> RateState {
        self.update(|state| state.rates.loading = true);

        let outcome = fetcher.fetch_or_fallback().await;
        self.apply_rates(outcome);

        self.rates()
    }

    /// Apply a mutation and publish the resulting snapshot.
    ///
    /// The snapshot is published after the state lock is released. A slower
    /// publisher never overwrites a newer snapshot.
    fn update<R>(&self, mutate: impl FnOnce(&mut StoreSnapshot) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.write();
            let result = mutate(&mut state);
            state.version += 1;
            (result, state.clone())
        };

        self.changes.send_if_modified(|current| {
            if snapshot.version > current.version {
                *current = snapshot;
                true
            } else {
                false
            }
        });
        result
    }
}
