//! Comanda Settings
//!
//! Configuration store for the restaurant dashboard. Holds the applied
//! (saved) and edited (draft) configuration, persists the saved record, and
//! answers the translation, currency and font-scale questions every screen
//! asks.

pub mod error;
pub mod i18n;
pub mod record;
pub mod storage;
pub mod store;

pub use error::{SettingsError, SettingsResult};
pub use i18n::Catalog;
pub use storage::{ConfigStorage, FileStorage, MemoryStorage, CONFIG_STORAGE_KEY};
pub use store::{ConfigStore, RateState, StoreSnapshot};
