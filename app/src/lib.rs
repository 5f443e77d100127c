//! Comanda
//!
//! Process-level wiring for the dashboard core: environment configuration,
//! logging, and assembly of the configuration store with its rate fetcher.

pub mod app;
pub mod config;

pub use app::App;
pub use config::{AppConfig, RatesConfig};
