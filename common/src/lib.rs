//! Comanda Common Types
//!
//! This crate contains the configuration vocabulary shared across the
//! dashboard: display languages, display currencies, font scales and the
//! user configuration record built from them.

pub mod config;
pub mod error;
pub mod locale;

pub use config::*;
pub use error::*;
pub use locale::*;
