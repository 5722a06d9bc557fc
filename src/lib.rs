//! crypto_watchlist - tracked ticker pairs for the price watchlist
//!
//! # Modules
//!
//! - [`symbol`] - Fixed allow-list and the [`AllowedSymbol`] enum
//! - [`validation`] - `TICKER-USD` format checks and [`ValidationError`]
//! - [`selection`] - Selected subset and the storage key it lives under
//! - [`config`] - YAML app configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod logging;
pub mod selection;
pub mod symbol;
pub mod validation;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError};
pub use selection::{STORAGE_KEY_SYMBOLS, SelectedSymbols, SelectionError};
pub use symbol::{ALLOWED_SYMBOLS, AllowedSymbol, is_allowed};
pub use validation::{SymbolName, ValidationError};
