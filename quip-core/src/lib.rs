//! quip-core - Answer engine infrastructure
//!
//! Provides the pieces a host needs to answer keyword-prefixed queries:
//! - Configuration management
//! - A built-in locale number table
//! - The dispatching [`Engine`] (primary interface)
//! - Logging setup for binaries
//!
//! ## Primary API
//!
//! Build an [`AnswererRegistry`](quip_plugin::AnswererRegistry), hand it to
//! [`Engine::new`] and call [`Engine::dispatch`] per query.

pub mod config;
pub mod engine;
pub mod logging;
pub mod numbers;

pub use config::{AnswerersConfig, Config, ConfigError, DiceConfig, LoggingConfig};
pub use engine::Engine;
pub use logging::init_logging;
pub use numbers::{LocaleTable, NumberSymbols};
