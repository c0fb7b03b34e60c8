//! Configuration module for sqlchain.
//!
//! Handles the table prefix, CREATE clauses, and output path.

mod settings;

pub use settings::{ChainConfig, SettingsError};
