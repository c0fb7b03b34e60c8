//! # sqlchain
//!
//! A fluent builder that chains table declarations into a MySQL DDL script.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │       Caller code / migration script (TOML)              │
//! │  create_table / alter_table / drop_table + callbacks     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [builder]
//! ┌─────────────────────────────────────────────────────────┐
//! │  SchemaBuilder: registry, shared column list,            │
//! │  error slot, skip flag                                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sql::ddl::render]
//! ┌─────────────────────────────────────────────────────────┐
//! │                   SQL script text                        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [output]
//! ┌─────────────────────────────────────────────────────────┐
//! │   file (with backup of the previous one) or echo         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlchain::prelude::*;
//!
//! let mut schema = SchemaBuilder::new(ChainConfig::new().engine("InnoDB"));
//! schema
//!     .create_table("users", |t| {
//!         t.int("id").primary_key().auto_increment(0);
//!         t.varchar("name", 255);
//!     })
//!     .alter_table("users", |t| {
//!         t.drop_column("name");
//!     });
//!
//! let outcome = schema.finalize(&mut MemorySink::new()).unwrap();
//! assert!(outcome.echoed_sql().unwrap().starts_with("CREATE TABLE `users`("));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod output;
pub mod script;
pub mod sql;

// Re-export SQL submodules at crate level
pub use sql::ddl;
pub use sql::types;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::builder::{SchemaBuilder, TableBuilder};
    pub use crate::config::ChainConfig;
    pub use crate::error::{ChainError, ChainResult};
    pub use crate::output::{FsSink, MemorySink, Outcome, OutputSink};
    pub use crate::script::{Operation, Script};
    pub use crate::sql::{ColumnOp, ColumnType, Modifier, Special, TableAction};
}

pub use builder::SchemaBuilder;
pub use config::ChainConfig;
pub use error::{ChainError, ChainResult};
pub use output::Outcome;
