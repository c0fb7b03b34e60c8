//! SQL generation module.
//!
//! This module provides the vocabulary the builder records and renders:
//!
//! - [`types`] - The closed catalog of column types
//! - [`column`] - Column declarations, modifiers, and standalone alter fragments
//! - [`ddl`] - Table entries and rendering to CREATE / ALTER / DROP statements
//! - [`quote`] - Identifier and literal quoting

pub mod column;
pub mod ddl;
pub mod quote;
pub mod types;

pub use column::{ColumnOp, Modifier, Special};
pub use ddl::{render, TableAction, TableEntry};
pub use types::ColumnType;
