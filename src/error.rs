//! Run-wide error type.
//!
//! Column-level failures are not raised at the call site. The first one is
//! parked in the builder's error slot and handed back by `finalize()`, which
//! then refuses to emit any SQL.

use std::io;
use thiserror::Error;

use crate::sql::types::ColumnType;

/// Result type for builder and finalization operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that abort a run at finalization.
#[derive(Error, Debug)]
pub enum ChainError {
    /// A column declaration or modifier used a name outside the catalog.
    #[error("Allowed data type:\n{}", allowed_types_json())]
    UnknownOperation {
        /// The name that was called.
        name: String,
    },

    /// A dispatched call is missing its column/index name.
    #[error("`{call}` requires a name argument")]
    MissingArgument { call: String },

    /// A dispatched call received an argument it cannot use.
    #[error("`{call}` received an invalid argument: {value}")]
    InvalidArgument { call: String, value: String },

    /// A modifier was issued before the current table declared any column.
    #[error("`{modifier}` has no column to modify in the current table")]
    NoCurrentColumn { modifier: &'static str },

    /// The output sink failed while writing the script.
    #[error("failed to write SQL output: {0}")]
    Output(#[from] io::Error),
}

impl ChainError {
    /// Create an unknown-operation error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// Check if this error came from a column call rather than from output.
    pub fn is_declaration_error(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}

fn allowed_types_json() -> String {
    let names: Vec<&str> = ColumnType::ALL.iter().map(|t| t.method_name()).collect();
    serde_json::to_string(&names).unwrap_or_default()
}
