//! Declarative migration scripts.
//!
//! A script is a TOML document listing table operations in order. Column
//! calls are string arrays resolved through the same dispatch table the
//! builder uses, so a typo in a script behaves exactly like a typo in code:
//! the run finishes and finalization reports the allowed type catalog.
//!
//! ```toml
//! [config]
//! prefix = "app_"
//! engine = "InnoDB"
//!
//! [[operation]]
//! action = "create"
//! table = "users"
//! comment = "Registered accounts"
//! calls = [
//!     ["int", "id"], ["primaryKey"], ["autoIncrement"],
//!     ["varchar", "name", "255"],
//! ]
//!
//! [[operation]]
//! action = "skip"
//!
//! [[operation]]
//! action = "drop"
//! table = "users"
//!
//! [[operation]]
//! action = "end_skip"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::{SchemaBuilder, TableBuilder};
use crate::config::{ChainConfig, SettingsError};

/// A parsed migration script.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Script {
    /// Options embedded in the script; callers decide how they merge.
    #[serde(default)]
    pub config: Option<ChainConfig>,

    #[serde(default, rename = "operation")]
    pub operations: Vec<Operation>,
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Operation {
    Create {
        table: String,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default)]
        calls: Vec<Vec<String>>,
    },
    Alter {
        table: String,
        #[serde(default)]
        comment: Option<String>,
        #[serde(default)]
        calls: Vec<Vec<String>>,
    },
    Drop {
        table: String,
    },
    Skip,
    EndSkip,
}

impl Script {
    /// Parse a script from TOML text.
    pub fn parse(source: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a script file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Replay every operation against `schema`, in order.
    pub fn apply(&self, schema: &mut SchemaBuilder) {
        for op in &self.operations {
            debug!(?op, "applying script operation");
            match op {
                Operation::Create {
                    table,
                    comment,
                    calls,
                } => {
                    schema.create_table(table, |t| replay(t, comment.as_deref(), calls));
                }
                Operation::Alter {
                    table,
                    comment,
                    calls,
                } => {
                    schema.alter_table(table, |t| replay(t, comment.as_deref(), calls));
                }
                Operation::Drop { table } => {
                    schema.drop_table(table);
                }
                Operation::Skip => {
                    schema.skip();
                }
                Operation::EndSkip => {
                    schema.end_skip();
                }
            }
        }
    }
}

fn replay(table: &mut TableBuilder<'_>, comment: Option<&str>, calls: &[Vec<String>]) {
    if let Some(text) = comment {
        table.table_comment(text);
    }
    for call in calls {
        // An empty call array names nothing, which the dispatch table rejects.
        let (method, args) = call.split_first().map_or(("", &[][..]), |(m, a)| (m.as_str(), a));
        table.call(method, args);
    }
}
