//! Table bookkeeping for a single run.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::sql::ddl::{TableAction, TableEntry};

/// Tracks created table names and the ordered list of table statements.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    existing: HashSet<String>,
    tables: Vec<TableEntry>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a table statement.
    ///
    /// - `Create` is refused when `name` was already created in this run.
    /// - `Drop` is refused when `name` was never created in this run. A
    ///   successful drop leaves the name registered.
    /// - `Alter` is always accepted.
    ///
    /// Returns `false` when refused; nothing is recorded in that case.
    pub fn register(&mut self, name: &str, action: TableAction) -> bool {
        match action {
            TableAction::Create if self.existing.contains(name) => {
                warn!(table = name, "table already created in this run, skipping CREATE");
                return false;
            }
            TableAction::Drop if !self.existing.contains(name) => {
                warn!(table = name, "table not created in this run, skipping DROP");
                return false;
            }
            TableAction::Alter if !self.existing.contains(name) => {
                debug!(table = name, "altering a table not created in this run");
            }
            _ => {}
        }

        if action == TableAction::Create {
            self.existing.insert(name.to_string());
        }

        self.tables.push(TableEntry::new(name, action));
        debug!(table = name, action = %action, position = self.tables.len() - 1, "table registered");
        true
    }

    /// Whether `name` was created in this run.
    pub fn exists(&self, name: &str) -> bool {
        self.existing.contains(name)
    }

    /// Recorded statements in call order.
    pub fn tables(&self) -> &[TableEntry] {
        &self.tables
    }

    /// The most recently registered table.
    pub fn current_mut(&mut self) -> Option<&mut TableEntry> {
        self.tables.last_mut()
    }
}
