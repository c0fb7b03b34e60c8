//! DDL (Data Definition Language) rendering.
//!
//! Tables are recorded in call order as [`TableEntry`] values. Their columns
//! live in one shared fragment list; each entry owns a contiguous range of it.
//! [`render`] walks the tables in order and emits one statement per entry.
//!
//! # Examples
//!
//! ```
//! use sqlchain::config::ChainConfig;
//! use sqlchain::ddl::{render, TableAction, TableEntry};
//!
//! let columns = vec!["`id` int PRIMARY KEY".to_string()];
//! let mut users = TableEntry::new("users", TableAction::Create);
//! users.columns = 0..1;
//!
//! let sql = render(&[users], &columns, &ChainConfig::new().engine("InnoDB"));
//! assert_eq!(sql, "CREATE TABLE `users`(\n    `id` int PRIMARY KEY\n) ENGINE=InnoDB;\n\n");
//! ```

use std::fmt;
use std::ops::Range;

use super::quote::quote_backtick;
use crate::config::ChainConfig;

/// What a statement does to its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableAction {
    Create,
    Alter,
    Drop,
}

impl TableAction {
    /// The statement keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            TableAction::Create => "CREATE",
            TableAction::Alter => "ALTER",
            TableAction::Drop => "DROP",
        }
    }
}

impl fmt::Display for TableAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One recorded table statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub name: String,
    pub action: TableAction,
    pub comment: String,
    /// Slice of the shared column list owned by this table. Always empty for drops.
    pub columns: Range<usize>,
}

impl TableEntry {
    /// Create an entry with no comment and no columns.
    pub fn new(name: impl Into<String>, action: TableAction) -> Self {
        Self {
            name: name.into(),
            action,
            comment: String::new(),
            columns: 0..0,
        }
    }

    /// Prefixed, backtick-quoted table name.
    pub fn qualified_name(&self, config: &ChainConfig) -> String {
        quote_backtick(&format!("{}{}", config.prefix, self.name))
    }

    /// Render this entry, followed by a blank line.
    pub fn to_sql(&self, columns: &[String], config: &ChainConfig) -> String {
        let mut sql = comment_block(&self.comment);
        let name = self.qualified_name(config);

        if self.action == TableAction::Drop {
            sql.push_str(&format!("DROP TABLE {};\n\n", name));
            return sql;
        }

        let is_create = self.action == TableAction::Create;

        sql.push_str(self.action.keyword());
        sql.push_str(" TABLE ");
        sql.push_str(&name);
        sql.push_str(if is_create { "(\n" } else { "\n" });

        let body = columns
            .get(self.columns.clone())
            .unwrap_or_default()
            .iter()
            .map(|c| format!("    {}", c))
            .collect::<Vec<_>>()
            .join(",\n");
        if !body.is_empty() {
            sql.push_str(&body);
            sql.push('\n');
        }

        if is_create {
            sql.push(')');
            sql.push_str(&config.engine_clause());
            sql.push_str(&config.charset_clause());
        }
        sql.push_str(";\n\n");

        sql
    }
}

/// Render every table, in order, into one script.
pub fn render(tables: &[TableEntry], columns: &[String], config: &ChainConfig) -> String {
    tables
        .iter()
        .map(|table| table.to_sql(columns, config))
        .collect()
}

/// Wrap a table comment in a `/** ... */` block.
///
/// Spaces are removed and every line break continues the block with ` * `.
pub fn comment_block(comment: &str) -> String {
    if comment.is_empty() {
        return String::new();
    }

    let text = comment
        .replace(' ', "")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\n * ");

    format!("/**\n * {}\n */\n", text)
}
