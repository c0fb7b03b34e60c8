//! Statement builder.
//!
//! A [`SchemaBuilder`] is the context for one run. It owns the table list,
//! the shared column fragment list, the error slot, and the skip flag.
//! Table callbacks receive a [`TableBuilder`] that appends to the column list
//! on behalf of the table being declared.
//!
//! # Examples
//!
//! ```
//! use sqlchain::builder::SchemaBuilder;
//! use sqlchain::config::ChainConfig;
//!
//! let mut schema = SchemaBuilder::new(ChainConfig::default());
//! schema.create_table("users", |t| {
//!     t.int("id").primary_key().auto_increment(0);
//!     t.varchar("name", 255);
//! });
//!
//! assert_eq!(
//!     schema.render(),
//!     "CREATE TABLE `users`(\n    `id` int PRIMARY KEY AUTO_INCREMENT,\n    `name` varchar(255)\n);\n\n"
//! );
//! ```

mod registry;

pub use registry::SchemaRegistry;

use std::fmt::Display;

use tracing::{debug, trace, warn};

use crate::config::ChainConfig;
use crate::error::{ChainError, ChainResult};
use crate::output::{self, OutputSink, Outcome};
use crate::sql::column::{self, ColumnOp, Modifier, Special};
use crate::sql::ddl::{self, TableAction, TableEntry};
use crate::sql::quote::enum_members;
use crate::sql::types::ColumnType;

/// Accumulates table statements for one run.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    config: ChainConfig,
    registry: SchemaRegistry,
    columns: Vec<String>,
    error: Option<ChainError>,
    skip: bool,
}

impl SchemaBuilder {
    /// Create a builder for a fresh run.
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Start ignoring table operations.
    pub fn skip(&mut self) -> &mut Self {
        debug!("skip mode on");
        self.skip = true;
        self
    }

    /// Stop ignoring table operations.
    pub fn end_skip(&mut self) -> &mut Self {
        debug!("skip mode off");
        self.skip = false;
        self
    }

    pub fn is_skipping(&self) -> bool {
        self.skip
    }

    /// Declare a new table. Ignored if `name` was already created in this run.
    pub fn create_table<F>(&mut self, name: &str, callback: F) -> &mut Self
    where
        F: FnOnce(&mut TableBuilder<'_>),
    {
        self.define(name, TableAction::Create, callback)
    }

    /// Alter a table. Existence is not checked.
    pub fn alter_table<F>(&mut self, name: &str, callback: F) -> &mut Self
    where
        F: FnOnce(&mut TableBuilder<'_>),
    {
        self.define(name, TableAction::Alter, callback)
    }

    /// Drop a table. Ignored unless `name` was created in this run.
    pub fn drop_table(&mut self, name: &str) -> &mut Self {
        if self.skip {
            trace!(table = name, "skipping DROP");
            return self;
        }
        self.registry.register(name, TableAction::Drop);
        self
    }

    /// Set the comment of the most recently registered table.
    pub fn table_comment(&mut self, text: impl Into<String>) -> &mut Self {
        if self.skip {
            return self;
        }
        match self.registry.current_mut() {
            Some(table) => table.comment = text.into(),
            None => debug!("table comment with no table registered, ignoring"),
        }
        self
    }

    /// Recorded statements in call order.
    pub fn tables(&self) -> &[TableEntry] {
        self.registry.tables()
    }

    /// The shared column fragment list.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The stored error, if any call failed.
    pub fn error(&self) -> Option<&ChainError> {
        self.error.as_ref()
    }

    /// Render all recorded statements, regardless of the error slot.
    pub fn render(&self) -> String {
        ddl::render(self.registry.tables(), &self.columns, &self.config)
    }

    /// End the run.
    ///
    /// A stored error is returned as-is and nothing is written. Otherwise the
    /// script is rendered and delivered to `sink` (or echoed when no output
    /// path is configured).
    pub fn finalize(self, sink: &mut dyn OutputSink) -> ChainResult<Outcome> {
        if let Some(err) = self.error {
            warn!(error = %err, "run aborted, no SQL emitted");
            return Err(err);
        }

        let sql = self.render();
        output::emit(sql, &self.config, sink)
    }

    fn define<F>(&mut self, name: &str, action: TableAction, callback: F) -> &mut Self
    where
        F: FnOnce(&mut TableBuilder<'_>),
    {
        if self.skip {
            trace!(table = name, action = %action, "skipping table");
            return self;
        }

        if !self.registry.register(name, action) {
            return self;
        }

        let begin = self.columns.len();
        callback(&mut TableBuilder {
            schema: &mut *self,
            begin,
        });
        let end = self.columns.len();

        if let Some(table) = self.registry.current_mut() {
            table.columns = begin..end;
        }
        self
    }

    fn record_error(&mut self, err: ChainError) {
        if self.error.is_some() {
            debug!(error = %err, "error slot already set, discarding");
            return;
        }
        warn!(error = %err, "column operation failed");
        self.error = Some(err);
    }
}

/// Handle passed to table callbacks.
///
/// Declarations append a column; modifiers change the latest column of this
/// table. Every method returns the handle so calls can be chained.
#[derive(Debug)]
pub struct TableBuilder<'a> {
    schema: &'a mut SchemaBuilder,
    begin: usize,
}

macro_rules! plain_columns {
    ($($method:ident => $ty:ident),* $(,)?) => {
        $(
            pub fn $method(&mut self, name: &str) -> &mut Self {
                self.column(ColumnType::$ty, name)
            }
        )*
    };
}

impl<'a> TableBuilder<'a> {
    /// Apply a column operation.
    pub fn op(&mut self, op: ColumnOp) -> &mut Self {
        match op {
            ColumnOp::Declare { ty, name, param } => {
                let fragment = column::declaration(&name, ty, param.as_deref());
                trace!(column = %fragment, "column declared");
                self.schema.columns.push(fragment);
            }
            ColumnOp::Modify(modifier) => {
                if self.schema.columns.len() <= self.begin {
                    self.schema.record_error(ChainError::NoCurrentColumn {
                        modifier: modifier.name(),
                    });
                    return self;
                }
                if let Some(fragment) = self.schema.columns.last_mut() {
                    modifier.apply(fragment);
                }
            }
            ColumnOp::Special(special) => {
                trace!(op = special.name(), "alter fragment");
                self.schema.columns.push(special.render());
            }
        }
        self
    }

    /// Apply an operation named by string, e.g. `call("varchar", &["name", "64"])`.
    ///
    /// Unknown names and bad arguments go to the run's error slot.
    pub fn call<S: AsRef<str>>(&mut self, method: &str, args: &[S]) -> &mut Self {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        match ColumnOp::parse(method, &args) {
            Ok(op) => self.op(op),
            Err(err) => {
                self.schema.record_error(err);
                self
            }
        }
    }

    /// Declare a column without a parameter.
    pub fn column(&mut self, ty: ColumnType, name: &str) -> &mut Self {
        self.op(ColumnOp::Declare {
            ty,
            name: name.to_string(),
            param: None,
        })
    }

    /// Declare a column with a length, precision, or member list.
    pub fn column_with(&mut self, ty: ColumnType, name: &str, param: impl Display) -> &mut Self {
        self.op(ColumnOp::Declare {
            ty,
            name: name.to_string(),
            param: Some(param.to_string()),
        })
    }

    plain_columns! {
        int => Int,
        big_int => BigInt,
        medium_int => MediumInt,
        small_int => SmallInt,
        tiny_int => TinyInt,
        long_text => LongText,
        medium_text => MediumText,
        text => Text,
        tiny_text => TinyText,
        blob => Blob,
        boolean => Boolean,
        date => Date,
        time => Time,
        date_time => DateTime,
        timestamp => Timestamp,
        double => Double,
        float => Float,
        ip => Ip,
        json => Json,
    }

    pub fn varchar(&mut self, name: &str, length: u32) -> &mut Self {
        self.column_with(ColumnType::Varchar, name, length)
    }

    pub fn char(&mut self, name: &str, length: u32) -> &mut Self {
        self.column_with(ColumnType::Char, name, length)
    }

    /// `enum('a','b',...)`
    pub fn enumeration<I, S>(&mut self, name: &str, members: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.column_with(ColumnType::Enum, name, enum_members(members))
    }

    // Modifiers

    pub fn unique_key(&mut self) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::UniqueKey))
    }

    pub fn primary_key(&mut self) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::PrimaryKey))
    }

    /// `DEFAULT <value>`, emitted verbatim. Quote string literals yourself.
    pub fn default_value(&mut self, value: impl Display) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::Default(value.to_string())))
    }

    /// `AUTO_INCREMENT`, with `offset` appended when non-zero.
    pub fn auto_increment(&mut self, offset: u64) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::AutoIncrement(offset)))
    }

    pub fn unsigned(&mut self) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::Unsigned))
    }

    /// Prefix the latest column with `MODIFY COLUMN`.
    pub fn modify(&mut self) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::Modify))
    }

    /// Prefix the latest column with `ADD COLUMN`.
    pub fn add(&mut self) -> &mut Self {
        self.op(ColumnOp::Modify(Modifier::Add))
    }

    // Alter fragments

    pub fn drop_column(&mut self, name: &str) -> &mut Self {
        self.op(ColumnOp::Special(Special::DropColumn(name.to_string())))
    }

    pub fn drop_primary_key(&mut self) -> &mut Self {
        self.op(ColumnOp::Special(Special::DropPrimaryKey))
    }

    pub fn drop_unique_key(&mut self, name: &str) -> &mut Self {
        self.op(ColumnOp::Special(Special::DropUniqueKey(name.to_string())))
    }

    pub fn add_unique_key(&mut self, name: &str) -> &mut Self {
        self.op(ColumnOp::Special(Special::AddUniqueKey(name.to_string())))
    }

    pub fn add_primary_key(&mut self, name: &str) -> &mut Self {
        self.op(ColumnOp::Special(Special::AddPrimaryKey(name.to_string())))
    }

    /// Set the comment of the table being declared.
    pub fn table_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.schema.table_comment(text);
        self
    }
}
