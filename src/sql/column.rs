//! Column operations.
//!
//! Everything a table callback can do to the column list is one of three
//! shapes:
//!
//! - [`ColumnOp::Declare`] appends a new `` `name` type(param) `` fragment.
//! - [`ColumnOp::Modify`] appends a clause to (or prefixes) the latest fragment.
//! - [`ColumnOp::Special`] appends a standalone alter fragment such as
//!   `` DROP COLUMN `name` ``.
//!
//! [`ColumnOp::parse`] is the dispatch table for operations named by string
//! (migration scripts). Names outside the table yield
//! [`ChainError::UnknownOperation`].

use super::quote::quote_backtick;
use super::types::ColumnType;
use crate::error::{ChainError, ChainResult};

/// Clauses that augment the most recently declared column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    UniqueKey,
    PrimaryKey,
    Default(String),
    /// `AUTO_INCREMENT`, with the offset appended when non-zero.
    AutoIncrement(u64),
    Unsigned,
    /// Prefix with `MODIFY COLUMN`.
    Modify,
    /// Prefix with `ADD COLUMN`.
    Add,
}

impl Modifier {
    /// The name this modifier is called by.
    pub fn name(&self) -> &'static str {
        match self {
            Modifier::UniqueKey => "uniqueKey",
            Modifier::PrimaryKey => "primaryKey",
            Modifier::Default(_) => "default",
            Modifier::AutoIncrement(_) => "autoIncrement",
            Modifier::Unsigned => "unsigned",
            Modifier::Modify => "modify",
            Modifier::Add => "add",
        }
    }

    /// Apply this modifier to a rendered column fragment in place.
    pub fn apply(&self, fragment: &mut String) {
        match self {
            Modifier::Modify => fragment.insert_str(0, "MODIFY COLUMN "),
            Modifier::Add => fragment.insert_str(0, "ADD COLUMN "),
            Modifier::UniqueKey => fragment.push_str(" UNIQUE"),
            Modifier::PrimaryKey => fragment.push_str(" PRIMARY KEY"),
            Modifier::Default(value) => {
                fragment.push_str(" DEFAULT ");
                fragment.push_str(value);
            }
            Modifier::AutoIncrement(0) => fragment.push_str(" AUTO_INCREMENT"),
            Modifier::AutoIncrement(offset) => {
                fragment.push_str(&format!(" AUTO_INCREMENT {}", offset));
            }
            Modifier::Unsigned => fragment.push_str(" UNSIGNED"),
        }
    }
}

/// Standalone alter fragments that are not tied to a declared column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Special {
    DropColumn(String),
    DropPrimaryKey,
    DropUniqueKey(String),
    AddUniqueKey(String),
    AddPrimaryKey(String),
}

impl Special {
    pub fn name(&self) -> &'static str {
        match self {
            Special::DropColumn(_) => "dropColumn",
            Special::DropPrimaryKey => "dropPrimaryKey",
            Special::DropUniqueKey(_) => "dropUniqueKey",
            Special::AddUniqueKey(_) => "addUniqueKey",
            Special::AddPrimaryKey(_) => "addPrimaryKey",
        }
    }

    pub fn render(&self) -> String {
        match self {
            Special::DropColumn(col) => format!("DROP COLUMN {}", quote_backtick(col)),
            Special::DropPrimaryKey => "DROP PRIMARY KEY".to_string(),
            Special::DropUniqueKey(idx) => format!("DROP INDEX {}", quote_backtick(idx)),
            Special::AddUniqueKey(col) => format!("ADD UNIQUE ({})", quote_backtick(col)),
            Special::AddPrimaryKey(col) => format!("ADD PRIMARY KEY ({})", quote_backtick(col)),
        }
    }
}

/// One call made inside a table callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOp {
    Declare {
        ty: ColumnType,
        name: String,
        param: Option<String>,
    },
    Modify(Modifier),
    Special(Special),
}

impl ColumnOp {
    /// Resolve a named call with string arguments.
    ///
    /// Most operations answer to two names, e.g. `default`/`defaultValue` and
    /// `dropPrimaryKey`/`dropPrimary`.
    ///
    /// Type declarations take `[name, param?]`. `default` takes `[value]`,
    /// `autoIncrement` takes `[offset?]`, and the specials that reference a
    /// column or index take `[name]`. Extra arguments are ignored.
    pub fn parse(method: &str, args: &[String]) -> ChainResult<Self> {
        if let Some(ty) = ColumnType::from_method(method) {
            let name = required(method, args)?;
            return Ok(ColumnOp::Declare {
                ty,
                name,
                param: args.get(1).cloned(),
            });
        }

        let op = match method {
            "uniqueKey" => ColumnOp::Modify(Modifier::UniqueKey),
            "primaryKey" => ColumnOp::Modify(Modifier::PrimaryKey),
            "default" | "defaultValue" => {
                ColumnOp::Modify(Modifier::Default(required(method, args)?))
            }
            "autoIncrement" => {
                let offset: i64 = match args.first() {
                    Some(raw) => raw.trim().parse().map_err(|_| ChainError::InvalidArgument {
                        call: method.to_string(),
                        value: raw.clone(),
                    })?,
                    None => 0,
                };
                // Non-positive offsets mean no offset.
                ColumnOp::Modify(Modifier::AutoIncrement(offset.max(0) as u64))
            }
            "unsigned" => ColumnOp::Modify(Modifier::Unsigned),
            "modify" | "markModify" => ColumnOp::Modify(Modifier::Modify),
            "add" | "markAdd" => ColumnOp::Modify(Modifier::Add),
            "dropColumn" => ColumnOp::Special(Special::DropColumn(required(method, args)?)),
            "dropPrimaryKey" | "dropPrimary" => ColumnOp::Special(Special::DropPrimaryKey),
            "dropUniqueKey" | "dropUnique" => {
                ColumnOp::Special(Special::DropUniqueKey(required(method, args)?))
            }
            "addUniqueKey" | "unique" => {
                ColumnOp::Special(Special::AddUniqueKey(required(method, args)?))
            }
            "addPrimaryKey" | "primary" => {
                ColumnOp::Special(Special::AddPrimaryKey(required(method, args)?))
            }
            _ => return Err(ChainError::unknown(method)),
        };

        Ok(op)
    }
}

fn required(call: &str, args: &[String]) -> ChainResult<String> {
    args.first()
        .filter(|a| !a.is_empty())
        .cloned()
        .ok_or_else(|| ChainError::MissingArgument {
            call: call.to_string(),
        })
}

/// Render a column declaration fragment.
pub fn declaration(name: &str, ty: ColumnType, param: Option<&str>) -> String {
    format!("{} {}", quote_backtick(name), ty.render(param))
}
