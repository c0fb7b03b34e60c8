//! Column type catalog.
//!
//! Every type a column can be declared with is listed here. The catalog is
//! closed: a declaration naming anything else is rejected and the rejection
//! message enumerates [`ColumnType::ALL`].
//!
//! Types render as their lower-cased call name, so `bigInt` becomes `bigint`
//! and `dateTime` becomes `datetime`.

use std::fmt;
use std::str::FromStr;

/// A recognized column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    // Integers
    Int,
    BigInt,
    MediumInt,
    SmallInt,
    TinyInt,

    // Strings
    Varchar,
    Char,

    // Text
    LongText,
    MediumText,
    Text,
    TinyText,

    Blob,
    Boolean,

    // Temporal
    Date,
    Time,
    DateTime,
    Timestamp,

    // Floating point
    Double,
    Float,

    Ip,
    Json,
    Enum,
}

impl ColumnType {
    /// The full catalog, in the order it is reported to callers.
    pub const ALL: [ColumnType; 22] = [
        ColumnType::Int,
        ColumnType::BigInt,
        ColumnType::MediumInt,
        ColumnType::SmallInt,
        ColumnType::TinyInt,
        ColumnType::Varchar,
        ColumnType::Char,
        ColumnType::LongText,
        ColumnType::MediumText,
        ColumnType::Text,
        ColumnType::TinyText,
        ColumnType::Blob,
        ColumnType::Boolean,
        ColumnType::Date,
        ColumnType::Time,
        ColumnType::DateTime,
        ColumnType::Timestamp,
        ColumnType::Double,
        ColumnType::Float,
        ColumnType::Ip,
        ColumnType::Json,
        ColumnType::Enum,
    ];

    /// The name this type is declared with.
    pub fn method_name(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::BigInt => "bigInt",
            ColumnType::MediumInt => "mediumInt",
            ColumnType::SmallInt => "smallInt",
            ColumnType::TinyInt => "tinyInt",
            ColumnType::Varchar => "varchar",
            ColumnType::Char => "char",
            ColumnType::LongText => "longText",
            ColumnType::MediumText => "mediumText",
            ColumnType::Text => "text",
            ColumnType::TinyText => "tinyText",
            ColumnType::Blob => "blob",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "dateTime",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Double => "double",
            ColumnType::Float => "float",
            ColumnType::Ip => "ip",
            ColumnType::Json => "json",
            ColumnType::Enum => "enum",
        }
    }

    /// The keyword emitted into DDL.
    pub fn sql_name(&self) -> String {
        self.method_name().to_lowercase()
    }

    /// Look up a type by its declaration name (case-sensitive).
    pub fn from_method(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.method_name() == name)
    }

    /// Render the type with an optional parameter: `varchar(255)`, `int`.
    ///
    /// An empty parameter counts as absent, so `()` is never emitted.
    pub fn render(&self, param: Option<&str>) -> String {
        match param.filter(|p| !p.is_empty()) {
            Some(p) => format!("{}({})", self.sql_name(), p),
            None => self.sql_name(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

impl FromStr for ColumnType {
    type Err = crate::error::ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_method(s).ok_or_else(|| crate::error::ChainError::unknown(s))
    }
}
