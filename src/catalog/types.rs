//! Source SQL type codes and their Hive counterparts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// JDBC type codes (the values of `java.sql.Types`).
///
/// Schema providers report column types with these codes, so the numbers
/// must stay identical to what a JDBC driver returns.
pub mod sql_types {
    pub const BIT: i32 = -7;
    pub const TINYINT: i32 = -6;
    pub const SMALLINT: i32 = 5;
    pub const INTEGER: i32 = 4;
    pub const BIGINT: i32 = -5;
    pub const FLOAT: i32 = 6;
    pub const REAL: i32 = 7;
    pub const DOUBLE: i32 = 8;
    pub const NUMERIC: i32 = 2;
    pub const DECIMAL: i32 = 3;
    pub const CHAR: i32 = 1;
    pub const VARCHAR: i32 = 12;
    pub const LONGVARCHAR: i32 = -1;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const BINARY: i32 = -2;
    pub const VARBINARY: i32 = -3;
    pub const LONGVARBINARY: i32 = -4;
    pub const NULL: i32 = 0;
    pub const OTHER: i32 = 1111;
    pub const JAVA_OBJECT: i32 = 2000;
    pub const DISTINCT: i32 = 2001;
    pub const STRUCT: i32 = 2002;
    pub const ARRAY: i32 = 2003;
    pub const BLOB: i32 = 2004;
    pub const CLOB: i32 = 2005;
    pub const REF: i32 = 2006;
    pub const DATALINK: i32 = 70;
    pub const BOOLEAN: i32 = 16;
    pub const ROWID: i32 = -8;
    pub const NCHAR: i32 = -15;
    pub const NVARCHAR: i32 = -9;
    pub const LONGNVARCHAR: i32 = -16;
    pub const NCLOB: i32 = 2011;
    pub const SQLXML: i32 = 2009;
}

/// Column types understood by the Hive catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiveType {
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Boolean,
    Float,
    Double,
    String,
}

impl HiveType {
    /// Get the DDL name for this type.
    pub fn sql_name(&self) -> &'static str {
        match self {
            HiveType::TinyInt => "TINYINT",
            HiveType::SmallInt => "SMALLINT",
            HiveType::Int => "INT",
            HiveType::BigInt => "BIGINT",
            HiveType::Boolean => "BOOLEAN",
            HiveType::Float => "FLOAT",
            HiveType::Double => "DOUBLE",
            HiveType::String => "STRING",
        }
    }
}

impl fmt::Display for HiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql_name())
    }
}

/// Maps source type codes onto Hive column types.
///
/// Connection managers for databases with unusual types can supply their
/// own implementation; [`HiveTypes`] covers the standard JDBC codes.
pub trait TypeMapper {
    /// Hive type for a source type code, or `None` if Hive cannot hold it.
    fn to_hive_type(&self, type_code: i32) -> Option<HiveType>;

    /// True when the mapping cannot preserve the full precision of the source.
    fn is_lossy(&self, type_code: i32) -> bool;
}

/// The default JDBC-to-Hive mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiveTypes;

impl TypeMapper for HiveTypes {
    fn to_hive_type(&self, type_code: i32) -> Option<HiveType> {
        use sql_types::*;

        match type_code {
            INTEGER | SMALLINT => Some(HiveType::Int),
            VARCHAR | CHAR | LONGVARCHAR | NVARCHAR | NCHAR | LONGNVARCHAR | DATE | TIME
            | TIMESTAMP => Some(HiveType::String),
            NUMERIC | DECIMAL | FLOAT | DOUBLE | REAL => Some(HiveType::Double),
            BIT | BOOLEAN => Some(HiveType::Boolean),
            TINYINT => Some(HiveType::TinyInt),
            BIGINT => Some(HiveType::BigInt),
            _ => None,
        }
    }

    fn is_lossy(&self, type_code: i32) -> bool {
        use sql_types::*;

        // Dates and times become strings; fixed-point numbers become doubles.
        matches!(type_code, DATE | TIME | TIMESTAMP | DECIMAL | NUMERIC)
    }
}
