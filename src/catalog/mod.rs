//! Catalog module for source schema metadata.
//!
//! Describes the columns of a source table and how their JDBC types map onto
//! Hive column types.

mod schema;
mod types;

pub use schema::{ColumnDef, SchemaBuilder, SchemaError, SchemaProvider, TableSchema};
pub use types::{sql_types, HiveType, HiveTypes, TypeMapper};
