//! hive-tabledef - Hive table definitions for imported relational tables
//!
//! Once a table's rows have been exported to HDFS as delimited text, the
//! statements generated by this crate create a matching Hive table and load
//! the files into it. Column types are translated from JDBC type codes to
//! Hive types, and delimiters are written as the octal escapes Hive expects.
//!
//! # Example
//!
//! ```
//! use hive_tabledef::catalog::{sql_types, HiveTypes, SchemaBuilder};
//! use hive_tabledef::hive::{ImportOptions, QualifyingResolver, TableDefWriter};
//!
//! let schema = SchemaBuilder::new("foo")
//!     .add_column("id", sql_types::INTEGER)
//!     .add_column("name", sql_types::VARCHAR)
//!     .build()
//!     .unwrap();
//! let options = ImportOptions::new().comments(false).warehouse_dir("/warehouse");
//! let resolver = QualifyingResolver::new("hdfs://namenode", "/").unwrap();
//!
//! let writer = TableDefWriter::new(&options, &schema, &HiveTypes, &resolver, "foo");
//! assert_eq!(
//!     writer.load_data_stmt().unwrap(),
//!     "LOAD DATA INPATH 'hdfs://namenode:8020/warehouse/foo' INTO TABLE foo"
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod hive;
