//! Hive statement generation.
//!
//! After a table has been exported to the distributed filesystem, the
//! `CREATE TABLE` and `LOAD DATA INPATH` statements generated here make it
//! available in Hive.

mod clock;
mod columns;
mod error;
#[cfg(test)]
mod logcapture;
mod octal;
mod options;
mod path;
mod statement;
mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use columns::{map_columns, MappedColumn};
pub use error::{TableDefError, TableDefResult};
pub use octal::{encode_delimiter, MAX_DELIMITER};
pub use options::ImportOptions;
pub use path::{
    repair_namenode_port, warehouse_table_path, PathError, PathResolver, QualifyingResolver,
    DEFAULT_NAMENODE_PORT, HDFS_SCHEME,
};
pub use statement::{build_create_table, build_load_data, COMMENT_DATE_FORMAT};
pub use writer::TableDefWriter;
