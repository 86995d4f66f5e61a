//! Table definition writer: both Hive statements for one imported table.

use crate::catalog::{SchemaProvider, TypeMapper};

use super::clock::{Clock, SystemClock};
use super::columns::map_columns;
use super::error::TableDefResult;
use super::options::ImportOptions;
use super::path::{repair_namenode_port, warehouse_table_path, PathResolver};
use super::statement::{build_create_table, build_load_data};

/// Creates the Hive DDL for a table whose rows were exported to the
/// distributed filesystem.
///
/// Running the `CREATE TABLE` statement followed by the `LOAD DATA`
/// statement makes the exported files queryable from Hive.
pub struct TableDefWriter<'a> {
    options: &'a ImportOptions,
    schema: &'a dyn SchemaProvider,
    mapper: &'a dyn TypeMapper,
    resolver: &'a dyn PathResolver,
    clock: &'a dyn Clock,
    table: String,
}

impl<'a> TableDefWriter<'a> {
    /// Create a writer for `table` that stamps comments with the system clock.
    pub fn new(
        options: &'a ImportOptions,
        schema: &'a dyn SchemaProvider,
        mapper: &'a dyn TypeMapper,
        resolver: &'a dyn PathResolver,
        table: impl Into<String>,
    ) -> Self {
        Self {
            options,
            schema,
            mapper,
            resolver,
            clock: &SystemClock,
            table: table.into(),
        }
    }

    /// Use `clock` for the comment timestamp.
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Name of the table being written.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The `CREATE TABLE` statement for the table.
    pub fn create_table_stmt(&self) -> TableDefResult<String> {
        let columns = map_columns(
            self.schema,
            self.mapper,
            &self.table,
            self.options.columns.as_deref(),
        )?;

        build_create_table(&self.table, &columns, self.options, self.clock)
    }

    /// The `LOAD DATA` statement moving the exported files into the table.
    pub fn load_data_stmt(&self) -> TableDefResult<String> {
        let table_path = warehouse_table_path(self.options.warehouse_dir.as_deref(), &self.table);
        let qualified = self.resolver.canonicalize(&table_path)?;
        let path = repair_namenode_port(&qualified, self.options.namenode_port);

        Ok(build_load_data(&self.table, &path))
    }

    /// Both statements as a Hive script, each terminated by `;`.
    pub fn script(&self) -> TableDefResult<String> {
        let create = self.create_table_stmt()?;
        let load = self.load_data_stmt()?;
        Ok(format!("{};\n{};\n", create, load))
    }
}
