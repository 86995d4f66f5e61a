//! Table schema definitions and the schema provider seam.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// A source column: its name and JDBC type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Source type code (see [`super::sql_types`]).
    pub type_code: i32,
}

impl ColumnDef {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, type_code: i32) -> Self {
        Self {
            name: name.into(),
            type_code,
        }
    }
}

/// Source table schema, as described by the connection manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Column definitions in source order.
    pub columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Create a new table schema.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Validate the schema itself.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(&col.name) {
                return Err(SchemaError::DuplicateColumn(col.name.clone()));
            }
        }

        Ok(())
    }

    fn check_table(&self, table: &str) -> Result<(), SchemaError> {
        if self.name != table {
            return Err(SchemaError::TableNotFound(table.to_string()));
        }
        Ok(())
    }
}

/// Schema-related errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("table name is empty")]
    EmptyTableName,

    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("schema lookup failed: {0}")]
    Provider(String),
}

/// Source of column metadata for a table.
///
/// The live implementation queries the source database; [`TableSchema`]
/// serves a schema that was read ahead of time.
pub trait SchemaProvider {
    /// Map every column of `table` to its source type code.
    fn column_types(&self, table: &str) -> Result<HashMap<String, i32>, SchemaError>;

    /// Column names of `table` in their natural order.
    fn column_names(&self, table: &str) -> Result<Vec<String>, SchemaError>;
}

impl SchemaProvider for TableSchema {
    fn column_types(&self, table: &str) -> Result<HashMap<String, i32>, SchemaError> {
        self.check_table(table)?;
        Ok(self
            .columns
            .iter()
            .map(|c| (c.name.clone(), c.type_code))
            .collect())
    }

    fn column_names(&self, table: &str) -> Result<Vec<String>, SchemaError> {
        self.check_table(table)?;
        Ok(self.columns.iter().map(|c| c.name.clone()).collect())
    }
}

/// Builder for creating table schemas.
pub struct SchemaBuilder {
    name: String,
    columns: Vec<ColumnDef>,
}

impl SchemaBuilder {
    /// Start building a new schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column.
    pub fn add_column(mut self, name: impl Into<String>, type_code: i32) -> Self {
        self.columns.push(ColumnDef::new(name, type_code));
        self
    }

    /// Build the schema.
    pub fn build(self) -> Result<TableSchema, SchemaError> {
        let schema = TableSchema::new(self.name, self.columns);
        schema.validate()?;
        Ok(schema)
    }
}
