//! Resolves the imported columns and their Hive types.

use tracing::warn;

use crate::catalog::{HiveType, SchemaProvider, TypeMapper};

use super::error::{TableDefError, TableDefResult};

/// A column ready to be declared in Hive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    pub name: String,
    pub hive_type: HiveType,
}

impl MappedColumn {
    pub fn new(name: impl Into<String>, hive_type: HiveType) -> Self {
        Self {
            name: name.into(),
            hive_type,
        }
    }
}

/// Map the columns of `table` to Hive types.
///
/// `explicit_columns`, when given, is used verbatim as both projection and
/// order. Any column without a Hive mapping fails the whole table.
pub fn map_columns(
    schema: &dyn SchemaProvider,
    mapper: &dyn TypeMapper,
    table: &str,
    explicit_columns: Option<&[String]>,
) -> TableDefResult<Vec<MappedColumn>> {
    let column_types = schema.column_types(table)?;

    let names = match explicit_columns {
        Some(cols) => cols.to_vec(),
        None => schema.column_names(table)?,
    };

    names
        .into_iter()
        .map(|name| -> TableDefResult<MappedColumn> {
            let type_code = *column_types
                .get(&name)
                .ok_or_else(|| TableDefError::ColumnNotFound(name.clone()))?;

            let hive_type = mapper
                .to_hive_type(type_code)
                .ok_or_else(|| TableDefError::UnsupportedType {
                    column: name.clone(),
                    type_code,
                })?;

            if mapper.is_lossy(type_code) {
                warn!("Column {} had to be cast to a less precise type in Hive", name);
            }

            Ok(MappedColumn { name, hive_type })
        })
        .collect()
}
