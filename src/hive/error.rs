//! Statement generation errors.

use thiserror::Error;

use crate::catalog::SchemaError;

use super::path::PathError;

/// Result type for statement generation.
pub type TableDefResult<T> = Result<T, TableDefError>;

/// Errors raised while generating Hive statements.
///
/// Schema problems and configuration problems are kept apart so a caller
/// can tell a bad source table from a bad option.
#[derive(Debug, Clone, Error)]
pub enum TableDefError {
    #[error("Hive does not support the SQL type {type_code} of column {column}")]
    UnsupportedType { column: String, type_code: i32 },

    #[error("column {0} is not present in the source table")]
    ColumnNotFound(String),

    #[error("character {0} is an out-of-range delimiter")]
    DelimiterOutOfRange(u32),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("path error: {0}")]
    Path(#[from] PathError),
}

impl TableDefError {
    /// True when the source schema, rather than the options, caused the error.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            TableDefError::UnsupportedType { .. }
                | TableDefError::ColumnNotFound(_)
                | TableDefError::Schema(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let unsupported = TableDefError::UnsupportedType {
            column: "payload".into(),
            type_code: 2004,
        };
        assert!(unsupported.is_schema_error());
        assert_eq!(
            unsupported.to_string(),
            "Hive does not support the SQL type 2004 of column payload"
        );

        let delim = TableDefError::DelimiterOutOfRange(200);
        assert!(!delim.is_schema_error());
        assert_eq!(delim.to_string(), "character 200 is an out-of-range delimiter");

        let missing: TableDefError = SchemaError::TableNotFound("orders".into()).into();
        assert!(missing.is_schema_error());
    }
}
