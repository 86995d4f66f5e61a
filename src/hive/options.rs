//! Options that shape the generated statements.

use serde::{Deserialize, Serialize};

use super::path::DEFAULT_NAMENODE_PORT;

/// Import options consumed by the statement builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Character between fields of the exported files.
    pub field_delimiter: char,
    /// Character after each record of the exported files.
    pub record_delimiter: char,
    /// Directory holding one subdirectory per imported table.
    pub warehouse_dir: Option<String>,
    /// Stamp the table with an import-time comment.
    pub comments: bool,
    /// Columns to import, in order. `None` imports every column.
    pub columns: Option<Vec<String>>,
    /// Namenode port to restore when a qualified path lost it.
    pub namenode_port: u16,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            field_delimiter: ',',
            record_delimiter: '\n',
            warehouse_dir: None,
            comments: true,
            columns: None,
            namenode_port: DEFAULT_NAMENODE_PORT,
        }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn field_delimiter(mut self, delim: char) -> Self {
        self.field_delimiter = delim;
        self
    }

    /// Set the record delimiter.
    pub fn record_delimiter(mut self, delim: char) -> Self {
        self.record_delimiter = delim;
        self
    }

    /// Set the warehouse directory.
    pub fn warehouse_dir(mut self, dir: impl Into<String>) -> Self {
        self.warehouse_dir = Some(dir.into());
        self
    }

    /// Enable or disable the import-time comment.
    pub fn comments(mut self, enabled: bool) -> Self {
        self.comments = enabled;
        self
    }

    /// Restrict and reorder the imported columns.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the namenode port used for path repair.
    pub fn namenode_port(mut self, port: u16) -> Self {
        self.namenode_port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let opts = ImportOptions::default();
        assert_eq!(opts.field_delimiter, ',');
        assert_eq!(opts.record_delimiter, '\n');
        assert!(opts.comments);
        assert!(opts.warehouse_dir.is_none());
        assert!(opts.columns.is_none());
        assert_eq!(opts.namenode_port, 8020);
    }

    #[test]
    fn test_partial_deserialize() {
        let opts: ImportOptions = serde_json::from_value(json!({
            "field_delimiter": "\t",
            "warehouse_dir": "/user/hive/warehouse",
            "columns": ["id", "name"]
        }))
        .unwrap();

        assert_eq!(opts.field_delimiter, '\t');
        assert_eq!(opts.record_delimiter, '\n');
        assert_eq!(opts.warehouse_dir.as_deref(), Some("/user/hive/warehouse"));
        assert_eq!(opts.columns, Some(vec!["id".to_string(), "name".to_string()]));
    }

    #[test]
    fn test_builder() {
        let opts = ImportOptions::new()
            .field_delimiter('|')
            .comments(false)
            .columns(["b", "a"])
            .namenode_port(9000);

        assert_eq!(opts.field_delimiter, '|');
        assert!(!opts.comments);
        assert_eq!(opts.columns.unwrap(), vec!["b", "a"]);
        assert_eq!(opts.namenode_port, 9000);
    }
}
