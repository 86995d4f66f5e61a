//! Import descriptors: everything needed to generate the statements for one
//! table, read from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{HiveTypes, SchemaError, TableSchema};
use crate::hive::{ImportOptions, PathError, QualifyingResolver, TableDefError, TableDefWriter};

/// Result type for descriptor loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Descriptor errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] PathError),

    #[error("{0}")]
    Generate(#[from] TableDefError),
}

/// Which statements to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// `CREATE TABLE` then `LOAD DATA`.
    #[default]
    Script,
    CreateOnly,
    LoadOnly,
}

/// Filesystem the table was exported to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesystemConfig {
    /// Default filesystem URI, e.g. `hdfs://namenode:8020`.
    pub default_fs: String,
    /// Directory that relative table paths are resolved against.
    pub working_dir: String,
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            default_fs: "hdfs://localhost".to_string(),
            working_dir: "/".to_string(),
        }
    }
}

impl FilesystemConfig {
    /// Resolver qualifying paths against this filesystem.
    pub fn resolver(&self) -> Result<QualifyingResolver, PathError> {
        QualifyingResolver::new(&self.default_fs, &self.working_dir)
    }
}

/// One table import, as described on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDescriptor {
    /// Source schema; its name is also the Hive table name.
    pub schema: TableSchema,
    #[serde(default)]
    pub options: ImportOptions,
    #[serde(default)]
    pub filesystem: FilesystemConfig,
}

impl ImportDescriptor {
    /// Read and validate a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a descriptor.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let descriptor: Self = serde_json::from_str(text)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check the schema and filesystem settings.
    pub fn validate(&self) -> ConfigResult<()> {
        self.schema.validate()?;
        self.filesystem.resolver()?;
        Ok(())
    }

    /// Hive table name.
    pub fn table(&self) -> &str {
        &self.schema.name
    }

    /// Render the requested statements, each terminated by `;`.
    pub fn render(&self, output: Output) -> ConfigResult<String> {
        let resolver = self.filesystem.resolver()?;
        let writer = TableDefWriter::new(
            &self.options,
            &self.schema,
            &HiveTypes,
            &resolver,
            self.table(),
        );

        let text = match output {
            Output::Script => writer.script()?,
            Output::CreateOnly => format!("{};\n", writer.create_table_stmt()?),
            Output::LoadOnly => format!("{};\n", writer.load_data_stmt()?),
        };
        Ok(text)
    }
}

/// Load the descriptor at `path` and render its statements.
pub fn generate(path: impl AsRef<Path>, output: Output, comments: bool) -> ConfigResult<String> {
    let mut descriptor = ImportDescriptor::load(path)?;
    if !comments {
        descriptor.options.comments = false;
    }
    descriptor.render(output)
}
