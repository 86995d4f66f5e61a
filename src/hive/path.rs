//! Warehouse paths: building them, qualifying them, and repairing dropped ports.

use thiserror::Error;
use tracing::warn;

/// URI prefix of the distributed filesystem.
pub const HDFS_SCHEME: &str = "hdfs://";

/// Port the HDFS namenode listens on unless configured otherwise.
pub const DEFAULT_NAMENODE_PORT: u16 = 8020;

const SEPARATOR: char = '/';

/// Path resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid filesystem URI: {0}")]
    InvalidFilesystemUri(String),

    #[error("working directory must be absolute: {0}")]
    RelativeWorkingDir(String),

    #[error("path is empty")]
    EmptyPath,
}

/// Turns a warehouse-relative path into a fully-qualified location.
///
/// The live implementation is the filesystem client of the cluster the data
/// was exported to.
pub trait PathResolver {
    fn canonicalize(&self, raw: &str) -> Result<String, PathError>;
}

/// Qualifies paths against a default filesystem and working directory, the
/// way a Hadoop client qualifies a `Path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingResolver {
    scheme: String,
    authority: String,
    working_dir: String,
}

impl QualifyingResolver {
    /// Create a resolver for `default_fs` (e.g. `hdfs://namenode`) that
    /// resolves relative paths under `working_dir`.
    pub fn new(default_fs: &str, working_dir: &str) -> Result<Self, PathError> {
        let (scheme, rest) = default_fs
            .split_once("://")
            .filter(|(scheme, _)| is_scheme(scheme))
            .ok_or_else(|| PathError::InvalidFilesystemUri(default_fs.to_string()))?;

        let authority = rest.split(SEPARATOR).next().unwrap_or_default();

        if !working_dir.starts_with(SEPARATOR) {
            return Err(PathError::RelativeWorkingDir(working_dir.to_string()));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            working_dir: normalize(working_dir),
        })
    }
}

impl PathResolver for QualifyingResolver {
    fn canonicalize(&self, raw: &str) -> Result<String, PathError> {
        if raw.is_empty() {
            return Err(PathError::EmptyPath);
        }

        // Already qualified.
        if let Some((scheme, _)) = raw.split_once(':') {
            if is_scheme(scheme) {
                return Ok(raw.to_string());
            }
        }

        let absolute = if raw.starts_with(SEPARATOR) {
            normalize(raw)
        } else if self.working_dir == "/" {
            normalize(&format!("/{}", raw))
        } else {
            normalize(&format!("{}/{}", self.working_dir, raw))
        };

        Ok(format!("{}://{}{}", self.scheme, self.authority, absolute))
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Collapse repeated separators and drop a trailing one.
fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Location of a table's files relative to the filesystem root or working
/// directory: `<warehouse_dir>/<table>`, or just `<table>`.
pub fn warehouse_table_path(warehouse_dir: Option<&str>, table: &str) -> String {
    match warehouse_dir {
        None => table.to_string(),
        Some(dir) if dir.ends_with(SEPARATOR) => format!("{}{}", dir, table),
        Some(dir) => format!("{}{}{}", dir, SEPARATOR, table),
    }
}

/// Reinsert the namenode port into an HDFS URI whose authority lost it.
///
/// Some filesystem clients drop the default port when qualifying a path, and
/// Hive rejects the resulting URI. When the authority (everything between
/// `hdfs://` and the third `/` of the string) has no `:`, `:<port>` is
/// inserted right before that third `/`. URIs without a third `/` are
/// returned unchanged with a warning. The slash counting assumes a
/// `hdfs://host/path` shape and is not a general URI parser.
pub fn repair_namenode_port(path: &str, port: u16) -> String {
    if !path.starts_with(HDFS_SCHEME) {
        return path.to_string();
    }

    let insert_at = path.match_indices(SEPARATOR).nth(2).map(|(i, _)| i);
    let authority = &path[HDFS_SCHEME.len()..insert_at.unwrap_or(path.len())];
    if authority.contains(':') {
        return path.to_string();
    }

    match insert_at {
        Some(i) => format!("{}:{}{}", &path[..i], port, &path[i..]),
        None => {
            warn!(
                path = %path,
                "Fully-qualified HDFS path does not contain a port; this may cause a Hive error"
            );
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hive::logcapture::capture_logs;

    #[test]
    fn test_warehouse_table_path() {
        assert_eq!(warehouse_table_path(None, "foo"), "foo");
        assert_eq!(warehouse_table_path(Some("/warehouse"), "foo"), "/warehouse/foo");
        assert_eq!(warehouse_table_path(Some("/warehouse/"), "foo"), "/warehouse/foo");
        assert_eq!(warehouse_table_path(Some(""), "foo"), "/foo");
    }

    #[test]
    fn test_repair_inserts_port() {
        assert_eq!(
            repair_namenode_port("hdfs://namenode/warehouse/foo", DEFAULT_NAMENODE_PORT),
            "hdfs://namenode:8020/warehouse/foo"
        );
        assert_eq!(
            repair_namenode_port("hdfs://namenode/", 9000),
            "hdfs://namenode:9000/"
        );
    }

    #[test]
    fn test_repair_keeps_existing_port() {
        let path = "hdfs://namenode:8020/warehouse/foo";
        assert_eq!(repair_namenode_port(path, DEFAULT_NAMENODE_PORT), path);

        let path = "hdfs://namenode:9000";
        assert_eq!(repair_namenode_port(path, DEFAULT_NAMENODE_PORT), path);
    }

    #[test]
    fn test_repair_without_third_slash() {
        let path = "hdfs://namenode";
        let (repaired, logs) = capture_logs(|| repair_namenode_port(path, DEFAULT_NAMENODE_PORT));

        assert_eq!(repaired, path);
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("does not contain a port"), "logs: {}", logs);
        assert!(logs.contains("hdfs://namenode"), "logs: {}", logs);
    }

    #[test]
    fn test_repair_with_port_is_silent() {
        let (repaired, logs) =
            capture_logs(|| repair_namenode_port("hdfs://namenode:9000", DEFAULT_NAMENODE_PORT));

        assert_eq!(repaired, "hdfs://namenode:9000");
        assert!(!logs.contains("WARN"), "logs: {}", logs);
    }

    #[test]
    fn test_repair_empty_authority() {
        // No authority: the port lands right after the scheme separator.
        assert_eq!(
            repair_namenode_port("hdfs:///foo", DEFAULT_NAMENODE_PORT),
            "hdfs://:8020/foo"
        );
    }

    #[test]
    fn test_repair_only_looks_at_authority() {
        assert_eq!(
            repair_namenode_port("hdfs://namenode/data/t:1", DEFAULT_NAMENODE_PORT),
            "hdfs://namenode:8020/data/t:1"
        );
    }

    #[test]
    fn test_repair_ignores_other_schemes() {
        for path in ["file:///tmp/foo", "s3a://bucket/foo", "/warehouse/foo", "foo"] {
            assert_eq!(repair_namenode_port(path, DEFAULT_NAMENODE_PORT), path);
        }
    }

    #[test]
    fn test_resolver_qualifies_paths() {
        let resolver = QualifyingResolver::new("hdfs://namenode", "/user/etl").unwrap();

        assert_eq!(
            resolver.canonicalize("foo").unwrap(),
            "hdfs://namenode/user/etl/foo"
        );
        assert_eq!(
            resolver.canonicalize("/warehouse//foo/").unwrap(),
            "hdfs://namenode/warehouse/foo"
        );
        assert_eq!(
            resolver.canonicalize("hdfs://other:8020/x").unwrap(),
            "hdfs://other:8020/x"
        );
        assert_eq!(resolver.canonicalize(""), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_resolver_keeps_configured_port() {
        let resolver = QualifyingResolver::new("hdfs://nn:9000/", "/").unwrap();
        assert_eq!(resolver.canonicalize("foo").unwrap(), "hdfs://nn:9000/foo");

        let local = QualifyingResolver::new("file:///", "/tmp").unwrap();
        assert_eq!(local.canonicalize("foo").unwrap(), "file:///tmp/foo");
    }

    #[test]
    fn test_resolver_rejects_bad_config() {
        assert!(matches!(
            QualifyingResolver::new("namenode", "/"),
            Err(PathError::InvalidFilesystemUri(_))
        ));
        assert!(matches!(
            QualifyingResolver::new("hdfs://nn", "user/etl"),
            Err(PathError::RelativeWorkingDir(_))
        ));
    }
}
