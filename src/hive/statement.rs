//! Renders the Hive `CREATE TABLE` and `LOAD DATA` statements.

use tracing::debug;

use super::clock::Clock;
use super::columns::MappedColumn;
use super::error::TableDefResult;
use super::octal::encode_delimiter;
use super::options::ImportOptions;

/// Timestamp layout of the import comment.
pub const COMMENT_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Build the `CREATE TABLE` statement for `table`.
///
/// Identifiers are embedded as given. When comments are enabled the current
/// time of `clock` is written into the table comment.
pub fn build_create_table(
    table: &str,
    columns: &[MappedColumn],
    options: &ImportOptions,
    clock: &dyn Clock,
) -> TableDefResult<String> {
    let field_delim = encode_delimiter(options.field_delimiter as u32)?;
    let record_delim = encode_delimiter(options.record_delimiter as u32)?;

    let column_list = columns
        .iter()
        .map(|c| format!("{} {}", c.name, c.hive_type))
        .collect::<Vec<_>>()
        .join(", ");

    let mut stmt = format!("CREATE TABLE {} ( {}) ", table, column_list);

    if options.comments {
        let stamp = clock.now().format(COMMENT_DATE_FORMAT);
        stmt.push_str(&format!("COMMENT 'Imported by sqoop on {}' ", stamp));
    }

    stmt.push_str(&format!(
        "ROW FORMAT DELIMITED FIELDS TERMINATED BY '{}' LINES TERMINATED BY '{}' STORED AS TEXTFILE",
        field_delim, record_delim
    ));

    debug!("Create statement: {}", stmt);
    Ok(stmt)
}

/// Build the `LOAD DATA` statement moving `path` into `table`.
///
/// The path is only wrapped in single quotes; a quote inside it produces
/// an invalid statement.
pub fn build_load_data(table: &str, path: &str) -> String {
    let stmt = format!("LOAD DATA INPATH '{}' INTO TABLE {}", path, table);
    debug!("Load statement: {}", stmt);
    stmt
}
