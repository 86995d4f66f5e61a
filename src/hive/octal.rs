//! Octal escapes for Hive delimiter characters.

use super::error::{TableDefError, TableDefResult};

/// Largest character code Hive accepts in a `'\ooo'` delimiter escape.
pub const MAX_DELIMITER: u32 = 0o177;

/// Render a delimiter character as a Hive octal escape.
///
/// Hive reads delimiters in the form `\ooo`, a three-digit octal number
/// between 000 and 177. The digits may not be truncated (`\12` is wrong,
/// `\012` is right) and may not carry an extra leading zero (`\0177`).
pub fn encode_delimiter(code: u32) -> TableDefResult<String> {
    if code > MAX_DELIMITER {
        return Err(TableDefError::DelimiterOutOfRange(code));
    }

    Ok(format!("\\{:03o}", code))
}
