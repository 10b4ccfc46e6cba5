//! Line parsing and validation.
//!
//! Each non-blank line has the shape `<score>:<json payload>`. The split is
//! made at the first colon, so colons inside the payload are fine.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::number::{IntPrefix, parse_int_prefix};
use crate::record::{Record, extract_id};

/// Parse one input line. `line` is the 1-based line number used in errors.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Record>> {
    if is_blank(text) {
        return Ok(None);
    }

    let (score_field, payload_field) = text
        .split_once(':')
        .ok_or(Error::MissingSeparator { line })?;

    let score = parse_score(score_field, line)?;

    let payload: Value = serde_json::from_str(payload_field)
        .map_err(|source| Error::MalformedPayload { line, source })?;
    let id = extract_id(&payload).ok_or(Error::MissingId { line })?;

    Ok(Some(Record::new(score, id.clone())))
}

/// Whitespace-only lines are blank. A stray byte order mark counts as whitespace.
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

fn parse_score(field: &str, line: usize) -> Result<u64> {
    match parse_int_prefix(field) {
        Some(IntPrefix::NonNegative(score)) => Ok(score),
        Some(IntPrefix::Negative) => Err(Error::NegativeScore {
            line,
            field: field.to_string(),
        }),
        Some(IntPrefix::Overflow) => Err(Error::ScoreOutOfRange {
            line,
            field: field.to_string(),
        }),
        None => Err(Error::InvalidScore {
            line,
            field: field.to_string(),
        }),
    }
}
