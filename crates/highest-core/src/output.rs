use std::io::Write;

use crate::error::Result;
use crate::record::Record;

/// Render ranked records as a single-line JSON array.
pub fn render(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Write the rendered array followed by a newline.
pub fn write_ranked<W: Write>(out: &mut W, records: &[Record]) -> Result<()> {
    let json = render(records)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
