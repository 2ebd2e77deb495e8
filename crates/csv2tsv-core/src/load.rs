use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::quoting::{check_quoting, SyntaxError};
use crate::text_norm::normalize_newlines;
use crate::Row;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Read a whole CSV file into rows. Any line ending convention is accepted
/// and rows may have different field counts.
pub fn load_csv(path: &Path) -> Result<Vec<Row>> {
    let raw = std::fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    let rows = parse_csv(&raw).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = raw.len(), rows = rows.len(), "parsed csv");
    Ok(rows)
}

/// Parse raw CSV bytes. A leading UTF-8 BOM is dropped, line endings are
/// normalized, and blank lines produce no row. Field bytes are kept as-is,
/// whatever their encoding.
pub fn parse_csv(raw: &[u8]) -> std::result::Result<Vec<Row>, SyntaxError> {
    let raw = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    let bytes = normalize_newlines(raw);
    check_quoting(&bytes)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for rec in rdr.byte_records() {
        let rec = rec.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            SyntaxError::record(line, e.to_string())
        })?;
        rows.push(rec.iter().map(<[u8]>::to_vec).collect());
    }
    Ok(rows)
}
