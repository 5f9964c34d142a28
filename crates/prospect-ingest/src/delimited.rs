//! Delimited-text decoding via the `csv` crate.
//!
//! The first line is the header row; subsequent lines are data rows. Empty
//! lines are skipped. No type coercion is performed: every cell is retained
//! as the raw source string, so phone numbers, zip codes and IDs that look
//! numeric keep their exact spelling (`"02134"` stays `"02134"`).

use std::path::Path;

use prospect_model::DecodedTable;

use crate::error::{IngestError, Result};
use crate::format::TableFormat;

/// Decodes a delimited text file into a [`DecodedTable`].
pub fn decode_delimited(path: &Path, format: TableFormat) -> Result<DecodedTable> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    // Strip a UTF-8 BOM so the first header compares cleanly.
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let delimiter = match format {
        TableFormat::Csv => b',',
        TableFormat::Tsv => b'\t',
        TableFormat::Txt => sniff_delimiter(content),
        TableFormat::Workbook => unreachable!("workbook files use the calamine branch"),
    };
    decode_reader(content.as_bytes(), delimiter, path)
}

/// Picks the delimiter for a `.txt` file from its header line: tab wins when
/// present, otherwise comma.
fn sniff_delimiter(content: &str) -> u8 {
    let header_line = content.lines().next().unwrap_or_default();
    if header_line.contains('\t') { b'\t' } else { b',' }
}

fn decode_reader(input: &[u8], delimiter: u8, path: &Path) -> Result<DecodedTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|err| IngestError::ParseFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    let mut table = DecodedTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::ParseFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        table.push_row(record.iter().map(str::to_string).collect());
    }

    if table.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.row_count(),
        "decoded delimited file"
    );
    Ok(table)
}
