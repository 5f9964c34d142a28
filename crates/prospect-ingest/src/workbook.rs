//! Spreadsheet workbook decoding via `calamine`.
//!
//! Only the first sheet is read. All cell values are coerced to their
//! display string (not left as native numeric/date types) so the result is
//! uniform with the delimited-text branch; empty cells become empty strings.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use prospect_model::DecodedTable;

use crate::error::{IngestError, Result};

/// Decodes the first sheet of an `.xlsx`/`.xls` workbook into a
/// [`DecodedTable`]. The first row of the sheet is the header row.
pub fn decode_workbook(path: &Path) -> Result<DecodedTable> {
    let mut workbook = open_workbook_auto(path).map_err(|err| IngestError::ParseFailure {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|err| IngestError::ParseFailure {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| IngestError::EmptyInput {
            path: path.to_path_buf(),
        })?
        .iter()
        .map(cell_to_string)
        .collect::<Vec<_>>();

    let mut table = DecodedTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
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
        "decoded workbook"
    );
    Ok(table)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}
