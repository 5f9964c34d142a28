//! Tabular decoding for prospect imports.
//!
//! Reads an uploaded file of unknown tabular format and produces a uniform
//! in-memory table: an ordered header row plus string-valued data rows.
//! Format is dispatched purely on the filename extension:
//!
//! - `.csv`, `.tsv`, `.txt` take the delimited-text path
//! - `.xlsx`, `.xls` take the workbook path (first sheet only)
//! - anything else fails with [`IngestError::UnsupportedFormat`]
//!
//! The decoder is a syntactic parse only: headers are never deduplicated or
//! renamed, and cells are never coerced to numeric types.
//!
//! # Example
//!
//! ```ignore
//! use prospect_ingest::decode_file;
//!
//! let table = decode_file(Path::new("leads.csv"))?;
//! println!("{} rows, {} columns", table.row_count(), table.headers().len());
//! ```

mod delimited;
mod error;
mod format;
mod workbook;

pub use error::{IngestError, Result};
pub use format::TableFormat;

use std::path::Path;

use prospect_model::DecodedTable;

/// Decodes a tabular file into a [`DecodedTable`].
///
/// # Errors
///
/// - [`IngestError::UnsupportedFormat`] for an unrecognized extension
/// - [`IngestError::EmptyInput`] when the table has zero data rows
/// - [`IngestError::ParseFailure`] when the content cannot be tokenized
pub fn decode_file(path: &Path) -> Result<DecodedTable> {
    let format = TableFormat::from_path(path)?;
    match format {
        TableFormat::Csv | TableFormat::Tsv | TableFormat::Txt => {
            delimited::decode_delimited(path, format)
        }
        TableFormat::Workbook => workbook::decode_workbook(path),
    }
}
