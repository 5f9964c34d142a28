//! Error types for tabular decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while decoding an uploaded tabular file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File extension is not a recognized tabular format.
    #[error("unsupported file type '.{extension}': expected CSV, TSV, TXT, XLSX or XLS")]
    UnsupportedFormat { extension: String },

    /// Decoded table has no data rows.
    #[error("file has no data rows: {path}")]
    EmptyInput { path: PathBuf },

    /// Underlying decoder could not tokenize the file content.
    #[error("failed to parse {path}: {message}")]
    ParseFailure { path: PathBuf, message: String },

    /// Workbook has no readable worksheet.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// Failed to read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_names_the_extension() {
        let err = IngestError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported file type '.pdf': expected CSV, TSV, TXT, XLSX or XLS"
        );
    }
}
