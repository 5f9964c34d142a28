//! File format dispatch by filename extension.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Recognized tabular file formats.
///
/// Dispatch is purely on the lowercased filename extension; content is never
/// sniffed to pick a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated text (`.csv`).
    Csv,
    /// Tab-separated text (`.tsv`).
    Tsv,
    /// Plain text with an unknown delimiter (`.txt`); the header line
    /// decides between tab and comma.
    Txt,
    /// Spreadsheet workbook (`.xlsx` or `.xls`).
    Workbook,
}

impl TableFormat {
    /// Determines the format from a filename extension.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::UnsupportedFormat`] for unrecognized or
    /// missing extensions, naming the offending extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "txt" => Ok(Self::Txt),
            "xlsx" | "xls" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_delimited_extensions() {
        assert_eq!(
            TableFormat::from_path(Path::new("leads.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("leads.tsv")).unwrap(),
            TableFormat::Tsv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("leads.txt")).unwrap(),
            TableFormat::Txt
        );
    }

    #[test]
    fn recognizes_workbook_extensions_case_insensitively() {
        assert_eq!(
            TableFormat::from_path(Path::new("Leads.XLSX")).unwrap(),
            TableFormat::Workbook
        );
        assert_eq!(
            TableFormat::from_path(Path::new("leads.xls")).unwrap(),
            TableFormat::Workbook
        );
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = TableFormat::from_path(Path::new("leads.pdf")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { extension } if extension == "pdf"
        ));
    }

    #[test]
    fn rejects_missing_extension() {
        let err = TableFormat::from_path(Path::new("leads")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedFormat { extension } if extension.is_empty()
        ));
    }
}
