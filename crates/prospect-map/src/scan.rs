//! Decoding-quality feedback for a freshly decoded table.

use prospect_model::{ColumnMapping, DecodedTable, ProspectField};

use crate::email::is_valid_email;
use crate::engine::infer_mapping;

/// Inference result plus row-level quality statistics.
///
/// The statistics are informational only — they drive the review UI, not
/// any gating. Rows with invalid emails are still present in the table; the
/// applier is what eventually drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableScan {
    /// Proposed field-to-header mapping.
    pub mapping: ColumnMapping,
    /// Total data rows in the table.
    pub total_rows: usize,
    /// Rows whose inferred email column passes the shape check. Zero when
    /// no email column was inferred.
    pub valid_email_rows: usize,
}

impl TableScan {
    /// Headers the inference could not bind to any field, in file order.
    #[must_use]
    pub fn unmapped_headers<'a>(&self, headers: &'a [String]) -> Vec<&'a str> {
        headers
            .iter()
            .map(String::as_str)
            .filter(|header| !self.mapping.is_bound(header))
            .collect()
    }
}

/// Infers a mapping for the table and derives validity statistics.
#[must_use]
pub fn scan_table(table: &DecodedTable) -> TableScan {
    let mapping = infer_mapping(table.headers());
    let valid_email_rows = mapping
        .header_for(ProspectField::Email)
        .and_then(|header| table.column_index(header))
        .map_or(0, |column| {
            (0..table.row_count())
                .filter(|&row| is_valid_email(table.cell(row, column)))
                .count()
        });
    let scan = TableScan {
        mapping,
        total_rows: table.row_count(),
        valid_email_rows,
    };
    tracing::info!(
        total_rows = scan.total_rows,
        valid_email_rows = scan.valid_email_rows,
        mapped_fields = scan.mapping.len(),
        "scanned table"
    );
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> DecodedTable {
        let mut table =
            DecodedTable::new(headers.iter().map(|h| (*h).to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|cell| (*cell).to_string()).collect());
        }
        table
    }

    #[test]
    fn counts_rows_with_shape_valid_emails() {
        let table = table(
            &["Email", "Name"],
            &[
                &["jane@acme.com", "Jane"],
                &["not-an-email", "Bob"],
                &["  joe@acme.com ", "Joe"],
            ],
        );
        let scan = scan_table(&table);
        assert_eq!(scan.total_rows, 3);
        assert_eq!(scan.valid_email_rows, 2);
    }

    #[test]
    fn zero_valid_rows_without_an_email_column() {
        let table = table(&["Name", "City"], &[&["Jane", "Boston"]]);
        let scan = scan_table(&table);
        assert_eq!(scan.valid_email_rows, 0);
        assert!(scan.mapping.header_for(ProspectField::Email).is_none());
    }

    #[test]
    fn unmapped_headers_keep_file_order() {
        let table = table(&["Mystery", "Email", "Blob"], &[&["x", "a@b.co", "y"]]);
        let scan = scan_table(&table);
        assert_eq!(scan.unmapped_headers(table.headers()), ["Mystery", "Blob"]);
    }
}
