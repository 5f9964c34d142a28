//! Uniform in-memory view of a decoded spreadsheet.

/// A decoded tabular file: an ordered header row plus row-major cell data.
///
/// Rows are stored as arrays aligned to `headers`, not as free-form
/// dictionaries, so column lookups go through an index instead of string
/// keys that silently miss on typos. Every cell is a string exactly as the
/// source produced it; the decoder performs no type coercion.
///
/// Invariants:
/// - every row has exactly `headers.len()` cells (ragged source rows are
///   padded with empty strings or truncated at decode time)
/// - row order equals source file order
/// - headers are never deduplicated or renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DecodedTable {
    /// Creates an empty table with the given header row.
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// The header row, in source order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the first header equal to `name`, if any.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in source order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell value at `(row, column)`.
    ///
    /// Returns an empty string when either index is out of range, matching
    /// the "missing cell resolves to empty" rule downstream code relies on.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}
