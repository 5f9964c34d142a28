//! Field inference for prospect imports.
//!
//! Given the header row of a decoded spreadsheet, proposes which column maps
//! to which canonical prospect field using a curated alias dictionary, with
//! a substring fallback for the one mandatory field (email). Also derives
//! per-table validity statistics for the review step.
//!
//! Inference is a pure function of the header list; the proposed
//! [`ColumnMapping`](prospect_model::ColumnMapping) is meant to be shown to
//! the operator and possibly edited before the applier consumes it.

mod aliases;
mod email;
mod engine;
mod scan;

pub use aliases::{COLUMN_ALIASES, normalize_header};
pub use email::is_valid_email;
pub use engine::infer_mapping;
pub use scan::{TableScan, scan_table};
