//! Canonical prospect data model.
//!
//! This crate defines the shared vocabulary of the import pipeline:
//!
//! - [`ProspectField`]: the closed set of 21 canonical prospect attributes
//! - [`DecodedTable`]: a uniform in-memory view of an uploaded spreadsheet
//! - [`ColumnMapping`]: the correspondence between canonical fields and
//!   source column headers
//! - [`MappedProspect`]: one canonical prospect record ready for submission
//! - [`ImportSummary`]: accumulated counters from bulk-import responses

pub mod field;
pub mod mapping;
pub mod prospect;
pub mod summary;
pub mod table;

pub use field::{FieldParseError, ProspectField};
pub use mapping::ColumnMapping;
pub use prospect::MappedProspect;
pub use summary::ImportSummary;
pub use table::DecodedTable;
