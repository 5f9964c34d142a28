//! Mapping application, batching, and bulk-import submission.
//!
//! The tail of the import pipeline: a confirmed
//! [`ColumnMapping`](prospect_model::ColumnMapping) is applied to decoded
//! rows, the surviving records are partitioned into bounded batches, and the
//! batches are submitted sequentially to the platform's bulk-import
//! endpoint, accumulating the result counters into one
//! [`ImportSummary`](prospect_model::ImportSummary).
//!
//! The network side sits behind the [`BulkImporter`] trait;
//! [`ManyreachClient`] is the production implementation and tests substitute
//! their own.

mod apply;
mod batch;
mod client;
mod error;
mod run;

pub use apply::apply_mapping;
pub use batch::{DEFAULT_BATCH_SIZE, partition};
pub use client::{BulkImporter, ImportOptions, ManyreachClient};
pub use error::{ImportError, Result};
pub use run::{ImportProgress, run_import};
