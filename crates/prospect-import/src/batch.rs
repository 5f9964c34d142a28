//! Partitioning mapped prospects into bounded submission batches.

use prospect_model::MappedProspect;

/// Upstream bulk-import request cap.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Splits prospects into contiguous batches of at most `batch_size`.
///
/// Global order is preserved and every element appears exactly once, so
/// concatenating the batches reproduces the input. The last batch may be
/// shorter. A `batch_size` of zero is treated as one.
#[must_use]
pub fn partition(prospects: &[MappedProspect], batch_size: usize) -> Vec<&[MappedProspect]> {
    if prospects.is_empty() {
        return Vec::new();
    }
    prospects.chunks(batch_size.max(1)).collect()
}
