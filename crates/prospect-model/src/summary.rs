//! Accumulated counters from bulk-import responses.

use serde::{Deserialize, Serialize};

/// Result counters for an import run.
///
/// This is both the upstream API's per-batch response body and the running
/// total the import runner accumulates: after each batch the response is
/// [`absorbed`](Self::absorb) into the run summary. Each counter is the
/// exact field-wise sum of all batch responses received so far, so the
/// summary is monotonically non-decreasing within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSummary {
    pub total_processed: u64,
    pub prospects_inserted: u64,
    pub prospects_updated: u64,
    pub duplicates_in_batch: u64,
    pub subscriptions_added: u64,
    pub campaign_added: u64,
}

impl ImportSummary {
    /// Adds another summary's counters into this one, field-wise.
    pub fn absorb(&mut self, other: &Self) {
        self.total_processed += other.total_processed;
        self.prospects_inserted += other.prospects_inserted;
        self.prospects_updated += other.prospects_updated;
        self.duplicates_in_batch += other.duplicates_in_batch;
        self.subscriptions_added += other.subscriptions_added;
        self.campaign_added += other.campaign_added;
    }
}
