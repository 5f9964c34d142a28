//! Sequential import runner.

use prospect_model::{ImportSummary, MappedProspect};

use crate::batch::partition;
use crate::client::{BulkImporter, ImportOptions};
use crate::error::{ImportError, Result};

/// Progress snapshot emitted after each accepted batch.
///
/// The runner never renders progress itself; the caller decides what to do
/// with these events (progress bar, log line, nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportProgress {
    /// Batches accepted so far.
    pub batches_completed: usize,
    /// Total batches in this run.
    pub total_batches: usize,
    /// Whole-number completion percentage, rounded up so an accepted batch
    /// never reports 0%. 1 of 3 reports 34, 2 of 3 reports 67.
    pub percent: u8,
    /// Counters accumulated up to and including this batch.
    pub summary: ImportSummary,
}

/// Submits prospects to the bulk-import collaborator in order, one batch at
/// a time, accumulating the six result counters.
///
/// Submission is strictly sequential: the accumulated summary always
/// reflects a prefix of the batch sequence, and there are no concurrent
/// writes against the upstream list/campaign state. The cost is total
/// latency linear in batch count.
///
/// Fails fast: the first failing batch aborts the run with
/// [`ImportError::BatchSubmission`] and the partial summary is discarded —
/// the caller keeps whatever progress events it already received. There is
/// no retry and no rollback of batches the upstream already accepted.
///
/// Zero prospects is a successful no-op: zero batches, zero counters, no
/// progress events.
pub async fn run_import<I, F>(
    importer: &I,
    prospects: &[MappedProspect],
    options: &ImportOptions,
    batch_size: usize,
    mut on_progress: F,
) -> Result<ImportSummary>
where
    I: BulkImporter + ?Sized,
    F: FnMut(&ImportProgress),
{
    let batches = partition(prospects, batch_size);
    let total_batches = batches.len();
    tracing::info!(
        prospects = prospects.len(),
        total_batches,
        list_id = options.list_id,
        "starting import run"
    );

    let mut summary = ImportSummary::default();
    for (index, batch) in batches.iter().enumerate() {
        let counters = importer.bulk_import(batch, options).await.map_err(|source| {
            ImportError::BatchSubmission {
                batch: index + 1,
                total_batches,
                source: Box::new(source),
            }
        })?;
        summary.absorb(&counters);

        let batches_completed = index + 1;
        let progress = ImportProgress {
            batches_completed,
            total_batches,
            percent: completion_percent(batches_completed, total_batches),
            summary,
        };
        tracing::debug!(
            batch = batches_completed,
            total_batches,
            percent = progress.percent,
            "batch complete"
        );
        on_progress(&progress);
    }

    tracing::info!(
        inserted = summary.prospects_inserted,
        updated = summary.prospects_updated,
        duplicates = summary.duplicates_in_batch,
        "import run complete"
    );
    Ok(summary)
}

fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed * 100).div_ceil(total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_up() {
        assert_eq!(completion_percent(1, 3), 34);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(3, 3), 100);
        assert_eq!(completion_percent(1, 2), 50);
    }
}
