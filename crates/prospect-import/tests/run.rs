//! Import runner behavior against a scripted in-memory collaborator.

use std::sync::Mutex;

use async_trait::async_trait;
use prospect_import::{
    BulkImporter, ImportError, ImportOptions, ImportProgress, Result, run_import,
};
use prospect_model::{ImportSummary, MappedProspect};

/// Deterministic importer: answers each batch from a script, records what it
/// was asked to submit. No network.
struct ScriptedImporter {
    /// One response per expected batch; `None` scripts a failure.
    script: Vec<Option<ImportSummary>>,
    calls: Mutex<Vec<usize>>,
}

impl ScriptedImporter {
    fn new(script: Vec<Option<ImportSummary>>) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn batch_sizes(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BulkImporter for ScriptedImporter {
    async fn bulk_import(
        &self,
        prospects: &[MappedProspect],
        _options: &ImportOptions,
    ) -> Result<ImportSummary> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(prospects.len());
        match self.script.get(index) {
            Some(Some(summary)) => Ok(*summary),
            _ => Err(ImportError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

fn prospects(count: usize) -> Vec<MappedProspect> {
    (0..count)
        .map(|index| MappedProspect::new(format!("lead{index}@acme.com")))
        .collect()
}

fn inserted(count: u64) -> ImportSummary {
    ImportSummary {
        total_processed: count,
        prospects_inserted: count,
        ..ImportSummary::default()
    }
}

#[tokio::test]
async fn accumulates_counters_across_batches() {
    let importer = ScriptedImporter::new(vec![
        Some(inserted(10)),
        Some(inserted(10)),
        Some(inserted(10)),
    ]);
    let input = prospects(250);
    let summary = run_import(&importer, &input, &ImportOptions::for_list(1), 100, |_| {})
        .await
        .unwrap();
    assert_eq!(summary.prospects_inserted, 30);
    assert_eq!(summary.total_processed, 30);
    assert_eq!(importer.batch_sizes(), vec![100, 100, 50]);
}

#[tokio::test]
async fn reports_progress_after_each_batch() {
    let importer = ScriptedImporter::new(vec![
        Some(inserted(1)),
        Some(inserted(1)),
        Some(inserted(1)),
    ]);
    let input = prospects(3);
    let mut events: Vec<ImportProgress> = Vec::new();
    run_import(&importer, &input, &ImportOptions::for_list(1), 1, |event| {
        events.push(event.clone());
    })
    .await
    .unwrap();

    let percents: Vec<u8> = events.iter().map(|event| event.percent).collect();
    assert_eq!(percents, vec![34, 67, 100]);
    assert_eq!(events[1].batches_completed, 2);
    assert_eq!(events[1].total_batches, 3);
    // Each snapshot carries the counters accumulated so far.
    assert_eq!(events[0].summary.prospects_inserted, 1);
    assert_eq!(events[2].summary.prospects_inserted, 3);
}

#[tokio::test]
async fn failing_batch_aborts_before_later_batches() {
    let importer = ScriptedImporter::new(vec![Some(inserted(1)), None, Some(inserted(1))]);
    let input = prospects(3);
    let mut last_percent = 0u8;
    let err = run_import(&importer, &input, &ImportOptions::for_list(1), 1, |event| {
        last_percent = event.percent;
    })
    .await
    .unwrap_err();

    match err {
        ImportError::BatchSubmission {
            batch,
            total_batches,
            source,
        } => {
            assert_eq!(batch, 2);
            assert_eq!(total_batches, 3);
            assert!(matches!(*source, ImportError::Api { status: 500, .. }));
        }
        other => panic!("expected BatchSubmission, got {other:?}"),
    }
    // Batch 3 was never attempted; the last progress the caller saw is
    // from before the failure.
    assert_eq!(importer.batch_sizes(), vec![1, 1]);
    assert_eq!(last_percent, 34);
}

#[tokio::test]
async fn empty_input_succeeds_without_calls_or_events() {
    let importer = ScriptedImporter::new(vec![]);
    let mut events = 0usize;
    let summary = run_import(&importer, &[], &ImportOptions::for_list(1), 100, |_| {
        events += 1;
    })
    .await
    .unwrap();
    assert_eq!(summary, ImportSummary::default());
    assert!(importer.batch_sizes().is_empty());
    assert_eq!(events, 0);
}
