#![allow(missing_docs)]

use std::time::Duration;

use panda_export::{
    ExportError, ExportOptions, MemorySink, Registration, Sink, SinkError, ensure_dataset, export,
    export_with_progress, schema_id, voter_descriptor,
};
use panda_model::{Batch, CanonicalRecord, DatasetDescriptor, ExportSummary, Probe, Schema};

fn schema() -> Schema {
    Schema::new("people", ["lname", "fname", "id"], "id").expect("schema")
}

fn records(count: usize) -> Vec<CanonicalRecord> {
    (0..count)
        .map(|i| CanonicalRecord::new(vec![format!("Name{i:05}"), "Al".to_string(), i.to_string()]))
        .collect()
}

/// Rejects the batch with the given index, delegating the rest.
struct FailingSink {
    inner: MemorySink,
    fail_at: usize,
    calls: usize,
}

impl Sink for FailingSink {
    fn probe(&mut self, slug: &str) -> Result<Probe, SinkError> {
        self.inner.probe(slug)
    }

    fn create(&mut self, descriptor: &DatasetDescriptor) -> Result<(), SinkError> {
        self.inner.create(descriptor)
    }

    fn upsert_batch(&mut self, slug: &str, batch: &Batch) -> Result<(), SinkError> {
        self.calls += 1;
        if batch.index == self.fail_at {
            return Err(SinkError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        }
        self.inner.upsert_batch(slug, batch)
    }
}

/// Probe and create always fail.
struct DownSink;

impl Sink for DownSink {
    fn probe(&mut self, _slug: &str) -> Result<Probe, SinkError> {
        Err(SinkError::Status {
            status: 502,
            reason: "Bad Gateway".to_string(),
        })
    }

    fn create(&mut self, _descriptor: &DatasetDescriptor) -> Result<(), SinkError> {
        unreachable!("create after failed probe")
    }

    fn upsert_batch(&mut self, _slug: &str, _batch: &Batch) -> Result<(), SinkError> {
        unreachable!("upsert after failed registration")
    }
}

#[test]
fn exports_in_bounded_batches() {
    let schema = schema();
    let mut sink = MemorySink::new();
    let mut summary = ExportSummary::new("people");
    let mut seen = Vec::new();
    export_with_progress(
        &mut sink,
        "people",
        &records(2500),
        schema_id(&schema),
        &ExportOptions::default(),
        &mut summary,
        |progress| seen.push(progress.processed),
    )
    .expect("export");

    assert_eq!(summary.processed, 2500);
    assert_eq!(summary.batches, 3);
    assert_eq!(seen, vec![1000, 2000, 2500]);
    assert_eq!(sink.upsert_calls(), 3);
    assert_eq!(sink.row_count("people"), 2500);
}

#[test]
fn rerun_is_idempotent() {
    let schema = schema();
    let records = records(10);
    let mut sink = MemorySink::new();
    for _ in 0..2 {
        let mut summary = ExportSummary::new("people");
        export(
            &mut sink,
            "people",
            &records,
            schema_id(&schema),
            &ExportOptions { batch_size: 4 },
            &mut summary,
        )
        .expect("export");
        assert_eq!(summary.processed, 10);
    }
    assert_eq!(sink.row_count("people"), 10);
    let stored = sink.rows("people").expect("rows");
    assert_eq!(stored.get("7").map(Vec::as_slice), Some(records[7].fields()));
}

#[test]
fn empty_export_sends_nothing() {
    let schema = schema();
    let mut sink = MemorySink::new();
    let mut summary = ExportSummary::new("people");
    export(
        &mut sink,
        "people",
        &[],
        schema_id(&schema),
        &ExportOptions::default(),
        &mut summary,
    )
    .expect("export");
    assert_eq!(summary.processed, 0);
    assert_eq!(summary.batches, 0);
    assert!(summary.elapsed >= Duration::ZERO);
    assert_eq!(sink.upsert_calls(), 0);
    assert_eq!(sink.probe("people").expect("probe"), Probe::NotFound);
}

#[test]
fn failure_mid_run_keeps_committed_batches() {
    let schema = schema();
    let mut sink = FailingSink {
        inner: MemorySink::new(),
        fail_at: 2,
        calls: 0,
    };
    let mut summary = ExportSummary::new("people");
    let err = export(
        &mut sink,
        "people",
        &records(2500),
        schema_id(&schema),
        &ExportOptions::default(),
        &mut summary,
    )
    .unwrap_err();

    match err {
        ExportError::Batch {
            index,
            records,
            committed,
            ..
        } => {
            assert_eq!(index, 2);
            assert_eq!(records, 500);
            assert_eq!(committed, 2000);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(summary.processed, 2000);
    assert_eq!(summary.batches, 2);
    assert_eq!(sink.calls, 3);
    assert_eq!(sink.inner.row_count("people"), 2000);
}

#[test]
fn zero_batch_size_makes_no_calls() {
    let schema = schema();
    let mut sink = MemorySink::new();
    let mut summary = ExportSummary::new("people");
    let err = export(
        &mut sink,
        "people",
        &records(3),
        schema_id(&schema),
        &ExportOptions { batch_size: 0 },
        &mut summary,
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::InvalidBatchSize));
    assert_eq!(sink.upsert_calls(), 0);
}

#[test]
fn registration_creates_then_finds_dataset() {
    let columns = schema().columns().to_vec();
    let descriptor = voter_descriptor("Polk", 2025, "2025-06-30", &columns);
    let mut sink = MemorySink::new();

    assert_eq!(
        ensure_dataset(&mut sink, &descriptor).expect("register"),
        Registration::Created
    );
    assert_eq!(sink.descriptor(&descriptor.slug), Some(&descriptor));

    let mut summary = ExportSummary::new(&descriptor.slug);
    export(
        &mut sink,
        &descriptor.slug,
        &records(5),
        schema_id(&schema()),
        &ExportOptions::default(),
        &mut summary,
    )
    .expect("export");

    assert_eq!(
        ensure_dataset(&mut sink, &descriptor).expect("register"),
        Registration::Existing { row_count: 5 }
    );
}

#[test]
fn registration_failure_halts() {
    let descriptor = voter_descriptor("Polk", 2025, "2025-06-30", &[]);
    let err = ensure_dataset(&mut DownSink, &descriptor).unwrap_err();
    assert!(matches!(err, ExportError::Registration { .. }));
    assert!(err.to_string().contains("polk-voter-registration-2025"), "{err}");
}
