//! Performance benchmarks for contact preparation.
//!
//! These benchmarks measure the per-contact work done before a call is placed:
//! - Phone normalization across the accepted input shapes
//! - Mapping sheet rows into contact records at different sheet sizes
//! - A full campaign run over in-memory collaborators with no pacing

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use outbound_dialer::error::VendorResult;
use outbound_dialer::models::{records_from_rows, CallHandle, CallRequest, ContactRecord};
use outbound_dialer::repositories::{CallPlacement, ContactSource};
use outbound_dialer::{CampaignRunner, PhoneNormalizer};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

fn sheet_rows(count: usize) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Name".to_string(),
        "Phone Number".to_string(),
        "Company Name".to_string(),
    ]];
    rows.extend((0..count).map(|i| {
        vec![
            format!("Contact {}", i),
            format!("(555) {:03}-{:04}", i % 1000, i % 10000),
            "Acme".to_string(),
        ]
    }));
    rows
}

struct InMemorySource(Vec<ContactRecord>);

#[async_trait]
impl ContactSource for InMemorySource {
    async fn fetch_contacts(&self) -> Vec<ContactRecord> {
        self.0.clone()
    }
}

struct AcceptAll;

#[async_trait]
impl CallPlacement for AcceptAll {
    async fn place_call(&self, _request: &CallRequest) -> VendorResult<CallHandle> {
        Ok(CallHandle {
            id: "call".to_string(),
            status: None,
        })
    }
}

/// Benchmark normalization of typical raw phone inputs.
fn bench_normalize(c: &mut Criterion) {
    let normalizer = PhoneNormalizer::default();
    let inputs = [
        ("national_formatted", "(555) 123-4567"),
        ("national_digits", "5551234567"),
        ("international", "+44 20 7946 0958"),
        ("invalid", "12-34"),
    ];

    let mut group = c.benchmark_group("normalize_phone");
    for (name, raw) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), raw, |b, raw| {
            b.iter(|| normalizer.normalize(black_box(raw)))
        });
    }
    group.finish();
}

/// Benchmark row-to-record mapping with different sheet sizes.
fn bench_records_from_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("records_from_rows");
    for size in [10, 100, 1000] {
        let rows = sheet_rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| records_from_rows(black_box(rows)))
        });
    }
    group.finish();
}

/// Benchmark a complete campaign run without pacing.
fn bench_campaign_run(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let runner = CampaignRunner::new(
        Arc::new(InMemorySource(records_from_rows(&sheet_rows(100)))),
        Arc::new(AcceptAll),
        PhoneNormalizer::default(),
        Duration::ZERO,
    );

    c.bench_function("campaign_run_100", |b| {
        b.to_async(&rt).iter(|| async { runner.run().await });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_normalize, bench_records_from_rows, bench_campaign_run
}

criterion_main!(benches);
