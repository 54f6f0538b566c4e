//! Counters for round-trips to the document store.
//!
//! One [`Metrics`] value is shared by every clone of a `StoreClient`; all
//! counters are relaxed atomics, so reads are snapshots, not a consistent cut.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failed_requests: AtomicU64,
    request_time_ms: AtomicU64,
    contacts_returned: AtomicU64,
    documents_written: AtomicU64,
    documents_deleted: AtomicU64,
}

/// Shared store traffic counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished request and how long it took.
    pub fn record_request(&self, elapsed: Duration, failed: bool) {
        let c = &self.counters;
        c.requests.fetch_add(1, Ordering::Relaxed);
        c.request_time_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
        if failed {
            c.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record contacts returned by a search.
    pub fn record_contacts_returned(&self, count: usize) {
        self.counters
            .contacts_returned
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record one indexed document (created or overwritten).
    pub fn record_document_written(&self) {
        self.counters
            .documents_written
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_document_deleted(&self) {
        self.counters
            .documents_deleted
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub fn failed_requests_total(&self) -> u64 {
        self.counters.failed_requests.load(Ordering::Relaxed)
    }

    /// Mean request latency in milliseconds, 0 before the first request.
    pub fn mean_request_ms(&self) -> f64 {
        let count = self.requests_total();
        if count == 0 {
            return 0.0;
        }
        self.counters.request_time_ms.load(Ordering::Relaxed) as f64 / count as f64
    }

    pub fn contacts_returned_total(&self) -> u64 {
        self.counters.contacts_returned.load(Ordering::Relaxed)
    }

    pub fn documents_written_total(&self) -> u64 {
        self.counters.documents_written.load(Ordering::Relaxed)
    }

    pub fn documents_deleted_total(&self) -> u64 {
        self.counters.documents_deleted.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total(),
            failed_requests_total: self.failed_requests_total(),
            request_time_total_ms: self.counters.request_time_ms.load(Ordering::Relaxed),
            mean_request_ms: self.mean_request_ms(),
            contacts_returned_total: self.contacts_returned_total(),
            documents_written_total: self.documents_written_total(),
            documents_deleted_total: self.documents_deleted_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub failed_requests_total: u64,
    pub request_time_total_ms: u64,
    pub mean_request_ms: f64,
    pub contacts_returned_total: u64,
    pub documents_written_total: u64,
    pub documents_deleted_total: u64,
}

/// Times a single store request from creation until it is finished.
pub struct RequestTimer {
    start: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    pub fn start(metrics: &Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics: metrics.clone(),
        }
    }

    /// Record the request as succeeded or failed.
    pub fn finish(self, failed: bool) {
        self.metrics.record_request(self.start.elapsed(), failed);
    }
}
