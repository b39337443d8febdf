//! Store observability: insert and lookup counters.
//!
//! Each [`Registry`](crate::Registry) owns its own `StoreMetrics` rather than
//! sharing a process-wide instance, so independent registries (and their
//! tests) never observe each other's counts. Counters use relaxed atomics so
//! recording works through shared references held by language views.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one registry's insert and lookup activity.
#[derive(Debug, Default)]
pub struct StoreMetrics {
    /// Successful `add` calls (all languages inserted).
    inserts: AtomicUsize,

    /// Rejected `add` calls (validation or structural conflict).
    insert_failures: AtomicUsize,

    /// Lookups that produced a string (literal or formatter success).
    lookup_hits: AtomicUsize,

    /// Lookups that failed (path unresolved or formatter error).
    lookup_misses: AtomicUsize,
}

impl StoreMetrics {
    /// Create a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful insertion.
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected insertion.
    pub fn record_insert_failure(&self) {
        self.insert_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that resolved to a string.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that failed.
    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Current successful-insert count.
    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Current rejected-insert count.
    pub fn insert_failures(&self) -> usize {
        self.insert_failures.load(Ordering::Relaxed)
    }

    /// Current lookup-hit count.
    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Current lookup-miss count.
    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Generate a point-in-time report with derived rates.
    pub fn report(&self) -> MetricsReport {
        let inserts = self.inserts();
        let insert_failures = self.insert_failures();
        let total_inserts = inserts + insert_failures;
        let insert_success_rate = if total_inserts > 0 {
            (inserts as f64 / total_inserts as f64) * 100.0
        } else {
            0.0
        };

        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total_lookups = hits + misses;
        let lookup_hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            inserts,
            insert_failures,
            insert_success_rate,
            lookup_hits: hits,
            lookup_misses: misses,
            lookup_hit_rate,
        }
    }
}

/// Point-in-time snapshot of store metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    pub inserts: usize,
    pub insert_failures: usize,
    /// Percentage of `add` calls that succeeded (0.0 when none recorded).
    pub insert_success_rate: f64,
    pub lookup_hits: usize,
    pub lookup_misses: usize,
    /// Percentage of lookups that produced a string (0.0 when none recorded).
    pub lookup_hit_rate: f64,
}
