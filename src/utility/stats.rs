/*!
 * Stats Store Helpers
 *
 * Minimal counter/gauge store plus the name lookups tests use to assert on
 * emitted stats.
 *
 * # Design: Trait Seam Over the Store
 *
 * Lookups go through `StatsStore`, which only has to hand out snapshots of
 * its counters and gauges. `IsolatedStore` is the in-process implementation:
 * a `DashMap` per metric kind, so code under test can bump stats from worker
 * threads while the test reads them.
 */

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic named counter
#[derive(Debug)]
pub struct Counter {
    name: String,
    value: AtomicU64,
}

impl Counter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn inc(&self) {
        self.add(1);
    }

    #[inline]
    pub fn add(&self, amount: u64) {
        self.value.fetch_add(amount, Ordering::Relaxed);
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::Relaxed);
    }
}

/// Named gauge that can move in both directions
///
/// Decrements saturate at zero.
#[derive(Debug)]
pub struct Gauge {
    name: String,
    value: AtomicU64,
}

impl Gauge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set(&self, value: u64) {
        self.value.store(value, Ordering::Relaxed);
    }

    #[inline]
    pub fn inc(&self) {
        self.add(1);
    }

    #[inline]
    pub fn dec(&self) {
        self.sub(1);
    }

    #[inline]
    pub fn add(&self, amount: u64) {
        self.value.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn sub(&self, amount: u64) {
        // Closure always returns Some, so the update cannot fail
        let _ = self
            .value
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                Some(v.saturating_sub(amount))
            });
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// A source of counters and gauges that can be searched by name
pub trait StatsStore {
    /// Snapshot of every counter in the store
    fn counters(&self) -> Vec<Arc<Counter>>;

    /// Snapshot of every gauge in the store
    fn gauges(&self) -> Vec<Arc<Gauge>>;
}

/// In-process store; metrics are created on first use
#[derive(Debug, Default)]
pub struct IsolatedStore {
    counters: DashMap<String, Arc<Counter>>,
    gauges: DashMap<String, Arc<Gauge>>,
}

impl IsolatedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the counter called `name`
    pub fn counter(&self, name: &str) -> Arc<Counter> {
        self.counters
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Counter::new(name)))
            .clone()
    }

    /// Get or create the gauge called `name`
    pub fn gauge(&self, name: &str) -> Arc<Gauge> {
        self.gauges
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Gauge::new(name)))
            .clone()
    }
}

impl StatsStore for IsolatedStore {
    fn counters(&self) -> Vec<Arc<Counter>> {
        self.counters.iter().map(|e| e.value().clone()).collect()
    }

    fn gauges(&self) -> Vec<Arc<Gauge>> {
        self.gauges.iter().map(|e| e.value().clone()).collect()
    }
}

/// Find a counter by name, `None` if the store has no such counter
pub fn find_counter<S>(store: &S, name: &str) -> Option<Arc<Counter>>
where
    S: StatsStore + ?Sized,
{
    store.counters().into_iter().find(|c| c.name() == name)
}

/// Find a gauge by name, `None` if the store has no such gauge
pub fn find_gauge<S>(store: &S, name: &str) -> Option<Arc<Gauge>>
where
    S: StatsStore + ?Sized,
{
    store.gauges().into_iter().find(|g| g.name() == name)
}
