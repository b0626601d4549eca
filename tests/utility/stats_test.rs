/*!
 * Stats Lookup Tests
 */

use pretty_assertions::assert_eq;
use proxy_test_common::utility::stats::{
    find_counter, find_gauge, Counter, Gauge, IsolatedStore, StatsStore,
};
use std::sync::Arc;
use std::thread;

/// Store backed by fixed vectors, to check lookups only rely on the trait
struct FixedStore {
    counters: Vec<Arc<Counter>>,
    gauges: Vec<Arc<Gauge>>,
}

impl StatsStore for FixedStore {
    fn counters(&self) -> Vec<Arc<Counter>> {
        self.counters.clone()
    }

    fn gauges(&self) -> Vec<Arc<Gauge>> {
        self.gauges.clone()
    }
}

#[test]
fn test_lookup_through_trait_object() {
    let store = FixedStore {
        counters: vec![Arc::new(Counter::new("cluster.upstream_rq_total"))],
        gauges: vec![Arc::new(Gauge::new("cluster.upstream_cx_active"))],
    };
    let dyn_store: &dyn StatsStore = &store;

    assert!(find_counter(dyn_store, "cluster.upstream_rq_total").is_some());
    assert!(find_gauge(dyn_store, "cluster.upstream_cx_active").is_some());
    assert!(find_counter(dyn_store, "cluster.upstream_cx_active").is_none());
}

#[test]
fn test_counters_updated_from_workers() {
    let store = Arc::new(IsolatedStore::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    store.counter("http.rq_total").inc();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let counter = find_counter(&*store, "http.rq_total").unwrap();
    assert_eq!(counter.value(), 1000);
}
