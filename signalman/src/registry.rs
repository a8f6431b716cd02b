//! Lazily sorted handler registry.
//!
//! Handlers are keyed by signal name, then by integer priority; within a
//! priority bucket they keep registration order. Buckets are only sorted by
//! priority when a read needs them, and the sort is memoized per signal so an
//! unchanged bucket map is never resorted on every dispatch.

use signalman_core::{Handler, WILDCARD};
use std::collections::HashMap;
use std::sync::Arc;

/// A point-in-time view of the full registry: signal name to priority
/// buckets, each holding handlers in registration order. Buckets appear in
/// whatever order registration produced, mirroring what a full-registry read
/// exposes before any per-signal sort.
pub type RegistryView = HashMap<String, Vec<(i32, Vec<Arc<Handler>>)>>;

/// Priority buckets for one signal key.
struct Buckets {
    /// `(priority, handlers)` where each handler carries the global
    /// registration sequence number used to order ties across keys.
    entries: Vec<(i32, Vec<(u64, Arc<Handler>)>)>,
    /// Whether `entries` is currently sorted ascending by priority.
    sorted: bool,
}

impl Buckets {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            sorted: true,
        }
    }

    fn push(&mut self, priority: i32, seq: u64, handler: Arc<Handler>) {
        if let Some((_, bucket)) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == priority)
        {
            // appending inside an existing bucket cannot unsort the map
            bucket.push((seq, handler));
        } else {
            self.entries.push((priority, vec![(seq, handler)]));
            self.sorted = false;
        }
    }

    fn ensure_sorted(&mut self) {
        if !self.sorted {
            self.entries.sort_by_key(|(priority, _)| *priority);
            self.sorted = true;
        }
    }

    /// Flatten into `(priority, seq, handler)` rows, ascending by priority
    /// then registration sequence.
    fn rows(&mut self) -> Vec<(i32, u64, Arc<Handler>)> {
        self.ensure_sorted();
        self.entries
            .iter()
            .flat_map(|(priority, bucket)| {
                bucket
                    .iter()
                    .map(|(seq, handler)| (*priority, *seq, handler.clone()))
            })
            .collect()
    }
}

/// The signal-to-buckets map behind a manager.
pub(crate) struct Registry {
    signals: HashMap<String, Buckets>,
    next_seq: u64,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            signals: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Append a handler under `registry[signal][priority]`.
    pub(crate) fn add(&mut self, signal: &str, priority: i32, handler: Arc<Handler>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.signals
            .entry(signal.to_string())
            .or_insert_with(Buckets::new)
            .push(priority, seq, handler);
    }

    /// The handlers that a dispatch of `signal` must walk, priority
    /// ascending, registration order within a priority.
    ///
    /// Merges the literal signal key with the wildcard key, interleaving
    /// equal priorities by registration sequence so ordering stays stable no
    /// matter which key a handler was registered under. The returned vector
    /// is an owned snapshot; later registrations never affect a walk already
    /// in progress.
    pub(crate) fn snapshot_for(&mut self, signal: &str) -> Vec<Arc<Handler>> {
        let mut keys = vec![signal];
        if signal != WILDCARD {
            keys.push(WILDCARD);
        }

        let mut lanes: Vec<Vec<(i32, u64, Arc<Handler>)>> = Vec::new();
        for key in keys {
            if let Some(buckets) = self.signals.get_mut(key) {
                lanes.push(buckets.rows());
            }
        }

        match lanes.len() {
            0 => Vec::new(),
            1 => lanes
                .remove(0)
                .into_iter()
                .map(|(_, _, handler)| handler)
                .collect(),
            _ => {
                let right = lanes.pop().unwrap_or_default();
                let left = lanes.pop().unwrap_or_default();
                merge_rows(left, right)
            }
        }
    }

    /// The sorted handlers registered under exactly this signal key, or
    /// `None` if nothing was registered for it. Wildcard registrations live
    /// under their own key and are not folded in here.
    pub(crate) fn handlers_for(&mut self, signal: &str) -> Option<Vec<Arc<Handler>>> {
        let buckets = self.signals.get_mut(signal)?;
        Some(
            buckets
                .rows()
                .into_iter()
                .map(|(_, _, handler)| handler)
                .collect(),
        )
    }

    /// A view of the full registry with unsorted buckets.
    pub(crate) fn view(&self) -> RegistryView {
        self.signals
            .iter()
            .map(|(signal, buckets)| {
                let entries = buckets
                    .entries
                    .iter()
                    .map(|(priority, bucket)| {
                        let handlers = bucket.iter().map(|(_, handler)| handler.clone()).collect();
                        (*priority, handlers)
                    })
                    .collect();
                (signal.clone(), entries)
            })
            .collect()
    }
}

/// Merge two rows lists, each already ascending by `(priority, seq)`.
fn merge_rows(
    left: Vec<(i32, u64, Arc<Handler>)>,
    right: Vec<(i32, u64, Arc<Handler>)>,
) -> Vec<Arc<Handler>> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some((lp, ls, _)), Some((rp, rs, _))) => (lp, ls) <= (rp, rs),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let lane = if take_left { &mut left } else { &mut right };
        if let Some((_, _, handler)) = lane.next() {
            merged.push(handler);
        }
    }
    merged
}
