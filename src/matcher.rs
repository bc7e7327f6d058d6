//! The background filter coordinator.
//!
//! Filtering is CPU-bound and item sets are unbounded, so a query can be
//! dispatched to a worker thread to keep the caller's input loop
//! responsive. Requests carry a monotonically increasing sequence
//! number; a worker delivers its rows only if its request is still the
//! newest when it finishes, so a slow filter can never clobber the
//! result of a faster re-query.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use rayon::prelude::*;

use crate::engine::SubstringEngineFactory;
use crate::{Item, MatchEngineFactory, VisibleItem};

//==============================================================================
/// Control handle for a running filter request.
///
/// Provides the request's sequence number, progress counters, and a way
/// to stop the worker. Dropping the handle kills the worker, so holding
/// only the newest handle is enough to supersede older requests.
pub struct MatcherControl {
    sequence: usize,
    stopped: Arc<AtomicBool>,
    interrupt: Arc<AtomicBool>,
    matched: Arc<AtomicUsize>,
}

impl MatcherControl {
    /// The sequence number of the request this handle belongs to.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Number of items matched so far.
    pub fn num_matched(&self) -> usize {
        self.matched.load(Ordering::Relaxed)
    }

    /// Signals the worker to stop; its result is discarded.
    pub fn kill(&mut self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Returns true once the worker has finished or been killed.
    pub fn stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

impl Drop for MatcherControl {
    fn drop(&mut self) {
        self.kill();
    }
}

//==============================================================================
/// Issues filter requests and enforces last-query-wins ordering.
pub struct Matcher {
    engine_factory: Box<dyn MatchEngineFactory + Send + Sync>,
    latest: Arc<AtomicUsize>,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            engine_factory: Box::new(SubstringEngineFactory),
            latest: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Matcher {
    /// Creates a matcher with the standard substring engine chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with a custom engine factory.
    pub fn with_engine_factory(engine_factory: Box<dyn MatchEngineFactory + Send + Sync>) -> Self {
        Self {
            engine_factory,
            latest: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The sequence number of the most recently issued request.
    pub fn latest_sequence(&self) -> usize {
        self.latest.load(Ordering::SeqCst)
    }

    /// Filters `snapshot` with `query` on a worker thread.
    ///
    /// `callback` receives the request's sequence number and the visible
    /// rows, in snapshot order. It is invoked only if the request is
    /// still the newest when the worker finishes and the worker was not
    /// killed; issuing a new request implicitly supersedes this one.
    pub fn run<C>(&self, query: &str, snapshot: Vec<Item>, callback: C) -> MatcherControl
    where
        C: FnOnce(usize, Vec<VisibleItem>) + Send + 'static,
    {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let engine = self.engine_factory.create_engine(query);
        debug!("filter request {sequence}, engine: {engine}");

        let latest = self.latest.clone();
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_clone = stopped.clone();
        let interrupt = Arc::new(AtomicBool::new(false));
        let interrupt_clone = interrupt.clone();
        let matched = Arc::new(AtomicUsize::new(0));
        let matched_clone = matched.clone();

        thread::spawn(move || {
            trace!("filter {sequence} start, total: {}", snapshot.len());
            let rows: Result<Vec<_>, _> = snapshot
                .into_par_iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    if interrupt.load(Ordering::Relaxed) {
                        Some(Err("filter killed"))
                    } else if engine.match_item(&item) {
                        matched.fetch_add(1, Ordering::Relaxed);
                        Some(Ok(VisibleItem { index, item }))
                    } else {
                        None
                    }
                })
                .collect();

            if let Ok(rows) = rows {
                trace!("filter {sequence} done, matched: {}", rows.len());
                if latest.load(Ordering::SeqCst) == sequence && !interrupt.load(Ordering::Relaxed) {
                    callback(sequence, rows);
                } else {
                    trace!("filter {sequence} superseded, result dropped");
                }
            }
            stopped.store(true, Ordering::Relaxed);
        });

        MatcherControl {
            sequence,
            stopped: stopped_clone,
            interrupt: interrupt_clone,
            matched: matched_clone,
        }
    }
}
