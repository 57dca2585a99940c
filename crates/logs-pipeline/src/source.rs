// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::event::Entity;
use crate::pump::EventSink;

/// A single place where log events are generated, e.g. a tailed file.
///
/// Sources are created and retired by the collection that owns them; the
/// agent only registers an output sink and, on failure handling, asks the
/// source to stop.
pub trait LogSource {
    fn group(&self) -> &str;
    fn stream(&self) -> &str;
    /// Logical name of the backend this source should be routed to.
    fn destination(&self) -> &str;
    fn description(&self) -> &str;
    /// Requested retention in days. 0 means no retention was requested.
    fn retention(&self) -> i32;
    /// Log group storage class.
    fn class(&self) -> &str;
    /// Entity metadata for the emitting workload, if known.
    fn entity(&self) -> Option<Entity> {
        None
    }
    /// Registers the delivery path for this source's events. Only one sink
    /// may be active at a time.
    fn set_output(&self, sink: EventSink);
    /// Requests the source cease producing and release its resources. May be
    /// called more than once; must be safe to do so.
    fn stop(&self);
}

/// A plugin which can provide many log sources.
///
/// `find_sources` must only return sources that have not been returned by a
/// previous call; the agent performs no deduplication of its own.
pub trait LogCollection {
    fn find_sources(&self) -> Vec<Arc<dyn LogSource + Send + Sync>>;
    fn start(&self) -> anyhow::Result<()>;
    fn stop(&self);
}

/// Gauge of currently open source handles, maintained by source owners and
/// polled by the agent's restart monitor. A reading of zero while collections
/// are active is taken as evidence that the underlying sources silently died
/// (e.g. files rotated away) and triggers a collection restart.
#[derive(Debug, Clone, Default)]
pub struct OpenSourceCount(Arc<AtomicI64>);

impl OpenSourceCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, delta: i64) {
        self.0.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }
}
