// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::backend::LogDestination;
use crate::error::PublishError;
use crate::event::LogEvent;
use crate::source::LogSource;

// Capacity 1: a stalled destination stalls the source's next delivery. Larger
// values only add latency slack, never new guarantees.
const EVENT_CHANNEL_CAPACITY: usize = 1;

/// Delivery path registered with a source via `LogSource::set_output`.
///
/// The sink is the only way events reach the forwarding task. `send` blocks
/// the source's task while the forwarding task is busy publishing, which is
/// the backpressure mechanism: events are never dropped. `finish` signals the
/// source has no more data; deliveries after it are ignored.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::Sender<Option<Box<dyn LogEvent + Send>>>,
    closed: Arc<AtomicBool>,
}

impl EventSink {
    pub(crate) fn new(tx: mpsc::Sender<Option<Box<dyn LogEvent + Send>>>) -> Self {
        EventSink {
            tx,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn send(&self, event: Box<dyn LogEvent + Send>) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        if self.tx.send(Some(event)).await.is_err() {
            // The forwarding task exited; discard everything from here on.
            self.closed.store(true, Ordering::Release);
        }
    }

    pub async fn finish(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let _ = self.tx.send(None).await;
    }
}

/// Stops the source on every exit path of the forwarding task, including
/// unexpected ones. `LogSource::stop` is documented idempotent.
struct StopGuard {
    source: Arc<dyn LogSource + Send + Sync>,
}

impl Drop for StopGuard {
    fn drop(&mut self) {
        self.source.stop();
    }
}

/// Moves events from one source to one destination until termination.
///
/// The pair never re-targets. Events are published one at a time, in the
/// order the source emitted them. A terminal `Stopped` outcome shuts the
/// source down; any other publish error ends the task and leaves the source
/// to block on its next delivery.
pub(crate) async fn pump(
    source: Arc<dyn LogSource + Send + Sync>,
    dest: Arc<dyn LogDestination + Send + Sync>,
    backend_name: String,
) {
    let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    source.set_output(EventSink::new(tx));
    let _stop = StopGuard {
        source: Arc::clone(&source),
    };

    while let Some(item) = rx.recv().await {
        let Some(event) = item else {
            info!(
                "log source has stopped for {}/{}({})",
                source.group(),
                source.stream(),
                source.description()
            );
            return;
        };
        match dest.publish(vec![event]).await {
            Ok(()) => {}
            Err(PublishError::Stopped) => {
                info!(
                    "log destination {} has stopped, finalizing {}/{}",
                    backend_name,
                    source.group(),
                    source.stream()
                );
                return;
            }
            Err(err) => {
                error!(
                    "failed to publish log from {}/{} to {}, error: {}",
                    source.group(),
                    source.stream(),
                    backend_name,
                    err
                );
                return;
            }
        }
    }
}
