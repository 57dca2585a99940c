// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PublishError;
use crate::event::LogEvent;
use crate::source::LogSource;

/// A provider of log destinations.
///
/// `create_dest` must be cheap and idempotent for a repeated (group, stream)
/// key: calling it twice must not create conflicting remote state. The source
/// handle is passed through so the backend may read entity metadata from it.
pub trait LogBackend {
    fn create_dest(
        &self,
        group: &str,
        stream: &str,
        retention: i32,
        class: &str,
        source: Arc<dyn LogSource + Send + Sync>,
    ) -> Arc<dyn LogDestination + Send + Sync>;
}

/// A final endpoint where log events are published, e.g. a particular remote
/// log stream. Owned by the backend that created it.
#[async_trait]
pub trait LogDestination {
    /// Publishes a batch of events. May block on network I/O; the forwarding
    /// task relies on that to apply backpressure to the source.
    async fn publish(&self, events: Vec<Box<dyn LogEvent + Send>>) -> Result<(), PublishError>;
}
