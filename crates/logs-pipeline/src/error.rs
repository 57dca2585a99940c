// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Outcome of publishing a batch of events to a destination.
///
/// `Stopped` is terminal: the destination considers itself retired (for
/// example its backend was removed by a configuration reload) and the paired
/// source must be shut down. Every other failure is reported as `Other` and
/// is handled locally by the forwarding task.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("output destination stopped")]
    Stopped,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PublishError {
    pub fn other(msg: impl Into<String>) -> Self {
        PublishError::Other(anyhow::anyhow!(msg.into()))
    }
}
