// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use tracing::{debug, info};

/// Sentinel retention value meaning the destination must not attempt to set
/// retention: the agent believes it already has for this log group.
pub const RETENTION_ALREADY_ATTEMPTED: i32 = -1;

/// Gates the remote "set retention" side effect to at most once per log
/// group over the agent's lifetime, no matter how many streams map into the
/// group. Owned by the agent instance and only driven by its discovery loop.
#[derive(Debug, Default)]
pub struct RetentionTracker {
    attempted: HashSet<String>,
}

impl RetentionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the retention value the destination should be created with.
    ///
    /// Zero or negative requests mean "no retention requested" and pass
    /// through unchanged. The first positive request for a group marks the
    /// group and passes through; later positive requests for the same group
    /// get the sentinel instead.
    pub fn effective_retention(&mut self, retention: i32, group: &str) -> i32 {
        if retention <= 0 {
            return retention;
        }
        if self.attempted.contains(group) {
            debug!(
                "retention already set for log group {}, current retention {}",
                group, retention
            );
            return RETENTION_ALREADY_ATTEMPTED;
        }
        info!(
            "first time setting retention for log group {}, recording it to avoid setting twice",
            group
        );
        self.attempted.insert(group.to_string());
        retention
    }
}
