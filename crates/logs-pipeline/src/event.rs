// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::time::SystemTime;

/// A single log event produced by a source.
///
/// `done` is the completion acknowledgment: the destination must invoke it
/// exactly once, after the event has been durably handled.
pub trait LogEvent: Send {
    fn message(&self) -> &str;
    fn timestamp(&self) -> SystemTime;
    fn done(&self);
}

/// Metadata describing the workload a source belongs to.
///
/// Backends may attach this to uploads so the remote side can associate log
/// streams with the emitting entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    pub key_attributes: HashMap<String, String>,
    pub attributes: HashMap<String, String>,
}
