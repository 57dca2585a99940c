// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::LogBackend;
use crate::source::LogCollection;

const DEFAULT_DISCOVERY_INTERVAL_SECS: u64 = 1;
const DEFAULT_MONITOR_INTERVAL_SECS: u64 = 1;

/// A configured input. Inputs that can enumerate log sources expose the
/// `LogCollection` capability; all others are ignored by the agent.
pub trait InputPlugin {
    fn name(&self) -> &str;

    fn as_log_collection(self: Arc<Self>) -> Option<Arc<dyn LogCollection + Send + Sync>> {
        None
    }
}

/// A configured output. Outputs that can create log destinations expose the
/// `LogBackend` capability and are registered under their alias, or their
/// name when no alias is configured.
pub trait OutputPlugin {
    fn name(&self) -> &str;

    fn alias(&self) -> Option<&str> {
        None
    }

    fn as_log_backend(self: Arc<Self>) -> Option<Arc<dyn LogBackend + Send + Sync>> {
        None
    }
}

/// Agent configuration: the full set of configured inputs and outputs, plus
/// loop tunables.
pub struct Config {
    pub inputs: Vec<Arc<dyn InputPlugin + Send + Sync>>,
    pub outputs: Vec<Arc<dyn OutputPlugin + Send + Sync>>,
    /// How often to poll collections for new sources.
    pub discovery_interval: Duration,
    /// How often to poll the open-source gauge for the restart check.
    pub monitor_interval: Duration,
}

impl Config {
    pub fn new(
        inputs: Vec<Arc<dyn InputPlugin + Send + Sync>>,
        outputs: Vec<Arc<dyn OutputPlugin + Send + Sync>>,
    ) -> Config {
        Config {
            inputs,
            outputs,
            discovery_interval: interval_from_env(
                "LOGS_DISCOVERY_INTERVAL_SECS",
                DEFAULT_DISCOVERY_INTERVAL_SECS,
            ),
            monitor_interval: interval_from_env(
                "LOGS_MONITOR_INTERVAL_SECS",
                DEFAULT_MONITOR_INTERVAL_SECS,
            ),
        }
    }
}

fn interval_from_env(var: &str, default_secs: u64) -> Duration {
    let secs = env::var(var)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}
