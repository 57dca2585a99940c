// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::backend::LogBackend;
use crate::config::Config;
use crate::pump::pump;
use crate::retention::RetentionTracker;
use crate::source::{LogCollection, OpenSourceCount};

/// The agent handling pure log pipelines.
///
/// Scans the configured outputs for log backends and the configured inputs
/// for log collections, then connects every source the collections report to
/// the destination named by its `destination` key, one forwarding task per
/// pair. The routing tables are owned by the discovery loop alone; forwarding
/// tasks never write them.
pub struct LogAgent {
    config: Arc<Config>,
    backends: HashMap<String, Arc<dyn LogBackend + Send + Sync>>,
    collections: Vec<Arc<dyn LogCollection + Send + Sync>>,
    retention: RetentionTracker,
    open_sources: OpenSourceCount,
}

impl LogAgent {
    /// `open_sources` is the externally maintained gauge of live source
    /// handles; the agent only reads it.
    pub fn new(config: Arc<Config>, open_sources: OpenSourceCount) -> LogAgent {
        LogAgent {
            config,
            backends: HashMap::new(),
            collections: Vec::new(),
            retention: RetentionTracker::new(),
            open_sources,
        }
    }

    /// Runs discovery until `cancel` fires. The liveness monitor runs on its
    /// own task until `monitor_cancel` fires. Forwarding tasks already
    /// started are neither joined nor cancelled on shutdown; they end on
    /// their own termination conditions.
    pub async fn run(mut self, cancel: CancellationToken, monitor_cancel: CancellationToken) {
        info!("starting log agent");

        self.register_backends();
        self.start_collections();

        // Capacity 1: a restart request pending is enough, further monitor
        // ticks must not queue more.
        let (restart_tx, mut restart_rx) = mpsc::channel::<()>(1);
        let open_sources = self.open_sources.clone();
        let monitor_interval = self.config.monitor_interval;
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + monitor_interval, monitor_interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let count = open_sources.get();
                        debug!("open source count: {}", count);
                        if count == 0 {
                            let _ = restart_tx.try_send(());
                        }
                    }
                    _ = monitor_cancel.cancelled() => {
                        info!("stopping source monitoring");
                        return;
                    }
                }
            }
        });

        let discovery_interval = self.config.discovery_interval;
        let mut ticker = interval_at(Instant::now() + discovery_interval, discovery_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.process_collections();
                }
                Some(()) = restart_rx.recv() => {
                    info!("restarting collections due to closed sources");
                    self.restart_collections();
                }
                _ = cancel.cancelled() => {
                    info!("shutting down log processing");
                    return;
                }
            }
        }
    }

    fn register_backends(&mut self) {
        for output in &self.config.outputs {
            let Some(backend) = Arc::clone(output).as_log_backend() else {
                continue;
            };
            info!("found plugin {} is a log backend", output.name());
            let name = output.alias().unwrap_or_else(|| output.name()).to_string();
            self.backends.insert(name, backend);
        }
    }

    fn start_collections(&mut self) {
        for input in &self.config.inputs {
            let Some(collection) = Arc::clone(input).as_log_collection() else {
                continue;
            };
            info!("starting collection for plugin {}", input.name());
            if let Err(err) = collection.start() {
                error!("could not start log collection {}: {}", input.name(), err);
                continue;
            }
            self.collections.push(collection);
        }
    }

    /// Self-healing, not correctness: collaborators must tolerate a healthy
    /// collection being stopped and started again.
    fn restart_collections(&mut self) {
        for collection in self.collections.drain(..) {
            collection.stop();
        }
        self.start_collections();
    }

    fn process_collections(&mut self) {
        for collection in &self.collections {
            for source in collection.find_sources() {
                let dest_name = source.destination().to_string();
                let group = source.group().to_string();
                let stream = source.stream().to_string();
                let description = source.description().to_string();
                let class = source.class().to_string();

                let Some(backend) = self.backends.get(&dest_name) else {
                    error!(
                        "failed to find destination {} for log source {}/{}({})",
                        dest_name, group, stream, description
                    );
                    continue;
                };
                let retention = self
                    .retention
                    .effective_retention(source.retention(), &group);
                let dest =
                    backend.create_dest(&group, &stream, retention, &class, Arc::clone(&source));
                info!(
                    "piping log from {}/{}({}) to {} with retention {}",
                    group, stream, description, dest_name, retention
                );
                tokio::spawn(pump(source, dest, dest_name));
            }
        }
    }
}
