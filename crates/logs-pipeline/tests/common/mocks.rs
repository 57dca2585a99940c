// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock implementations of the pipeline collaborator traits for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use async_trait::async_trait;

use logs_pipeline::{
    Entity, EventSink, InputPlugin, LogBackend, LogCollection, LogDestination, LogEvent,
    LogSource, OutputPlugin, PublishError,
};

pub struct MockEvent {
    message: String,
    timestamp: SystemTime,
}

impl MockEvent {
    pub fn new(message: &str) -> Box<Self> {
        Box::new(MockEvent {
            message: message.to_string(),
            timestamp: SystemTime::now(),
        })
    }
}

impl LogEvent for MockEvent {
    fn message(&self) -> &str {
        &self.message
    }

    fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    fn done(&self) {}
}

/// Source that feeds a fixed list of messages through its sink as soon as one
/// is registered, then signals it is finished.
pub struct ScriptedSource {
    pub group: String,
    pub stream: String,
    pub destination: String,
    pub retention: i32,
    messages: Mutex<Vec<String>>,
    stop_count: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(
        group: &str,
        stream: &str,
        destination: &str,
        retention: i32,
        messages: &[&str],
    ) -> Arc<Self> {
        Arc::new(ScriptedSource {
            group: group.to_string(),
            stream: stream.to_string(),
            destination: destination.to_string(),
            retention,
            messages: Mutex::new(messages.iter().map(|m| m.to_string()).collect()),
            stop_count: AtomicUsize::new(0),
        })
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count.load(Ordering::SeqCst)
    }
}

impl LogSource for ScriptedSource {
    fn group(&self) -> &str {
        &self.group
    }

    fn stream(&self) -> &str {
        &self.stream
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn description(&self) -> &str {
        "scripted"
    }

    fn retention(&self) -> i32 {
        self.retention
    }

    fn class(&self) -> &str {
        "STANDARD"
    }

    fn entity(&self) -> Option<Entity> {
        let mut entity = Entity::default();
        entity
            .key_attributes
            .insert("Name".to_string(), self.group.clone());
        Some(entity)
    }

    fn set_output(&self, sink: EventSink) {
        let messages = std::mem::take(&mut *self.messages.lock().unwrap());
        tokio::spawn(async move {
            for message in messages {
                sink.send(MockEvent::new(&message)).await;
            }
            sink.finish().await;
        });
    }

    fn stop(&self) {
        self.stop_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Collection that hands out pre-arranged batches of sources, one batch per
/// `find_sources` call, honoring the "never re-offer a source" contract.
pub struct BatchCollection {
    batches: Mutex<VecDeque<Vec<Arc<dyn LogSource + Send + Sync>>>>,
    start_count: AtomicUsize,
    stop_count: AtomicUsize,
}

impl BatchCollection {
    pub fn new(batches: Vec<Vec<Arc<dyn LogSource + Send + Sync>>>) -> Arc<Self> {
        Arc::new(BatchCollection {
            batches: Mutex::new(batches.into()),
            start_count: AtomicUsize::new(0),
            stop_count: AtomicUsize::new(0),
        })
    }

    pub fn start_count(&self) -> usize {
        self.start_count.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count.load(Ordering::SeqCst)
    }
}

impl LogCollection for BatchCollection {
    fn find_sources(&self) -> Vec<Arc<dyn LogSource + Send + Sync>> {
        self.batches.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn start(&self) -> anyhow::Result<()> {
        self.start_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) {
        self.stop_count.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct RecordingDestination {
    published: Mutex<Vec<String>>,
}

#[async_trait]
impl LogDestination for RecordingDestination {
    async fn publish(&self, events: Vec<Box<dyn LogEvent + Send>>) -> Result<(), PublishError> {
        let mut published = self.published.lock().unwrap();
        for event in events {
            published.push(event.message().to_string());
            event.done();
        }
        Ok(())
    }
}

/// Backend that records every `create_dest` call and funnels all destinations
/// into one shared publish log.
pub struct RecordingBackend {
    pub created: Mutex<Vec<CreatedDest>>,
    destination: Arc<RecordingDestination>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDest {
    pub group: String,
    pub stream: String,
    pub retention: i32,
    pub class: String,
    pub has_entity: bool,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingBackend {
            created: Mutex::new(Vec::new()),
            destination: Arc::new(RecordingDestination {
                published: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn created(&self) -> Vec<CreatedDest> {
        self.created.lock().unwrap().clone()
    }

    pub fn published(&self) -> Vec<String> {
        self.destination.published.lock().unwrap().clone()
    }
}

impl LogBackend for RecordingBackend {
    fn create_dest(
        &self,
        group: &str,
        stream: &str,
        retention: i32,
        class: &str,
        source: Arc<dyn LogSource + Send + Sync>,
    ) -> Arc<dyn LogDestination + Send + Sync> {
        self.created.lock().unwrap().push(CreatedDest {
            group: group.to_string(),
            stream: stream.to_string(),
            retention,
            class: class.to_string(),
            has_entity: source.entity().is_some(),
        });
        self.destination.clone()
    }
}

pub struct CollectionPlugin {
    pub name: String,
    pub collection: Arc<BatchCollection>,
}

impl InputPlugin for CollectionPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_log_collection(self: Arc<Self>) -> Option<Arc<dyn LogCollection + Send + Sync>> {
        Some(self.collection.clone())
    }
}

/// Input with no log capability; the agent must ignore it.
pub struct MetricsInput;

impl InputPlugin for MetricsInput {
    fn name(&self) -> &str {
        "cpu"
    }
}

pub struct BackendPlugin {
    pub name: String,
    pub alias: Option<String>,
    pub backend: Arc<RecordingBackend>,
}

impl OutputPlugin for BackendPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn as_log_backend(self: Arc<Self>) -> Option<Arc<dyn LogBackend + Send + Sync>> {
        Some(self.backend.clone())
    }
}
