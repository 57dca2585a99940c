// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! In-process log pipeline orchestration.
//!
//! The agent discovers log sources from configured input plugins, routes each
//! source to a destination created by the matching output plugin, and runs one
//! forwarding task per (source, destination) pair. Sources and destinations
//! are owned by their plugins; this crate only wires them together and
//! supervises the wiring.

pub mod agent;
pub mod backend;
pub mod config;
pub mod error;
pub mod event;
pub mod pump;
pub mod retention;
pub mod source;

pub use agent::LogAgent;
pub use backend::{LogBackend, LogDestination};
pub use config::{Config, InputPlugin, OutputPlugin};
pub use error::PublishError;
pub use event::{Entity, LogEvent};
pub use pump::EventSink;
pub use source::{LogCollection, LogSource, OpenSourceCount};
