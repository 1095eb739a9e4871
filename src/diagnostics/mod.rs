// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording alert queue activity.
//!
//! The queue reports every submission, suppression, rejection, display and
//! dismissal through a [`DiagnosticsHandle`]. Records are kept in a
//! memory-bounded circular buffer and can be exported as a JSON report to
//! investigate why a message was or was not shown.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`AlertEvent`]: A timestamped [`AlertEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the handle channel
//! - [`AlertReport`]: Serializable export format

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AlertEvent, AlertEventKind};
pub use report::{AlertReport, ReportMetadata, SerializableEvent};

pub use crate::domain::diagnostics::BufferCapacity;
