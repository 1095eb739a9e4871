// SPDX-License-Identifier: MPL-2.0
//! Alert queue for sync status feedback.
//!
//! Status messages arrive from local actions and from the sync server's push
//! channel, often in bursts and often repeated. The queue turns them into a
//! calm sequence of banners: one at a time, oldest first, each dismissed
//! after its own duration or by the user.
//!
//! # Components
//!
//! - [`queue`] - `AlertQueue` with submit, dismiss and tick handling
//! - [`history`] - `RecentHistory`, the duplicate suppression window
//! - [`clock`] - `Clock` trait with system and manual implementations
//! - [`surface`] - `Surface` trait implemented by the banner widget
//!
//! # Usage
//!
//! ```
//! use sync_alerts::alerts::{AlertQueue, ManualClock, Submission, Surface, ActiveAlert};
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct Stdout;
//!
//! impl Surface for Stdout {
//!     fn show(&mut self, active: &ActiveAlert) {
//!         println!("showing: {}", active.text());
//!     }
//!     fn hide(&mut self) {}
//! }
//!
//! let mut queue = AlertQueue::new(Stdout, ManualClock::new());
//! queue.submit("Syncing Road Trip to Tidal...", 5.0, false).unwrap();
//! assert_eq!(
//!     queue.submit("Syncing Road Trip to Tidal...", 5.0, false).unwrap(),
//!     Submission::Suppressed
//! );
//!
//! queue.clock().advance(Duration::from_secs(5));
//! assert!(queue.tick());
//! assert!(queue.is_idle());
//! ```

mod active;
pub mod clock;
pub mod history;
pub mod queue;
pub mod surface;

pub use active::ActiveAlert;
pub use clock::{Clock, ManualClock, SystemClock};
pub use history::{HistoryEntry, RecentHistory};
pub use queue::{AlertQueue, DismissReason, Message, QueueSettings, Submission};
pub use surface::Surface;

pub use crate::domain::alert::{Alert, AlertDuration, AlertId, DedupWindow, Severity};
