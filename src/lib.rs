// SPDX-License-Identifier: MPL-2.0
//! `sync_alerts` is the notification banner of a playlist sync client,
//! built with the Iced GUI framework.
//!
//! Status messages from local actions and from the sync server's push channel
//! are deduplicated, queued and shown one at a time in a banner that
//! dismisses itself after a few seconds.

#![doc(html_root_url = "https://docs.rs/sync_alerts/0.1.0")]

pub mod alerts;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod push;
pub mod ui;

#[cfg(test)]
mod test_utils;
