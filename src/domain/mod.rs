// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`alert`]: Alert value types ([`Severity`](alert::Severity),
//!   [`AlertDuration`](alert::AlertDuration), [`DedupWindow`](alert::DedupWindow))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`DurationError`](error::DurationError))

pub mod alert;
pub mod diagnostics;
pub mod error;
