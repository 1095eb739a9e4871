// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: how many alert activity records are retained

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};
