// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: the banner
//! holds only what it needs to draw and emits [`crate::alerts::Message`]
//! values for the queue to handle.
//!
//! - [`banner`] - Full-width alert banner, the queue's presentation surface
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod banner;
pub mod design_tokens;

pub use banner::Banner;
