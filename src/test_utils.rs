// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and a recording presentation surface.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::alerts::{ActiveAlert, Surface};

/// One call made by the queue on its surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Shown(String),
    Hidden,
}

/// A surface that remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, active: &ActiveAlert) {
        self.calls.push(SurfaceCall::Shown(active.text().to_string()));
    }

    fn hide(&mut self) {
        self.calls.push(SurfaceCall::Hidden);
    }
}
