// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use sync_alerts::alerts::{ActiveAlert, Surface};
use sync_alerts::domain::alert::Severity;

/// What the queue asked the surface to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Alert { text: String, severity: Severity },
    Hidden,
}

/// Surface that records every call in order.
///
/// The crate's own recorder in `src/test_utils.rs` is `cfg(test)` only and
/// not visible here; keep the two recording the same calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<Shown>,
}

impl RecordingSurface {
    /// Texts passed to `show`, in order.
    pub fn shown_texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Shown::Alert { text, .. } => Some(text.as_str()),
                Shown::Hidden => None,
            })
            .collect()
    }

    /// Largest number of alerts visible at the same time.
    pub fn max_visible(&self) -> usize {
        let mut visible: usize = 0;
        let mut max = 0;
        for call in &self.calls {
            match call {
                Shown::Alert { .. } => visible += 1,
                Shown::Hidden => visible = visible.saturating_sub(1),
            }
            max = max.max(visible);
        }
        max
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, active: &ActiveAlert) {
        self.calls.push(Shown::Alert {
            text: active.text().to_string(),
            severity: active.severity(),
        });
    }

    fn hide(&mut self) {
        self.calls.push(Shown::Hidden);
    }
}
