// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::alerts;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes keyboard shortcuts not captured by a widget.
///
/// - `Escape` dismisses the active alert
/// - `E` exports diagnostics
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Alert(alerts::Message::DismissActive)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if c.as_str().eq_ignore_ascii_case("e")
                && !modifiers.command()
                && !modifiers.alt() =>
            {
                Some(Message::ExportDiagnostics)
            }
            _ => None,
        }
    })
}

/// Ticks only while there is something to count down or replay.
pub fn create_tick_subscription(busy: bool, interval: Duration) -> Subscription<Message> {
    if busy {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
