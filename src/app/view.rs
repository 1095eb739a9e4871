// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The banner sits on top at full width; below it are the simulate buttons
//! and a few live counters about the queue.

use super::Message;
use crate::alerts::{AlertQueue, SystemClock};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::Banner;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub queue: &'a AlertQueue<Banner, SystemClock>,
    pub now: Instant,
    pub logged_events: usize,
    pub script_remaining: Option<usize>,
    pub status: Option<&'a str>,
}

/// Renders the banner above the demo controls.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let banner = ctx.queue.surface().view(ctx.now).map(Message::Alert);

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(control("Simulate progress", Message::SimulateProgress))
        .push(control("Simulate refuse", Message::SimulateRefuse))
        .push(control("Clear", Message::ClearAlerts))
        .push(control("Export diagnostics", Message::ExportDiagnostics));

    let mut body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Playlist sync").size(typography::TITLE_MD))
        .push(
            Text::new("Push events appear as banners, one at a time. Esc dismisses.")
                .size(typography::BODY),
        )
        .push(controls)
        .push(counter("Waiting", ctx.queue.pending_count()))
        .push(counter("Recent messages", ctx.queue.history().len()))
        .push(counter("Logged events", ctx.logged_events));

    if let Some(remaining) = ctx.script_remaining {
        body = body.push(counter("Script steps left", remaining));
    }
    if let Some(status) = ctx.status {
        body = body.push(Text::new(status).size(typography::CAPTION));
    }

    Column::new()
        .push(banner)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .into()
}

fn counter<'a>(label: &str, value: usize) -> Element<'a, Message> {
    Text::new(format!("{label}: {value}"))
        .size(typography::CAPTION)
        .into()
}
