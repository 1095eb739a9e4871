// SPDX-License-Identifier: MPL-2.0
//! Full-width alert banner.
//!
//! The banner is the presentation surface of the alert queue. It owns a
//! single region that is created the first time an alert is shown and
//! reused afterwards; hiding only marks it invisible. The region carries the
//! message, a dismiss button and a countdown bar that shrinks over the
//! alert's duration.

use crate::alerts::{ActiveAlert, AlertId, Message, Severity, Surface};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// The single banner region.
#[derive(Debug, Clone, PartialEq)]
struct Region {
    id: AlertId,
    text: String,
    severity: Severity,
    duration: Duration,
    deadline: Instant,
    visible: bool,
}

/// Alert banner widget state.
#[derive(Debug, Clone)]
pub struct Banner {
    region: Option<Region>,
    show_countdown: bool,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Banner {
    #[must_use]
    pub fn new(show_countdown: bool) -> Self {
        Self {
            region: None,
            show_countdown,
        }
    }

    /// Returns whether the region has been built yet.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.region.is_some()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.region.as_ref().is_some_and(|region| region.visible)
    }

    /// Text currently on the banner, if visible.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.visible_region().map(|region| region.text.as_str())
    }

    #[must_use]
    pub fn severity(&self) -> Option<Severity> {
        self.visible_region().map(|region| region.severity)
    }

    /// Countdown fraction left at `now`, `None` when hidden.
    #[must_use]
    pub fn countdown(&self, now: Instant) -> Option<f32> {
        self.visible_region().map(|region| {
            let total = region.duration.as_secs_f32();
            if total <= 0.0 {
                return 0.0;
            }
            let left = region.deadline.saturating_duration_since(now).as_secs_f32();
            (left / total).clamp(0.0, 1.0)
        })
    }

    fn visible_region(&self) -> Option<&Region> {
        self.region.as_ref().filter(|region| region.visible)
    }

    /// Renders the banner, or an empty element when nothing is showing.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let Some(region) = self.visible_region() else {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let accent = severity_color(region.severity);

        let message_text = Text::new(region.text.as_str())
            .size(typography::BODY_LG)
            .style(|_: &Theme| text::Style {
                color: Some(palette::WHITE),
            });
        let message = Container::new(message_text)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        let dismiss = button(
            Container::new(Text::new("×").size(typography::BODY_LG))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Dismiss(region.id))
        .width(Length::Fixed(sizing::DISMISS_BUTTON))
        .height(Length::Fixed(sizing::DISMISS_BUTTON))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(message)
            .push(dismiss);

        let mut content = Column::new().push(
            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD]),
        );

        if self.show_countdown {
            let left = self.countdown(now).unwrap_or(0.0);
            content = content.push(countdown_bar(left));
        }

        Container::new(content)
            .width(Length::Fill)
            .style(move |_: &Theme| banner_container_style(accent))
            .into()
    }
}

impl Surface for Banner {
    fn show(&mut self, active: &ActiveAlert) {
        let region = self.region.get_or_insert_with(|| Region {
            id: active.id(),
            text: String::new(),
            severity: Severity::default(),
            duration: Duration::ZERO,
            deadline: active.deadline(),
            visible: false,
        });

        region.id = active.id();
        region.text.clear();
        region.text.push_str(active.text());
        region.severity = active.severity();
        region.duration = active.alert().duration().as_duration();
        region.deadline = active.deadline();
        region.visible = true;
    }

    fn hide(&mut self) {
        if let Some(region) = self.region.as_mut() {
            region.visible = false;
        }
    }
}

/// Background color for a severity.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Splits the bar width between the remaining and elapsed parts.
fn countdown_portions(left: f32) -> (u16, u16) {
    let steps = f32::from(sizing::COUNTDOWN_STEPS);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=steps
    let remaining = (left.clamp(0.0, 1.0) * steps).round() as u16;
    let elapsed = sizing::COUNTDOWN_STEPS - remaining;
    (remaining.max(1), elapsed.max(1))
}

fn countdown_bar<'a>(left: f32) -> Element<'a, Message> {
    let (remaining, elapsed) = countdown_portions(left);

    let filled = Container::new(Column::new())
        .width(Length::FillPortion(remaining))
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(|_: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            })),
            ..Default::default()
        });

    let empty = Container::new(Column::new())
        .width(Length::FillPortion(elapsed))
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT));

    Row::new().push(filled).push(empty).width(Length::Fill).into()
}

/// Style function for the banner container.
fn banner_container_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent)),
        border: iced::Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let hover_alpha = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::WHITE })),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
