// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the alert queue, the
//! banner surface and the simulated push channel.
//!
//! The `App` owns one [`AlertQueue`] whose surface is the [`Banner`] pinned to
//! the top of the window. Push events come either from the simulate buttons or
//! from a replayed script, and go through [`push::dispatch`] like real ones.

mod message;
pub mod script;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use script::{ScriptPlayer, ScriptStep};

use crate::alerts::{AlertQueue, Severity, SystemClock};
use crate::config::{self, paths, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::push::{self, EventMapping, PushEvent};
use crate::ui::Banner;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 280;

const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Messages cycled through by the simulate progress button.
const SAMPLE_PROGRESS: [&str; 3] = [
    "Connected to backend",
    "Syncing Road Trip to Tidal...",
    "Road Trip synced",
];

/// Root Iced application state.
pub struct App {
    queue: AlertQueue<Banner, SystemClock>,
    mapping: EventMapping,
    diagnostics: DiagnosticsCollector,
    script: Option<ScriptPlayer>,
    tick_interval: Duration,
    next_sample: usize,
    /// Last one-line status shown under the controls.
    status: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("active", &self.queue.active().map(|a| a.text().to_string()))
            .field("pending", &self.queue.pending_count())
            .field("script", &self.script.as_ref().map(ScriptPlayer::remaining))
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let banner = Banner::new(config.show_countdown());
        let mut queue =
            AlertQueue::with_settings(banner, SystemClock, config.queue_settings());

        let diagnostics = DiagnosticsCollector::new(config.buffer_capacity());
        queue.set_diagnostics(diagnostics.handle());

        Self {
            queue,
            mapping: EventMapping::from_config(config),
            diagnostics,
            script: None,
            tick_interval: config.tick_interval(),
            next_sample: 0,
            status: None,
        }
    }

    /// Initializes state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(&config);

        if let Some(warning) = config_warning {
            eprintln!("[WARN] {warning}");
            app.queue.submit_default(warning, Severity::Error);
        }

        if let Some(path) = flags.script {
            match ScriptPlayer::load(&PathBuf::from(&path)) {
                Ok(player) => app.set_script(player, Instant::now()),
                Err(err) => {
                    eprintln!("[ERROR] Failed to load script {path}: {err}");
                    app.queue
                        .submit_default(format!("Script not loaded: {err}"), Severity::Error);
                }
            }
        }

        (app, Task::none())
    }

    /// Installs a script and starts playing it from `now`.
    pub fn set_script(&mut self, mut player: ScriptPlayer, now: Instant) {
        player.start(now);
        self.script = Some(player);
    }

    #[must_use]
    pub fn queue(&self) -> &AlertQueue<Banner, SystemClock> {
        &self.queue
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether ticks are needed.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.queue.is_idle() || self.script.is_some()
    }

    fn title(&self) -> String {
        match self.queue.pending_count() {
            0 => "Sync Alerts".to_string(),
            n => format!("Sync Alerts ({n} waiting)"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_busy(), self.tick_interval),
        ])
    }

    /// Feeds one push event through the queue.
    pub fn handle_push(&mut self, event: &PushEvent) {
        push::dispatch(&mut self.queue, event, &self.mapping);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Alert(alert_message) => {
                self.queue.handle_message(&alert_message);
            }
            Message::Tick(now) => {
                self.queue.tick();
                self.play_script(now);
            }
            Message::SimulateProgress => {
                let text = SAMPLE_PROGRESS[self.next_sample % SAMPLE_PROGRESS.len()];
                self.next_sample = self.next_sample.wrapping_add(1);
                self.handle_push(&PushEvent::Progress {
                    message: text.to_string(),
                });
            }
            Message::SimulateRefuse => {
                self.handle_push(&PushEvent::Refuse);
            }
            Message::ClearAlerts => {
                self.queue.clear();
            }
            Message::ExportDiagnostics => {
                self.export_diagnostics();
            }
        }

        self.diagnostics.process_pending();
        Task::none()
    }

    fn play_script(&mut self, now: Instant) {
        let Some(player) = self.script.as_mut() else {
            return;
        };
        let events = player.due(now);
        let finished = player.is_finished();

        for event in &events {
            self.handle_push(event);
        }
        if finished {
            self.script = None;
            self.status = Some("Script finished".to_string());
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();

        let Some(dir) = paths::get_app_config_dir() else {
            self.status = Some("No config directory for the diagnostics export".to_string());
            return;
        };
        let path = dir.join(DIAGNOSTICS_FILE);

        self.status = Some(match self.diagnostics.export_to_file(&path) {
            Ok(()) => format!("Diagnostics written to {}", path.display()),
            Err(err) => {
                eprintln!("[ERROR] Diagnostics export failed: {err}");
                format!("Diagnostics export failed: {err}")
            }
        });
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            queue: &self.queue,
            now: Instant::now(),
            logged_events: self.diagnostics.len(),
            script_remaining: self.script.as_ref().map(ScriptPlayer::remaining),
            status: self.status.as_deref(),
        })
    }
}
