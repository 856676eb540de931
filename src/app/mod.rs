// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the counter controller to Iced: it picks the store,
//! applies preferences from `settings.toml`, forwards messages to the
//! controller and schedules the timers the controller asks for.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Operation};

use crate::counter::Controller;
use crate::i18n::I18n;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    controller: Controller<Box<dyn KeyValueStore>>,
    theme_mode: ThemeMode,
    /// Abort handle of the pending pulse timer.
    pulse_task: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("value", &self.controller.value())
            .field("notification", &self.controller.notification())
            .field("pulsing", &self.controller.is_pulsing())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 460;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Builds the window settings.
///
/// Close requests are handled by the app so pending timers can be cancelled
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Writes the default preferences on first launch so users have a file to edit.
fn seed_config(config: &config::Config) {
    let Some(path) = config::config_path_with_override(None) else {
        return;
    };
    if path.exists() {
        return;
    }
    match config::save(config) {
        Ok(()) => tracing::info!(path = %path.display(), "wrote default settings"),
        Err(err) => tracing::warn!(path = %path.display(), %err, "could not write default settings"),
    }
}

/// Folds the load warnings into the single banner shown after mount.
///
/// Only one notification is visible at a time, so several problems collapse
/// into one combined message instead of replacing each other.
fn startup_notification(warnings: Vec<String>) -> Option<Notification> {
    match warnings.len() {
        0 => None,
        1 => warnings.into_iter().next().map(Notification::warn),
        _ => {
            tracing::warn!(?warnings, "several startup problems, showing combined notice");
            Some(Notification::warn("notification-startup-load-errors"))
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
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
    /// Loads preferences and the stored value, then mounts the controller.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        if !flags.ephemeral && config_warning.is_none() {
            seed_config(&config);
        }
        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let store: Box<dyn KeyValueStore> = if flags.ephemeral {
            tracing::info!("ephemeral session, counter will not be persisted");
            Box::new(MemoryStore::new())
        } else {
            let (store, store_warning) = FileStore::load();
            if let Some(path) = store.path() {
                tracing::info!(path = %path.display(), "using counter store");
            }
            warnings.extend(store_warning);
            Box::new(store)
        };

        let mut app = App {
            i18n: I18n::new(),
            controller: Controller::new(store, config.timing()),
            theme_mode: config.general.theme_mode,
            pulse_task: None,
        };

        let mut timers = app.controller.mount();
        if let Some(notification) = startup_notification(warnings) {
            timers.push(app.controller.notify(notification));
        }

        let task = update::schedule(&mut app.pulse_task, timers);
        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - {}", self.controller.value(), self.i18n.tr("window-title"))
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            pulse_task: &mut self.pulse_task,
        };

        match message {
            Message::Counter(operation) => update::handle_operation(&mut ctx, operation),
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::PulseElapsed(generation) => update::handle_pulse_elapsed(&mut ctx, generation),
            Message::WindowCloseRequested(window_id) => {
                update::handle_close_request(&mut ctx, window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{Timing, STORAGE_KEY};
    use crate::ui::notifications::{self, Severity};

    fn app_with(store: MemoryStore) -> App {
        App {
            i18n: I18n::new(),
            controller: Controller::new(Box::new(store), Timing::default()),
            theme_mode: ThemeMode::Light,
            pulse_task: None,
        }
    }

    #[test]
    fn title_shows_value_and_app_name() {
        let app = app_with(MemoryStore::new().with_entry(STORAGE_KEY, "12"));
        assert_eq!(app.title(), "12 - Click Counter");
    }

    #[test]
    fn counter_messages_drive_controller_and_store() {
        let mut app = app_with(MemoryStore::new());

        let _ = app.update(Message::Counter(Operation::Increment));
        let _ = app.update(Message::Counter(Operation::Increment));
        let _ = app.update(Message::Counter(Operation::Decrement));

        assert_eq!(app.controller.value(), 1);
        assert_eq!(app.controller.store().get(STORAGE_KEY).as_deref(), Some("1"));
        assert!(app.controller.is_pulsing());
        assert!(app.pulse_task.is_some());
    }

    #[test]
    fn decrement_at_zero_shows_warning() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::Counter(Operation::Decrement));

        assert_eq!(app.controller.value(), 0);
        assert_eq!(
            app.controller.notification().map(Notification::severity),
            Some(Severity::Warn)
        );
    }

    #[test]
    fn dismiss_message_clears_banner() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::Counter(Operation::Reset));
        assert!(app.controller.notification().is_some());

        let _ = app.update(Message::Notification(notifications::Message::Dismiss));
        assert!(app.controller.notification().is_none());
    }

    #[test]
    fn expired_message_clears_matching_notification_only() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::Counter(Operation::Increment));
        let stale = app.controller.notification().map(Notification::id);
        let _ = app.update(Message::Counter(Operation::Increment));
        let current = app.controller.notification().map(Notification::id);

        if let Some(stale) = stale {
            let _ = app.update(Message::Notification(notifications::Message::Expired(stale)));
        }
        assert!(app.controller.notification().is_some());

        if let Some(current) = current {
            let _ = app.update(Message::Notification(notifications::Message::Expired(
                current,
            )));
        }
        assert!(app.controller.notification().is_none());
    }

    #[test]
    fn close_request_stops_pulse() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::Counter(Operation::Increment));
        assert!(app.pulse_task.is_some());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.pulse_task.is_none());
        assert!(!app.controller.is_pulsing());
    }

    #[test]
    fn single_startup_warning_is_shown_as_is() {
        let notification =
            startup_notification(vec!["notification-storage-load-error".to_string()]);
        assert_eq!(
            notification.as_ref().map(Notification::message_key),
            Some("notification-storage-load-error")
        );
        assert!(startup_notification(Vec::new()).is_none());
    }

    #[test]
    fn both_startup_warnings_survive_as_one_notice() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.controller.mount();

        let notification = startup_notification(vec![
            "notification-config-load-error".to_string(),
            "notification-storage-load-error".to_string(),
        ])
        .expect("combined notice");
        let _ = app.controller.notify(notification);

        assert_eq!(app.controller.message_key(), "notification-startup-load-errors");
        assert_eq!(
            app.controller.notification().map(Notification::severity),
            Some(Severity::Warn)
        );
        assert!(!app.i18n.tr("notification-startup-load-errors").starts_with("MISSING"));
    }

    #[test]
    fn window_settings_keep_close_request_for_the_app() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
    }
}
