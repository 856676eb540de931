// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A counter button was pressed or its shortcut typed.
    Counter(Operation),
    /// Banner dismissal or notification auto-clear.
    Notification(notifications::Message),
    /// The pulse timer of the given generation fired.
    PulseElapsed(u64),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Counter operations triggered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
    Reset,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the counter store).
    /// Takes precedence over `ICED_COUNTER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COUNTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Keep the counter in memory only; nothing is read from or written to disk.
    pub ephemeral: bool,
}
