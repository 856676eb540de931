// SPDX-License-Identifier: MPL-2.0
//! Counter state and the operations a user can trigger on it.
//!
//! [`Controller`] owns the value, the active notification and the pulse
//! flag. It knows nothing about Iced: operations return the [`Timer`]s they
//! need armed, and the caller reports back through
//! [`Controller::notification_expired`] and [`Controller::pulse_elapsed`]
//! once the delays have passed.
//!
//! Every operation commits the value: it is written to the store and the
//! pulse is re-armed, whether or not the number actually changed.

mod pulse;

pub use pulse::Pulse;

use crate::app::config::{DEFAULT_NOTIFICATION_TIMEOUT_MS, DEFAULT_PULSE_DURATION_MS};
use crate::storage::KeyValueStore;
use crate::ui::notifications::{Notification, NotificationId};
use std::time::Duration;

/// Store key holding the decimal counter value.
pub const STORAGE_KEY: &str = "contador";

/// Delays used by the controller's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub notification_timeout: Duration,
    pub pulse_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            notification_timeout: Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            pulse_duration: Duration::from_millis(DEFAULT_PULSE_DURATION_MS),
        }
    }
}

/// A delayed callback the caller must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Call [`Controller::notification_expired`] with `id` after `after`.
    ClearNotification { id: NotificationId, after: Duration },
    /// Call [`Controller::pulse_elapsed`] with `generation` after `after`.
    EndPulse { generation: u64, after: Duration },
}

/// Parses a stored value the way a numeric coercion would.
///
/// Plain integers, decimal text with a fraction or exponent (`"3.0"`,
/// `"1e2"`) and `0x`/`0o`/`0b` literals are accepted as long as they denote a
/// whole, non-negative number that fits in `u64`. Everything else is 0.
#[must_use]
pub fn parse_stored_value(raw: Option<&str>) -> u64 {
    raw.map(str::trim)
        .filter(|text| !text.is_empty())
        .and_then(|text| {
            text.parse::<u64>()
                .ok()
                .or_else(|| parse_radix_literal(text))
                .or_else(|| parse_whole_float(text))
        })
        .unwrap_or(0)
}

fn parse_radix_literal(text: &str) -> Option<u64> {
    let (prefix, digits) = text.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    // from_str_radix would also take a sign, which these literals never carry
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

fn parse_whole_float(text: &str) -> Option<u64> {
    // Rust also reads "inf" and "nan"; both fail the finiteness check below
    let number = text.parse::<f64>().ok()?;
    if number.is_finite() && number >= 0.0 && number.fract() == 0.0 && number <= u64::MAX as f64
    {
        Some(number as u64)
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Controller<S> {
    store: S,
    value: u64,
    notification: Option<Notification>,
    pulse: Pulse,
    timing: Timing,
}

impl<S: KeyValueStore> Controller<S> {
    /// Creates a controller whose value is read from `store`.
    pub fn new(store: S, timing: Timing) -> Self {
        let raw = store.get(STORAGE_KEY);
        let value = parse_stored_value(raw.as_deref());
        if let Some(raw) = raw.as_deref() {
            if raw != value.to_string() {
                tracing::debug!(raw, value, "normalized stored counter value");
            }
        }

        Self {
            store,
            value,
            notification: None,
            pulse: Pulse::default(),
            timing,
        }
    }

    /// Commits the initial value: writes it back in canonical form and pulses once.
    #[must_use]
    pub fn mount(&mut self) -> Vec<Timer> {
        tracing::info!(value = self.value, "counter mounted");
        self.commit(None)
    }

    /// Adds one to the value.
    #[must_use]
    pub fn increment(&mut self) -> Vec<Timer> {
        self.value = self.value.saturating_add(1);
        tracing::debug!(value = self.value, "increment");
        self.commit(Some(Notification::success(
            "notification-counter-incremented",
        )))
    }

    /// Subtracts one from the value, unless it is already 0.
    #[must_use]
    pub fn decrement(&mut self) -> Vec<Timer> {
        let notification = if self.value == 0 {
            tracing::debug!("decrement blocked at floor");
            Notification::warn("notification-counter-floor")
        } else {
            self.value -= 1;
            tracing::debug!(value = self.value, "decrement");
            Notification::info("notification-counter-decremented")
        };
        self.commit(Some(notification))
    }

    /// Sets the value back to 0.
    #[must_use]
    pub fn reset(&mut self) -> Vec<Timer> {
        self.value = 0;
        tracing::debug!("reset");
        self.commit(Some(Notification::success("notification-counter-reset")))
    }

    /// Shows `notification`, replacing the active one.
    #[must_use]
    pub fn notify(&mut self, notification: Notification) -> Timer {
        let id = notification.id();
        self.notification = Some(notification);
        Timer::ClearNotification {
            id,
            after: self.timing.notification_timeout,
        }
    }

    /// Clears the notification right away.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Auto-clear callback. Only clears if `id` is still the active notification.
    pub fn notification_expired(&mut self, id: NotificationId) -> bool {
        if self.notification.as_ref().map(Notification::id) == Some(id) {
            self.notification = None;
            true
        } else {
            false
        }
    }

    /// Pulse timer callback.
    pub fn pulse_elapsed(&mut self, generation: u64) -> bool {
        self.pulse.elapse(generation)
    }

    /// Stops the pulse so no late timer can touch state after teardown.
    pub fn teardown(&mut self) {
        self.pulse.cancel();
        tracing::info!(value = self.value, "counter torn down");
    }

    fn commit(&mut self, notification: Option<Notification>) -> Vec<Timer> {
        let mut timers = Vec::with_capacity(2);

        let notification = match self.store.set(STORAGE_KEY, &self.value.to_string()) {
            Ok(()) => notification,
            Err(err) => {
                tracing::warn!(%err, value = self.value, "failed to persist counter");
                Some(Notification::error("notification-storage-write-error"))
            }
        };
        if let Some(notification) = notification {
            timers.push(self.notify(notification));
        }

        let generation = self.pulse.arm();
        timers.push(Timer::EndPulse {
            generation,
            after: self.timing.pulse_duration,
        });

        timers
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Message key of the active notification, or `""` when there is none.
    #[must_use]
    pub fn message_key(&self) -> &str {
        self.notification
            .as_ref()
            .map_or("", Notification::message_key)
    }

    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_active()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back, e.g. to re-initialize a controller from it.
    pub fn into_store(self) -> S {
        self.store
    }
}
