// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Controller operations hand back [`Timer`]s; this module turns them into
//! Iced tasks that sleep on the Tokio runtime and then feed a message back
//! into `App::update`.

use super::{Message, Operation};
use crate::counter::{Controller, Timer};
use crate::storage::KeyValueStore;
use crate::ui::notifications;
use iced::{task, window, Task};
use std::time::Duration;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller<Box<dyn KeyValueStore>>,
    /// Abort handle of the pending pulse timer, if any.
    pub pulse_task: &'a mut Option<task::Handle>,
}

pub fn handle_operation(ctx: &mut UpdateContext<'_>, operation: Operation) -> Task<Message> {
    let timers = match operation {
        Operation::Increment => ctx.controller.increment(),
        Operation::Decrement => ctx.controller.decrement(),
        Operation::Reset => ctx.controller.reset(),
    };
    schedule(ctx.pulse_task, timers)
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    match message {
        notifications::Message::Dismiss => ctx.controller.dismiss_notification(),
        notifications::Message::Expired(id) => {
            if !ctx.controller.notification_expired(id) {
                tracing::trace!(?id, "stale notification timer ignored");
            }
        }
    }
    Task::none()
}

pub fn handle_pulse_elapsed(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    if ctx.controller.pulse_elapsed(generation) {
        *ctx.pulse_task = None;
    }
    Task::none()
}

/// Cancels pending timers that would otherwise touch state after the window
/// is gone, then closes it.
pub fn handle_close_request(ctx: &mut UpdateContext<'_>, window_id: window::Id) -> Task<Message> {
    if let Some(handle) = ctx.pulse_task.take() {
        handle.abort();
    }
    ctx.controller.teardown();
    window::close(window_id)
}

/// Converts controller timers into delayed tasks.
///
/// A new pulse timer aborts the previous one so only the latest pulse runs.
pub fn schedule(pulse_task: &mut Option<task::Handle>, timers: Vec<Timer>) -> Task<Message> {
    Task::batch(timers.into_iter().map(|timer| match timer {
        Timer::ClearNotification { id, after } => {
            Task::perform(delay(after), move |()| {
                Message::Notification(notifications::Message::Expired(id))
            })
        }
        Timer::EndPulse { generation, after } => {
            let (task, handle) =
                Task::perform(delay(after), move |()| Message::PulseElapsed(generation))
                    .abortable();
            if let Some(previous) = pulse_task.replace(handle) {
                previous.abort();
            }
            task
        }
    }))
}

/// The sleep is created on first poll, inside the runtime.
async fn delay(after: Duration) {
    tokio::time::sleep(after).await;
}
