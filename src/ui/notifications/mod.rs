// SPDX-License-Identifier: MPL-2.0
//! Notification banner for transient user feedback.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record with a closed `Severity` set
//! - [`banner`] - stateless `Banner` view rendering at most one notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Banner, Notification};
//!
//! let notification = Notification::success("notification-counter-incremented");
//! let banner = Banner::view(Some(&notification), &i18n, Message::Notification(NotificationMessage::Dismiss));
//! ```
//!
//! Lifecycle (auto-clear, dismissal, replacement) is owned by the counter
//! controller, not by this module.

mod banner;
mod notification;

pub use banner::Banner;
pub use notification::{Notification, NotificationId, Severity};

/// Messages emitted by the banner or by its auto-clear timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user pressed the close button.
    Dismiss,
    /// The auto-clear timer armed for this notification fired.
    Expired(NotificationId),
}
