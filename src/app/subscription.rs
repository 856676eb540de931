// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes window close requests and keyboard shortcuts to top-level messages.

use super::{Message, Operation};
use crate::ui::notifications;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match status {
                event::Status::Ignored => shortcut(&key, modifiers),
                event::Status::Captured => None,
            }
        }
        _ => None,
    })
}

/// Maps a key press to a counter shortcut.
///
/// `+` `=` `↑` increment, `-` `↓` decrement, `0` `r` reset, `Esc` dismisses
/// the banner. Chords with Ctrl/Alt/Logo are left alone.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowUp) | Key::Character("+" | "=") => {
            Some(Message::Counter(Operation::Increment))
        }
        Key::Named(Named::ArrowDown) | Key::Character("-") => {
            Some(Message::Counter(Operation::Decrement))
        }
        Key::Character("0" | "r" | "R") => Some(Message::Counter(Operation::Reset)),
        Key::Named(Named::Escape) => {
            Some(Message::Notification(notifications::Message::Dismiss))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(key: Key, modifiers: Modifiers) -> Option<Operation> {
        match shortcut(&key, modifiers) {
            Some(Message::Counter(operation)) => Some(operation),
            _ => None,
        }
    }

    #[test]
    fn plus_and_arrow_up_increment() {
        for key in [Key::Character("+".into()), Key::Named(Named::ArrowUp)] {
            assert_eq!(operation(key, Modifiers::empty()), Some(Operation::Increment));
        }
        // Shift+= produces "+" on most layouts
        assert_eq!(
            operation(Key::Character("+".into()), Modifiers::SHIFT),
            Some(Operation::Increment)
        );
    }

    #[test]
    fn minus_and_arrow_down_decrement() {
        for key in [Key::Character("-".into()), Key::Named(Named::ArrowDown)] {
            assert_eq!(operation(key, Modifiers::empty()), Some(Operation::Decrement));
        }
    }

    #[test]
    fn zero_and_r_reset() {
        for key in ["0", "r", "R"] {
            assert_eq!(
                operation(Key::Character(key.into()), Modifiers::empty()),
                Some(Operation::Reset)
            );
        }
    }

    #[test]
    fn escape_dismisses_notification() {
        assert!(matches!(
            shortcut(&Key::Named(Named::Escape), Modifiers::empty()),
            Some(Message::Notification(notifications::Message::Dismiss))
        ));
    }

    #[test]
    fn chords_are_ignored() {
        assert!(shortcut(&Key::Character("r".into()), Modifiers::CTRL).is_none());
        assert!(shortcut(&Key::Character("+".into()), Modifiers::ALT).is_none());
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert!(shortcut(&Key::Character("x".into()), Modifiers::empty()).is_none());
        assert!(shortcut(&Key::Named(Named::Enter), Modifiers::empty()).is_none());
    }
}
