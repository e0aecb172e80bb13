// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions.

use super::Message;
use crate::input::{Key, KeyPress};
use iced::keyboard::{self, key::Named};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick rate while something on the page is animating.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Translates an Iced key into the page's key vocabulary.
pub fn to_key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> KeyPress {
    let key = match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Space) => Key::Space,
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        keyboard::Key::Character(c) => c
            .chars()
            .next()
            .map_or(Key::Other, |c| Key::Character(c.to_ascii_lowercase())),
        _ => Key::Other,
    };
    KeyPress {
        key,
        command: modifiers.command(),
        shift: modifiers.shift(),
    }
}

/// Keyboard presses that no widget captured (text inputs keep their keys).
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(to_key_press(&key, modifiers))),
        _ => None,
    })
}

/// Ticks while reveal transitions or short timers are running.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Rotates the wait-time estimate.
pub fn create_wait_time_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(Message::RotateWaitTime)
}
