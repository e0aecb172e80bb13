// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent keyboard input.
//!
//! The application layer translates Iced keyboard events into [`KeyPress`]
//! values so the page behaviors can be driven and tested without a window.

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Tab,
    /// A printable character, lower-cased.
    Character(char),
    Other,
}

/// A key press together with the modifier state that matters to shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub command: bool,
    pub shift: bool,
}

impl KeyPress {
    /// A press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            command: false,
            shift: false,
        }
    }

    /// A press with the platform command modifier held.
    pub fn command(key: Key) -> Self {
        Self {
            key,
            command: true,
            shift: false,
        }
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Enter or Space without modifiers, the keyboard equivalent of a click.
    pub fn is_activation(&self) -> bool {
        !self.command && matches!(self.key, Key::Enter | Key::Space)
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(KeyPress::plain(Key::Enter).is_activation());
        assert!(KeyPress::plain(Key::Space).is_activation());
        assert!(!KeyPress::plain(Key::Escape).is_activation());
    }

    #[test]
    fn command_modified_enter_is_not_activation() {
        assert!(!KeyPress::command(Key::Enter).is_activation());
    }
}
