// SPDX-License-Identifier: MPL-2.0
//! Page-wide keyboard shortcuts.

use crate::input::{Key, KeyPress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+B: same as pressing the floating booking button.
    Book,
    /// Ctrl/Cmd+Shift+C: dial the salon.
    Call,
}

/// Maps a key press to a shortcut, if any.
pub fn match_shortcut(press: KeyPress) -> Option<Shortcut> {
    if !press.command {
        return None;
    }
    match press.key {
        Key::Character('b') => Some(Shortcut::Book),
        Key::Character('c') if press.shift => Some(Shortcut::Call),
        _ => None,
    }
}

/// `tel:` URI for a display phone number, keeping digits and a leading `+`.
pub fn tel_uri(phone: &str) -> String {
    let mut digits = String::with_capacity(phone.len());
    for (i, c) in phone.trim().chars().enumerate() {
        if c.is_ascii_digit() || (i == 0 && c == '+') {
            digits.push(c);
        }
    }
    format!("tel:{digits}")
}
