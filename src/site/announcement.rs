// SPDX-License-Identifier: MPL-2.0
//! Startup banner for assistive technology and the page "loaded" flag.

use std::time::{Duration, Instant};

/// How long the live-region message stays on the page.
pub const ANNOUNCEMENT_DURATION: Duration = Duration::from_secs(3);
/// Delay before the page is marked loaded.
pub const LOADED_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Announcement {
    started_at: Instant,
    message: Option<String>,
    loaded: bool,
}

impl Announcement {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            started_at: now,
            message: Some(message.into()),
            loaded: false,
        }
    }

    /// Advances timers: sets `loaded`, then removes the message.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= LOADED_DELAY {
            self.loaded = true;
        }
        if elapsed >= ANNOUNCEMENT_DURATION {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether ticks are still needed.
    pub fn is_pending(&self) -> bool {
        self.message.is_some() || !self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_removed_after_duration() {
        let start = Instant::now();
        let mut announcement = Announcement::new("Welcome", start);
        assert_eq!(announcement.message(), Some("Welcome"));

        announcement.tick(start + Duration::from_secs(2));
        assert!(announcement.message().is_some());

        announcement.tick(start + ANNOUNCEMENT_DURATION);
        assert_eq!(announcement.message(), None);
        assert!(!announcement.is_pending());
    }

    #[test]
    fn loaded_flag_set_after_short_delay() {
        let start = Instant::now();
        let mut announcement = Announcement::new("Welcome", start);
        announcement.tick(start + Duration::from_millis(50));
        assert!(!announcement.is_loaded());
        announcement.tick(start + LOADED_DELAY);
        assert!(announcement.is_loaded());
    }
}
