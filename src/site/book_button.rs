// SPDX-License-Identifier: MPL-2.0
//! Floating "Book now" button that slides away while scrolling down.

use crate::config::DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX;

/// Vertical slide applied to the button while hidden.
pub const HIDDEN_OFFSET_Y: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookButton {
    last_scroll_top: f32,
    visible: bool,
    hide_threshold: f32,
}

impl Default for BookButton {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX)
    }
}

impl BookButton {
    pub fn new(hide_threshold: f32) -> Self {
        Self {
            last_scroll_top: 0.0,
            visible: true,
            hide_threshold,
        }
    }

    /// Hides the button while scrolling down past the threshold; any other
    /// movement brings it back.
    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.visible = !(scroll_top > self.last_scroll_top && scroll_top > self.hide_threshold);
        self.last_scroll_top = scroll_top;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn offset_y(&self) -> f32 {
        if self.visible {
            0.0
        } else {
            HIDDEN_OFFSET_Y
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}
