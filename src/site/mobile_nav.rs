// SPDX-License-Identifier: MPL-2.0
//! Hamburger menu for narrow layouts.

/// Glyph shown on the hamburger control while the menu is closed.
pub const MENU_ICON: &str = "☰";
/// Glyph shown on the hamburger control while the menu is open.
pub const CLOSE_ICON: &str = "✕";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was activated. In-page anchors close the menu.
    pub fn link_activated(&mut self, href: &str) {
        if href.starts_with('#') {
            self.open = false;
        }
    }

    /// Escape was pressed. Returns `true` when the menu was open, in which
    /// case focus should return to the hamburger control.
    pub fn escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn aria_expanded(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> &'static str {
        if self.open {
            CLOSE_ICON
        } else {
            MENU_ICON
        }
    }

    /// The page behind an open menu does not scroll.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state_and_derived_flags() {
        let mut nav = MobileNav::new();
        assert_eq!(nav.icon(), MENU_ICON);

        nav.toggle();
        assert!(nav.is_open());
        assert!(nav.aria_expanded());
        assert!(nav.scroll_locked());
        assert_eq!(nav.icon(), CLOSE_ICON);

        nav.toggle();
        assert!(!nav.is_open());
        assert!(!nav.scroll_locked());
    }

    #[test]
    fn anchor_link_closes_menu() {
        let mut nav = MobileNav::new();
        nav.toggle();
        nav.link_activated("#services");
        assert!(!nav.is_open());
    }

    #[test]
    fn external_link_leaves_menu_open() {
        let mut nav = MobileNav::new();
        nav.toggle();
        nav.link_activated("https://example.com/book");
        assert!(nav.is_open());
    }

    #[test]
    fn escape_reports_whether_focus_should_return() {
        let mut nav = MobileNav::new();
        assert!(!nav.escape());

        nav.toggle();
        assert!(nav.escape());
        assert!(!nav.is_open());
    }
}
