// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer for the gallery section.
//!
//! [`LightboxController`] owns the open/closed state and the current index.
//! It never caches gallery content: every open and every navigation asks a
//! [`ThumbnailSource`] for the thumbnails present right now, so the index
//! invariant (`index < count` while open) is re-established with wraparound
//! arithmetic on each step rather than assumed.
//!
//! Invalid requests (empty gallery, index past the end) are ignored. A
//! decorative component must not take the page down with it.

pub mod surface;

pub use surface::{LightboxSurface, ModalView};

use crate::gallery::{GalleryIndex, ThumbnailSource};
use crate::input::{Key, KeyPress};

/// Lightbox state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// Navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Applies one step to `index` in a gallery of `count` entries.
    ///
    /// `count` must be non-zero.
    fn step(self, index: usize, count: usize) -> usize {
        let index = index % count;
        match self {
            Direction::Next => (index + 1) % count,
            Direction::Previous => (index + count - 1) % count,
        }
    }
}

/// Input events the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer activation on the thumbnail at this position.
    ThumbnailActivated(usize),
    /// Key press while the thumbnail at `index` has focus.
    ThumbnailKey { index: usize, key: KeyPress },
    PreviousControl,
    NextControl,
    CloseControl,
    /// Click on the modal; `inside_content` is true when it landed on the
    /// image/caption panel rather than the backdrop.
    ModalClicked { inside_content: bool },
    /// Key press anywhere on the page.
    Key(KeyPress),
}

/// Owns the lightbox state and the lazily created presentation surface.
#[derive(Debug)]
pub struct LightboxController<S> {
    state: LightboxState,
    surface: Option<S>,
    build_surface: fn() -> S,
}

impl<S: LightboxSurface + Default> LightboxController<S> {
    pub fn new() -> Self {
        Self::with_surface_builder(S::default)
    }
}

impl<S: LightboxSurface + Default> Default for LightboxController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LightboxSurface> LightboxController<S> {
    /// Uses `build_surface` to construct the modal on the first open.
    pub fn with_surface_builder(build_surface: fn() -> S) -> Self {
        Self {
            state: LightboxState::Closed,
            surface: None,
            build_surface,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// The modal surface, once it has been built by a first open.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Opens the lightbox on the image at `index`.
    ///
    /// Returns `false` and leaves the state untouched when the gallery has
    /// no image at that position.
    pub fn open<T>(&mut self, source: &T, index: usize) -> bool
    where
        T: ThumbnailSource + ?Sized,
    {
        let gallery = GalleryIndex::new(source);
        let count = gallery.len();
        let Some(image) = gallery.get(index) else {
            tracing::debug!(index, count, "ignoring lightbox open outside gallery");
            return false;
        };

        let build = self.build_surface;
        let surface = self.surface.get_or_insert_with(build);
        surface.render(&image, index, count);
        surface.show();
        surface.set_scroll_locked(true);

        self.state = LightboxState::Open(index);
        tracing::debug!(index, count, "lightbox opened");
        true
    }

    /// Steps to the neighbouring image, wrapping at both ends.
    ///
    /// No-op while closed or when the gallery is currently empty.
    pub fn navigate<T>(&mut self, source: &T, direction: Direction) -> bool
    where
        T: ThumbnailSource + ?Sized,
    {
        let LightboxState::Open(index) = self.state else {
            return false;
        };

        let gallery = GalleryIndex::new(source);
        let count = gallery.len();
        if count == 0 {
            tracing::debug!("ignoring lightbox navigation in empty gallery");
            return false;
        }

        let next = direction.step(index, count);
        let Some(image) = gallery.get(next) else {
            return false;
        };

        if let Some(surface) = self.surface.as_mut() {
            surface.render(&image, next, count);
        }
        self.state = LightboxState::Open(next);
        true
    }

    /// Closes the lightbox. Closing a closed lightbox does nothing.
    pub fn close(&mut self) -> bool {
        if self.state == LightboxState::Closed {
            return false;
        }

        if let Some(surface) = self.surface.as_mut() {
            surface.hide();
            surface.set_scroll_locked(false);
        }
        self.state = LightboxState::Closed;
        tracing::debug!("lightbox closed");
        true
    }

    /// Routes an input trigger. Returns `true` when the trigger was consumed,
    /// which keeps page-wide keyboard shortcuts from firing on the same key.
    pub fn handle<T>(&mut self, source: &T, trigger: Trigger) -> bool
    where
        T: ThumbnailSource + ?Sized,
    {
        match trigger {
            Trigger::ThumbnailActivated(index) => self.open(source, index),
            Trigger::ThumbnailKey { index, key } if key.is_activation() => {
                self.open(source, index)
            }
            Trigger::ThumbnailKey { .. } => false,
            Trigger::PreviousControl => self.navigate(source, Direction::Previous),
            Trigger::NextControl => self.navigate(source, Direction::Next),
            Trigger::CloseControl => self.close(),
            Trigger::ModalClicked { inside_content } => !inside_content && self.close(),
            Trigger::Key(press) => self.handle_key(source, press),
        }
    }

    fn handle_key<T>(&mut self, source: &T, press: KeyPress) -> bool
    where
        T: ThumbnailSource + ?Sized,
    {
        if !self.is_open() || press.command {
            return false;
        }

        match press.key {
            Key::Escape => self.close(),
            Key::ArrowLeft => {
                self.navigate(source, Direction::Previous);
                true
            }
            Key::ArrowRight => {
                self.navigate(source, Direction::Next);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;

    fn gallery(titles: &[&str]) -> Vec<Thumbnail> {
        titles
            .iter()
            .map(|title| Thumbnail::new(format!("{}.jpg", title.to_lowercase())).with_caption(*title))
            .collect()
    }

    fn shown_title(controller: &LightboxController<ModalView>) -> Option<String> {
        controller
            .surface()
            .and_then(|view| view.image.as_ref())
            .map(|image| image.title.clone())
    }

    #[test]
    fn starts_closed_without_surface() {
        let controller = LightboxController::<ModalView>::new();
        assert_eq!(controller.state(), LightboxState::Closed);
        assert!(controller.surface().is_none());
    }

    #[test]
    fn open_valid_index_shows_that_image() {
        let thumbnails = gallery(&["A", "B", "C"]);
        let mut controller = LightboxController::<ModalView>::new();

        assert!(controller.open(&thumbnails, 1));

        assert_eq!(controller.state(), LightboxState::Open(1));
        let view = controller.surface().expect("surface built on open");
        assert!(view.visible);
        assert!(view.scroll_locked);
        assert_eq!(shown_title(&controller).as_deref(), Some("B"));
    }

    #[test]
    fn open_empty_gallery_is_ignored() {
        let thumbnails: Vec<Thumbnail> = Vec::new();
        let mut controller = LightboxController::<ModalView>::new();

        assert!(!controller.open(&thumbnails, 0));

        assert_eq!(controller.state(), LightboxState::Closed);
        assert!(controller.surface().is_none());
    }

    #[test]
    fn open_out_of_range_keeps_current_state() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 0);

        assert!(!controller.open(&thumbnails, 5));

        assert_eq!(controller.state(), LightboxState::Open(0));
        assert_eq!(shown_title(&controller).as_deref(), Some("A"));
    }

    #[test]
    fn navigate_wraps_forward_and_backward() {
        let thumbnails = gallery(&["A", "B", "C"]);
        let mut controller = LightboxController::<ModalView>::new();

        controller.open(&thumbnails, 2);
        controller.navigate(&thumbnails, Direction::Next);
        assert_eq!(controller.state(), LightboxState::Open(0));

        controller.navigate(&thumbnails, Direction::Previous);
        assert_eq!(controller.state(), LightboxState::Open(2));
        assert_eq!(shown_title(&controller).as_deref(), Some("C"));
    }

    #[test]
    fn navigate_while_closed_is_ignored() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();

        assert!(!controller.navigate(&thumbnails, Direction::Next));
        assert_eq!(controller.state(), LightboxState::Closed);
    }

    #[test]
    fn navigate_after_gallery_emptied_is_ignored() {
        let mut thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 1);

        thumbnails.clear();
        assert!(!controller.navigate(&thumbnails, Direction::Next));
        assert_eq!(controller.state(), LightboxState::Open(1));
    }

    #[test]
    fn navigate_after_gallery_shrank_rewraps_index() {
        let mut thumbnails = gallery(&["A", "B", "C", "D"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 3);

        thumbnails.truncate(2);
        controller.navigate(&thumbnails, Direction::Next);

        // Stored index 3 becomes 1 in a gallery of two, then steps to 0.
        assert_eq!(controller.state(), LightboxState::Open(0));
        assert_eq!(shown_title(&controller).as_deref(), Some("A"));
    }

    #[test]
    fn close_hides_modal_and_unlocks_scroll() {
        let thumbnails = gallery(&["A"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 0);

        assert!(controller.close());

        assert_eq!(controller.state(), LightboxState::Closed);
        let view = controller.surface().expect("surface kept after close");
        assert!(!view.visible);
        assert!(!view.scroll_locked);
    }

    #[test]
    fn close_twice_is_same_as_once() {
        let thumbnails = gallery(&["A"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 0);

        controller.close();
        let after_first = controller.surface().cloned();
        assert!(!controller.close());

        assert_eq!(controller.state(), LightboxState::Closed);
        assert_eq!(controller.surface().cloned(), after_first);
    }

    #[test]
    fn reopen_after_close_starts_at_requested_index() {
        let thumbnails = gallery(&["A", "B", "C"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 0);
        controller.navigate(&thumbnails, Direction::Next);
        controller.close();

        controller.open(&thumbnails, 2);

        assert_eq!(controller.state(), LightboxState::Open(2));
        assert_eq!(shown_title(&controller).as_deref(), Some("C"));
    }

    #[test]
    fn repeated_open_renders_identically() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();

        controller.open(&thumbnails, 1);
        let first = controller.surface().cloned();
        controller.open(&thumbnails, 1);

        assert_eq!(controller.surface().cloned(), first);
    }

    #[derive(Debug, Default)]
    struct CountingSurface {
        shows: usize,
        renders: usize,
    }

    impl LightboxSurface for CountingSurface {
        fn show(&mut self) {
            self.shows += 1;
        }
        fn hide(&mut self) {}
        fn render(&mut self, _image: &crate::gallery::GalleryImage, _position: usize, _count: usize) {
            self.renders += 1;
        }
        fn set_scroll_locked(&mut self, _locked: bool) {}
    }

    #[test]
    fn surface_is_built_once_and_reused() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<CountingSurface>::new();

        controller.open(&thumbnails, 0);
        controller.close();
        controller.open(&thumbnails, 1);

        let surface = controller.surface().expect("surface built");
        assert_eq!(surface.shows, 2);
        assert_eq!(surface.renders, 2);
    }

    #[test]
    fn thumbnail_enter_and_space_open() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();

        let trigger = Trigger::ThumbnailKey {
            index: 1,
            key: KeyPress::plain(Key::Space),
        };
        assert!(controller.handle(&thumbnails, trigger));
        assert_eq!(controller.state(), LightboxState::Open(1));

        controller.close();
        let other_key = Trigger::ThumbnailKey {
            index: 0,
            key: KeyPress::plain(Key::Character('x')),
        };
        assert!(!controller.handle(&thumbnails, other_key));
        assert_eq!(controller.state(), LightboxState::Closed);
    }

    #[test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let thumbnails = gallery(&["A"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.open(&thumbnails, 0);

        controller.handle(&thumbnails, Trigger::ModalClicked { inside_content: true });
        assert!(controller.is_open());

        controller.handle(&thumbnails, Trigger::ModalClicked { inside_content: false });
        assert!(!controller.is_open());
    }

    #[test]
    fn arrow_keys_navigate_only_while_open() {
        let thumbnails = gallery(&["A", "B", "C"]);
        let mut controller = LightboxController::<ModalView>::new();

        assert!(!controller.handle(&thumbnails, Trigger::Key(Key::ArrowRight.into())));
        assert_eq!(controller.state(), LightboxState::Closed);

        controller.open(&thumbnails, 0);
        assert!(controller.handle(&thumbnails, Trigger::Key(Key::ArrowLeft.into())));
        assert_eq!(controller.state(), LightboxState::Open(2));
        controller.handle(&thumbnails, Trigger::Key(Key::ArrowRight.into()));
        assert_eq!(controller.state(), LightboxState::Open(0));
    }

    #[test]
    fn escape_closes_when_open_and_is_not_consumed_when_closed() {
        let thumbnails = gallery(&["A"]);
        let mut controller = LightboxController::<ModalView>::new();

        assert!(!controller.handle(&thumbnails, Trigger::Key(Key::Escape.into())));

        controller.open(&thumbnails, 0);
        assert!(controller.handle(&thumbnails, Trigger::Key(Key::Escape.into())));
        assert!(!controller.is_open());
    }

    #[test]
    fn controls_map_to_navigation_and_close() {
        let thumbnails = gallery(&["A", "B"]);
        let mut controller = LightboxController::<ModalView>::new();
        controller.handle(&thumbnails, Trigger::ThumbnailActivated(0));

        controller.handle(&thumbnails, Trigger::NextControl);
        assert_eq!(controller.state(), LightboxState::Open(1));
        controller.handle(&thumbnails, Trigger::PreviousControl);
        assert_eq!(controller.state(), LightboxState::Open(0));
        controller.handle(&thumbnails, Trigger::CloseControl);
        assert_eq!(controller.state(), LightboxState::Closed);
    }
}
