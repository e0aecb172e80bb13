// SPDX-License-Identifier: MPL-2.0
//! Presentation surface driven by the lightbox controller.

use crate::gallery::GalleryImage;

/// Output side of the lightbox: whatever actually draws the modal.
pub trait LightboxSurface {
    /// Makes the modal overlay visible.
    fn show(&mut self);

    /// Hides the modal overlay.
    fn hide(&mut self);

    /// Displays `image`, which sits at `position` in a gallery of `count`.
    fn render(&mut self, image: &GalleryImage, position: usize, count: usize);

    /// Locks or unlocks page scrolling behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// Declarative modal state consumed by the Iced view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalView {
    pub visible: bool,
    pub scroll_locked: bool,
    pub image: Option<GalleryImage>,
    pub position: usize,
    pub count: usize,
}

impl ModalView {
    /// "3 / 7" style counter, one-based.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.position + 1, self.count)
    }
}

impl LightboxSurface for ModalView {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn render(&mut self, image: &GalleryImage, position: usize, count: usize) {
        self.image = Some(image.clone());
        self.position = position;
        self.count = count;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
