// SPDX-License-Identifier: MPL-2.0
//! Gallery thumbnails and the view-model entries derived from them.
//!
//! The page owns a list of [`Thumbnail`] elements (scanned from the gallery
//! directory by [`scanner`]). [`GalleryIndex`] turns whatever thumbnails are
//! present *at call time* into [`GalleryImage`] entries for the lightbox.
//!
//! # Contract
//!
//! `GalleryIndex::list()` never caches. Every call walks the thumbnail source
//! again, so a gallery that was rescanned or edited between two lightbox
//! interactions is always reflected on the next open or navigation.

pub mod scanner;

pub use scanner::{scan_directory, CAPTIONS_FILE};

/// Description shown for thumbnails that carry no description of their own.
pub const DEFAULT_DESCRIPTION: &str = "A look at our latest nail and spa work";

/// A thumbnail element as it appears in the gallery section of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Image path or URL.
    pub source: String,
    /// Optional caption text.
    pub caption: Option<String>,
    /// Optional longer description.
    pub description: Option<String>,
}

impl Thumbnail {
    /// Creates a thumbnail with no caption or description.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            caption: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Anything that can report the thumbnails currently on the page.
pub trait ThumbnailSource {
    /// Thumbnails in document order.
    fn thumbnails(&self) -> &[Thumbnail];
}

impl ThumbnailSource for [Thumbnail] {
    fn thumbnails(&self) -> &[Thumbnail] {
        self
    }
}

impl ThumbnailSource for Vec<Thumbnail> {
    fn thumbnails(&self) -> &[Thumbnail] {
        self
    }
}

/// Read-only lightbox entry. Identity is its position in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub source: String,
    pub title: String,
    pub description: String,
}

impl GalleryImage {
    fn from_thumbnail(position: usize, thumbnail: &Thumbnail) -> Self {
        let title = non_blank(thumbnail.caption.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| placeholder_title(position));
        let description = non_blank(thumbnail.description.as_deref())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        Self {
            source: thumbnail.source.clone(),
            title,
            description,
        }
    }
}

/// Title used for a thumbnail without a caption, numbered from 1.
pub fn placeholder_title(position: usize) -> String {
    format!("Gallery Image {}", position + 1)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Derives lightbox entries from a thumbnail source.
#[derive(Debug)]
pub struct GalleryIndex<'a, T: ThumbnailSource + ?Sized> {
    source: &'a T,
}

impl<'a, T: ThumbnailSource + ?Sized> GalleryIndex<'a, T> {
    pub fn new(source: &'a T) -> Self {
        Self { source }
    }

    /// Returns one entry per thumbnail, in document order.
    pub fn list(&self) -> Vec<GalleryImage> {
        self.source
            .thumbnails()
            .iter()
            .enumerate()
            .map(|(position, thumbnail)| GalleryImage::from_thumbnail(position, thumbnail))
            .collect()
    }

    /// Number of thumbnails currently present.
    pub fn len(&self) -> usize {
        self.source.thumbnails().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `index`, if the gallery currently has one there.
    pub fn get(&self, index: usize) -> Option<GalleryImage> {
        self.source
            .thumbnails()
            .get(index)
            .map(|thumbnail| GalleryImage::from_thumbnail(index, thumbnail))
    }
}
