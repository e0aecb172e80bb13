// SPDX-License-Identifier: MPL-2.0
//! `gold_nails` is a desktop rendition of the Gold Nails & Spa site, built
//! with the Iced GUI framework.
//!
//! The core is the gallery [`lightbox`]: a modal viewer with keyboard and
//! pointer navigation over the page's thumbnails. Around it, [`site`] holds
//! the page behaviors (scroll spy, reveal on scroll, mobile navigation, the
//! contact form, the floating booking button) as plain state machines that
//! the [`app`] layer drives from Iced messages.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod input;
pub mod lightbox;
pub mod site;
pub mod ui;
