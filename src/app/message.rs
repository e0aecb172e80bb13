// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::input::KeyPress;
use crate::ui::{lightbox_view, navbar, page};
use std::time::Instant;

/// Messages consumed by `App::update`. View messages are forwarded from the
/// component that produced them.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Lightbox(lightbox_view::Message),
    /// A key press no widget captured.
    KeyPressed(KeyPress),
    /// Fine-grained tick for reveal transitions and short timers.
    Tick(Instant),
    RotateWaitTime(Instant),
}

/// Runtime flags from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory of gallery images, ahead of the settings file.
    pub gallery_dir: Option<String>,
    /// Directory containing Fluent `.ftl` files.
    pub i18n_dir: Option<String>,
    /// Takes precedence over `GOLD_NAILS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `GOLD_NAILS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
