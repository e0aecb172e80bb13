// SPDX-License-Identifier: MPL-2.0
//! Application root: loads configuration and persisted state, builds the
//! page, and wires Iced messages to the lightbox and page behaviors.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::{scan_directory, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::lightbox::{LightboxController, ModalView};
use crate::site::{Page, PageSettings};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::AppState;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    page: Page,
    lightbox: LightboxController<ModalView>,
    /// Display phone number, also used for the call shortcut.
    phone: String,
    wait_time_interval: Duration,
    app_state: AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lightbox", &self.lightbox.state())
            .field("scroll_y", &self.page.scroll_y())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Gallery directory in priority order: command line, settings file, then
/// the directory used last time.
fn resolve_gallery_dir(
    flags: &Flags,
    config: &Config,
    app_state: &AppState,
) -> Option<PathBuf> {
    flags
        .gallery_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.gallery.directory.clone())
        .or_else(|| app_state.last_gallery_directory.clone())
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        if let Some(key) = config_warning {
            tracing::warn!(message = %i18n.tr(&key), "configuration fell back to defaults");
        }

        let (mut app_state, state_warning) = AppState::load();
        if let Some(key) = state_warning {
            tracing::warn!(message = %i18n.tr(&key), "persisted state fell back to defaults");
        }

        let thumbnails = Self::load_gallery(&flags, &config, &mut app_state);
        let app = Self::from_parts(i18n, &config, thumbnails, app_state, Instant::now());
        tracing::info!("{}", app.page.loyalty.log_line());
        (app, Task::none())
    }

    fn load_gallery(flags: &Flags, config: &Config, app_state: &mut AppState) -> Vec<Thumbnail> {
        let Some(directory) = resolve_gallery_dir(flags, config, app_state) else {
            tracing::info!("no gallery directory configured");
            return Vec::new();
        };

        match scan_directory(&directory, config.gallery.sort_order.unwrap_or_default()) {
            Ok(thumbnails) => {
                tracing::info!(
                    directory = %directory.display(),
                    count = thumbnails.len(),
                    "gallery loaded"
                );
                if app_state.remember_gallery_directory(&directory) {
                    if let Some(key) = app_state.save() {
                        tracing::warn!(%key, "could not remember gallery directory");
                    }
                }
                thumbnails
            }
            Err(err) => {
                tracing::warn!(directory = %directory.display(), %err, "failed to scan gallery");
                Vec::new()
            }
        }
    }

    /// Builds the application from already loaded pieces.
    fn from_parts(
        i18n: I18n,
        config: &Config,
        thumbnails: Vec<Thumbnail>,
        app_state: AppState,
        now: Instant,
    ) -> Self {
        let settings = PageSettings {
            header_offset: config.site.header_offset(),
            book_button_hide_threshold: config.site.book_button_hide_threshold(),
            form_reset_after: config.site.form_reset(),
            submit_label: i18n.tr("form-submit"),
            announcement: i18n.tr("announcement-loaded"),
            loyalty_points: app_state.loyalty_points,
        };
        let page = Page::new(thumbnails, settings, &mut rand::rng(), now);

        Self {
            i18n,
            page,
            lightbox: LightboxController::new(),
            phone: config.site.phone().to_string(),
            wait_time_interval: config.site.wait_time_interval(),
            app_state,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.page.needs_ticks(Instant::now())),
            subscription::create_wait_time_subscription(self.wait_time_interval),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            page: &mut self.page,
            lightbox: &mut self.lightbox,
            phone: &self.phone,
        };
        update::update(&mut ctx, message, Instant::now())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            page: &self.page,
            modal: self.lightbox.surface(),
            phone: &self.phone,
            now: Instant::now(),
        })
    }

    /// Points shown by the loyalty counter.
    pub fn loyalty_points(&self) -> u32 {
        self.app_state.loyalty_points
    }
}
