// SPDX-License-Identifier: MPL-2.0
//! Page behaviors around the gallery lightbox.
//!
//! Each submodule is a small state type that turns input events into
//! declarative flags. [`Page`] bundles them together with the current
//! thumbnails and scroll position; it is the "document" the lightbox reads
//! its gallery from.

pub mod announcement;
pub mod book_button;
pub mod contact_form;
pub mod highlight;
pub mod loyalty;
pub mod mobile_nav;
pub mod reveal;
pub mod scroll_spy;
pub mod sections;
pub mod shortcuts;
pub mod wait_time;

pub use announcement::Announcement;
pub use book_button::BookButton;
pub use contact_form::{ContactForm, Field};
pub use highlight::{Highlight, HoverTarget};
pub use loyalty::Loyalty;
pub use mobile_nav::MobileNav;
pub use reveal::{Reveal, RevealGroup, RevealId, RevealStyle};
pub use scroll_spy::ScrollSpy;
pub use sections::Section;
pub use shortcuts::{match_shortcut, Shortcut};
pub use wait_time::WaitTime;

use crate::gallery::{Thumbnail, ThumbnailSource};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tunables for the page behaviors, resolved from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    pub header_offset: f32,
    pub book_button_hide_threshold: f32,
    pub form_reset_after: Duration,
    pub submit_label: String,
    pub announcement: String,
    pub loyalty_points: u32,
}

/// Controls that can hold keyboard focus, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Hamburger,
    NavLink(Section),
    Thumbnail(usize),
    Field(Field),
    Submit,
    BookButton,
}

/// What activating the focused control should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    ToggleMenu,
    ScrollTo(Section),
    OpenThumbnail(usize),
    Submit,
    Book,
    /// Text fields take their own input.
    None,
}

#[derive(Debug, Clone)]
pub struct Page {
    thumbnails: Vec<Thumbnail>,
    scroll_y: f32,
    viewport_height: f32,
    editing: Option<Field>,
    pub mobile_nav: MobileNav,
    pub scroll_spy: ScrollSpy,
    pub book_button: BookButton,
    pub contact_form: ContactForm,
    pub wait_time: WaitTime,
    pub highlight: Highlight<FocusTarget>,
    pub announcement: Announcement,
    pub loyalty: Loyalty,
    reveal: Reveal,
    reveal_ids: HashMap<(RevealGroup, usize), RevealId>,
}

impl ThumbnailSource for Page {
    fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }
}

impl Page {
    pub fn new<R: Rng + ?Sized>(
        thumbnails: Vec<Thumbnail>,
        settings: PageSettings,
        rng: &mut R,
        now: Instant,
    ) -> Self {
        let mut page = Self {
            thumbnails: Vec::new(),
            scroll_y: 0.0,
            viewport_height: 0.0,
            editing: None,
            mobile_nav: MobileNav::new(),
            scroll_spy: ScrollSpy::new(sections::anchors(), settings.header_offset),
            book_button: BookButton::new(settings.book_button_hide_threshold),
            contact_form: ContactForm::new(settings.submit_label, settings.form_reset_after),
            wait_time: WaitTime::new(rng),
            highlight: Highlight::new(),
            announcement: Announcement::new(settings.announcement, now),
            loyalty: Loyalty::new(settings.loyalty_points),
            reveal: Reveal::new(),
            reveal_ids: HashMap::new(),
        };
        page.set_thumbnails(thumbnails, now);
        page
    }

    /// Replaces the gallery (after a rescan). Card reveal state is rebuilt
    /// and re-evaluated against the current viewport.
    pub fn set_thumbnails(&mut self, thumbnails: Vec<Thumbnail>, now: Instant) {
        self.thumbnails = thumbnails;
        self.reveal = Reveal::new();
        self.reveal_ids.clear();

        let mut per_group: HashMap<RevealGroup, usize> = HashMap::new();
        for (group, top, height) in sections::reveal_layout(self.thumbnails.len()) {
            let index = per_group.entry(group).or_insert(0);
            let id = self.reveal.register(group, top, height);
            self.reveal_ids.insert((group, *index), id);
            *index += 1;
        }

        if let Some(FocusTarget::Thumbnail(index)) = self.highlight.focused() {
            if index >= self.thumbnails.len() {
                self.highlight.blur(FocusTarget::Thumbnail(index));
            }
        }

        self.reveal.observe(self.scroll_y, self.viewport_height, now);
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scroll position or viewport size changed.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32, now: Instant) {
        self.scroll_y = scroll_y;
        self.viewport_height = viewport_height;
        self.book_button.on_scroll(scroll_y);
        self.reveal.observe(scroll_y, viewport_height, now);
    }

    pub fn active_section(&self) -> Option<Section> {
        self.scroll_spy
            .active_section(self.scroll_y)
            .and_then(Section::from_id)
    }

    /// Scroll position that puts `section` just below the header.
    pub fn scroll_target(&self, section: Section) -> Option<f32> {
        self.scroll_spy.scroll_target(section.id())
    }

    /// Scroll position for a nav link. Activating a link also closes the
    /// mobile menu.
    pub fn follow_link(&mut self, section: Section) -> Option<f32> {
        self.mobile_nav.link_activated(&section.href());
        self.scroll_target(section)
    }

    pub fn reveal_style(&self, group: RevealGroup, index: usize, now: Instant) -> RevealStyle {
        self.reveal_ids
            .get(&(group, index))
            .map_or(RevealStyle::SHOWN, |id| self.reveal.style(*id, now))
    }

    /// Periodic timer housekeeping.
    pub fn tick(&mut self, now: Instant) {
        self.contact_form.tick(now);
        self.announcement.tick(now);
    }

    /// Whether anything on the page still needs fine-grained ticks.
    pub fn needs_ticks(&self, now: Instant) -> bool {
        self.contact_form.is_sending()
            || self.announcement.is_pending()
            || self.reveal.is_animating(now)
    }

    /// Text typed into a form field. Moving to a different field validates
    /// the one that was left.
    pub fn edit_field(&mut self, field: Field, value: String) {
        self.leave_field_for(Some(field));
        self.contact_form.input(field, value);
    }

    fn leave_field_for(&mut self, next: Option<Field>) {
        if self.editing != next {
            if let Some(previous) = self.editing {
                self.contact_form.blur(previous);
            }
            self.editing = next;
        }
    }

    /// Form submission. Returns `true` when the indicator started.
    pub fn submit_form(&mut self, now: Instant) -> bool {
        self.leave_field_for(None);
        if !self.contact_form.validate_all() {
            return false;
        }
        self.contact_form.submit(now)
    }

    /// Tab order over the controls currently on the page.
    pub fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order = vec![FocusTarget::Hamburger];
        order.extend(
            Section::ALL
                .into_iter()
                .filter(|section| section.in_nav())
                .map(FocusTarget::NavLink),
        );
        order.extend((0..self.thumbnails.len()).map(FocusTarget::Thumbnail));
        order.extend(contact_form::Field::ALL.into_iter().map(FocusTarget::Field));
        order.push(FocusTarget::Submit);
        order.push(FocusTarget::BookButton);
        order
    }

    /// Moves keyboard focus one step, wrapping around.
    pub fn cycle_focus(&mut self, backward: bool) -> FocusTarget {
        let order = self.focus_order();
        let len = order.len();
        let next = match self
            .highlight
            .focused()
            .and_then(|current| order.iter().position(|t| *t == current))
        {
            Some(position) if backward => (position + len - 1) % len,
            Some(position) => (position + 1) % len,
            None if backward => len - 1,
            None => 0,
        };
        let target = order[next];

        let next_field = match target {
            FocusTarget::Field(field) => Some(field),
            _ => None,
        };
        self.leave_field_for(next_field);
        self.highlight.focus(target);
        target
    }

    /// What Enter/Space on the focused control does.
    pub fn activation(&self) -> Activation {
        match self.highlight.focused() {
            Some(FocusTarget::Hamburger) => Activation::ToggleMenu,
            Some(FocusTarget::NavLink(section)) => Activation::ScrollTo(section),
            Some(FocusTarget::Thumbnail(index)) => Activation::OpenThumbnail(index),
            Some(FocusTarget::Submit) => Activation::Submit,
            Some(FocusTarget::BookButton) => Activation::Book,
            Some(FocusTarget::Field(_)) | None => Activation::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> PageSettings {
        PageSettings {
            header_offset: 100.0,
            book_button_hide_threshold: 200.0,
            form_reset_after: Duration::from_secs(3),
            submit_label: "Send Message".into(),
            announcement: "Loaded".into(),
            loyalty_points: 0,
        }
    }

    fn page(thumbnails: usize) -> Page {
        let thumbnails = (0..thumbnails)
            .map(|i| Thumbnail::new(format!("{i}.jpg")))
            .collect();
        Page::new(
            thumbnails,
            settings(),
            &mut StdRng::seed_from_u64(1),
            Instant::now(),
        )
    }

    #[test]
    fn page_exposes_thumbnails_as_source() {
        let page = page(4);
        assert_eq!(page.thumbnails().len(), 4);
    }

    #[test]
    fn follow_link_closes_menu_and_returns_target() {
        let mut page = page(0);
        page.mobile_nav.toggle();
        let target = page.follow_link(Section::Services);
        assert!(!page.mobile_nav.is_open());
        assert_eq!(target, Some(Section::Services.offset_top() - 100.0));
    }

    #[test]
    fn scrolling_updates_active_section_and_book_button() {
        let mut page = page(0);
        let now = Instant::now();
        page.on_scroll(Section::Gallery.offset_top(), 800.0, now);
        assert_eq!(page.active_section(), Some(Section::Gallery));
        assert!(!page.book_button.is_visible());
    }

    #[test]
    fn scrolling_reveals_cards_in_view() {
        let mut page = page(0);
        let now = Instant::now();
        assert_eq!(
            page.reveal_style(RevealGroup::Service, 0, now),
            RevealStyle::HIDDEN
        );
        page.on_scroll(Section::Services.offset_top(), 800.0, now);
        let later = now + Duration::from_secs(5);
        assert_eq!(
            page.reveal_style(RevealGroup::Service, 0, later),
            RevealStyle::SHOWN
        );
    }

    #[test]
    fn scrolling_to_gallery_fades_thumbnails_in_order() {
        let mut page = page(3);
        let now = Instant::now();
        assert_eq!(
            page.reveal_style(RevealGroup::GalleryItem, 0, now),
            RevealStyle::HIDDEN
        );
        page.on_scroll(Section::Gallery.offset_top(), 800.0, now);

        let mid = now + Duration::from_millis(650);
        assert_eq!(
            page.reveal_style(RevealGroup::GalleryItem, 0, mid),
            RevealStyle::SHOWN
        );
        let second = page.reveal_style(RevealGroup::GalleryItem, 1, mid);
        assert!(second.opacity > 0.0 && second.opacity < 1.0);

        let later = now + Duration::from_secs(5);
        for index in 0..3 {
            assert_eq!(
                page.reveal_style(RevealGroup::GalleryItem, index, later),
                RevealStyle::SHOWN
            );
        }
    }

    #[test]
    fn switching_fields_validates_the_previous_one() {
        let mut page = page(0);
        page.edit_field(Field::Name, "   ".into());
        assert!(!page.contact_form.aria_invalid(Field::Name));
        page.edit_field(Field::Phone, "5".into());
        assert!(page.contact_form.aria_invalid(Field::Name));
    }

    #[test]
    fn submit_requires_valid_form() {
        let mut page = page(0);
        let now = Instant::now();
        assert!(!page.submit_form(now));
        page.edit_field(Field::Name, "Ada".into());
        page.edit_field(Field::Phone, "555-0100".into());
        assert!(page.submit_form(now));
        assert!(page.contact_form.is_sending());
    }

    #[test]
    fn focus_cycles_through_thumbnails_and_wraps() {
        let mut page = page(2);
        let order = page.focus_order();
        for expected in &order {
            assert_eq!(page.cycle_focus(false), *expected);
        }
        assert_eq!(page.cycle_focus(false), order[0]);
        assert_eq!(page.cycle_focus(true), *order.last().unwrap());
    }

    #[test]
    fn activation_of_focused_thumbnail_opens_it() {
        let mut page = page(2);
        page.highlight.focus(FocusTarget::Thumbnail(1));
        assert_eq!(page.activation(), Activation::OpenThumbnail(1));
    }

    #[test]
    fn rescanning_to_fewer_thumbnails_drops_stale_focus() {
        let mut page = page(3);
        page.highlight.focus(FocusTarget::Thumbnail(2));
        page.set_thumbnails(vec![Thumbnail::new("only.jpg")], Instant::now());
        assert_eq!(page.highlight.focused(), None);
    }
}
