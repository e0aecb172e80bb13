// SPDX-License-Identifier: MPL-2.0
//! Page sections, their fixed layout, and the cards inside them.
//!
//! Sections have fixed heights so that anchors and card positions are known
//! without measuring rendered widgets. Text comes from the Fluent bundles via
//! the keys listed here.

use super::reveal::RevealGroup;
use super::scroll_spy::SectionAnchor;

/// Vertical gap between a section's top edge and its first row of cards.
pub const CARD_TOP_INSET: f32 = 120.0;
pub const CARD_HEIGHT: f32 = 180.0;
pub const CARD_ROW_SPACING: f32 = 24.0;
/// Gallery thumbnails per row.
pub const GALLERY_COLUMNS: usize = 3;
pub const THUMBNAIL_HEIGHT: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Menu,
    Gallery,
    Staff,
    Testimonials,
    Policies,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Services,
        Section::Menu,
        Section::Gallery,
        Section::Staff,
        Section::Testimonials,
        Section::Policies,
        Section::Contact,
    ];

    /// Anchor id, as used in `#id` links.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Menu => "menu",
            Section::Gallery => "gallery",
            Section::Staff => "staff",
            Section::Testimonials => "testimonials",
            Section::Policies => "policies",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Fluent key of the section heading.
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Home => "section-home",
            Section::Services => "section-services",
            Section::Menu => "section-menu",
            Section::Gallery => "section-gallery",
            Section::Staff => "section-staff",
            Section::Testimonials => "section-testimonials",
            Section::Policies => "section-policies",
            Section::Contact => "section-contact",
        }
    }

    pub fn height(self) -> f32 {
        match self {
            Section::Home => 560.0,
            Section::Services => 520.0,
            Section::Menu => 520.0,
            Section::Gallery => 760.0,
            Section::Staff => 480.0,
            Section::Testimonials => 480.0,
            Section::Policies => 480.0,
            Section::Contact => 720.0,
        }
    }

    /// Top edge of the section in page coordinates.
    pub fn offset_top(self) -> f32 {
        Section::ALL
            .iter()
            .take_while(|section| **section != self)
            .map(|section| section.height())
            .sum()
    }

    /// Shows up in the navigation bar.
    pub fn in_nav(self) -> bool {
        !matches!(self, Section::Testimonials)
    }
}

/// Anchors for every section, in document order.
pub fn anchors() -> Vec<SectionAnchor> {
    Section::ALL
        .into_iter()
        .map(|section| SectionAnchor {
            id: section.id(),
            offset_top: section.offset_top(),
        })
        .collect()
}

/// A service card: Fluent key of its name and its duration label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name_key: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        name_key: "service-manicure",
        price: "$25",
        duration: "30 min",
    },
    Service {
        name_key: "service-pedicure",
        price: "$35",
        duration: "45 min",
    },
    Service {
        name_key: "service-gel",
        price: "$40",
        duration: "45 min",
    },
    Service {
        name_key: "service-acrylic",
        price: "$50",
        duration: "60 min",
    },
];

pub const MENU_CATEGORIES: [&str; 3] = ["menu-hands", "menu-feet", "menu-extras"];

pub const STAFF: [&str; 3] = ["staff-lily", "staff-mai", "staff-tony"];

pub const TESTIMONIALS: [&str; 3] = [
    "testimonial-first",
    "testimonial-second",
    "testimonial-third",
];

pub const POLICIES: [&str; 3] = ["policy-appointments", "policy-cancellation", "policy-hygiene"];

/// Page-coordinate top and height of the single card row in `section`.
pub fn card_bounds(section: Section) -> (f32, f32) {
    (section.offset_top() + CARD_TOP_INSET, CARD_HEIGHT)
}

/// Page-coordinate box of gallery thumbnail `index`.
pub fn thumbnail_bounds(index: usize) -> (f32, f32) {
    let row = (index / GALLERY_COLUMNS) as f32;
    let top = Section::Gallery.offset_top()
        + CARD_TOP_INSET
        + row * (THUMBNAIL_HEIGHT + CARD_ROW_SPACING);
    (top, THUMBNAIL_HEIGHT)
}

/// Cards registered for fade-in, with their groups and positions.
pub fn reveal_layout(thumbnail_count: usize) -> Vec<(RevealGroup, f32, f32)> {
    let mut layout = Vec::new();
    let mut push_row = |group: RevealGroup, section: Section, count: usize| {
        let (top, height) = card_bounds(section);
        for _ in 0..count {
            layout.push((group, top, height));
        }
    };
    push_row(RevealGroup::Service, Section::Services, SERVICES.len());
    push_row(RevealGroup::MenuCategory, Section::Menu, MENU_CATEGORIES.len());
    push_row(RevealGroup::StaffMember, Section::Staff, STAFF.len());
    push_row(RevealGroup::Testimonial, Section::Testimonials, TESTIMONIALS.len());
    push_row(RevealGroup::PolicyCard, Section::Policies, POLICIES.len());
    for index in 0..thumbnail_count {
        let (top, height) = thumbnail_bounds(index);
        layout.push((RevealGroup::GalleryItem, top, height));
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_stacked_in_order() {
        assert_eq!(Section::Home.offset_top(), 0.0);
        assert_eq!(Section::Services.offset_top(), Section::Home.height());
        let anchors = anchors();
        assert!(anchors.windows(2).all(|w| w[0].offset_top < w[1].offset_top));
    }

    #[test]
    fn from_id_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("nope"), None);
    }

    #[test]
    fn thumbnails_wrap_into_rows() {
        let (first_row, _) = thumbnail_bounds(0);
        let (same_row, _) = thumbnail_bounds(GALLERY_COLUMNS - 1);
        let (next_row, _) = thumbnail_bounds(GALLERY_COLUMNS);
        assert_eq!(first_row, same_row);
        assert!(next_row > first_row);
    }

    #[test]
    fn reveal_layout_covers_every_card() {
        let layout = reveal_layout(5);
        let expected = SERVICES.len()
            + MENU_CATEGORIES.len()
            + STAFF.len()
            + TESTIMONIALS.len()
            + POLICIES.len()
            + 5;
        assert_eq!(layout.len(), expected);
    }
}
