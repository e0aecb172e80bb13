// SPDX-License-Identifier: MPL-2.0
//! Section tracking for the sticky navigation bar.
//!
//! Sections are laid out top to bottom; the header covers the first
//! `header_offset` pixels, so both the smooth-scroll target and the active
//! section computation subtract it.

/// A page section and the vertical position of its top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: &'static str,
    pub offset_top: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<SectionAnchor>,
    header_offset: f32,
}

impl ScrollSpy {
    /// `sections` must be in document order.
    pub fn new(sections: Vec<SectionAnchor>, header_offset: f32) -> Self {
        Self {
            sections,
            header_offset,
        }
    }

    /// Scroll position that brings section `id` just below the header.
    ///
    /// Unknown ids yield `None`; the link activation is then ignored.
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| (section.offset_top - self.header_offset).max(0.0))
    }

    /// The last section whose top has passed under the header.
    pub fn active_section(&self, scroll_y: f32) -> Option<&'static str> {
        self.sections
            .iter()
            .filter(|section| scroll_y >= section.offset_top - self.header_offset - 1.0)
            .last()
            .map(|section| section.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(
            vec![
                SectionAnchor { id: "home", offset_top: 0.0 },
                SectionAnchor { id: "services", offset_top: 600.0 },
                SectionAnchor { id: "gallery", offset_top: 1400.0 },
            ],
            100.0,
        )
    }

    #[test]
    fn scroll_target_subtracts_header_offset() {
        assert_eq!(spy().scroll_target("services"), Some(500.0));
        assert_eq!(spy().scroll_target("home"), Some(0.0));
    }

    #[test]
    fn scroll_target_unknown_section_is_none() {
        assert_eq!(spy().scroll_target("careers"), None);
    }

    #[test]
    fn active_section_switches_one_pixel_early() {
        let spy = spy();
        assert_eq!(spy.active_section(0.0), Some("home"));
        assert_eq!(spy.active_section(498.0), Some("home"));
        assert_eq!(spy.active_section(499.0), Some("services"));
        assert_eq!(spy.active_section(5_000.0), Some("gallery"));
    }

    #[test]
    fn no_section_is_active_above_the_first() {
        let spy = ScrollSpy::new(
            vec![SectionAnchor { id: "late", offset_top: 800.0 }],
            100.0,
        );
        assert_eq!(spy.active_section(10.0), None);
    }
}
