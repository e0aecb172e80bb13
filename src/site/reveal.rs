// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered fade-in for page cards.
//!
//! Cards start transparent and shifted down. Once enough of a card enters the
//! viewport it is marked revealed and fades in over [`TRANSITION`], delayed
//! by its position within its group so rows of cards cascade.

use std::time::{Duration, Instant};

/// Fraction of a card that must be visible before it is revealed.
pub const THRESHOLD: f32 = 0.1;
/// The bottom of the viewport is pulled up by this margin.
pub const BOTTOM_MARGIN: f32 = 50.0;
/// Initial downward shift of an unrevealed card.
pub const HIDDEN_OFFSET_Y: f32 = 30.0;
/// Length of the fade/slide transition.
pub const TRANSITION: Duration = Duration::from_millis(600);
/// Extra delay per card within a group.
pub const STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Testimonial,
    Service,
    MenuCategory,
    PolicyCard,
    StaffMember,
    GalleryItem,
}

/// Handle returned by [`Reveal::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(usize);

#[derive(Debug, Clone, PartialEq)]
struct Element {
    group: RevealGroup,
    index_in_group: usize,
    top: f32,
    height: f32,
    revealed_at: Option<Instant>,
}

impl Element {
    fn delay(&self) -> Duration {
        STAGGER * self.index_in_group as u32
    }

    fn visible_ratio(&self, viewport_top: f32, viewport_bottom: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.top.max(viewport_top)..(self.top + self.height).min(viewport_bottom);
        (overlap.end - overlap.start).max(0.0) / self.height
    }
}

/// Presentation values for one card at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: HIDDEN_OFFSET_Y,
    };
    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone, Default)]
pub struct Reveal {
    elements: Vec<Element>,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a card occupying `top..top + height` in page coordinates.
    pub fn register(&mut self, group: RevealGroup, top: f32, height: f32) -> RevealId {
        let index_in_group = self.elements.iter().filter(|e| e.group == group).count();
        self.elements.push(Element {
            group,
            index_in_group,
            top,
            height,
            revealed_at: None,
        });
        RevealId(self.elements.len() - 1)
    }

    /// Reveals every card sufficiently inside the viewport. Returns how many
    /// cards were newly revealed. Revealed cards never hide again.
    pub fn observe(&mut self, viewport_top: f32, viewport_height: f32, now: Instant) -> usize {
        let viewport_bottom = viewport_top + viewport_height - BOTTOM_MARGIN;
        let mut newly_revealed = 0;
        for element in self.elements.iter_mut().filter(|e| e.revealed_at.is_none()) {
            if element.visible_ratio(viewport_top, viewport_bottom) >= THRESHOLD {
                element.revealed_at = Some(now);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.elements
            .get(id.0)
            .is_some_and(|e| e.revealed_at.is_some())
    }

    /// Transition delay of a card.
    pub fn delay(&self, id: RevealId) -> Duration {
        self.elements.get(id.0).map_or(Duration::ZERO, Element::delay)
    }

    /// Interpolated style of a card at `now`.
    pub fn style(&self, id: RevealId, now: Instant) -> RevealStyle {
        let Some(element) = self.elements.get(id.0) else {
            return RevealStyle::SHOWN;
        };
        let Some(revealed_at) = element.revealed_at else {
            return RevealStyle::HIDDEN;
        };

        let elapsed = now
            .saturating_duration_since(revealed_at)
            .saturating_sub(element.delay());
        let progress = (elapsed.as_secs_f32() / TRANSITION.as_secs_f32()).clamp(0.0, 1.0);

        RevealStyle {
            opacity: progress,
            offset_y: HIDDEN_OFFSET_Y * (1.0 - progress),
        }
    }

    /// Whether any revealed card is still mid-transition at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.elements.iter().any(|element| {
            element.revealed_at.is_some_and(|at| {
                now.saturating_duration_since(at) < element.delay() + TRANSITION
            })
        })
    }
}
