// SPDX-License-Identifier: MPL-2.0
//! Hover and focus emphasis.
//!
//! Only one card can be under the pointer and only one control can hold
//! focus at a time, so each is tracked as a single optional slot.

/// Lift applied to a hovered staff card.
pub const STAFF_LIFT_Y: f32 = -10.0;
pub const STAFF_SCALE: f32 = 1.02;
/// Scale of the duration badge on a hovered service.
pub const DURATION_SCALE: f32 = 1.05;

/// Something the pointer can hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    StaffMember(usize),
    Service(usize),
}

/// Transform for a card, derived from hover state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset_y: f32,
    pub scale: f32,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        offset_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight<F> {
    hovered: Option<HoverTarget>,
    focused: Option<F>,
}

impl<F: Copy + PartialEq> Highlight<F> {
    pub fn new() -> Self {
        Self {
            hovered: None,
            focused: None,
        }
    }

    pub fn enter(&mut self, target: HoverTarget) {
        self.hovered = Some(target);
    }

    /// Pointer left `target`. Leaving a card that is no longer the hovered
    /// one (events crossed) is ignored.
    pub fn leave(&mut self, target: HoverTarget) {
        if self.hovered == Some(target) {
            self.hovered = None;
        }
    }

    pub fn focus(&mut self, control: F) {
        self.focused = Some(control);
    }

    pub fn blur(&mut self, control: F) {
        if self.focused == Some(control) {
            self.focused = None;
        }
    }

    pub fn focused(&self) -> Option<F> {
        self.focused
    }

    pub fn has_focus_ring(&self, control: F) -> bool {
        self.focused == Some(control)
    }

    pub fn staff_transform(&self, index: usize) -> CardTransform {
        if self.hovered == Some(HoverTarget::StaffMember(index)) {
            CardTransform {
                offset_y: STAFF_LIFT_Y,
                scale: STAFF_SCALE,
            }
        } else {
            CardTransform::IDENTITY
        }
    }

    /// Whether the duration badge of service `index` is emphasized.
    pub fn duration_emphasized(&self, index: usize) -> bool {
        self.hovered == Some(HoverTarget::Service(index))
    }

    pub fn duration_scale(&self, index: usize) -> f32 {
        if self.duration_emphasized(index) {
            DURATION_SCALE
        } else {
            1.0
        }
    }
}
