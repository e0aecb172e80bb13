// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sticky header bar.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        })),
        text_color: Some(WHITE),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Full-width page section. Alternate sections use the cream tint.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if alternate {
            palette::CREAM
        } else {
            WHITE
        })),
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Card faded by `alpha`; `highlighted` adds a gold edge.
pub fn card(alpha: f32, highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: Some(palette::GRAY_900.scale_alpha(alpha)),
        border: Border {
            color: if highlighted {
                palette::GOLD_500
            } else {
                palette::GRAY_200
            }
            .scale_alpha(alpha),
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if highlighted { shadow::LG } else { shadow::SM },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Hamburger dropdown.
pub fn dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::GOLD_700,
        },
        ..Default::default()
    }
}

/// Startup announcement toast.
pub fn announcement(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD_300)),
        text_color: Some(BLACK),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
