// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow, sizing,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn focus_border(focused: bool, base: Border) -> Border {
    if focused {
        Border {
            color: palette::GOLD_700,
            width: sizing::FOCUS_RING,
            ..base
        }
    } else {
        base
    }
}

/// Gold call-to-action button (booking, form submit).
pub fn primary(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette::GOLD_300,
            button::Status::Disabled => palette::GRAY_200,
            _ => palette::GOLD_500,
        };
        let base = Border {
            color: palette::GOLD_700,
            width: 1.0,
            radius: radius::FULL.into(),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if status == button::Status::Disabled {
                palette::GRAY_400
            } else {
                BLACK
            },
            border: focus_border(focused, base),
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Floating booking button, faded by `alpha` while it slides away.
pub fn floating(alpha: f32, focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let mut style = primary(focused)(theme, status);
        style.background = style
            .background
            .map(|background| background.scale_alpha(alpha));
        style.text_color = style.text_color.scale_alpha(alpha);
        style.border.color = style.border.color.scale_alpha(alpha);
        style.shadow = if alpha < 1.0 { shadow::NONE } else { shadow::LG };
        style
    }
}

/// Navigation link; the active section is underlined in gold.
pub fn nav_link(active: bool, focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || status == button::Status::Hovered {
            palette::GOLD_500
        } else {
            WHITE
        };
        button::Style {
            background: None,
            text_color,
            border: focus_border(focused, Border::default()),
            ..Default::default()
        }
    }
}

/// Semi-transparent controls drawn over the lightbox image.
pub fn overlay(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::SURFACE,
            _ => opacity::OVERLAY_SUBTLE,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: focus_border(
                focused,
                Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
            ),
            ..Default::default()
        }
    }
}

/// Gallery thumbnail frame, faded by `alpha` while it reveals.
pub fn thumbnail(alpha: f32, focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::GOLD_500,
            _ => Color::TRANSPARENT,
        };
        let mut border = focus_border(
            focused,
            Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
        );
        border.color = border.color.scale_alpha(alpha);
        button::Style {
            background: Some(Background::Color(palette::GRAY_900.scale_alpha(alpha))),
            text_color: WHITE.scale_alpha(alpha),
            border,
            ..Default::default()
        }
    }
}
