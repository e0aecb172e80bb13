// SPDX-License-Identifier: MPL-2.0
//! Modal overlay that renders a [`ModalView`].
//!
//! The overlay is opaque to pointer and wheel events so the page behind it
//! cannot scroll. Clicks on the dimmed backdrop close the modal; clicks on
//! the image panel are absorbed.

use crate::i18n::fluent::I18n;
use crate::lightbox::ModalView;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub modal: &'a ModalView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    Close,
    BackdropPressed,
}

/// Renders the overlay, or nothing while the modal is hidden.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.modal.visible {
        return None;
    }
    let image = ctx.modal.image.as_ref()?;

    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::overlay(false));
    let close_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let previous = button(Text::new("◀").size(typography::TITLE_LG))
        .on_press(Message::Previous)
        .padding(spacing::SM)
        .style(styles::button::overlay(false));
    let next = button(Text::new("▶").size(typography::TITLE_LG))
        .on_press(Message::Next)
        .padding(spacing::SM)
        .style(styles::button::overlay(false));

    let picture = Image::new(Handle::from_path(&image.source))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(sizing::LIGHTBOX_IMAGE_HEIGHT);

    let stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(picture)
        .push(next);

    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[("counter", ctx.modal.counter_label().as_str())],
    );

    let panel = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .push(close_row)
        .push(stage)
        .push(Text::new(image.title.clone()).size(typography::TITLE_MD))
        .push(Text::new(image.description.clone()).size(typography::BODY))
        .push(Text::new(counter).size(typography::CAPTION));

    let backdrop = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    Some(opaque(mouse_area(backdrop).on_press(Message::BackdropPressed)))
}
