// SPDX-License-Identifier: MPL-2.0
//! Composes the page, the sticky header, floating controls and the modal.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::lightbox::ModalView;
use crate::site::Page;
use crate::ui::{lightbox_view, navbar, page};
use iced::widget::{Column, Stack};
use iced::{Element, Length};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub modal: Option<&'a ModalView>,
    pub phone: &'a str,
    pub now: Instant,
}

/// Layers from bottom to top: scrolling page, header, booking button,
/// announcement, lightbox.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page_ctx = page::ViewContext {
        i18n: ctx.i18n,
        page: ctx.page,
        phone: ctx.phone,
        now: ctx.now,
    };

    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        nav: ctx.page.mobile_nav,
        active: ctx.page.active_section(),
        focused: ctx.page.highlight.focused(),
        wait_time: ctx.page.wait_time.current(),
    })
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page::book_button(&page_ctx).map(Message::Page));

    if let Some(toast) = page::announcement(&page_ctx) {
        layers = layers.push(toast.map(Message::Page));
    }

    // Header sits above the page so scrolled content slides under it.
    layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page::view(page_ctx).map(Message::Page))
        .push(Column::new().width(Length::Fill).push(header))
        .push(layers);

    if let Some(modal) = ctx.modal {
        let overlay = lightbox_view::view(lightbox_view::ViewContext {
            i18n: ctx.i18n,
            modal,
        });
        if let Some(overlay) = overlay {
            layers = layers.push(overlay.map(Message::Lightbox));
        }
    }

    layers.into()
}
