// SPDX-License-Identifier: MPL-2.0
//! Message handling: turns view messages and key presses into lightbox
//! triggers and page behavior calls.

use super::Message;
use crate::input::{Key, KeyPress};
use crate::lightbox::{LightboxController, ModalView, Trigger};
use crate::site::shortcuts::tel_uri;
use crate::site::{match_shortcut, Activation, Field, FocusTarget, Page, Section, Shortcut};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::{lightbox_view, page};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Mutable application state touched by `update`.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page,
    pub lightbox: &'a mut LightboxController<ModalView>,
    pub phone: &'a str,
}

impl UpdateContext<'_> {
    fn scroll_locked(&self) -> bool {
        self.lightbox
            .surface()
            .is_some_and(|modal| modal.scroll_locked)
            || self.page.mobile_nav.scroll_locked()
    }
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(message, &mut ctx.page.mobile_nav) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::ScrollTo(section) => scroll_to(ctx.page.scroll_target(section)),
        },
        Message::Page(message) => handle_page_message(ctx, message, now),
        Message::Lightbox(message) => {
            let trigger = match message {
                lightbox_view::Message::Previous => Trigger::PreviousControl,
                lightbox_view::Message::Next => Trigger::NextControl,
                lightbox_view::Message::Close => Trigger::CloseControl,
                lightbox_view::Message::BackdropPressed => Trigger::ModalClicked {
                    inside_content: false,
                },
            };
            ctx.lightbox.handle(&*ctx.page, trigger);
            Task::none()
        }
        Message::KeyPressed(press) => handle_key(ctx, press, now),
        Message::Tick(now) => {
            ctx.page.tick(now);
            Task::none()
        }
        Message::RotateWaitTime(_) => {
            ctx.page.wait_time.rotate(&mut rand::rng());
            tracing::debug!(wait = ctx.page.wait_time.current(), "wait time updated");
            Task::none()
        }
    }
}

fn scroll_to(target: Option<f32>) -> Task<Message> {
    match target {
        Some(y) => operation::scroll_to(Id::new(page::SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y }),
        None => Task::none(),
    }
}

fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: page::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        page::Message::Scrolled {
            offset_y,
            viewport_height,
        } => {
            if ctx.scroll_locked() {
                // A locked page does not scroll, so nothing reacts to it.
                let held = ctx.page.scroll_y();
                if (offset_y - held).abs() > f32::EPSILON {
                    return scroll_to(Some(held));
                }
                return Task::none();
            }
            ctx.page.on_scroll(offset_y, viewport_height, now);
            Task::none()
        }
        page::Message::ThumbnailPressed(index) => {
            ctx.page.highlight.focus(FocusTarget::Thumbnail(index));
            ctx.lightbox
                .handle(&*ctx.page, Trigger::ThumbnailActivated(index));
            Task::none()
        }
        page::Message::Book => book(ctx),
        page::Message::HoverEntered(target) => {
            ctx.page.highlight.enter(target);
            Task::none()
        }
        page::Message::HoverLeft(target) => {
            ctx.page.highlight.leave(target);
            Task::none()
        }
        page::Message::FieldChanged(field, value) => {
            ctx.page.highlight.focus(FocusTarget::Field(field));
            ctx.page.edit_field(field, value);
            Task::none()
        }
        page::Message::Submit => {
            submit(ctx, now);
            Task::none()
        }
    }
}

/// The booking action brings the contact form into view.
fn book(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::debug!("booking requested");
    ctx.page.highlight.focus(FocusTarget::Field(Field::Name));
    ctx.page.mobile_nav.link_activated(&Section::Contact.href());
    Task::batch([
        scroll_to(ctx.page.scroll_target(Section::Contact)),
        focus_widget(FocusTarget::Field(Field::Name)),
    ])
}

/// Moves Iced's keyboard focus along with the page focus. Only text inputs
/// take widget focus; other targets are drawn from the highlight state.
fn focus_widget(target: FocusTarget) -> Task<Message> {
    match target {
        FocusTarget::Field(field) => operation::focus(page::field_id(field)),
        _ => Task::none(),
    }
}

fn submit(ctx: &mut UpdateContext<'_>, now: Instant) {
    if ctx.page.submit_form(now) {
        tracing::info!("contact form submitted");
    } else {
        tracing::debug!("contact form incomplete or already sending");
    }
}

fn handle_key(ctx: &mut UpdateContext<'_>, press: KeyPress, now: Instant) -> Task<Message> {
    if ctx.lightbox.handle(&*ctx.page, Trigger::Key(press)) {
        return Task::none();
    }
    // Page controls are inert behind the modal.
    if ctx.lightbox.is_open() {
        return Task::none();
    }

    if press.is_activation() {
        return activate_focused(ctx, press, now);
    }

    match press.key {
        Key::Tab if !press.command => {
            let target = ctx.page.cycle_focus(press.shift);
            tracing::debug!(?target, "focus moved");
            focus_widget(target)
        }
        Key::Escape => {
            if ctx.page.mobile_nav.escape() {
                ctx.page.highlight.focus(FocusTarget::Hamburger);
            }
            Task::none()
        }
        _ => match match_shortcut(press) {
            Some(Shortcut::Book) => book(ctx),
            Some(Shortcut::Call) => {
                tracing::info!(uri = %tel_uri(ctx.phone), "call requested");
                Task::none()
            }
            None => Task::none(),
        },
    }
}

fn activate_focused(ctx: &mut UpdateContext<'_>, press: KeyPress, now: Instant) -> Task<Message> {
    match ctx.page.activation() {
        Activation::OpenThumbnail(index) => {
            ctx.lightbox
                .handle(&*ctx.page, Trigger::ThumbnailKey { index, key: press });
            Task::none()
        }
        Activation::ToggleMenu => {
            ctx.page.mobile_nav.toggle();
            Task::none()
        }
        Activation::ScrollTo(section) => scroll_to(ctx.page.follow_link(section)),
        Activation::Submit => {
            submit(ctx, now);
            Task::none()
        }
        Activation::Book => book(ctx),
        Activation::None => Task::none(),
    }
}
