// SPDX-License-Identifier: MPL-2.0
//! The scrolling salon page: hero, services, menu, gallery, staff,
//! testimonials, policies and the contact form.
//!
//! Every section is drawn at its fixed height from [`Section::height`] so the
//! scroll positions used by the navigation and the card reveal match what is
//! on screen.

use crate::gallery::{GalleryIndex, ThumbnailSource};
use crate::i18n::fluent::I18n;
use crate::site::highlight::STAFF_LIFT_Y;
use crate::site::reveal::HIDDEN_OFFSET_Y as REVEAL_OFFSET_Y;
use crate::site::sections::{
    self, GALLERY_COLUMNS, MENU_CATEGORIES, POLICIES, SERVICES, STAFF, TESTIMONIALS,
    THUMBNAIL_HEIGHT,
};
use crate::site::{Field, FocusTarget, HoverTarget, Page, RevealGroup, Section};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{
    button, mouse_area, text_input, Column, Container, Id, Row, Scrollable, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Theme,
};
use std::time::Instant;

/// Identifier of the page scrollable, used for anchor scrolling.
pub const SCROLLABLE_ID: &str = "page-scrollable";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a Page,
    pub phone: &'a str,
    pub now: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Scrolled { offset_y: f32, viewport_height: f32 },
    ThumbnailPressed(usize),
    Book,
    HoverEntered(HoverTarget),
    HoverLeft(HoverTarget),
    FieldChanged(Field, String),
    Submit,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Section::ALL
        .into_iter()
        .fold(Column::new().width(Length::Fill), |column, section| {
            column.push(view_section(&ctx, section))
        });

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Vertical(Scrollbar::default()))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let body: Element<'a, Message> = match section {
        Section::Home => view_home(ctx),
        Section::Services => view_services(ctx),
        Section::Menu => card_row(ctx, RevealGroup::MenuCategory, &MENU_CATEGORIES),
        Section::Gallery => view_gallery(ctx),
        Section::Staff => view_staff(ctx),
        Section::Testimonials => card_row(ctx, RevealGroup::Testimonial, &TESTIMONIALS),
        Section::Policies => card_row(ctx, RevealGroup::PolicyCard, &POLICIES),
        Section::Contact => view_contact(ctx),
    };

    let heading: Element<'a, Message> = if section == Section::Home {
        Column::new().into()
    } else {
        Text::new(ctx.i18n.tr(section.title_key()))
            .size(typography::TITLE_LG)
            .into()
    };

    let column = Column::new()
        .spacing(spacing::LG)
        .padding(Padding::from([spacing::XXL * 2.0, spacing::XL]))
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(heading)
        .push(body);

    let alternate = Section::ALL
        .iter()
        .position(|candidate| *candidate == section)
        .is_some_and(|index| index % 2 == 1);

    Container::new(column)
        .width(Length::Fill)
        .height(section.height())
        .clip(true)
        .style(styles::container::section(alternate))
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let book = button(Text::new(ctx.i18n.tr("book-now")).size(typography::TITLE_SM))
        .on_press(Message::Book)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary(false));

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("brand-name")).size(typography::HERO))
        .push(Text::new(ctx.i18n.tr("hero-tagline")).size(typography::TITLE_SM))
        .push(Text::new(ctx.i18n.tr_with_args("hero-phone", &[("phone", ctx.phone)])))
        .push(book)
        .into()
}

/// Room above a card for the hover lift.
const LIFT_ROOM: f32 = -STAFF_LIFT_Y;

/// Wraps a card in its fade-in state: transparent and pushed down until
/// revealed, raised by `lift` while hovered. The padding pair keeps the
/// card's footprint constant.
fn reveal_card<'a>(
    ctx: &ViewContext<'a>,
    group: RevealGroup,
    index: usize,
    lift: f32,
    highlighted: bool,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let style = ctx.page.reveal_style(group, index, ctx.now);
    let budget = LIFT_ROOM + REVEAL_OFFSET_Y;
    let top = (LIFT_ROOM + style.offset_y + lift).clamp(0.0, budget);
    let card = Container::new(content)
        .padding(spacing::MD)
        .width(sizing::CARD_WIDTH)
        .style(styles::container::card(style.opacity, highlighted));

    Container::new(card)
        .padding(Padding {
            top,
            bottom: budget - top,
            ..Padding::ZERO
        })
        .into()
}

fn card_row<'a>(
    ctx: &ViewContext<'a>,
    group: RevealGroup,
    keys: &[&'static str],
) -> Element<'a, Message> {
    keys.iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, key)| {
            let content = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(ctx.i18n.tr(key)).size(typography::TITLE_SM))
                .push(Text::new(ctx.i18n.tr(&format!("{key}-body"))).size(typography::BODY));
            row.push(reveal_card(ctx, group, index, 0.0, false, content))
        })
        .into()
}

fn view_services<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let highlight = &ctx.page.highlight;
    SERVICES
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, service)| {
            let emphasized = highlight.duration_emphasized(index);
            let duration = Text::new(service.duration)
                .size(typography::BODY * highlight.duration_scale(index))
                .color(if emphasized {
                    palette::GOLD_700
                } else {
                    palette::GRAY_700
                });
            let content = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(ctx.i18n.tr(service.name_key)).size(typography::TITLE_SM))
                .push(Text::new(service.price).size(typography::TITLE_MD))
                .push(duration);
            let target = HoverTarget::Service(index);
            let card = reveal_card(ctx, RevealGroup::Service, index, 0.0, emphasized, content);
            row.push(
                mouse_area(card)
                    .on_enter(Message::HoverEntered(target))
                    .on_exit(Message::HoverLeft(target)),
            )
        })
        .into()
}

fn view_staff<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    STAFF
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, key)| {
            let transform = ctx.page.highlight.staff_transform(index);
            let lifted = transform.offset_y < 0.0;
            let content = Column::new()
                .spacing(spacing::XS)
                .push(Text::new(ctx.i18n.tr(key)).size(typography::TITLE_SM * transform.scale))
                .push(Text::new(ctx.i18n.tr(&format!("{key}-body"))).size(typography::BODY));
            let target = HoverTarget::StaffMember(index);
            let card = reveal_card(
                ctx,
                RevealGroup::StaffMember,
                index,
                transform.offset_y,
                lifted,
                content,
            );
            row.push(
                mouse_area(card)
                    .on_enter(Message::HoverEntered(target))
                    .on_exit(Message::HoverLeft(target)),
            )
        })
        .into()
}

fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let index = GalleryIndex::new(ctx.page);
    if index.is_empty() {
        return Text::new(ctx.i18n.tr("gallery-empty")).into();
    }

    let focused = ctx.page.highlight.focused();
    let mut grid = Column::new().spacing(sections::CARD_ROW_SPACING);
    let mut row = Row::new().spacing(spacing::LG);
    for (position, thumbnail) in ctx.page.thumbnails().iter().enumerate() {
        let label = index
            .get(position)
            .map(|image| image.title)
            .unwrap_or_default();
        let style = ctx.page.reveal_style(RevealGroup::GalleryItem, position, ctx.now);
        let picture = Image::new(Handle::from_path(&thumbnail.source))
            .content_fit(ContentFit::Cover)
            .width(sizing::THUMBNAIL_WIDTH)
            .height(THUMBNAIL_HEIGHT - spacing::XL)
            .opacity(style.opacity);
        let tile = button(
            Column::new()
                .spacing(spacing::XXS)
                .push(picture)
                .push(Text::new(label).size(typography::CAPTION)),
        )
        .on_press(Message::ThumbnailPressed(position))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(
            style.opacity,
            focused == Some(FocusTarget::Thumbnail(position)),
        ));

        // Same footprint at every offset so the grid does not shift.
        let top = style.offset_y.clamp(0.0, REVEAL_OFFSET_Y);
        let tile = Container::new(tile).padding(Padding {
            top,
            bottom: REVEAL_OFFSET_Y - top,
            ..Padding::ZERO
        });
        row = row.push(tile);

        if (position + 1) % GALLERY_COLUMNS == 0 {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
        }
    }
    if ctx.page.thumbnails().len() % GALLERY_COLUMNS != 0 {
        grid = grid.push(row);
    }
    grid.into()
}

fn view_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = &ctx.page.contact_form;
    let focused = ctx.page.highlight.focused();

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(sizing::INPUT_WIDTH)
        .push(Text::new(ctx.i18n.tr_with_args("contact-phone", &[("phone", ctx.phone)])));

    for field in Field::ALL {
        let invalid = form.aria_invalid(field);
        let has_focus = focused == Some(FocusTarget::Field(field));
        let key = field_key(field);
        let mut label = ctx.i18n.tr(key);
        if field.is_required() {
            label.push_str(" *");
        }
        let input = text_input(&ctx.i18n.tr(&format!("{key}-placeholder")), form.value(field))
            .id(field_id(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .padding(spacing::XS)
            .style(move |theme: &Theme, status: text_input::Status| {
                let mut style = text_input::default(theme, status);
                if invalid {
                    style.border.color = palette::ERROR_500;
                } else if has_focus {
                    style.border.color = palette::GOLD_500;
                    style.border.width = sizing::FOCUS_RING;
                }
                style
            });

        column = column.push(Text::new(label).size(typography::BODY)).push(input);
        if invalid {
            column = column.push(
                Text::new(ctx.i18n.tr("form-field-required"))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }
    }

    let submit = button(Text::new(if form.is_sending() {
        ctx.i18n.tr("form-sending")
    } else {
        form.submit_label().to_string()
    }))
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary(
        focused == Some(FocusTarget::Submit),
    ));
    let submit = if form.submit_enabled() {
        submit.on_press(Message::Submit)
    } else {
        submit
    };

    column.push(submit).into()
}

/// Fluent key for a form field label.
pub fn field_key(field: Field) -> &'static str {
    match field {
        Field::Name => "form-name",
        Field::Phone => "form-phone",
        Field::Email => "form-email",
        Field::Message => "form-message",
    }
}

/// Widget id of a form field's text input, used to move keyboard focus.
pub fn field_id(field: Field) -> Id {
    Id::new(match field {
        Field::Name => "contact-name",
        Field::Phone => "contact-phone",
        Field::Email => "contact-email",
        Field::Message => "contact-message",
    })
}

/// Floating booking button in the bottom-right corner.
pub fn book_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.page.book_button;
    let focused = ctx.page.highlight.has_focus_ring(FocusTarget::BookButton);
    let book = button(Text::new(ctx.i18n.tr("book-now")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::floating(state.opacity(), focused));
    let book = if state.is_visible() {
        book.on_press(Message::Book)
    } else {
        book
    };

    Container::new(book)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            right: spacing::XL,
            bottom: (spacing::XL - state.offset_y()).max(0.0),
            ..Padding::ZERO
        })
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}

/// Startup announcement toast, while it is still pending.
pub fn announcement<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.page.announcement.is_loaded() {
        return None;
    }
    let message = ctx.page.announcement.message()?;
    let toast = Container::new(Text::new(message.to_string()).size(typography::BODY))
        .padding(spacing::SM)
        .style(styles::container::announcement);

    Some(
        Container::new(toast)
            .width(Length::Fill)
            .padding(Padding {
                top: sizing::NAVBAR_HEIGHT + spacing::MD,
                ..Padding::ZERO
            })
            .align_x(Horizontal::Center)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Thumbnail;
    use crate::site::PageSettings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn page(thumbnails: usize) -> Page {
        Page::new(
            (0..thumbnails)
                .map(|i| Thumbnail::new(format!("{i}.jpg")))
                .collect(),
            PageSettings {
                header_offset: 100.0,
                book_button_hide_threshold: 200.0,
                form_reset_after: Duration::from_secs(3),
                submit_label: "Send".into(),
                announcement: "Welcome".into(),
                loyalty_points: 0,
            },
            &mut StdRng::seed_from_u64(7),
            Instant::now(),
        )
    }

    #[test]
    fn page_view_renders_with_and_without_gallery() {
        let i18n = I18n::default();
        for count in [0, 1, 4] {
            let page = page(count);
            let _element = view(ViewContext {
                i18n: &i18n,
                page: &page,
                phone: "+1 (760) 881-3001",
                now: Instant::now(),
            });
        }
    }

    #[test]
    fn overlays_render() {
        let i18n = I18n::default();
        let page = page(2);
        let ctx = ViewContext {
            i18n: &i18n,
            page: &page,
            phone: "+1 (760) 881-3001",
            now: Instant::now(),
        };
        let _button = book_button(&ctx);
    }

    #[test]
    fn announcement_waits_for_page_load() {
        let i18n = I18n::default();
        let start = Instant::now();
        let mut page = page(0);
        let ctx = ViewContext {
            i18n: &i18n,
            page: &page,
            phone: "+1 (760) 881-3001",
            now: start,
        };
        assert!(announcement(&ctx).is_none());

        page.tick(start + Duration::from_millis(500));
        let ctx = ViewContext {
            i18n: &i18n,
            page: &page,
            phone: "+1 (760) 881-3001",
            now: start,
        };
        assert!(announcement(&ctx).is_some());

        page.tick(start + Duration::from_secs(10));
        let ctx = ViewContext {
            i18n: &i18n,
            page: &page,
            phone: "+1 (760) 881-3001",
            now: start,
        };
        assert!(announcement(&ctx).is_none());
    }

    #[test]
    fn field_ids_are_distinct() {
        let ids: Vec<_> = Field::ALL.into_iter().map(field_id).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_field_has_a_label_key() {
        let keys: Vec<_> = Field::ALL.into_iter().map(field_key).collect();
        assert_eq!(keys.len(), 4);
        assert!(keys.iter().all(|key| key.starts_with("form-")));
    }
}
