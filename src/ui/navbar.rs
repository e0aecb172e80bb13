// SPDX-License-Identifier: MPL-2.0
//! Sticky header with the salon name, wait-time estimate and section links.
//!
//! Wide windows show the links inline. Narrow windows collapse them behind a
//! hamburger toggle whose dropdown closes again once a link is followed.

use crate::i18n::fluent::I18n;
use crate::site::{FocusTarget, MobileNav, Section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, responsive, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Windows narrower than this use the hamburger menu.
pub const COLLAPSE_BELOW_WIDTH: f32 = 768.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub nav: MobileNav,
    pub active: Option<Section>,
    pub focused: Option<FocusTarget>,
    pub wait_time: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    LinkActivated(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollTo(Section),
}

pub fn update(message: Message, nav: &mut MobileNav) -> Event {
    match message {
        Message::ToggleMenu => {
            nav.toggle();
            Event::None
        }
        Message::LinkActivated(section) => {
            nav.link_activated(&section.href());
            Event::ScrollTo(section)
        }
    }
}

#[derive(Debug, Clone)]
struct Link {
    section: Section,
    label: String,
    active: bool,
    focused: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let links: Vec<Link> = Section::ALL
        .into_iter()
        .filter(|section| section.in_nav())
        .map(|section| Link {
            section,
            label: ctx.i18n.tr(section.title_key()),
            active: ctx.active == Some(section),
            focused: ctx.focused == Some(FocusTarget::NavLink(section)),
        })
        .collect();
    let brand = ctx.i18n.tr("brand-name");
    let wait = ctx
        .i18n
        .tr_with_args("wait-time-label", &[("time", ctx.wait_time)]);
    let menu_label = ctx.i18n.tr(if ctx.nav.aria_expanded() {
        "nav-close-menu"
    } else {
        "nav-open-menu"
    });
    let nav = ctx.nav;
    let hamburger_focused = ctx.focused == Some(FocusTarget::Hamburger);

    responsive(move |size| {
        let collapsed = size.width < COLLAPSE_BELOW_WIDTH;

        let mut top = Row::new()
            .spacing(spacing::LG)
            .padding([spacing::SM, spacing::LG])
            .align_y(Vertical::Center)
            .push(Text::new(brand.clone()).size(typography::TITLE_MD))
            .push(Text::new(wait.clone()).size(typography::CAPTION))
            .push(Space::new().width(Length::Fill));

        if collapsed {
            let toggle = button(Text::new(format!("{} {}", nav.icon(), menu_label)))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav_link(nav.is_open(), hamburger_focused));
            top = top.push(toggle);
        } else {
            for link in &links {
                top = top.push(link_button(link));
            }
        }

        let mut content = Column::new().width(Length::Fill).push(
            Container::new(top)
                .width(Length::Fill)
                .height(sizing::NAVBAR_HEIGHT)
                .align_y(Vertical::Center),
        );

        if collapsed && nav.is_open() {
            let dropdown = links.iter().fold(
                Column::new().spacing(spacing::XXS).padding(spacing::XS),
                |column, link| column.push(link_button(link).width(Length::Fill)),
            );
            content = content.push(Container::new(dropdown).style(styles::container::dropdown));
        }

        Container::new(content)
            .width(Length::Fill)
            .style(styles::container::header)
            .into()
    })
    .into()
}

fn link_button<'a>(link: &Link) -> iced::widget::Button<'a, Message> {
    button(Text::new(link.label.clone()).size(typography::BODY))
        .on_press(Message::LinkActivated(link.section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(link.active, link.focused))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            nav: MobileNav::new(),
            active: Some(Section::Gallery),
            focused: None,
            wait_time: "10-15 min",
        });
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let mut nav = MobileNav::new();
        nav.toggle();
        let _element = view(ViewContext {
            i18n: &i18n,
            nav,
            active: None,
            focused: Some(FocusTarget::Hamburger),
            wait_time: "5-10 min",
        });
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut nav = MobileNav::new();
        assert_eq!(update(Message::ToggleMenu, &mut nav), Event::None);
        assert!(nav.is_open());
        assert_eq!(update(Message::ToggleMenu, &mut nav), Event::None);
        assert!(!nav.is_open());
    }

    #[test]
    fn link_closes_menu_and_requests_scroll() {
        let mut nav = MobileNav::new();
        nav.toggle();
        let event = update(Message::LinkActivated(Section::Contact), &mut nav);
        assert!(!nav.is_open());
        assert_eq!(event, Event::ScrollTo(Section::Contact));
    }
}
