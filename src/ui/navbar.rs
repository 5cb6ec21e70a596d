// SPDX-License-Identifier: MPL-2.0
//! Navigation bar floating above the page.
//!
//! Wide windows show the section links inline. At or below the mobile
//! breakpoint the links move into a drop-down menu behind a hamburger
//! toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::page::Section;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Background, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Option<Section>,
    pub menu_open: bool,
    pub scrolled: bool,
    /// Whether the window is at or below the mobile breakpoint.
    pub compact: bool,
    pub height: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_MD);

    let trailing: Element<'a, Message> = if ctx.compact {
        hamburger(ctx.menu_open)
    } else {
        links(&ctx, Row::new().spacing(spacing::XS).align_y(Vertical::Center))
    };

    let bar = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(trailing),
    )
    .width(Length::Fill)
    .height(Length::Fixed(ctx.height))
    .padding([0.0, spacing::LG])
    .align_y(Vertical::Center)
    .style(styles::container::navbar(ctx.scrolled));

    let mut content = Column::new().width(Length::Fill).push(bar);

    if ctx.compact && ctx.menu_open {
        let dropdown = Container::new(links(&ctx, Column::new().spacing(spacing::XXS)))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::mobile_menu);
        content = content.push(dropdown);
    }

    content.into()
}

/// Appends one button per linked section to `container`.
fn links<'a, C>(ctx: &ViewContext<'a>, container: C) -> Element<'a, Message>
where
    C: LinkContainer<'a>,
{
    Section::NAV
        .into_iter()
        .filter_map(|section| section.nav_key().map(|key| (section, key)))
        .fold(container, |container, (section, key)| {
            let link = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM))
                .on_press(Message::Navigate(section))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(ctx.active == Some(section)));
            container.push_link(link.into())
        })
        .into_element()
}

/// Row or column holding the section links.
trait LinkContainer<'a> {
    fn push_link(self, link: Element<'a, Message>) -> Self;
    fn into_element(self) -> Element<'a, Message>;
}

impl<'a> LinkContainer<'a> for Row<'a, Message> {
    fn push_link(self, link: Element<'a, Message>) -> Self {
        self.push(link)
    }

    fn into_element(self) -> Element<'a, Message> {
        self.into()
    }
}

impl<'a> LinkContainer<'a> for Column<'a, Message> {
    fn push_link(self, link: Element<'a, Message>) -> Self {
        self.push(link)
    }

    fn into_element(self) -> Element<'a, Message> {
        self.width(Length::Fill).into()
    }
}

/// Three-bar toggle of the collapsed menu.
fn hamburger<'a>(open: bool) -> Element<'a, Message> {
    let bar = |width: f32| {
        Container::new(Space::new())
            .width(Length::Fixed(width))
            .height(Length::Fixed(2.0))
            .style(|theme: &Theme| container::Style {
                background: Some(Background::Color(ColorScheme::for_theme(theme).accent)),
                ..Default::default()
            })
    };
    // The middle bar shortens while the menu is open
    let middle = if open { 16.0 } else { 24.0 };

    button(
        Column::new()
            .spacing(5.0)
            .push(bar(24.0))
            .push(bar(middle))
            .push(bar(24.0)),
    )
    .on_press(Message::ToggleMenu)
    .width(Length::Fixed(sizing::HAMBURGER))
    .height(Length::Fixed(sizing::HAMBURGER))
    .padding(spacing::XXS)
    .style(styles::button::glyph(iced::Color::TRANSPARENT))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_menu_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn navigating_closes_the_menu() {
        let mut open = true;
        let event = update(Message::Navigate(Section::Works), &mut open);
        assert_eq!(event, Event::Navigate(Section::Works));
        assert!(!open);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut open = false;
        update(Message::CloseMenu, &mut open);
        assert!(!open);
    }
}
