// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath three floating layers: the navbar, the
//! scroll progress bar and the toast layer.

use super::{Message, PAGE_SCROLL_ID};
use crate::i18n::fluent::I18n;
use crate::ui::contact::ContactForm;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Presenter;
use crate::ui::page::{sections, CardLift, PageLayout, Reveals, Section};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{Column, Container, Id, Scrollable, Space, Stack},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub layout: PageLayout,
    pub notifications: &'a Presenter,
    pub contact: &'a ContactForm,
    pub reveals: &'a Reveals,
    pub card_lift: &'a CardLift,
    pub active_section: Option<Section>,
    pub menu_open: bool,
    pub navbar_scrolled: bool,
    pub progress: f32,
    pub window_width: f32,
    pub keyboard_navigation: bool,
    pub now: Instant,
}

/// Renders the page with its floating layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = sections::view(sections::ViewContext {
        i18n: ctx.i18n,
        layout: ctx.layout,
        reveals: ctx.reveals,
        card_lift: ctx.card_lift,
        colors: ctx.colors,
        contact: ctx.contact,
        keyboard_navigation: ctx.keyboard_navigation,
        now: ctx.now,
    })
    .map(Message::Page);

    let page = Container::new(
        Scrollable::new(body)
            .id(Id::new(PAGE_SCROLL_ID))
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.active_section,
        menu_open: ctx.menu_open,
        scrolled: ctx.navbar_scrolled,
        compact: ctx.layout.is_compact(),
        height: ctx.layout.navbar_height(),
    })
    .map(Message::Navbar);

    let toasts = ctx.notifications.view(ctx.now).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(Column::new().width(Length::Fill).push(navbar))
        .push(progress_bar(ctx.progress, ctx.window_width))
        .push(toasts)
        .into()
}

/// Thin bar along the top edge, filled in proportion to `progress`.
fn progress_bar<'a>(progress: f32, window_width: f32) -> Element<'a, Message> {
    let fill = Container::new(Space::new())
        .width(Length::Fixed(progress.clamp(0.0, 1.0) * window_width))
        .height(Length::Fill)
        .style(styles::container::progress_fill);

    Container::new(fill)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .into()
}
