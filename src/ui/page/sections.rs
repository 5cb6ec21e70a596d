// SPDX-License-Identifier: MPL-2.0
//! Section views of the landing page.
//!
//! Every band is rendered at the fixed height given by [`PageLayout`], so
//! what is drawn matches the geometry used for navigation and reveals.

use super::hover::{Card, CardLift};
use super::layout::{PageLayout, Section, FOOTER_HEIGHT};
use super::reveal::{Reveals, Target, SERVICE_COUNT, STAT_COUNT, WORK_COUNT};
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, ContactForm};
use crate::ui::design_tokens::{motion, sizing, spacing, typography};
use crate::ui::social::Platform;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::transform;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Space, Text},
    Color, Element, Length, Vector,
};
use std::time::Instant;

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: PageLayout,
    pub reveals: &'a Reveals,
    pub card_lift: &'a CardLift,
    pub colors: &'a ColorScheme,
    pub contact: &'a ContactForm,
    pub keyboard_navigation: bool,
    pub now: Instant,
}

/// Messages emitted by the page body.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
    CardHovered(Card, bool),
    SocialClicked(Platform),
    Contact(contact::Message),
}

/// Render every section followed by the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero(&ctx))
        .push(about(&ctx))
        .push(services(&ctx))
        .push(works(&ctx))
        .push(testimonials(&ctx))
        .push(contact_section(&ctx))
        .push(footer(&ctx))
        .into()
}

/// Sections drawn on the secondary surface.
fn is_alternate(section: Section) -> bool {
    matches!(section, Section::About | Section::Works | Section::Contact)
}

fn backdrop(ctx: &ViewContext<'_>, section: Section) -> Color {
    if is_alternate(section) {
        ctx.colors.surface_secondary
    } else {
        ctx.colors.surface_primary
    }
}

/// Wraps `content` in a fade-in-up reveal, lifted by `lift` (0..=1).
fn reveal<'a>(
    ctx: &ViewContext<'a>,
    target: Target,
    section: Section,
    lift: f32,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let visibility = ctx.reveals.visibility(target, ctx.now);
    let dy = (1.0 - visibility) * motion::FADE_IN_OFFSET - lift * motion::CARD_LIFT;

    transform(content)
        .translate(Vector::new(0.0, dy))
        .fade(backdrop(ctx, section), visibility)
        .into()
}

fn band<'a>(
    ctx: &ViewContext<'a>,
    section: Section,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let inner = Container::new(body)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.layout.section_height(section)))
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::section(is_alternate(section)))
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let id = section.id();
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(110.0))
        .push(Text::new(ctx.i18n.tr(&format!("{id}-title"))).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr(&format!("{id}-subtitle")))
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary),
        );

    reveal(ctx, Target::Header(section), section, 0.0, content)
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let ctas = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-services")))
                .on_press(Message::Navigate(Section::Services))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta-contact")))
                .on_press(Message::Navigate(Section::Contact))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .center(),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .color(ctx.colors.text_secondary)
                .center(),
        )
        .push(ctas);

    let body = Column::new()
        .push(Space::new().height(Length::Fixed(120.0)))
        .push(reveal(ctx, Target::HeroContent, Section::Home, 0.0, content));

    band(ctx, Section::Home, body)
}

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = Text::new(ctx.i18n.tr("about-description"))
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .center();

    let stat = |i: usize| {
        let n = i + 1;
        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(ctx.i18n.tr(&format!("about-stat-{n}-value")))
                    .size(typography::TITLE_LG),
            )
            .push(
                Text::new(ctx.i18n.tr(&format!("about-stat-{n}-label")))
                    .size(typography::BODY_SM)
                    .color(ctx.colors.text_secondary),
            );
        reveal(ctx, Target::Stat(i), Section::About, 0.0, content)
    };

    // Two rows of two on narrow windows
    let stats: Element<'a, Message> = if ctx.layout.is_compact() {
        (0..STAT_COUNT)
            .step_by(2)
            .fold(Column::new().spacing(spacing::LG), |column, i| {
                column.push(
                    Row::new()
                        .spacing(spacing::LG)
                        .push(stat(i))
                        .push(stat(i + 1)),
                )
            })
            .into()
    } else {
        (0..STAT_COUNT)
            .fold(Row::new().spacing(spacing::LG), |row, i| row.push(stat(i)))
            .into()
    };

    let body = Column::new()
        .spacing(spacing::XL)
        .push(header(ctx, Section::About))
        .push(reveal(
            ctx,
            Target::AboutDescription,
            Section::About,
            0.0,
            description,
        ))
        .push(stats);

    band(ctx, Section::About, body)
}

/// A hoverable card with a title and a caption.
fn card<'a>(
    ctx: &ViewContext<'a>,
    card: Card,
    target: Target,
    section: Section,
    title_key: String,
    caption_key: String,
) -> Element<'a, Message> {
    let lift = ctx.card_lift.lift(card, ctx.now);
    let content = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr(&title_key)).size(typography::TITLE_SM))
            .push(
                Text::new(ctx.i18n.tr(&caption_key))
                    .size(typography::BODY)
                    .color(ctx.colors.text_secondary),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_MIN_HEIGHT))
    .padding(spacing::LG)
    .style(styles::container::card(ctx.card_lift.is_hovered(card)));

    let hoverable = mouse_area(content)
        .on_enter(Message::CardHovered(card, true))
        .on_exit(Message::CardHovered(card, false));

    reveal(ctx, target, section, lift, hoverable)
}

/// Cards side by side, or stacked on narrow windows.
fn grid<'a>(ctx: &ViewContext<'a>, cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    if ctx.layout.is_compact() {
        Column::with_children(cards).spacing(spacing::LG).into()
    } else {
        Row::with_children(cards).spacing(spacing::LG).into()
    }
}

fn services<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = (0..SERVICE_COUNT)
        .map(|i| {
            card(
                ctx,
                Card::Service(i),
                Target::Service(i),
                Section::Services,
                format!("service-{}-title", i + 1),
                format!("service-{}-description", i + 1),
            )
        })
        .collect();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(header(ctx, Section::Services))
        .push(grid(ctx, cards));

    band(ctx, Section::Services, body)
}

fn works<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = (0..WORK_COUNT)
        .map(|i| {
            card(
                ctx,
                Card::Work(i),
                Target::Work(i),
                Section::Works,
                format!("work-{}-title", i + 1),
                format!("work-{}-category", i + 1),
            )
        })
        .collect();

    let body = Column::new()
        .spacing(spacing::XL)
        .push(header(ctx, Section::Works))
        .push(grid(ctx, cards));

    band(ctx, Section::Works, body)
}

fn testimonials<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("testimonial-quote"))
                .size(typography::TITLE_SM)
                .center(),
        )
        .push(
            Text::new(ctx.i18n.tr("testimonial-author"))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary),
        );

    let body = Column::new()
        .spacing(spacing::XL)
        .push(header(ctx, Section::Testimonials))
        .push(reveal(
            ctx,
            Target::TestimonialContent,
            Section::Testimonials,
            0.0,
            content,
        ));

    band(ctx, Section::Testimonials, body)
}

fn contact_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx
        .contact
        .view(contact::ViewContext {
            i18n: ctx.i18n,
            keyboard_navigation: ctx.keyboard_navigation,
        })
        .map(Message::Contact);

    let content = Container::new(form)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let body = Column::new()
        .spacing(spacing::XL)
        .push(header(ctx, Section::Contact))
        .push(reveal(
            ctx,
            Target::ContactContent,
            Section::Contact,
            0.0,
            content,
        ));

    band(ctx, Section::Contact, body)
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let socials = Platform::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, platform| {
            row.push(
                button(Text::new(platform.label()).size(typography::BODY_SM))
                    .on_press(Message::SocialClicked(platform))
                    .padding(spacing::XXS)
                    .style(styles::button::text_link),
            )
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr("footer-tagline"))
                .size(typography::BODY_SM)
                .color(ctx.colors.text_secondary),
        )
        .push(socials)
        .push(
            Text::new(ctx.i18n.tr("footer-copyright"))
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::section(true))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_bands_never_touch() {
        for pair in Section::ALL.windows(2) {
            assert!(
                !(is_alternate(pair[0]) && is_alternate(pair[1])),
                "{} and {} share a surface",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn home_is_on_the_primary_surface() {
        assert!(!is_alternate(Section::Home));
    }
}
