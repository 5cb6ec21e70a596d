// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::notification::NotificationKind;
use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Page background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Section band; alternate sections use the secondary surface.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if alternate {
            colors.surface_secondary
        } else {
            colors.surface_primary
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            ..Default::default()
        }
    }
}

/// Floating navbar; gains a solid backdrop and a shadow once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(if scrolled {
                colors.navbar_scrolled
            } else {
                colors.surface_primary
            })),
            text_color: Some(colors.text_primary),
            shadow: if scrolled { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Drop-down panel of the collapsed navbar.
pub fn mobile_menu(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Service and work cards; `lifted` while hovered.
pub fn card(lifted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);

        container::Style {
            background: Some(Background::Color(colors.surface_card)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: colors.border,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if lifted { shadow::LG } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Background color of a toast, keyed by kind.
#[must_use]
pub fn toast_background(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => palette::BLACK,
        NotificationKind::Error => palette::GRAY_600,
        NotificationKind::Info => palette::GRAY_500,
    }
}

/// Toast box: kind-keyed greyscale background with white text.
pub fn toast(kind: NotificationKind) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(toast_background(kind))),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Filled part of the scroll progress bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, palette::GRAY_600)
        .add_stop(1.0, palette::BLACK);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_backgrounds_follow_kind() {
        assert_eq!(toast_background(NotificationKind::Success), Color::BLACK);
        assert_eq!(
            toast_background(NotificationKind::Error),
            Color::from_rgb(0.4, 0.4, 0.4)
        );
        assert_eq!(
            toast_background(NotificationKind::Info),
            Color::from_rgb(0.6, 0.6, 0.6)
        );
    }

    #[test]
    fn toast_text_is_white_for_every_kind() {
        for kind in [
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Error,
        ] {
            let style = toast(kind)(&Theme::Light);
            assert_eq!(style.text_color, Some(Color::WHITE));
        }
    }

    #[test]
    fn scrolled_navbar_casts_a_shadow() {
        let flat = navbar(false)(&Theme::Light);
        let scrolled = navbar(true)(&Theme::Light);
        assert!(scrolled.shadow.blur_radius > flat.shadow.blur_radius);
    }

    #[test]
    fn lifted_card_has_deeper_shadow() {
        let resting = card(false)(&Theme::Light);
        let lifted = card(true)(&Theme::Light);
        assert!(lifted.shadow.offset.y > resting.shadow.offset.y);
    }
}
