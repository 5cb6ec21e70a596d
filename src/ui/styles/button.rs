// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button for the main action of a block (hero CTA, submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.accent)),
            text_color: colors.on_accent,
            border: Border {
                color: colors.accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GRAY_800)),
            text_color: WHITE,
            border: Border {
                color: palette::GRAY_800,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => busy(theme, status),
    }
}

/// Outlined button for secondary actions.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.accent)), colors.on_accent)
        }
        _ => (None, colors.accent),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.accent,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Submit button while a submission is in flight: the primary look, faded.
pub fn busy(theme: &Theme, _status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = crate::config::defaults::SUBMIT_BUSY_OPACITY;

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..colors.accent })),
        text_color: Color { a: alpha, ..colors.on_accent },
        border: Border {
            color: Color { a: alpha, ..colors.accent },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar link; the active link is drawn in the primary text color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = match status {
            _ if active => colors.text_primary,
            button::Status::Hovered | button::Status::Pressed => colors.text_primary,
            _ => colors.text_secondary,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { colors.accent } else { Color::TRANSPARENT },
                width: if active { border::WIDTH_SM } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless glyph button (hamburger, toast close).
pub fn glyph(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            _ => opacity::OPAQUE,
        };

        button::Style {
            background: None,
            text_color: Color { a: alpha, ..text_color },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Footer text link.
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_accent() {
        let style = primary(&Theme::Light, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::BLACK);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn busy_button_is_faded() {
        let style = busy(&Theme::Light, button::Status::Disabled);
        assert!((style.text_color.a - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn active_nav_link_stays_highlighted_when_not_hovered() {
        let theme = Theme::Light;
        let active = nav_link(true)(&theme, button::Status::Active);
        let idle = nav_link(false)(&theme, button::Status::Active);

        assert_ne!(active.text_color, idle.text_color);
        assert!(active.border.width > 0.0);
    }
}
