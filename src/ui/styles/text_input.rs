// SPDX-License-Identifier: MPL-2.0
//! Contact form field styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_editor;
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

fn outline(colors: &ColorScheme, focused: bool, hovered: bool, keyboard_navigation: bool) -> Border {
    let (color, width) = if focused && keyboard_navigation {
        (colors.accent, border::WIDTH_MD)
    } else if focused {
        (colors.accent, border::WIDTH_SM)
    } else if hovered {
        (colors.text_secondary, border::WIDTH_SM)
    } else {
        (colors.border, border::WIDTH_SM)
    };

    Border {
        color,
        width,
        radius: radius::SM.into(),
    }
}

/// Form field; a focused field gets a thicker outline in keyboard-navigation mode.
pub fn field(keyboard_navigation: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let colors = ColorScheme::for_theme(theme);

        let focused = matches!(status, Status::Focused { .. });
        let hovered = matches!(status, Status::Hovered);

        Style {
            background: colors.surface_card.into(),
            border: outline(&colors, focused, hovered, keyboard_navigation),
            icon: colors.text_secondary,
            placeholder: colors.text_secondary,
            value: colors.text_primary,
            selection: colors.border,
        }
    }
}

/// Multi-line message field, outlined like [`field`].
pub fn text_area(
    keyboard_navigation: bool,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |theme: &Theme, status: text_editor::Status| {
        let colors = ColorScheme::for_theme(theme);
        let focused = matches!(status, text_editor::Status::Focused { .. });
        let hovered = matches!(status, text_editor::Status::Hovered);

        let mut style = text_editor::default(theme, status);
        style.background = colors.surface_card.into();
        style.border = outline(&colors, focused, hovered, keyboard_navigation);
        style.placeholder = colors.text_secondary;
        style.value = colors.text_primary;
        style.selection = colors.border;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_focus_is_more_visible_than_mouse_focus() {
        let focused = Status::Focused { is_hovered: false };
        let keyboard = field(true)(&Theme::Light, focused);
        let mouse = field(false)(&Theme::Light, focused);
        assert!(keyboard.border.width > mouse.border.width);
    }

    #[test]
    fn text_area_outline_matches_single_line_fields() {
        let focused = text_editor::Status::Focused { is_hovered: false };
        let area = text_area(true)(&Theme::Light, focused);
        let input = field(true)(&Theme::Light, Status::Focused { is_hovered: false });
        assert_eq!(area.border, input.border);
        assert_eq!(area.background, input.background);
    }
}
