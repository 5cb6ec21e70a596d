// SPDX-License-Identifier: MPL-2.0
//! Submit control of the contact form.

use crate::application::port::SubmitSurface;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::{Element, Length};

/// Iced rendition of [`SubmitSurface`].
///
/// Remembers its original label so a busy period can always be undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    label: String,
    busy_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: None,
        }
    }

    /// Text currently shown on the button.
    #[must_use]
    pub fn label(&self) -> &str {
        self.busy_label.as_deref().unwrap_or(&self.label)
    }

    /// A busy button ignores presses and is drawn faded.
    pub fn view<'a, Message: Clone + 'a>(&'a self, on_press: Message) -> Element<'a, Message> {
        let button = button(Text::new(self.label()).center())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding(spacing::SM);

        if self.is_busy() {
            button.style(styles::button::busy).into()
        } else {
            button
                .on_press(on_press)
                .style(styles::button::primary)
                .into()
        }
    }
}

impl SubmitSurface for SubmitButton {
    fn set_busy(&mut self, label: &str) {
        self.busy_label = Some(label.to_string());
    }

    fn restore(&mut self) {
        self.busy_label = None;
    }

    fn is_busy(&self) -> bool {
        self.busy_label.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_label_replaces_original_until_restored() {
        let mut submit = SubmitButton::new("Send Message");
        assert_eq!(submit.label(), "Send Message");
        assert!(!submit.is_busy());

        submit.set_busy("Sending...");
        assert_eq!(submit.label(), "Sending...");
        assert!(submit.is_busy());

        submit.restore();
        assert_eq!(submit.label(), "Send Message");
        assert!(!submit.is_busy());
    }
}
