// SPDX-License-Identifier: MPL-2.0
//! Toast layer: the on-screen surface of the notification presenter.
//!
//! Holds at most one toast, pinned to the top-right corner. A toast is
//! attached off-screen to the right and slides horizontally between that
//! position and its resting place.

use super::presenter::Message;
use crate::application::port::ToastSurface;
use crate::domain::notification::{NotificationId, NotificationKind};
use crate::ui::animation::Tween;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::transform;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Padding, Vector};
use std::time::{Duration, Instant};

/// Fraction of the slide: 0.0 is off-screen, 1.0 is fully in.
const HIDDEN: f32 = 0.0;
const SHOWN: f32 = 1.0;

#[derive(Debug, Clone)]
struct AttachedToast {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    slide: Tween,
}

/// Iced rendition of [`ToastSurface`].
#[derive(Debug, Clone)]
pub struct ToastLayer {
    toast: Option<AttachedToast>,
    transition: Duration,
}

impl ToastLayer {
    /// Creates an empty layer whose slides take `transition`.
    #[must_use]
    pub fn new(transition: Duration) -> Self {
        Self {
            toast: None,
            transition,
        }
    }

    /// Returns the id of the attached toast, if any.
    #[must_use]
    pub fn attached(&self) -> Option<NotificationId> {
        self.toast.as_ref().map(|toast| toast.id)
    }

    /// Returns the slide position the attached toast is heading to.
    #[must_use]
    pub fn slide_target(&self) -> Option<f32> {
        self.toast.as_ref().map(|toast| toast.slide.target())
    }

    /// Returns `true` while a slide is in progress.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.toast
            .as_ref()
            .is_some_and(|toast| !toast.slide.is_finished(now))
    }

    fn slide_to(&mut self, id: NotificationId, target: f32) {
        let transition = self.transition;
        if let Some(toast) = self.toast.as_mut().filter(|toast| toast.id == id) {
            toast.slide = toast.slide.retarget(target, Instant::now(), transition);
        }
    }

    /// Renders the layer. Meant to be stacked above the page.
    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let Some(toast) = &self.toast else {
            return Space::new().into();
        };

        let close = button(
            Text::new("\u{00d7}")
                .size(typography::BODY_LG)
                .center(),
        )
        .on_press(Message::Close(toast.id))
        .padding(0)
        .width(Length::Fixed(sizing::TOAST_CLOSE))
        .height(Length::Fixed(sizing::TOAST_CLOSE))
        .style(styles::button::glyph(palette::WHITE));

        let content = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(toast.message.as_str()).size(typography::BODY_SM))
            .push(close);

        let card = Container::new(content)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(Padding {
                top: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD + spacing::XXS,
                right: spacing::MD + spacing::XXS,
            })
            .style(styles::container::toast(toast.kind));

        // Off-screen means shifted right by the full width plus the corner gap
        let travel = sizing::TOAST_MAX_WIDTH + sizing::TOAST_MARGIN;
        let shift = (SHOWN - toast.slide.value_at(now)) * travel;

        Container::new(transform(card).translate(Vector::new(shift, 0.0)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(Padding {
                top: sizing::TOAST_MARGIN,
                right: sizing::TOAST_MARGIN,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

impl ToastSurface for ToastLayer {
    fn attach(&mut self, id: NotificationId, message: &str, kind: NotificationKind) {
        self.toast = Some(AttachedToast {
            id,
            message: message.to_string(),
            kind,
            slide: Tween::settled(HIDDEN, Instant::now()),
        });
    }

    fn slide_in(&mut self, id: NotificationId) {
        self.slide_to(id, SHOWN);
    }

    fn slide_out(&mut self, id: NotificationId) {
        self.slide_to(id, HIDDEN);
    }

    fn detach(&mut self, id: NotificationId) {
        if self.attached() == Some(id) {
            self.toast = None;
        }
    }
}
