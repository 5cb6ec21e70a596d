// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates the page state for one kind of message and returns
//! the follow-up task, if any.

use super::{App, Message, PAGE_SCROLL_ID};
use crate::config::{SMOOTH_SCROLL_MS, SOCIAL_OPEN_DELAY_MS};
use crate::ui::animation::{Easing, Tween};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::NotificationKind;
use crate::ui::page::{scroll_progress, sections, Section};
use crate::ui::social::Platform;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::{Duration, Instant};

impl App {
    pub(super) fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.menu_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Navigate(section) => {
                self.active_section = Some(section);
                self.scroll_to(section)
            }
        }
    }

    pub(super) fn handle_page_message(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::Navigate(section) => self.scroll_to(section),
            sections::Message::CardHovered(card, hovered) => {
                self.card_lift.set_hovered(card, hovered, self.now);
                Task::none()
            }
            sections::Message::SocialClicked(platform) => self.open_social(platform),
            sections::Message::Contact(message) => self.handle_contact_message(message),
        }
    }

    fn handle_contact_message(&mut self, message: contact::Message) -> Task<Message> {
        let (event, task) = self.contact.update(message);
        let task = task.map(|message| Message::Page(sections::Message::Contact(message)));

        let toast = match event {
            ContactEvent::None => Task::none(),
            ContactEvent::Rejected(error) => {
                let text = self.i18n.tr(error.i18n_key());
                self.notify(text, NotificationKind::Error)
            }
            ContactEvent::Delivered => {
                let text = self.i18n.tr("contact-success");
                self.notify(text, NotificationKind::Success)
            }
            ContactEvent::Failed(error) => {
                let reason = error.to_string();
                let text = self
                    .i18n
                    .tr_with_args("contact-delivery-failed", &[("reason", reason.as_str())]);
                self.notify(text, NotificationKind::Error)
            }
        };

        Task::batch([task, toast])
    }

    /// Announces the platform now and logs its address after a short delay.
    fn open_social(&mut self, platform: Platform) -> Task<Message> {
        let text = self
            .i18n
            .tr_with_args("social-opening", &[("platform", platform.name())]);
        let toast = self.notify(text, NotificationKind::Info);
        let open = Task::perform(
            async move {
                tokio::time::sleep(Duration::from_millis(SOCIAL_OPEN_DELAY_MS)).await;
            },
            move |()| Message::SocialOpened(platform),
        );

        Task::batch([toast, open])
    }

    /// Starts an eased scroll that puts `section` right below the navbar.
    ///
    /// Only scrolls: the menu and the active link are left to the caller.
    pub(super) fn scroll_to(&mut self, section: Section) -> Task<Message> {
        let layout = self.layout();
        let max_offset = (layout.content_height() - self.viewport_height).max(0.0);
        let target = layout.scroll_target(section).min(max_offset);
        // Retargeting mid-flight starts from where the page currently is
        let from = self
            .smooth_scroll
            .map_or(self.scroll_offset, |tween| tween.value_at(self.now));

        self.smooth_scroll = Some(
            Tween::new(
                from,
                target,
                self.now,
                Duration::from_millis(SMOOTH_SCROLL_MS),
            )
            .with_easing(Easing::EaseInOut),
        );
        tracing::debug!(%section, target, "scrolling to section");

        Task::none()
    }

    pub(super) fn handle_scrolled(&mut self, viewport: Viewport) -> Task<Message> {
        let offset = viewport.absolute_offset().y;
        let content_height = viewport.content_bounds().height;
        self.scroll_offset = offset;
        self.viewport_height = viewport.bounds().height;

        if self.progress_throttle.try_acquire(self.now) {
            self.progress = scroll_progress(offset, content_height, self.viewport_height);
        }

        if self.nav_throttle.try_acquire(self.now) {
            self.navbar_scrolled = offset > self.config.scroll.navbar_scrolled_threshold();
            self.active_section = self
                .layout()
                .active_section(offset)
                .filter(|section| section.nav_key().is_some());
        }

        let layout = self.layout();
        let revealed = self
            .reveals
            .observe(&layout, offset, self.viewport_height, self.now);
        if revealed > 0 {
            tracing::trace!(revealed, offset, "revealed page elements");
        }

        Task::none()
    }

    pub(super) fn handle_resized(&mut self, size: Size) -> Task<Message> {
        let compact_before = self.is_compact();
        self.window_width = size.width;
        self.viewport_height = size.height;

        // Every resize past the breakpoint closes the menu, throttled or not
        if self.menu_open && !self.is_compact() {
            self.menu_open = false;
            tracing::debug!(width = size.width, "closed mobile menu after resize");
        }

        // A layout switch moves every section, so it is never throttled away
        if self.resize_throttle.try_acquire(self.now) || compact_before != self.is_compact() {
            let layout = self.layout();
            self.reveals
                .observe(&layout, self.scroll_offset, self.viewport_height, self.now);
        }

        Task::none()
    }

    pub(super) fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.now = now;

        let Some(tween) = self.smooth_scroll else {
            return Task::none();
        };
        if tween.is_finished(now) {
            self.smooth_scroll = None;
        }

        operation::scroll_to(
            Id::new(PAGE_SCROLL_ID),
            AbsoluteOffset {
                x: 0.0,
                y: tween.value_at(now),
            },
        )
    }

    pub(super) fn move_focus(&mut self, backwards: bool) -> Task<Message> {
        self.keyboard_navigation = true;

        if backwards {
            operation::focus_previous()
        } else {
            operation::focus_next()
        }
    }
}
