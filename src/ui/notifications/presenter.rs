// SPDX-License-Identifier: MPL-2.0
//! Single-slot notification presenter.
//!
//! The presenter owns the lifecycle of the one toast that may exist at a
//! time: attach off-screen, slide in after the enter delay, auto-dismiss
//! after a fixed time or on a manual close, slide out and finally remove.
//!
//! Timers are Iced tasks whose completion comes back as a [`Message`]
//! carrying the id of the toast that scheduled them. A message whose id no
//! longer matches the current toast is ignored, so a timer that outlives
//! its toast can never touch its successor.
//!
//! # Example
//!
//! ```
//! use core_bci_site::ui::notifications::{NotificationKind, Presenter, Timing};
//!
//! let mut presenter = Presenter::new(Timing::default());
//! let _task = presenter.notify("A", NotificationKind::Info);
//! let _task = presenter.notify("B", NotificationKind::Success);
//!
//! let current = presenter.current().expect("one toast");
//! assert_eq!(current.message(), "B");
//! assert_eq!(current.kind(), NotificationKind::Success);
//! ```

use super::notification::{Notification, NotificationId, NotificationKind};
use super::toast::ToastLayer;
use crate::application::port::ToastSurface;
use crate::config::{defaults, Config};
use iced::{task, Element, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Timer completions and user actions on the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The enter delay elapsed; slide the toast in.
    Reveal(NotificationId),
    /// The toast has been on screen long enough.
    AutoDismiss(NotificationId),
    /// The close control was pressed.
    Close(NotificationId),
    /// The exit transition elapsed; take the toast away.
    Remove(NotificationId),
}

/// Delays driving the toast lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub enter_delay: Duration,
    pub auto_dismiss: Duration,
    pub exit_transition: Duration,
}

impl Timing {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            enter_delay: config.notifications.enter_delay(),
            auto_dismiss: config.notifications.auto_dismiss(),
            exit_transition: config.notifications.exit_transition(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(defaults::DEFAULT_TOAST_ENTER_DELAY_MS),
            auto_dismiss: Duration::from_millis(defaults::DEFAULT_TOAST_AUTO_DISMISS_MS),
            exit_transition: Duration::from_millis(defaults::DEFAULT_TOAST_EXIT_MS),
        }
    }
}

/// Where the current toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached off-screen, waiting for the enter delay.
    Entering,
    /// Slid in and waiting to be dismissed.
    Shown,
    /// Sliding out; removal is scheduled.
    Leaving,
}

struct Slot {
    notification: Notification,
    phase: Phase,
    auto_dismiss: Option<task::Handle>,
}

impl Slot {
    fn cancel_auto_dismiss(&mut self) {
        if let Some(handle) = self.auto_dismiss.take() {
            handle.abort();
        }
    }
}

/// Shows one notification at a time on a [`ToastSurface`].
pub struct Presenter<S: ToastSurface = ToastLayer> {
    surface: S,
    slot: Option<Slot>,
    timing: Timing,
}

impl Presenter<ToastLayer> {
    /// Creates a presenter drawing on an Iced [`ToastLayer`].
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self::with_surface(ToastLayer::new(timing.exit_transition), timing)
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        self.surface.view(now)
    }

    /// Returns `true` while the toast is sliding.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.surface.is_animating(now)
    }
}

impl<S: ToastSurface> Presenter<S> {
    pub fn with_surface(surface: S, timing: Timing) -> Self {
        Self {
            surface,
            slot: None,
            timing,
        }
    }

    /// Shows `message`, replacing whatever toast is present.
    ///
    /// The previous toast is removed immediately and its pending
    /// auto-dismiss is cancelled before the new one is attached.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> Task<Message> {
        self.evict();

        let notification = Notification::new(kind, message);
        let id = notification.id();
        self.surface.attach(id, notification.message(), kind);
        tracing::debug!(%kind, message = notification.message(), "Showing notification");

        let reveal = after(self.timing.enter_delay, Message::Reveal(id));
        let (auto_dismiss, handle) =
            after(self.timing.auto_dismiss, Message::AutoDismiss(id)).abortable();

        self.slot = Some(Slot {
            notification,
            phase: Phase::Entering,
            auto_dismiss: Some(handle),
        });

        Task::batch([reveal, auto_dismiss])
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reveal(id) => {
                if let Some(slot) = self.slot_for(id) {
                    // A toast closed before it appeared stays hidden
                    if slot.phase == Phase::Entering {
                        slot.phase = Phase::Shown;
                        self.surface.slide_in(id);
                    }
                }
                Task::none()
            }
            Message::AutoDismiss(id) | Message::Close(id) => self.dismiss(id),
            Message::Remove(id) => {
                if self
                    .slot
                    .as_ref()
                    .is_some_and(|slot| slot.notification.id() == id && slot.phase == Phase::Leaving)
                {
                    self.slot = None;
                    self.surface.detach(id);
                }
                Task::none()
            }
        }
    }

    /// Returns the notification currently attached, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref().map(|slot| &slot.notification)
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.slot.as_ref().map(|slot| slot.phase)
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn slot_for(&mut self, id: NotificationId) -> Option<&mut Slot> {
        self.slot
            .as_mut()
            .filter(|slot| slot.notification.id() == id)
    }

    /// Starts the slide-out of toast `id` and schedules its removal.
    fn dismiss(&mut self, id: NotificationId) -> Task<Message> {
        let Some(slot) = self
            .slot
            .as_mut()
            .filter(|slot| slot.notification.id() == id && slot.phase != Phase::Leaving)
        else {
            return Task::none();
        };

        slot.cancel_auto_dismiss();
        slot.phase = Phase::Leaving;
        self.surface.slide_out(id);

        after(self.timing.exit_transition, Message::Remove(id))
    }

    fn evict(&mut self) {
        if let Some(mut slot) = self.slot.take() {
            slot.cancel_auto_dismiss();
            self.surface.detach(slot.notification.id());
        }
    }
}

impl Default for Presenter<ToastLayer> {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl<S: ToastSurface + fmt::Debug> fmt::Debug for Presenter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("surface", &self.surface)
            .field("current", &self.current())
            .field("phase", &self.phase())
            .field("timing", &self.timing)
            .finish()
    }
}

/// Emits `message` once `delay` has elapsed.
fn after(delay: Duration, message: Message) -> Task<Message> {
    // The sleep is created on first poll, inside the executor
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message)
}
