// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, mouse and window events are turned into top-level
//! messages here. Scroll positions come from the page scrollable itself.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes the native events the page reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Tab),
            modifiers,
            ..
        }) => Some(Message::FocusMoved {
            backwards: modifiers.shift(),
        }),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Escape),
        event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::MousePressed {
            captured: matches!(status, event::Status::Captured),
        }),
        _ => None,
    })
}

/// Creates the animation tick subscription, active only while something moves.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
