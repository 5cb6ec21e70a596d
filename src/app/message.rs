// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page::{sections, Section};
use crate::ui::social::Platform;
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(sections::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled(Viewport),
    WindowResized(Size),
    /// Animation frame.
    Tick(Instant),
    /// Start an eased scroll to a section.
    ScrollTo(Section),
    /// The delay after a social link click elapsed.
    SocialOpened(Platform),
    /// Tab or Shift+Tab.
    FocusMoved { backwards: bool },
    Escape,
    /// Any mouse button went down; `captured` when a widget consumed it.
    MousePressed { captured: bool },
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CORE_BCI_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Section to scroll to once the page is shown (e.g. `contact`).
    pub section: Option<String>,
}
