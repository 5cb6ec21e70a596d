// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single toast at a time informs the visitor about form outcomes and
//! outbound links without blocking the page.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record with its kind
//! - [`presenter`] - `Presenter` driving the single-slot lifecycle
//! - [`toast`] - `ToastLayer`, the Iced surface the presenter draws on
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{NotificationKind, Presenter, Timing};
//!
//! let mut presenter = Presenter::new(Timing::default());
//!
//! // Show a toast; the returned task drives its timers
//! let task = presenter.notify("Opening Facebook page...", NotificationKind::Info);
//!
//! // In your view function, stack the layer above the page
//! let toast_layer = presenter.view(now).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - One toast at most: a new notification evicts the current one
//! - Slide in after 100 ms, auto-dismiss after 5 s, removal 300 ms after slide-out
//! - Position: top-right corner

mod notification;
mod presenter;
mod toast;

pub use notification::{Notification, NotificationId, NotificationKind};
pub use presenter::{Message as NotificationMessage, Phase, Presenter, Timing};
pub use toast::ToastLayer;
