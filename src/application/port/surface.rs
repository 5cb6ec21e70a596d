// SPDX-License-Identifier: MPL-2.0
//! Surfaces the controllers draw on.
//!
//! A surface is the part of the screen a controller is allowed to touch.
//! The Iced adapters live in `ui`; tests plug in recording implementations.

use crate::domain::notification::{NotificationId, NotificationKind};

/// Where toasts are attached, moved and removed.
///
/// Every call carries the id of the toast it targets. Implementations hold
/// at most one toast and ignore calls addressed to a toast they no longer
/// hold.
pub trait ToastSurface {
    /// Attaches a toast in its off-screen position.
    fn attach(&mut self, id: NotificationId, message: &str, kind: NotificationKind);

    /// Moves the toast into its visible position.
    fn slide_in(&mut self, id: NotificationId);

    /// Moves the toast back to its off-screen position.
    fn slide_out(&mut self, id: NotificationId);

    /// Removes the toast.
    fn detach(&mut self, id: NotificationId);
}

/// The submit control of the contact form.
pub trait SubmitSurface {
    /// Disables the control and shows `label` in its busy look.
    fn set_busy(&mut self, label: &str);

    /// Re-enables the control with its original label and look.
    fn restore(&mut self);

    /// Returns `true` while the control is disabled.
    fn is_busy(&self) -> bool;
}
