// SPDX-License-Identifier: MPL-2.0
//! Core notification record.

pub use crate::domain::notification::{NotificationId, NotificationKind};

/// A notification to be displayed to the user.
///
/// The message is resolved through i18n by the caller before the record is
/// built, so it is shown exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(NotificationKind::Info, "test");
        let n2 = Notification::new(NotificationKind::Info, "test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_is_kept() {
        for kind in [
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Error,
        ] {
            assert_eq!(Notification::new(kind, "a").kind(), kind);
        }
    }

    #[test]
    fn message_is_kept_verbatim() {
        let n = Notification::new(NotificationKind::Error, "Please enter your name.");
        assert_eq!(n.message(), "Please enter your name.");
    }
}
