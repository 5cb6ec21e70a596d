// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits describe the side effects of the notification presenter and
//! the contact form controller. The controllers stay testable because they
//! only ever talk to these interfaces.
//!
//! # Available Ports
//!
//! - [`surface`]: Visual surfaces driven by controllers (toast layer, submit button)
//! - [`transport`]: Delivery of a validated contact form
//!
//! # Design Notes
//!
//! - Surface traits are synchronous and infallible; they only mutate view state
//! - The transport returns a boxed future that callers wrap in an Iced `Task`
//!
//! # Example
//!
//! ```
//! use core_bci_site::application::port::{ToastSurface, TransportError};
//! use core_bci_site::domain::notification::{NotificationId, NotificationKind};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl ToastSurface for Log {
//!     fn attach(&mut self, _id: NotificationId, message: &str, kind: NotificationKind) {
//!         self.0.push(format!("{kind}: {message}"));
//!     }
//!     fn slide_in(&mut self, _id: NotificationId) {}
//!     fn slide_out(&mut self, _id: NotificationId) {}
//!     fn detach(&mut self, _id: NotificationId) {}
//! }
//!
//! let mut log = Log::default();
//! log.attach(NotificationId::new(), "Hello", NotificationKind::Info);
//! assert_eq!(log.0, ["info: Hello"]);
//! # let _ = TransportError::Unavailable(String::new());
//! ```

pub mod surface;
pub mod transport;

// Re-export main types for convenience
pub use surface::{SubmitSurface, ToastSurface};
pub use transport::{ContactTransport, TransportError, TransportFuture};
