// SPDX-License-Identifier: MPL-2.0
//! Contact form delivery port.

use crate::domain::contact::FormFields;
use futures_util::future::BoxFuture;
use std::fmt;

/// Errors that can occur while delivering a contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The remote end could not be reached.
    Unavailable(String),

    /// The remote end refused the message.
    Rejected(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unavailable(msg) => write!(f, "Service unavailable: {msg}"),
            TransportError::Rejected(msg) => write!(f, "Message rejected: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Future returned by [`ContactTransport::send`].
pub type TransportFuture = BoxFuture<'static, Result<(), TransportError>>;

/// Delivers validated contact form values.
///
/// Implementations must be cheap to clone behind an `Arc`; the returned
/// future owns everything it needs so it can run on the Iced executor.
pub trait ContactTransport: fmt::Debug + Send + Sync {
    fn send(&self, fields: FormFields) -> TransportFuture;
}
