// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that do not render anything.
//!
//! # Available Adapters
//!
//! - [`simulated_transport`]: Fixed-delay stand-in for a contact backend
//!   (implements [`ContactTransport`])
//!
//! [`ContactTransport`]: crate::application::port::ContactTransport

pub mod simulated_transport;

// Re-export main types for convenience
pub use simulated_transport::SimulatedTransport;
