// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`contact`]: Contact form values and validation
//!   ([`FormFields`](contact::FormFields), [`ValidationError`](contact::ValidationError))
//! - [`notification`]: Toast identity and kind
//!   ([`NotificationId`](notification::NotificationId), [`NotificationKind`](notification::NotificationKind))

pub mod contact;
pub mod notification;
