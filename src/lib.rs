// SPDX-License-Identifier: MPL-2.0
//! `core_bci_site` is The Core BCI landing page built with the Iced GUI framework.
//!
//! It renders the marketing sections with scroll-driven navigation and
//! fade-ins, validates and submits a contact form, and reports outcomes
//! through transient toast notifications.
//!
//! The crate is layered: [`domain`] holds pure rules (field validation,
//! notification identity), [`application`] defines the ports the UI drives,
//! [`infrastructure`] implements them, and [`ui`] plus [`app`] render the page.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod throttle;
pub mod ui;
