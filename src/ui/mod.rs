// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - Section geometry, reveal animations, card hover and section views
//! - [`navbar`] - Floating navigation bar with the collapsible mobile menu
//! - [`contact`] - Contact form and its submit button
//! - [`notifications`] - Single-slot toast presenter
//! - [`social`] - Footer social links
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Time-based tweens sampled on each frame
//! - [`widgets`] - Custom Iced widgets (translate and fade wrapper)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod contact;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod social;
pub mod styles;
pub mod theming;
pub mod widgets;
