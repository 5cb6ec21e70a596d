// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded at build time from `assets/i18n/`
//! - Message arguments (`{ $platform }`) through [`fluent::I18n::tr_with_args`]
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
