// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: geometry, reveals, card hover and section views.

pub mod hover;
pub mod layout;
pub mod reveal;
pub mod sections;

pub use hover::{Card, CardLift};
pub use layout::{scroll_progress, PageLayout, Section, Span};
pub use reveal::{Reveals, Target};
