// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast enter delay, auto-dismiss and exit transition
//! - **Contact**: Simulated submission delay
//! - **Scroll**: Throttle windows and scroll-driven thresholds
//! - **Page**: Fixed geometry shared by navigation and animations

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a freshly attached toast slides in (in milliseconds).
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 100;

/// Minimum toast enter delay.
pub const MIN_TOAST_ENTER_DELAY_MS: u64 = 0;

/// Maximum toast enter delay.
pub const MAX_TOAST_ENTER_DELAY_MS: u64 = 500;

/// Time a toast stays on screen before it dismisses itself (in milliseconds).
pub const DEFAULT_TOAST_AUTO_DISMISS_MS: u64 = 5_000;

/// Minimum auto-dismiss delay.
pub const MIN_TOAST_AUTO_DISMISS_MS: u64 = 1_000;

/// Maximum auto-dismiss delay.
pub const MAX_TOAST_AUTO_DISMISS_MS: u64 = 60_000;

/// Duration of the slide-out transition; removal happens once it elapses.
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;

/// Minimum exit transition.
pub const MIN_TOAST_EXIT_MS: u64 = 0;

/// Maximum exit transition.
pub const MAX_TOAST_EXIT_MS: u64 = 2_000;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Duration of the simulated remote call behind the contact form.
pub const DEFAULT_SIMULATED_SUBMIT_MS: u64 = 2_000;

/// Minimum simulated submission delay.
pub const MIN_SIMULATED_SUBMIT_MS: u64 = 0;

/// Maximum simulated submission delay.
pub const MAX_SIMULATED_SUBMIT_MS: u64 = 30_000;

/// Opacity of the submit button while a submission is in flight.
pub const SUBMIT_BUSY_OPACITY: f32 = 0.7;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Throttle window for active-link and navbar updates on scroll.
pub const DEFAULT_NAV_THROTTLE_MS: u64 = 100;

/// Throttle window for the scroll progress bar (about one frame).
pub const DEFAULT_PROGRESS_THROTTLE_MS: u64 = 16;

/// Throttle window for resize handling.
pub const DEFAULT_RESIZE_THROTTLE_MS: u64 = 250;

/// Minimum throttle window.
pub const MIN_THROTTLE_MS: u64 = 1;

/// Maximum throttle window.
pub const MAX_THROTTLE_MS: u64 = 1_000;

/// Scroll offset past which the navbar switches to its "scrolled" look.
pub const DEFAULT_NAVBAR_SCROLLED_THRESHOLD: f32 = 100.0;

/// Window width at or below which the navbar collapses behind a hamburger.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Minimum mobile breakpoint.
pub const MIN_MOBILE_BREAKPOINT: f32 = 320.0;

/// Maximum mobile breakpoint.
pub const MAX_MOBILE_BREAKPOINT: f32 = 2_000.0;

// ==========================================================================
// Page Geometry
// ==========================================================================

/// Height of the floating navbar.
pub const NAVBAR_HEIGHT: f32 = 80.0;

/// Extra slack subtracted from a section top when deciding the active link.
pub const ACTIVE_SECTION_SLACK: f32 = 50.0;

/// Duration of the eased scroll when jumping to a section.
pub const SMOOTH_SCROLL_MS: u64 = 400;

/// Delay before honoring a start-up section request.
pub const INITIAL_SECTION_DELAY_MS: u64 = 100;

/// Fraction of a target that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom margin removed from the viewport for reveal checks.
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Delay added per grid item so cards fade in one after another.
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Duration of the fade-in-up transition.
pub const REVEAL_TRANSITION_MS: u64 = 600;

/// Delay between a social link click and the logged target URL.
pub const SOCIAL_OPEN_DELAY_MS: u64 = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Notification validation
    assert!(DEFAULT_TOAST_ENTER_DELAY_MS <= MAX_TOAST_ENTER_DELAY_MS);
    assert!(MIN_TOAST_AUTO_DISMISS_MS > 0);
    assert!(DEFAULT_TOAST_AUTO_DISMISS_MS >= MIN_TOAST_AUTO_DISMISS_MS);
    assert!(DEFAULT_TOAST_AUTO_DISMISS_MS <= MAX_TOAST_AUTO_DISMISS_MS);
    assert!(DEFAULT_TOAST_EXIT_MS <= MAX_TOAST_EXIT_MS);
    // The toast must be fully in before it can start leaving
    assert!(MAX_TOAST_ENTER_DELAY_MS < MIN_TOAST_AUTO_DISMISS_MS);

    // Contact validation
    assert!(DEFAULT_SIMULATED_SUBMIT_MS <= MAX_SIMULATED_SUBMIT_MS);
    assert!(SUBMIT_BUSY_OPACITY > 0.0 && SUBMIT_BUSY_OPACITY < 1.0);

    // Throttle validation
    assert!(MIN_THROTTLE_MS > 0);
    assert!(DEFAULT_NAV_THROTTLE_MS >= MIN_THROTTLE_MS);
    assert!(DEFAULT_NAV_THROTTLE_MS <= MAX_THROTTLE_MS);
    assert!(DEFAULT_PROGRESS_THROTTLE_MS >= MIN_THROTTLE_MS);
    assert!(DEFAULT_RESIZE_THROTTLE_MS <= MAX_THROTTLE_MS);

    // Breakpoint validation
    assert!(DEFAULT_MOBILE_BREAKPOINT >= MIN_MOBILE_BREAKPOINT);
    assert!(DEFAULT_MOBILE_BREAKPOINT <= MAX_MOBILE_BREAKPOINT);
    assert!(DEFAULT_NAVBAR_SCROLLED_THRESHOLD >= 0.0);

    // Reveal validation
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(REVEAL_TRANSITION_MS > 0);
};
