// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation for the page's transitions.
//!
//! Views are pure functions of state, so every moving value is stored as a
//! [`Tween`] and sampled with the instant of the latest animation tick.

use std::time::{Duration, Instant};

/// Easing curve applied to a [`Tween`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// CSS `ease`-like deceleration.
    #[default]
    EaseOut,
    /// Symmetric acceleration and deceleration, used for smooth scrolling.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A value moving from `from` to `to` over `duration`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing: Easing::default(),
        }
    }

    /// A tween that already sits at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Samples the tween. Before `start` it holds `from`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return if now >= self.start { self.to } else { self.from };
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.start + self.duration
    }

    /// Value the tween is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts a new tween from wherever this one is at `now`.
    #[must_use]
    pub fn retarget(&self, to: f32, now: Instant, duration: Duration) -> Self {
        Self::new(self.value_at(now), to, now, duration).with_easing(self.easing)
    }
}
