// SPDX-License-Identifier: MPL-2.0
//! Leading-edge rate limiter for high-frequency UI signals.
//!
//! Scroll and resize events arrive far more often than the page needs to
//! react. A [`Throttle`] lets the first call of each window through and
//! drops the rest until the window has elapsed.
//!
//! ```
//! use core_bci_site::throttle::Throttle;
//! use std::time::{Duration, Instant};
//!
//! let mut throttle = Throttle::new(Duration::from_millis(100));
//! let start = Instant::now();
//!
//! assert!(throttle.try_acquire(start));
//! assert!(!throttle.try_acquire(start + Duration::from_millis(50)));
//! assert!(throttle.try_acquire(start + Duration::from_millis(100)));
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// Returns `true` if a call made at `now` may run, and opens a new window.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let open = match self.last_fired {
            None => true,
            // A clock that went backwards counts as a fresh window
            Some(last) => now
                .checked_duration_since(last)
                .is_none_or(|elapsed| elapsed >= self.interval),
        };
        if open {
            self.last_fired = Some(now);
        }
        open
    }
}
