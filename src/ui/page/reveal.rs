// SPDX-License-Identifier: MPL-2.0
//! Fade-in-up reveals driven by scroll position.
//!
//! Targets start hidden. Once enough of a target enters the viewport it is
//! revealed for good: it fades in while sliding up into place. Grid items
//! start one after another.

use super::layout::{PageLayout, Section, Span};
use crate::config::defaults::{
    REVEAL_BOTTOM_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD, REVEAL_TRANSITION_MS,
};
use crate::ui::animation::Tween;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const STAT_COUNT: usize = 4;
pub const SERVICE_COUNT: usize = 3;
pub const WORK_COUNT: usize = 3;

/// An element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Header(Section),
    HeroContent,
    AboutDescription,
    Stat(usize),
    Service(usize),
    Work(usize),
    TestimonialContent,
    ContactContent,
}

impl Target {
    /// Every target on the page.
    pub fn all() -> impl Iterator<Item = Target> {
        let headers = [
            Section::About,
            Section::Services,
            Section::Works,
            Section::Testimonials,
            Section::Contact,
        ]
        .into_iter()
        .map(Target::Header);

        headers
            .chain([
                Target::HeroContent,
                Target::AboutDescription,
                Target::TestimonialContent,
                Target::ContactContent,
            ])
            .chain((0..STAT_COUNT).map(Target::Stat))
            .chain((0..SERVICE_COUNT).map(Target::Service))
            .chain((0..WORK_COUNT).map(Target::Work))
    }

    /// Position of a grid item within its grid.
    #[must_use]
    pub fn stagger_index(self) -> Option<usize> {
        match self {
            Target::Stat(i) | Target::Service(i) | Target::Work(i) => Some(i),
            _ => None,
        }
    }

    /// Extent of the target on the page.
    #[must_use]
    pub fn span(self, layout: &PageLayout) -> Span {
        let compact = layout.is_compact();
        let (section, top, height) = match self {
            Target::Header(section) => (section, 80.0, 110.0),
            Target::HeroContent => (Section::Home, 200.0, 320.0),
            Target::AboutDescription => (Section::About, 220.0, 160.0),
            Target::Stat(i) if compact => (Section::About, 420.0 + (i / 2) as f32 * 140.0, 120.0),
            Target::Stat(_) => (Section::About, 420.0, 120.0),
            Target::Service(i) if compact => (Section::Services, 220.0 + i as f32 * 330.0, 300.0),
            Target::Service(_) => (Section::Services, 220.0, 360.0),
            Target::Work(i) if compact => (Section::Works, 220.0 + i as f32 * 330.0, 300.0),
            Target::Work(_) => (Section::Works, 220.0, 360.0),
            Target::TestimonialContent => (Section::Testimonials, 220.0, 180.0),
            Target::ContactContent => (Section::Contact, 220.0, 560.0),
        };
        Span::new(layout.section_top(section) + top, height)
    }
}

/// Which targets have been revealed, and when their fade starts.
#[derive(Debug, Clone, Default)]
pub struct Reveals {
    started: HashMap<Target, Tween>,
}

impl Reveals {
    /// Reveals every target that intersects the viewport enough.
    ///
    /// The viewport is `[offset, offset + viewport_height)`, minus the bottom
    /// margin. Returns how many targets were newly revealed.
    pub fn observe(
        &mut self,
        layout: &PageLayout,
        offset: f32,
        viewport_height: f32,
        now: Instant,
    ) -> usize {
        let root = Span::new(offset, (viewport_height - REVEAL_BOTTOM_MARGIN).max(0.0));
        let mut revealed = 0;

        for target in Target::all() {
            if self.started.contains_key(&target) {
                continue;
            }
            if target.span(layout).intersection_ratio(root) >= REVEAL_THRESHOLD {
                let delay = target
                    .stagger_index()
                    .map_or(Duration::ZERO, |i| Duration::from_millis(REVEAL_STAGGER_MS * i as u64));
                let tween = Tween::new(
                    0.0,
                    1.0,
                    now + delay,
                    Duration::from_millis(REVEAL_TRANSITION_MS),
                );
                self.started.insert(target, tween);
                revealed += 1;
            }
        }

        revealed
    }

    #[must_use]
    pub fn is_revealed(&self, target: Target) -> bool {
        self.started.contains_key(&target)
    }

    /// How far the fade-in of `target` has progressed, in `[0, 1]`.
    #[must_use]
    pub fn visibility(&self, target: Target, now: Instant) -> f32 {
        self.started
            .get(&target)
            .map_or(0.0, |tween| tween.value_at(now))
    }

    /// Returns `true` while any fade is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started.values().any(|tween| !tween.is_finished(now))
    }
}
