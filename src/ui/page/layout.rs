// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section is laid out with a fixed height, so offsets of sections and
//! reveal targets are known without measuring widgets. Two height tables
//! exist: a wide one and a compact one used at or below the mobile
//! breakpoint, where grids collapse into a single column.

use crate::config::defaults::{ACTIVE_SECTION_SLACK, NAVBAR_HEIGHT};
use std::fmt;

/// Sections of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Works,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Works,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Sections reachable from the navbar, in link order.
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Works,
        Section::Contact,
    ];

    /// Anchor name of the section, as used by `--section`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Works => "works",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Parses an anchor name; a leading `#` is accepted.
    #[must_use]
    pub fn from_id(raw: &str) -> Option<Self> {
        let id = raw.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(id))
    }

    /// i18n key of the navbar link, if the section has one.
    #[must_use]
    pub fn nav_key(self) -> Option<&'static str> {
        match self {
            Section::Home => Some("nav-home"),
            Section::About => Some("nav-about"),
            Section::Services => Some("nav-services"),
            Section::Works => Some("nav-works"),
            Section::Contact => Some("nav-contact"),
            Section::Testimonials => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Services => 2,
            Section::Works => 3,
            Section::Testimonials => 4,
            Section::Contact => 5,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const WIDE_HEIGHTS: [f32; 6] = [720.0, 640.0, 660.0, 660.0, 460.0, 860.0];
const COMPACT_HEIGHTS: [f32; 6] = [720.0, 860.0, 1_240.0, 1_240.0, 540.0, 900.0];

/// Height of the footer below the last section.
pub const FOOTER_HEIGHT: f32 = 180.0;

/// A vertical extent on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of `self` that lies inside `root`.
    #[must_use]
    pub fn intersection_ratio(&self, root: Span) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let overlap = self.bottom().min(root.bottom()) - self.top.max(root.top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Section geometry for one window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    heights: [f32; 6],
    navbar_height: f32,
    compact: bool,
}

impl PageLayout {
    #[must_use]
    pub fn new(compact: bool) -> Self {
        Self {
            heights: if compact { COMPACT_HEIGHTS } else { WIDE_HEIGHTS },
            navbar_height: NAVBAR_HEIGHT,
            compact,
        }
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn navbar_height(&self) -> f32 {
        self.navbar_height
    }

    #[must_use]
    pub fn section_height(&self, section: Section) -> f32 {
        self.heights[section.index()]
    }

    /// Offset of the section's top edge from the top of the page.
    #[must_use]
    pub fn section_top(&self, section: Section) -> f32 {
        self.heights[..section.index()].iter().sum()
    }

    /// Total height of the page content.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.heights.iter().sum::<f32>() + FOOTER_HEIGHT
    }

    /// Scroll offset that puts the section right below the navbar.
    #[must_use]
    pub fn scroll_target(&self, section: Section) -> f32 {
        (self.section_top(section) - self.navbar_height).max(0.0)
    }

    /// The section whose navigation window contains `offset`.
    ///
    /// A section's window starts `navbar_height + 50` above its top edge and
    /// is as tall as the section. When windows overlap the later section
    /// wins; past the last window there is no active section.
    #[must_use]
    pub fn active_section(&self, offset: f32) -> Option<Section> {
        Section::ALL
            .into_iter()
            .filter(|&section| {
                let start =
                    self.section_top(section) - self.navbar_height - ACTIVE_SECTION_SLACK;
                offset >= start && offset < start + self.section_height(section)
            })
            .last()
    }
}

/// Fraction of the page scrolled, in `[0, 1]`.
///
/// A page that fits in the viewport reports `0`.
#[must_use]
pub fn scroll_progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable > 0.0 {
        (offset / scrollable).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_stacked_without_gaps() {
        let layout = PageLayout::new(false);
        let mut expected = 0.0;
        for section in Section::ALL {
            assert_eq!(layout.section_top(section), expected);
            expected += layout.section_height(section);
        }
        assert_eq!(layout.content_height(), expected + FOOTER_HEIGHT);
    }

    #[test]
    fn scroll_target_clears_the_navbar() {
        let layout = PageLayout::new(false);
        assert_eq!(layout.scroll_target(Section::Home), 0.0);
        assert_eq!(
            layout.scroll_target(Section::About),
            layout.section_top(Section::About) - NAVBAR_HEIGHT
        );
    }

    #[test]
    fn top_of_page_activates_home() {
        let layout = PageLayout::new(false);
        assert_eq!(layout.active_section(0.0), Some(Section::Home));
    }

    #[test]
    fn section_activates_slightly_before_it_reaches_the_navbar() {
        let layout = PageLayout::new(false);
        let about_top = layout.section_top(Section::About);
        let window_start = about_top - NAVBAR_HEIGHT - ACTIVE_SECTION_SLACK;

        assert_eq!(layout.active_section(window_start), Some(Section::About));
        assert_eq!(layout.active_section(window_start - 1.0), Some(Section::Home));
    }

    #[test]
    fn scrolling_to_a_section_activates_it() {
        for compact in [false, true] {
            let layout = PageLayout::new(compact);
            for section in Section::ALL {
                assert_eq!(
                    layout.active_section(layout.scroll_target(section)),
                    Some(section)
                );
            }
        }
    }

    #[test]
    fn footer_has_no_active_section() {
        let layout = PageLayout::new(false);
        assert_eq!(layout.active_section(layout.content_height()), None);
    }

    #[test]
    fn testimonials_have_no_nav_link() {
        assert_eq!(Section::Testimonials.nav_key(), None);
        assert!(!Section::NAV.contains(&Section::Testimonials));
    }

    #[test]
    fn section_ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("#Contact"), Some(Section::Contact));
        assert_eq!(Section::from_id("pricing"), None);
    }

    #[test]
    fn progress_is_clamped_and_zero_for_short_pages() {
        assert_eq!(scroll_progress(0.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_progress(1_500.0, 2_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 2_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1_000.0), 0.0);
    }

    #[test]
    fn intersection_ratio_measures_visible_fraction() {
        let root = Span::new(0.0, 100.0);
        assert_eq!(Span::new(50.0, 100.0).intersection_ratio(root), 0.5);
        assert_eq!(Span::new(200.0, 50.0).intersection_ratio(root), 0.0);
        assert_eq!(Span::new(10.0, 20.0).intersection_ratio(root), 1.0);
    }
}
