// SPDX-License-Identifier: MPL-2.0
//! Social media links of the footer.
//!
//! No browser is opened: a click announces the platform with an info toast
//! and, a moment later, logs the address that would have been visited.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Twitter,
    LinkedIn,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Instagram,
    ];

    /// Display name, capitalized as in "Opening Linkedin page...".
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "Linkedin",
            Platform::Instagram => "Instagram",
        }
    }

    /// Label of the footer link.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            other => other.name(),
        }
    }

    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Platform::Facebook => "https://facebook.com/thecorebci",
            Platform::Twitter => "https://twitter.com/thecorebci",
            Platform::LinkedIn => "https://linkedin.com/company/thecorebci",
            Platform::Instagram => "https://instagram.com/thecorebci",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_has_its_own_address() {
        for (i, a) in Platform::ALL.iter().enumerate() {
            assert!(a.url().starts_with("https://"));
            for b in &Platform::ALL[i + 1..] {
                assert_ne!(a.url(), b.url());
            }
        }
    }

    #[test]
    fn toast_name_only_capitalizes_the_first_letter() {
        assert_eq!(Platform::LinkedIn.name(), "Linkedin");
        assert_eq!(Platform::LinkedIn.label(), "LinkedIn");
        assert_eq!(Platform::Twitter.name(), "Twitter");
    }
}
