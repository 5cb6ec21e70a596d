// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the page's design tokens, following the W3C Design Tokens standard.
The page is strictly greyscale: every color is a shade between black and white.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Offsets used by animated elements

## Examples

```
use core_bci_site::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent backdrop
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1); // #1a1a1a
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333
    pub const GRAY_600: Color = Color::from_rgb(0.4, 0.4, 0.4); // #666666
    pub const GRAY_500: Color = Color::from_rgb(0.6, 0.6, 0.6); // #999999
    pub const GRAY_300: Color = Color::from_rgb(0.8, 0.8, 0.8); // #cccccc
    pub const GRAY_200: Color = Color::from_rgb(0.88, 0.88, 0.88); // #e0e0e0
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.96); // #f5f5f5
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page has scrolled
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units

    /// Vertical padding of a page section
    pub const SECTION: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;
    pub const TEXTAREA_HEIGHT: f32 = 140.0;

    // Page chrome
    pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const FORM_MAX_WIDTH: f32 = 560.0;
    pub const HAMBURGER: f32 = 32.0;

    // Toast
    pub const TOAST_MAX_WIDTH: f32 = 400.0;
    pub const TOAST_CLOSE: f32 = 20.0;
    /// Gap between the toast and the window corner
    pub const TOAST_MARGIN: f32 = 20.0;

    // Cards
    pub const CARD_MIN_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero headline
    //! - Titles: section and card headings
    //! - Body: primary content text
    //! - Caption: secondary, supporting text

    /// Hero headline
    pub const DISPLAY: f32 = 48.0;

    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Brand name, stat values
    pub const TITLE_MD: f32 = 24.0;

    /// Card headings
    pub const TITLE_SM: f32 = 20.0;

    /// Lead paragraphs, close glyph
    pub const BODY_LG: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 16.0;

    /// Toast text, nav links
    pub const BODY_SM: f32 = 14.0;

    /// Footer, small print
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focused inputs, active nav link underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Toast shadow (0 4px 12px at 20% black)
    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    /// Lifted card
    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// How far a hovered card rises.
    pub const CARD_LIFT: f32 = 8.0;

    /// Distance a hidden element sits below its resting place before fading in.
    pub const FADE_IN_OFFSET: f32 = 30.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_CLOSE);
    assert!(sizing::PROGRESS_BAR_HEIGHT > 0.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Greyscale validation
    assert!(palette::GRAY_600.r == palette::GRAY_600.g && palette::GRAY_600.g == palette::GRAY_600.b);
    assert!(palette::GRAY_500.r > palette::GRAY_600.r);
};
