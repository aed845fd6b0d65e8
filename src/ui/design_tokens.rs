// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the snackbar card.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Banner and element sizes
- **Typography**: Font sizes
- **Shadow**: The banner drop shadow

## Examples

```
use iced_snackbar::ui::design_tokens::{opacity, palette};
use iced::Color;

let background = Color {
    a: opacity::BANNER_BACKGROUND,
    ..palette::BLACK
};
assert_eq!(background.a, 0.8);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Banner background over black.
    pub const BANNER_BACKGROUND: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Banner drop shadow.
    pub const SHADOW: f32 = 0.4;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Minimum banner height, also the minimum touch target.
    pub const MIN_HEIGHT: f32 = 44.0;
    /// Width reserved for the leading icon when one is set.
    pub const ICON_WIDTH: f32 = 32.0;
    /// Frame of a freshly constructed banner.
    pub const DEFAULT_FRAME_WIDTH: f32 = 320.0;
    pub const DEFAULT_FRAME_HEIGHT: f32 = 44.0;
    /// Width of the separator between message and actions.
    pub const SEPARATOR_WIDTH: f32 = 0.5;

    /// Busy indicator diameters.
    pub const INDICATOR_MEDIUM: f32 = 20.0;
    pub const INDICATOR_LARGE: f32 = 37.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Message and action titles.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Shadow under the banner card.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 2.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BANNER_BACKGROUND > 0.0 && opacity::BANNER_BACKGROUND < 1.0);

    assert!(sizing::INDICATOR_LARGE > sizing::INDICATOR_MEDIUM);
    assert!(sizing::DEFAULT_FRAME_HEIGHT >= sizing::MIN_HEIGHT);
};
