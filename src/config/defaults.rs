// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the style preset.
//!
//! # Categories
//!
//! - **Colors**: RGBA defaults of the card and its elements
//! - **Typography**: Font size
//! - **Geometry**: Margins, insets, radius, action width
//! - **Animation**: Transition duration and spring parameters

use crate::domain::snackbar::newtypes::geometry_bounds;

// ==========================================================================
// Color Defaults (RGBA, 0.0 to 1.0)
// ==========================================================================

/// Card background: black at 80% opacity.
pub const DEFAULT_BACKGROUND_RGBA: [f32; 4] = [0.0, 0.0, 0.0, 0.8];

/// Message and action titles.
pub const DEFAULT_TEXT_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Separator between message and actions.
pub const DEFAULT_SEPARATOR_RGBA: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Busy indicator.
pub const DEFAULT_INDICATOR_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Font size of message and action titles, in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f32 = 1.0;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

pub const DEFAULT_MARGIN: f32 = geometry_bounds::DEFAULT_MARGIN;

pub const DEFAULT_CONTENT_INSET_HORIZONTAL: f32 =
    geometry_bounds::DEFAULT_CONTENT_INSET_HORIZONTAL;

pub const DEFAULT_CORNER_RADIUS: f32 = geometry_bounds::DEFAULT_CORNER_RADIUS;

pub const DEFAULT_ACTION_MAX_WIDTH: f32 = geometry_bounds::DEFAULT_ACTION_WIDTH;

/// Lines an action title may use, 0 = unlimited.
pub const DEFAULT_ACTION_LINES: u32 = geometry_bounds::DEFAULT_ACTION_LINES;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of one entrance or exit transition.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Spring damping ratio (1.0 = no oscillation).
pub const DEFAULT_SPRING_DAMPING: f32 = 0.7;

/// Initial spring velocity.
pub const DEFAULT_INITIAL_VELOCITY: f32 = 5.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_BACKGROUND_RGBA[3] > 0.0 && DEFAULT_BACKGROUND_RGBA[3] < 1.0);
    assert!(DEFAULT_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_ACTION_MAX_WIDTH >= geometry_bounds::MIN_ACTION_WIDTH);
    assert!(DEFAULT_SPRING_DAMPING > 0.0 && DEFAULT_SPRING_DAMPING <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snackbar::AnimationTiming;
    use std::time::Duration;

    #[test]
    fn animation_defaults_match_domain_timing() {
        let timing = AnimationTiming::default();
        assert_eq!(timing.duration, Duration::from_millis(DEFAULT_ANIMATION_MS));
        assert_eq!(timing.spring_damping, DEFAULT_SPRING_DAMPING);
        assert_eq!(timing.initial_velocity, DEFAULT_INITIAL_VELOCITY);
    }
}
