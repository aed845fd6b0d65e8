// SPDX-License-Identifier: MPL-2.0
//! Entrance/exit animation variants and their timing.

use super::gesture::SwipeDirection;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How the banner enters and leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationType {
    /// Fade in to show, fade out to dismiss.
    FadeInFadeOut,
    /// Slide up from the bottom edge, keep sliding up to dismiss.
    SlideFromBottomToTop,
    /// Slide up from the bottom edge, slide back down to dismiss.
    #[default]
    SlideFromBottomBackToBottom,
    /// Slide in from the left, leave to the right.
    SlideFromLeftToRight,
    /// Slide in from the right, leave to the left.
    SlideFromRightToLeft,
    /// Slide down from the top edge, keep sliding down to dismiss.
    SlideFromTopToBottom,
    /// Slide down from the top edge, slide back up to dismiss.
    SlideFromTopBackToTop,
}

impl AnimationType {
    pub const ALL: [AnimationType; 7] = [
        AnimationType::FadeInFadeOut,
        AnimationType::SlideFromBottomToTop,
        AnimationType::SlideFromBottomBackToBottom,
        AnimationType::SlideFromLeftToRight,
        AnimationType::SlideFromRightToLeft,
        AnimationType::SlideFromTopToBottom,
        AnimationType::SlideFromTopBackToTop,
    ];

    /// Position of this variant in [`AnimationType::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            AnimationType::FadeInFadeOut => 0,
            AnimationType::SlideFromBottomToTop => 1,
            AnimationType::SlideFromBottomBackToBottom => 2,
            AnimationType::SlideFromLeftToRight => 3,
            AnimationType::SlideFromRightToLeft => 4,
            AnimationType::SlideFromTopToBottom => 5,
            AnimationType::SlideFromTopBackToTop => 6,
        }
    }

    /// Returns true for the variants that rest against the top edge.
    #[must_use]
    pub fn is_top_anchored(self) -> bool {
        matches!(
            self,
            AnimationType::SlideFromTopToBottom | AnimationType::SlideFromTopBackToTop
        )
    }

    /// Animation used when a swipe in `direction` dismisses the banner.
    #[must_use]
    pub fn for_swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => AnimationType::SlideFromLeftToRight,
            SwipeDirection::Left => AnimationType::SlideFromRightToLeft,
            SwipeDirection::Up | SwipeDirection::Down => AnimationType::SlideFromTopBackToTop,
        }
    }

    /// Stable kebab-case name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationType::FadeInFadeOut => "fade-in-fade-out",
            AnimationType::SlideFromBottomToTop => "slide-from-bottom-to-top",
            AnimationType::SlideFromBottomBackToBottom => "slide-from-bottom-back-to-bottom",
            AnimationType::SlideFromLeftToRight => "slide-from-left-to-right",
            AnimationType::SlideFromRightToLeft => "slide-from-right-to-left",
            AnimationType::SlideFromTopToBottom => "slide-from-top-to-bottom",
            AnimationType::SlideFromTopBackToTop => "slide-from-top-back-to-top",
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('_', "-");
        AnimationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("invalid animation_type: {}", s))
    }
}

// =============================================================================
// AnimationTiming
// =============================================================================

/// Spring parameters of the animated transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    /// Fixed duration of one transition.
    pub duration: Duration,
    /// Spring damping ratio, 1.0 = no oscillation.
    pub spring_damping: f32,
    /// Initial spring velocity.
    pub initial_velocity: f32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            spring_damping: 0.7,
            initial_velocity: 5.0,
        }
    }
}
