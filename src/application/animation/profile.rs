// SPDX-License-Identifier: MPL-2.0
//! Per-type entrance and exit poses.
//!
//! One table entry per [`AnimationType`]. Entrance and exit geometry for a
//! type live side by side so the two directions cannot drift apart.

use crate::domain::layout::{ConstraintKind, ConstraintSet};
use crate::domain::snackbar::{AnimationType, EdgeInsets, Margins};

/// Which vertical edge the banner is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Bottom,
}

/// Inputs to the pose functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Banner height: fitting height on entrance, frame height on exit.
    pub height: f32,
    /// Width of the container.
    pub host_width: f32,
    pub margins: Margins,
    /// Safe-area insets of the container.
    pub safe_area: EdgeInsets,
}

/// Constraint constants and opacity for one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub anchor: VerticalAnchor,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub center_x: f32,
    pub alpha: f32,
}

impl Pose {
    /// The on-screen pose: margins applied, centered, opaque.
    #[must_use]
    pub fn resting(anchor: VerticalAnchor, margins: &Margins) -> Self {
        Self {
            anchor,
            left: margins.left,
            right: -margins.right,
            top: margins.top,
            bottom: -margins.bottom,
            center_x: 0.0,
            alpha: 1.0,
        }
    }

    /// Writes the constants into `constraints` and switches the vertical
    /// anchor. Horizontal activation is left to the caller's margin policy.
    pub fn write_to(&self, constraints: &mut ConstraintSet) {
        constraints.set_constant(ConstraintKind::Left, self.left);
        constraints.set_constant(ConstraintKind::Right, self.right);
        constraints.set_constant(ConstraintKind::Top, self.top);
        constraints.set_constant(ConstraintKind::Bottom, self.bottom);
        constraints.set_constant(ConstraintKind::CenterX, self.center_x);

        let top_anchored = self.anchor == VerticalAnchor::Top;
        constraints.set_active(ConstraintKind::Top, top_anchored);
        constraints.set_active(ConstraintKind::Bottom, !top_anchored);
    }
}

/// Entrance and exit geometry of one animation type.
#[derive(Debug)]
pub struct AnimationProfile {
    pub kind: AnimationType,
    /// Anchor while entering and at rest.
    pub anchor: VerticalAnchor,
    /// Whether the exit pose adds the container's safe-area inset by default.
    pub exit_clears_safe_area: bool,
    entrance: fn(&Geometry) -> Pose,
    exit: fn(&Geometry, &EdgeInsets) -> Pose,
}

impl AnimationProfile {
    /// Off-screen (or transparent) pose the banner enters from.
    #[must_use]
    pub fn entrance_pose(&self, geometry: &Geometry) -> Pose {
        (self.entrance)(geometry)
    }

    /// Pose the banner rests in once shown.
    #[must_use]
    pub fn resting_pose(&self, margins: &Margins) -> Pose {
        Pose::resting(self.anchor, margins)
    }

    /// Off-screen pose the banner leaves to.
    ///
    /// `include_safe_area` decides whether the container's safe-area inset
    /// is added so the banner fully clears the visible edge.
    #[must_use]
    pub fn exit_pose(&self, geometry: &Geometry, include_safe_area: bool) -> Pose {
        let safe = if include_safe_area {
            geometry.safe_area
        } else {
            EdgeInsets::ZERO
        };
        (self.exit)(geometry, &safe)
    }
}

/// Returns the table entry for `kind`.
#[must_use]
pub fn profile(kind: AnimationType) -> &'static AnimationProfile {
    &PROFILES[kind.index()]
}

static PROFILES: [AnimationProfile; 7] = [
    AnimationProfile {
        kind: AnimationType::FadeInFadeOut,
        anchor: VerticalAnchor::Bottom,
        exit_clears_safe_area: false,
        entrance: |g| Pose {
            alpha: 0.0,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
        exit: |g, _| Pose {
            alpha: 0.0,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromBottomToTop,
        anchor: VerticalAnchor::Bottom,
        // Only slides up by its own height plus the bottom margin.
        exit_clears_safe_area: false,
        entrance: slide_up_from_bottom,
        exit: |g, safe| Pose {
            bottom: -g.height - g.margins.bottom - safe.top,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromBottomBackToBottom,
        anchor: VerticalAnchor::Bottom,
        exit_clears_safe_area: true,
        entrance: slide_up_from_bottom,
        exit: |g, safe| Pose {
            bottom: g.height + safe.bottom,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromLeftToRight,
        anchor: VerticalAnchor::Bottom,
        exit_clears_safe_area: true,
        entrance: |g| Pose {
            left: g.margins.left - g.host_width,
            right: -g.margins.right - g.host_width,
            center_x: -g.host_width,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
        exit: |g, safe| Pose {
            left: g.margins.left + g.host_width + safe.left,
            right: -g.margins.right + g.host_width - safe.right,
            center_x: g.host_width,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromRightToLeft,
        anchor: VerticalAnchor::Bottom,
        exit_clears_safe_area: true,
        entrance: |g| Pose {
            left: g.margins.left + g.host_width,
            right: -g.margins.right + g.host_width,
            center_x: g.host_width,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
        exit: |g, safe| Pose {
            left: g.margins.left - g.host_width + safe.left,
            right: -g.margins.right - g.host_width - safe.right,
            center_x: -g.host_width,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromTopToBottom,
        anchor: VerticalAnchor::Top,
        exit_clears_safe_area: true,
        entrance: slide_down_from_top,
        exit: |g, safe| Pose {
            bottom: g.height + safe.bottom,
            ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
        },
    },
    AnimationProfile {
        kind: AnimationType::SlideFromTopBackToTop,
        anchor: VerticalAnchor::Top,
        exit_clears_safe_area: true,
        entrance: slide_down_from_top,
        exit: |g, safe| Pose {
            top: -g.height - safe.top,
            ..Pose::resting(VerticalAnchor::Top, &g.margins)
        },
    },
];

fn slide_up_from_bottom(g: &Geometry) -> Pose {
    Pose {
        bottom: g.height,
        ..Pose::resting(VerticalAnchor::Bottom, &g.margins)
    }
}

fn slide_down_from_top(g: &Geometry) -> Pose {
    Pose {
        top: -g.height,
        ..Pose::resting(VerticalAnchor::Top, &g.margins)
    }
}

// =============================================================================
// SafeAreaPolicy
// =============================================================================

/// Per-type choice of whether exit poses clear the safe-area inset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeAreaPolicy([bool; 7]);

impl SafeAreaPolicy {
    #[must_use]
    pub fn includes(&self, kind: AnimationType) -> bool {
        self.0[kind.index()]
    }

    pub fn set(&mut self, kind: AnimationType, include: bool) {
        self.0[kind.index()] = include;
    }
}

impl Default for SafeAreaPolicy {
    fn default() -> Self {
        let mut flags = [false; 7];
        for kind in AnimationType::ALL {
            flags[kind.index()] = profile(kind).exit_clears_safe_area;
        }
        Self(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::Constraint;

    const WIDTH: f32 = 320.0;
    const HEIGHT: f32 = 48.0;

    fn geometry() -> Geometry {
        Geometry {
            height: HEIGHT,
            host_width: WIDTH,
            margins: Margins::default(),
            safe_area: EdgeInsets::new(20.0, 2.0, 34.0, 3.0),
        }
    }

    #[test]
    fn table_entries_are_in_declaration_order() {
        for kind in AnimationType::ALL {
            assert_eq!(profile(kind).kind, kind);
        }
    }

    #[test]
    fn resting_pose_applies_margins() {
        let pose = Pose::resting(VerticalAnchor::Bottom, &Margins::default());
        assert_eq!(pose.left, 4.0);
        assert_eq!(pose.right, -4.0);
        assert_eq!(pose.bottom, -4.0);
        assert_eq!(pose.top, 4.0);
        assert_eq!(pose.center_x, 0.0);
        assert_eq!(pose.alpha, 1.0);
    }

    #[test]
    fn fade_changes_alpha_only() {
        let fade = profile(AnimationType::FadeInFadeOut);
        let g = geometry();
        let rest = fade.resting_pose(&g.margins);

        let entrance = fade.entrance_pose(&g);
        assert_eq!(entrance.alpha, 0.0);
        assert_eq!(Pose { alpha: 1.0, ..entrance }, rest);

        let exit = fade.exit_pose(&g, true);
        assert_eq!(exit.alpha, 0.0);
        assert_eq!(Pose { alpha: 1.0, ..exit }, rest);
    }

    #[test]
    fn bottom_variants_enter_from_below_by_own_height() {
        let g = geometry();
        for kind in [
            AnimationType::SlideFromBottomToTop,
            AnimationType::SlideFromBottomBackToBottom,
        ] {
            let pose = profile(kind).entrance_pose(&g);
            assert_eq!(pose.anchor, VerticalAnchor::Bottom);
            assert_eq!(pose.bottom, HEIGHT);
        }
    }

    #[test]
    fn back_to_bottom_exit_clears_safe_area() {
        let g = geometry();
        let pose = profile(AnimationType::SlideFromBottomBackToBottom).exit_pose(&g, true);
        assert_eq!(pose.bottom, HEIGHT + 34.0);
    }

    #[test]
    fn bottom_to_top_exit_ignores_safe_area_by_default() {
        let policy = SafeAreaPolicy::default();
        assert!(!policy.includes(AnimationType::SlideFromBottomToTop));
        assert!(policy.includes(AnimationType::SlideFromBottomBackToBottom));

        let g = geometry();
        let bottom_to_top = profile(AnimationType::SlideFromBottomToTop);
        let pose = bottom_to_top.exit_pose(&g, false);
        assert_eq!(pose.bottom, -HEIGHT - 4.0);

        // Opting in also clears the top inset.
        let pose = bottom_to_top.exit_pose(&g, true);
        assert_eq!(pose.bottom, -HEIGHT - 4.0 - 20.0);
    }

    #[test]
    fn left_to_right_mirrors_across_host_width() {
        let g = geometry();
        let profile = profile(AnimationType::SlideFromLeftToRight);

        let entrance = profile.entrance_pose(&g);
        assert_eq!(entrance.left, 4.0 - WIDTH);
        assert_eq!(entrance.right, -4.0 - WIDTH);
        assert_eq!(entrance.center_x, -WIDTH);
        assert_eq!(entrance.bottom, -4.0);

        let exit = profile.exit_pose(&g, true);
        assert_eq!(exit.left, 4.0 + WIDTH + 2.0);
        assert_eq!(exit.right, -4.0 + WIDTH - 3.0);
        assert_eq!(exit.center_x, WIDTH);
    }

    #[test]
    fn right_to_left_mirrors_across_host_width() {
        let g = geometry();
        let profile = profile(AnimationType::SlideFromRightToLeft);

        let entrance = profile.entrance_pose(&g);
        assert_eq!(entrance.left, 4.0 + WIDTH);
        assert_eq!(entrance.right, -4.0 + WIDTH);
        assert_eq!(entrance.center_x, WIDTH);

        let exit = profile.exit_pose(&g, true);
        assert_eq!(exit.left, 4.0 - WIDTH + 2.0);
        assert_eq!(exit.right, -4.0 - WIDTH - 3.0);
        assert_eq!(exit.center_x, -WIDTH);
    }

    #[test]
    fn top_variants_enter_top_anchored() {
        let g = geometry();
        for kind in [
            AnimationType::SlideFromTopToBottom,
            AnimationType::SlideFromTopBackToTop,
        ] {
            let profile = profile(kind);
            assert_eq!(profile.anchor, VerticalAnchor::Top);
            let pose = profile.entrance_pose(&g);
            assert_eq!(pose.anchor, VerticalAnchor::Top);
            assert_eq!(pose.top, -HEIGHT);
        }
    }

    #[test]
    fn top_to_bottom_exit_switches_to_bottom_anchor() {
        let g = geometry();
        let pose = profile(AnimationType::SlideFromTopToBottom).exit_pose(&g, true);
        assert_eq!(pose.anchor, VerticalAnchor::Bottom);
        assert_eq!(pose.bottom, HEIGHT + 34.0);
    }

    #[test]
    fn top_back_to_top_exit_clears_top_inset() {
        let g = geometry();
        let pose = profile(AnimationType::SlideFromTopBackToTop).exit_pose(&g, true);
        assert_eq!(pose.anchor, VerticalAnchor::Top);
        assert_eq!(pose.top, -HEIGHT - 20.0);
    }

    #[test]
    fn write_to_keeps_vertical_anchors_exclusive() {
        let mut set = ConstraintSet::new();
        for kind in [
            ConstraintKind::Left,
            ConstraintKind::Right,
            ConstraintKind::Top,
            ConstraintKind::Bottom,
            ConstraintKind::CenterX,
        ] {
            set.insert(kind, Constraint::equal(0.0));
        }

        Pose::resting(VerticalAnchor::Top, &Margins::default()).write_to(&mut set);
        assert!(set.is_active(ConstraintKind::Top));
        assert!(!set.is_active(ConstraintKind::Bottom));

        Pose::resting(VerticalAnchor::Bottom, &Margins::default()).write_to(&mut set);
        assert!(!set.is_active(ConstraintKind::Top));
        assert!(set.is_active(ConstraintKind::Bottom));
        assert_eq!(set.constant(ConstraintKind::Bottom), Some(-4.0));
    }

    #[test]
    fn safe_area_policy_is_configurable_per_type() {
        let mut policy = SafeAreaPolicy::default();
        policy.set(AnimationType::SlideFromBottomToTop, true);
        assert!(policy.includes(AnimationType::SlideFromBottomToTop));
        policy.set(AnimationType::SlideFromTopBackToTop, false);
        assert!(!policy.includes(AnimationType::SlideFromTopBackToTop));
    }
}
