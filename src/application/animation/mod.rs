// SPDX-License-Identifier: MPL-2.0
//! Animation coordinator.
//!
//! Turns an [`AnimationType`] plus measured geometry into a before/after
//! pair of [`Pose`]s and drives the host through the transition:
//! apply "before", synchronous layout pass, apply "after", animate.
//!
//! The pose math lives in [`profile`] as one table entry per type; this
//! module only sequences host calls.

pub mod profile;

pub use profile::{profile, AnimationProfile, Geometry, Pose, SafeAreaPolicy, VerticalAnchor};

use crate::application::port::{BannerId, Host, TransitionId, ViewId};
use crate::domain::layout::ConstraintSet;
use crate::domain::snackbar::{AnimationTiming, AnimationType};

/// Whether a transition brings the banner in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPurpose {
    Entrance,
    Exit,
}

/// An animated transition the host is asked to run.
///
/// The host interpolates from the last laid-out state of `container` to the
/// constraints currently installed on `view`, and the view's alpha towards
/// `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub purpose: TransitionPurpose,
    pub container: ViewId,
    pub view: ViewId,
    pub timing: AnimationTiming,
    pub alpha: f32,
    /// User interaction stays enabled while animating.
    pub allow_interaction: bool,
}

/// Start and end pose of one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub purpose: TransitionPurpose,
    pub before: Pose,
    pub after: Pose,
}

impl Plan {
    /// From off-screen into the resting pose.
    #[must_use]
    pub fn entrance(kind: AnimationType, geometry: &Geometry) -> Self {
        let profile = profile(kind);
        Self {
            purpose: TransitionPurpose::Entrance,
            before: profile.entrance_pose(geometry),
            after: profile.resting_pose(&geometry.margins),
        }
    }

    /// From the resting pose to off-screen.
    #[must_use]
    pub fn exit(kind: AnimationType, geometry: &Geometry, policy: &SafeAreaPolicy) -> Self {
        let profile = profile(kind);
        Self {
            purpose: TransitionPurpose::Exit,
            before: profile.resting_pose(&geometry.margins),
            after: profile.exit_pose(geometry, policy.includes(kind)),
        }
    }
}

/// The views a transition acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub target: BannerId,
    pub container: ViewId,
    pub view: ViewId,
}

/// Runs `plan` on `host`, rewriting `constraints` along the way.
///
/// Completion arrives later as `Event::TransitionFinished` carrying the
/// returned id.
pub fn run(
    host: &dyn Host,
    stage: Stage,
    constraints: &mut ConstraintSet,
    plan: &Plan,
    timing: AnimationTiming,
) -> TransitionId {
    plan.before.write_to(constraints);
    host.apply_constraints(stage.view, constraints);
    host.set_alpha(stage.view, plan.before.alpha);
    host.layout_if_needed(stage.container);

    plan.after.write_to(constraints);
    host.apply_constraints(stage.view, constraints);

    let id = host.animate(
        stage.target,
        &Transition {
            purpose: plan.purpose,
            container: stage.container,
            view: stage.view,
            timing,
            alpha: plan.after.alpha,
            allow_interaction: true,
        },
    );
    tracing::trace!(
        target = stage.target.raw(),
        transition = id.raw(),
        purpose = ?plan.purpose,
        "transition started"
    );
    id
}
