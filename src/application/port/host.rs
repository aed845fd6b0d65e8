// SPDX-License-Identifier: MPL-2.0
//! Host port definition.
//!
//! The banner never talks to a concrete UI toolkit. Everything it needs
//! from the environment it is displayed in is listed here, split by
//! concern, and bundled into the [`Host`] trait.
//!
//! # Design Notes
//!
//! - All methods take `&self`: a host is one shared UI environment (window,
//!   run loop, animation scheduler) used by many banners on the UI thread.
//!   Adapters use interior mutability.
//! - Hosts never call back into a banner. Timer expiry, transition
//!   completion, orientation changes and gestures are queued as
//!   `(BannerId, Event)` pairs and delivered by the UI loop through
//!   [`Banner::update`](crate::ui::snackbar::Banner::update).
//! - Uses domain types only, plus [`Transition`] from the animation planner.

use crate::application::animation::Transition;
use crate::domain::layout::ConstraintSet;
use crate::domain::snackbar::{ActionButton, EdgeInsets, SwipeDirection};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

// =============================================================================
// Identifiers
// =============================================================================

fn next_raw_id() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Identifies a view in the host's view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(u64);

impl ViewId {
    /// Creates a new unique view id.
    #[must_use]
    pub fn new() -> Self {
        Self(next_raw_id())
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a banner as the target of queued events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner id.
    #[must_use]
    pub fn new() -> Self {
        Self(next_raw_id())
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! host_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a host-assigned value.
            #[must_use]
            pub fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            #[must_use]
            pub fn raw(self) -> u64 {
                self.0
            }
        }
    };
}

host_handle!(
    /// A one-shot timer scheduled on the UI context.
    TimerHandle
);
host_handle!(
    /// An animated transition started by the host.
    TransitionId
);
host_handle!(
    /// A registration on the orientation-change feed.
    ObserverToken
);

// =============================================================================
// Events
// =============================================================================

/// Everything a host can deliver to a banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The auto-dismiss timer fired.
    TimerFired(TimerHandle),
    /// A dismiss request posted onto the UI context.
    DismissRequested,
    /// An animated transition completed.
    TransitionFinished(TransitionId),
    /// Device orientation changed.
    OrientationChanged,
    /// The host finished a layout pass over the banner.
    LayoutPassed,
    /// The banner was tapped.
    Tapped,
    /// The banner was swiped.
    Swiped(SwipeDirection),
    /// An action button was pressed.
    ActionPressed(ActionButton),
}

// =============================================================================
// Port Traits
// =============================================================================

/// View tree operations and measurements.
pub trait ViewTree {
    /// The application's main window, used when no container is configured.
    fn main_window(&self) -> Option<ViewId>;

    /// Adds `child` to `parent`. Re-adding moves the child.
    fn add_subview(&self, parent: ViewId, child: ViewId);

    /// Removes `view` from its parent. Also drops its constraints.
    fn remove_from_superview(&self, view: ViewId);

    fn superview(&self, view: ViewId) -> Option<ViewId>;

    /// Current width of `view`.
    fn width(&self, view: ViewId) -> f32;

    fn safe_area_insets(&self, view: ViewId) -> EdgeInsets;

    /// Height `view` needs when laid out at `width`, never below `min_height`.
    fn fitting_height(&self, view: ViewId, width: f32, min_height: f32) -> f32;

    /// Current laid-out height of `view`.
    fn frame_height(&self, view: ViewId) -> f32;

    fn set_alpha(&self, view: ViewId, alpha: f32);

    fn set_corner_radius(&self, view: ViewId, radius: f32);

    /// The banner's content values changed and must be re-read.
    fn content_changed(&self, view: ViewId);

    /// Laid-out width of the message element inside `view`.
    fn message_frame_width(&self, view: ViewId) -> f32;

    /// Sets the width the message element wraps its text at.
    fn set_message_wrap_width(&self, view: ViewId, width: f32);
}

/// Constraint-based layout.
pub trait ConstraintLayout {
    /// Replaces the constraints installed for `view`.
    fn apply_constraints(&self, view: ViewId, constraints: &ConstraintSet);

    /// Runs a synchronous layout pass over `view` and its subviews.
    fn layout_if_needed(&self, view: ViewId);

    /// Schedules a layout pass over `view`.
    fn set_needs_layout(&self, view: ViewId);
}

/// Animated transitions.
pub trait Animator {
    /// Interpolates the host's layout from its last laid-out state to the
    /// current constraints. Completion is delivered to `target` as
    /// [`Event::TransitionFinished`].
    fn animate(&self, target: BannerId, transition: &Transition) -> TransitionId;
}

/// The UI scheduling context.
pub trait UiScheduler {
    /// Schedules a non-repeating timer. Expiry is delivered to `target`
    /// as [`Event::TimerFired`].
    fn schedule_once(&self, target: BannerId, after: Duration) -> TimerHandle;

    /// Cancels a pending timer. Unknown or fired handles are ignored.
    fn invalidate(&self, handle: TimerHandle);

    /// Queues `event` for `target` on the UI context.
    fn post(&self, target: BannerId, event: Event);

    /// Returns a sender other threads can use to reach the UI context.
    fn remote(&self) -> RemoteDispatcher;
}

/// Orientation-change notifications.
pub trait OrientationFeed {
    /// Starts delivering [`Event::OrientationChanged`] to `target`.
    fn add_observer(&self, target: BannerId) -> ObserverToken;

    /// Stops a registration. Unknown tokens are ignored.
    fn remove_observer(&self, token: ObserverToken);
}

/// Everything a banner needs from the environment it is shown in.
pub trait Host: ViewTree + ConstraintLayout + Animator + UiScheduler + OrientationFeed {}

impl<T> Host for T where T: ViewTree + ConstraintLayout + Animator + UiScheduler + OrientationFeed + ?Sized {}

// =============================================================================
// RemoteDispatcher
// =============================================================================

/// Thread-safe handle that queues events onto a host's UI context.
#[derive(Debug, Clone)]
pub struct RemoteDispatcher {
    sender: UnboundedSender<(BannerId, Event)>,
}

impl RemoteDispatcher {
    #[must_use]
    pub fn new(sender: UnboundedSender<(BannerId, Event)>) -> Self {
        Self { sender }
    }

    /// Queues `event` for `target`.
    ///
    /// Returns `false` if the UI context has shut down.
    pub fn send(&self, target: BannerId, event: Event) -> bool {
        self.sender.send((target, event)).is_ok()
    }
}

/// Requests dismissal of one banner from any thread.
#[derive(Debug, Clone)]
pub struct RemoteDismiss {
    target: BannerId,
    dispatcher: RemoteDispatcher,
}

impl RemoteDismiss {
    #[must_use]
    pub fn new(target: BannerId, dispatcher: RemoteDispatcher) -> Self {
        Self { target, dispatcher }
    }

    /// Queues a dismiss request. The guarded dismissal runs on the UI context.
    pub fn dismiss(&self) -> bool {
        self.dispatcher.send(self.target, Event::DismissRequested)
    }

    #[must_use]
    pub fn target(&self) -> BannerId {
        self.target
    }
}
