// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! These traits use only domain types, ensuring the banner logic remains
//! independent of concrete UI toolkits.
//!
//! # Available Ports
//!
//! - [`host`]: View tree, constraint layout, animation, UI scheduling and
//!   orientation feed, bundled as [`Host`]
//!
//! # Example
//!
//! ```ignore
//! use iced_snackbar::application::port::{Host, ViewId};
//!
//! fn resolve_container(host: &dyn Host, explicit: Option<ViewId>) -> Option<ViewId> {
//!     explicit.or_else(|| host.main_window())
//! }
//! ```

pub mod host;

// Re-export main types for convenience
pub use host::{
    Animator, BannerId, ConstraintLayout, Event, Host, ObserverToken, OrientationFeed,
    RemoteDismiss, RemoteDispatcher, TimerHandle, TransitionId, UiScheduler, ViewId, ViewTree,
};
