// SPDX-License-Identifier: MPL-2.0
//! Snackbar domain types.
//!
//! Value objects for the banner that are independent of any presentation
//! framework or host.

pub mod animation;
pub mod duration;
pub mod gesture;
pub mod newtypes;
pub mod phase;

pub use animation::{AnimationTiming, AnimationType};
pub use duration::DisplayDuration;
pub use gesture::{ActionButton, SwipeDirection};
pub use newtypes::{ActionLineCount, ActionMaxWidth, CornerRadius, EdgeInsets, Margins};
pub use phase::Phase;
