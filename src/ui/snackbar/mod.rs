// SPDX-License-Identifier: MPL-2.0
//! Snackbar banner.
//!
//! A transient banner with a message, optional icon and up to two action
//! buttons. It animates in, dismisses itself after its duration, and can be
//! dismissed early by an action, a swipe or a manual call.
//!
//! # Components
//!
//! - [`banner`] - The `Banner` aggregate, constructors and setters
//! - [`lifecycle`] - Show, guarded dismissal and event handling
//! - [`dispatcher`] - Tap, swipe and action routing
//! - [`layout_adapter`] - Message wrap width upkeep
//! - [`content`] - Built-in content elements and their visibility
//! - [`appearance`] - Fonts, colors and alignment
//! - [`view`] - Iced rendering of the card
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::domain::snackbar::DisplayDuration;
//! use iced_snackbar::ui::snackbar::Banner;
//!
//! let mut banner = Banner::with_action("Deleted", DisplayDuration::Middle, "Undo", |_| {
//!     restore_last_item();
//! });
//! banner.show(host.clone());
//!
//! // In the UI loop, forward the host's queued events.
//! while let Some((target, event)) = host.next_event() {
//!     if target == banner.id() {
//!         banner.update(event);
//!     }
//! }
//! ```

pub mod appearance;
pub mod banner;
pub mod content;
mod dispatcher;
mod layout_adapter;
mod lifecycle;
pub mod view;

pub use appearance::{Appearance, FontSpec, IconContentMode, IndicatorStyle, TextAlign};
pub use banner::{Banner, Callback, SwipeCallback};
pub use content::{Content, ContentElements, Visibility};
pub use view::Message;
