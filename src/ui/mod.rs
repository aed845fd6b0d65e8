// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`snackbar`] - The snackbar banner and its Iced view
//! - [`widgets`] - Custom Iced widgets (activity indicator)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod snackbar;
pub mod widgets;
