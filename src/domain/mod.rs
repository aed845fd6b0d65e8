// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core snackbar rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`layout`]: Named constraints ([`ConstraintSet`](layout::ConstraintSet),
//!   [`Priority`](layout::Priority))
//! - [`snackbar`]: Banner value objects ([`DisplayDuration`](snackbar::DisplayDuration),
//!   [`AnimationType`](snackbar::AnimationType), [`Phase`](snackbar::Phase),
//!   [`CornerRadius`](snackbar::CornerRadius), [`ActionMaxWidth`](snackbar::ActionMaxWidth))

pub mod layout;
pub mod snackbar;
