// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: In-memory host with a virtual clock (implements [`Host`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - The Iced rendering lives in `ui::snackbar::view`; an Iced application
//!   embedding the banner provides its own host adapter
//!
//! [`Host`]: crate::application::port::Host

pub mod headless;

// Re-export main types for convenience
pub use headless::HeadlessHost;
