// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a transient notification banner for Iced applications.
//!
//! A banner slides or fades in over its container, optionally offers up to
//! two action buttons, and dismisses itself after a display duration, on a
//! swipe, on an action press or on request. The banner logic talks to its
//! surroundings only through the [`Host`](application::port::Host) port, so
//! it runs the same against a real window or the in-memory
//! [`HeadlessHost`](infrastructure::HeadlessHost).
//!
//! # Layers
//!
//! - [`domain`]: Pure value types (durations, animation variants, geometry)
//! - [`application`]: Host port and the animation coordinator
//! - [`infrastructure`]: Host adapters
//! - [`ui`]: The [`Banner`](ui::snackbar::Banner) and its Iced rendering
//! - [`config`]: Style presets persisted as TOML

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
