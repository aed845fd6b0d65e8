// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: the host port the banner is displayed through
//! - [`animation`]: entrance/exit pose table and transition sequencing
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through the coordinator

pub mod animation;
pub mod port;
