// SPDX-License-Identifier: MPL-2.0
pub mod activity_indicator;

pub use activity_indicator::ActivityIndicator;
