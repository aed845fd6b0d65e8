// SPDX-License-Identifier: MPL-2.0
//! Banner visibility state machine.
//!
//! `Idle` → `Showing` → `Dismissing` → `Idle`. Dismissal may only start
//! from `Showing`, which makes the phase the single guard against a timer
//! firing while a swipe or a manual dismiss is already in flight.

/// Current visibility phase of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not attached to any host.
    #[default]
    Idle,
    /// Attached and visible; the dismiss timer may be armed.
    Showing,
    /// Dismissal has begun; the exit transition is running.
    Dismissing,
}

impl Phase {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_showing(self) -> bool {
        matches!(self, Self::Showing)
    }

    #[must_use]
    pub fn is_dismissing(self) -> bool {
        matches!(self, Self::Dismissing)
    }

    /// Returns true while the banner's view is in a host view tree.
    #[must_use]
    pub fn is_attached(self) -> bool {
        matches!(self, Self::Showing | Self::Dismissing)
    }

    /// Returns true if a dismissal started now would run.
    #[must_use]
    pub fn can_dismiss(self) -> bool {
        self.is_showing()
    }
}
