// SPDX-License-Identifier: MPL-2.0
//! How long a banner stays on screen before it dismisses itself.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Display duration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayDuration {
    /// One second.
    #[default]
    Short,
    /// Three seconds.
    Middle,
    /// Five seconds.
    Long,
    /// Never dismisses on its own; swipe, action or a manual call is required.
    Forever,
}

impl DisplayDuration {
    /// All categories, shortest first.
    pub const ALL: [DisplayDuration; 4] = [
        DisplayDuration::Short,
        DisplayDuration::Middle,
        DisplayDuration::Long,
        DisplayDuration::Forever,
    ];

    /// Returns the auto-dismiss delay, or `None` for [`DisplayDuration::Forever`].
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            DisplayDuration::Short => Some(Duration::from_secs(1)),
            DisplayDuration::Middle => Some(Duration::from_secs(3)),
            DisplayDuration::Long => Some(Duration::from_secs(5)),
            DisplayDuration::Forever => None,
        }
    }

    #[must_use]
    pub fn is_forever(self) -> bool {
        matches!(self, DisplayDuration::Forever)
    }

    /// Stable kebab-case name used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayDuration::Short => "short",
            DisplayDuration::Middle => "middle",
            DisplayDuration::Long => "long",
            DisplayDuration::Forever => "forever",
        }
    }
}

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(DisplayDuration::Short),
            "middle" => Ok(DisplayDuration::Middle),
            "long" => Ok(DisplayDuration::Long),
            "forever" => Ok(DisplayDuration::Forever),
            other => Err(format!("invalid duration: {}", other)),
        }
    }
}
