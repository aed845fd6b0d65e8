// SPDX-License-Identifier: MPL-2.0
//! Snackbar newtypes.
//!
//! Type-safe wrappers for the banner's geometry values. Clamping happens
//! once at construction so setters and layout code never re-validate.

// =============================================================================
// Geometry Bounds
// =============================================================================

/// Geometry bounds shared by the snackbar value types.
pub mod geometry_bounds {
    /// Minimum corner radius.
    pub const MIN_CORNER_RADIUS: f32 = 0.0;
    /// Default corner radius.
    pub const DEFAULT_CORNER_RADIUS: f32 = 4.0;
    /// Minimum width an action button may be limited to.
    pub const MIN_ACTION_WIDTH: f32 = 44.0;
    /// Default action button max width.
    pub const DEFAULT_ACTION_WIDTH: f32 = 64.0;
    /// Default number of lines for action button titles.
    pub const DEFAULT_ACTION_LINES: u32 = 1;
    /// Default margin on every edge.
    pub const DEFAULT_MARGIN: f32 = 4.0;
    /// Default horizontal content inset.
    pub const DEFAULT_CONTENT_INSET_HORIZONTAL: f32 = 4.0;
}

// =============================================================================
// CornerRadius
// =============================================================================

/// Corner radius of the banner, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRadius(f32);

impl CornerRadius {
    /// Creates a corner radius, flooring negative values at zero.
    #[must_use]
    pub fn new(radius: f32) -> Self {
        Self(radius.max(geometry_bounds::MIN_CORNER_RADIUS))
    }

    /// Returns the raw radius.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self(geometry_bounds::DEFAULT_CORNER_RADIUS)
    }
}

// =============================================================================
// ActionMaxWidth
// =============================================================================

/// Upper bound for the width of an action button.
///
/// Never smaller than a minimum touch target of 44 units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionMaxWidth(f32);

impl ActionMaxWidth {
    /// Creates a max width, raising values below the minimum touch target.
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self(width.max(geometry_bounds::MIN_ACTION_WIDTH))
    }

    /// Returns the raw width.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the width sits at the minimum touch target.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= geometry_bounds::MIN_ACTION_WIDTH
    }
}

impl Default for ActionMaxWidth {
    fn default() -> Self {
        Self(geometry_bounds::DEFAULT_ACTION_WIDTH)
    }
}

// =============================================================================
// ActionLineCount
// =============================================================================

/// Number of lines an action title may wrap onto. Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLineCount(u32);

impl ActionLineCount {
    #[must_use]
    pub fn new(lines: u32) -> Self {
        Self(lines)
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true when titles may use as many lines as they need.
    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self.0 == 0
    }
}

impl Default for ActionLineCount {
    fn default() -> Self {
        Self(geometry_bounds::DEFAULT_ACTION_LINES)
    }
}

// =============================================================================
// EdgeInsets
// =============================================================================

/// Insets on the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// No inset on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Default inset between the banner edge and its content.
    #[must_use]
    pub const fn content_default() -> Self {
        Self::new(
            0.0,
            geometry_bounds::DEFAULT_CONTENT_INSET_HORIZONTAL,
            0.0,
            geometry_bounds::DEFAULT_CONTENT_INSET_HORIZONTAL,
        )
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Distance between the banner and the safe area of its container.
///
/// `top` only matters for top-anchored animations, `bottom` for the rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    /// Horizontal space the margins take from the container width.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(geometry_bounds::DEFAULT_MARGIN)
    }
}
