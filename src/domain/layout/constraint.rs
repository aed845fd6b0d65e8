// SPDX-License-Identifier: MPL-2.0
//! Named layout constraints.
//!
//! A banner does not own the host's constraint objects. It keeps a
//! [`ConstraintSet`] of named constants and pushes the whole set to the host
//! whenever it changes. An absent entry means "not installed", so updates
//! against a detached banner are silent no-ops.

use std::collections::BTreeMap;

/// Layout priority, 1000 = required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u16);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000);
    /// Used by the edge constraints so they lose against the host's
    /// encapsulated size constraints.
    pub const HIGH: Priority = Priority(999);

    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.min(1000))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

/// Identifies one constraint of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintKind {
    // Banner against its container's safe area.
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    MinHeight,
    // Content view against the banner.
    ContentTop,
    ContentLeft,
    ContentBottom,
    ContentRight,
    // Built-in content elements.
    IconWidth,
    ActionMaxWidth,
    SecondActionMaxWidth,
}

/// How a constraint relates its item to the constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

/// A single constraint: constant, priority, relation and activation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub constant: f32,
    pub priority: Priority,
    pub relation: Relation,
    pub active: bool,
}

impl Constraint {
    /// An active, required equality constraint.
    #[must_use]
    pub fn equal(constant: f32) -> Self {
        Self {
            constant,
            priority: Priority::REQUIRED,
            relation: Relation::Equal,
            active: true,
        }
    }

    #[must_use]
    pub fn at_least(constant: f32) -> Self {
        Self {
            relation: Relation::GreaterOrEqual,
            ..Self::equal(constant)
        }
    }

    #[must_use]
    pub fn at_most(constant: f32) -> Self {
        Self {
            relation: Relation::LessOrEqual,
            ..Self::equal(constant)
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// The set of constraints currently installed for one banner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstraintSet {
    entries: BTreeMap<ConstraintKind, Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ConstraintKind, constraint: Constraint) {
        self.entries.insert(kind, constraint);
    }

    #[must_use]
    pub fn get(&self, kind: ConstraintKind) -> Option<&Constraint> {
        self.entries.get(&kind)
    }

    #[must_use]
    pub fn constant(&self, kind: ConstraintKind) -> Option<f32> {
        self.entries.get(&kind).map(|c| c.constant)
    }

    #[must_use]
    pub fn is_active(&self, kind: ConstraintKind) -> bool {
        self.entries.get(&kind).is_some_and(|c| c.active)
    }

    /// Updates the constant of an installed constraint.
    ///
    /// Returns `false` (and changes nothing) if `kind` is not installed.
    pub fn set_constant(&mut self, kind: ConstraintKind, constant: f32) -> bool {
        match self.entries.get_mut(&kind) {
            Some(constraint) => {
                constraint.constant = constant;
                true
            }
            None => false,
        }
    }

    /// Activates or deactivates an installed constraint.
    ///
    /// Returns `false` if `kind` is not installed.
    pub fn set_active(&mut self, kind: ConstraintKind, active: bool) -> bool {
        match self.entries.get_mut(&kind) {
            Some(constraint) => {
                constraint.active = active;
                true
            }
            None => false,
        }
    }

    /// Drops every constraint, as happens when the view leaves the host.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstraintKind, &Constraint)> {
        self.entries.iter().map(|(kind, constraint)| (*kind, constraint))
    }
}
