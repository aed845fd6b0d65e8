// SPDX-License-Identifier: MPL-2.0
//! Layout domain types: named constraints with priorities and activation.

pub mod constraint;

pub use constraint::{Constraint, ConstraintKind, ConstraintSet, Priority, Relation};
