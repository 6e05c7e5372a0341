// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Difference vector between two simultaneous contacts.

use crate::pointer::Pointer;

/// Length and angle of the vector from the first to the second contact.
///
/// Two-pointer recognizers compare successive difference vectors instead of
/// individual displacements: the relative measure is invariant under both
/// fingers panning together, so only the pinch/rotate component remains.
///
/// This is a pure computed value, recomputed on every sample, never stored
/// pointer state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDiff {
    /// Euclidean length of the difference vector.
    pub length: f64,
    /// Angle of the difference vector in degrees, from `atan2(dy, dx)`.
    pub angle: f64,
}

impl PointerDiff {
    /// Compute the difference vector from `first` to `second`.
    pub fn new(first: &Pointer, second: &Pointer) -> Self {
        let v = second.position - first.position;
        Self {
            length: v.hypot(),
            angle: v.atan2().to_degrees(),
        }
    }
}
