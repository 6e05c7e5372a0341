// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single tracked contact point.

use kurbo::{Point, Vec2};

use crate::direction::MoveDirection;

/// One tracked contact point.
///
/// Created on pointer-down, mutated only by pointer-move, and removed from the
/// set on pointer-up or pointer-cancel. The motion fields are `None` until the
/// first move: a down/up pair with no intervening move never populates them,
/// and recognizers must tolerate that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Current position.
    pub position: Point,
    /// Displacement of the last move, `None` before the first move.
    pub delta: Option<Vec2>,
    /// Curvilinear distance of the last move.
    pub ds: Option<f64>,
    /// Milliseconds elapsed between the two most recent updates.
    pub dt: Option<u64>,
    /// Timestamp of the most recent update, in milliseconds.
    pub timestamp: u64,
    /// Discretized direction of the last move.
    pub direction: MoveDirection,
}

impl Pointer {
    /// Create a pointer at its initial contact position.
    pub fn new(position: Point, timestamp: u64) -> Self {
        Self {
            position,
            delta: None,
            ds: None,
            dt: None,
            timestamp,
            direction: MoveDirection::NONE,
        }
    }

    /// Record a move to a new position, deriving delta, distance, elapsed
    /// time, and move direction from the previous state.
    pub fn move_to(&mut self, position: Point, timestamp: u64) {
        let delta = position - self.position;
        self.direction = MoveDirection::classify(delta);
        self.delta = Some(delta);
        self.ds = Some(delta.hypot());
        self.dt = Some(timestamp.saturating_sub(self.timestamp));
        self.position = position;
        self.timestamp = timestamp;
    }
}
