// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joint-sample gating for two-pointer recognizers.

use flick_pointer::PointerId;

/// Gate that coalesces a pair of per-pointer move events into one joint sample.
///
/// Two simultaneous contacts each deliver their own move event for what is
/// logically a single frame of relative motion; recomputing the difference
/// vector on both would process the same frame twice. The pacer reports a
/// completed frame on every second move event: either the partner pointer has
/// now also moved, or the same pointer moved twice in a row (the partner is
/// stationary). Unlike a hidden parity toggle, the gate is reset at session
/// boundaries, so it cannot skew when contacts come and go mid-stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct FramePacer {
    pending: Option<PointerId>,
}

impl FramePacer {
    /// Create a pacer with no pending move.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Record a move event. Returns `true` when the joint frame is complete
    /// and the difference vector should be resampled now.
    pub fn on_move(&mut self, id: PointerId) -> bool {
        match self.pending.take() {
            None => {
                self.pending = Some(id);
                false
            }
            Some(_) => true,
        }
    }

    /// Forget any half-complete frame (session boundary).
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
