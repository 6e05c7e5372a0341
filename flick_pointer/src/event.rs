// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer events fed into the core by the host input shell.

use kurbo::Point;

/// Pointer identifier, stable for the lifetime of one contact.
pub type PointerId = u64;

/// One normalized pointer lifecycle event (down, move, up, or cancel).
///
/// `K` is an opaque target identity — whatever the host uses to name the
/// element under the pointer. The tap recognizer compares targets to pair a
/// double-tap's two presses; the core never inspects `K` beyond equality.
///
/// Timestamps are caller-supplied milliseconds. The core contains no clock of
/// its own, so identical event sequences always produce identical output.
#[derive(Clone, Debug, PartialEq)]
pub struct RawPointerEvent<K> {
    /// Identifier of the contact that produced this event.
    pub pointer_id: PointerId,
    /// Pointer position in the host's normalized coordinate space.
    pub position: Point,
    /// Identity of the element under the pointer.
    pub target: K,
    /// Event time in milliseconds.
    pub timestamp: u64,
}

impl<K> RawPointerEvent<K> {
    /// Create a new raw pointer event.
    pub fn new(pointer_id: PointerId, position: Point, target: K, timestamp: u64) -> Self {
        Self {
            pointer_id,
            position,
            target,
            timestamp,
        }
    }
}
