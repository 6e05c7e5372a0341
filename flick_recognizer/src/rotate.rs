// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate: two pointers turning around each other.

use flick_pointer::{PointerDiff, PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies, GestureKind};
use crate::pace::FramePacer;
use crate::recognizer::{Emitted, Recognizer};

/// Recognizes rotation from the angle of the two-contact difference vector.
///
/// Requires exactly two tracked pointers and the same joint-frame sampling as
/// pinch. The angle delta is the change of the difference vector's angle in
/// degrees; panning both fingers together leaves it unchanged.
///
/// Rotate and pinch are mutually exclusive for a binding: while any
/// pinch-family callback is registered this recognizer is disabled entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotateRecognizer {
    prev: Option<PointerDiff>,
    pacer: FramePacer,
}

impl RotateRecognizer {
    /// Create a recognizer with no active session.
    pub fn new() -> Self {
        Self {
            prev: None,
            pacer: FramePacer::new(),
        }
    }
}

impl<K: Clone> Recognizer<K> for RotateRecognizer {
    fn pointer_down(
        &mut self,
        _pointers: &PointerSet,
        wanted: GestureFamilies,
        _event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        if wanted.intersects(GestureFamilies::PINCH) {
            return;
        }
        self.prev = None;
        self.pacer.reset();
    }

    fn pointer_move(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if wanted.intersects(GestureFamilies::PINCH) {
            return;
        }
        let Some((first, second)) = pointers.pair() else {
            return;
        };
        if !self.pacer.on_move(event.pointer_id) {
            return;
        }

        let cur = PointerDiff::new(first, second);
        match self.prev {
            Some(prev) => {
                let angle = cur.angle - prev.angle;
                if angle != 0.0 {
                    out.push(GestureEvent::new(GestureKind::Rotate, pointers, event).with_angle(angle));
                }
            }
            None => {
                out.push(GestureEvent::new(GestureKind::RotateStart, pointers, event));
            }
        }
        self.prev = Some(cur);
    }

    fn pointer_up(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if wanted.intersects(GestureFamilies::PINCH) {
            return;
        }
        if self.prev.take().is_some() {
            out.push(GestureEvent::new(GestureKind::RotateEnd, pointers, event));
        }
        self.pacer.reset();
    }

    fn pointer_cancel(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if wanted.intersects(GestureFamilies::PINCH) {
            return;
        }
        out.push(GestureEvent::new(GestureKind::RotateCancel, pointers, event));
        self.prev = None;
        self.pacer.reset();
    }
}
