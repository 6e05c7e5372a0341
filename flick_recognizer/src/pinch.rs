// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch: two pointers converging or separating.

use flick_pointer::{PointerDiff, PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies, GestureKind};
use crate::pace::FramePacer;
use crate::recognizer::{Emitted, Recognizer};

/// Recognizes pinch-in and pinch-out from the separation of two contacts.
///
/// Requires exactly two tracked pointers. Successive difference vectors are
/// sampled once per joint frame (see [`FramePacer`]); using the vector between
/// the contacts rather than their individual displacements makes the scale
/// invariant under both fingers panning together.
///
/// Each sample with a cached previous separation emits, in order,
/// [`GestureKind::PinchOut`] (scale above 1) or [`GestureKind::PinchIn`]
/// (scale at most 1), then [`GestureKind::PinchMove`], then the generic
/// [`GestureKind::Pinch`], all carrying the scale ratio. The first sample of
/// a session emits [`GestureKind::PinchStart`] only.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchRecognizer {
    prev: Option<PointerDiff>,
    pacer: FramePacer,
}

impl PinchRecognizer {
    /// Create a recognizer with no active session.
    pub fn new() -> Self {
        Self {
            prev: None,
            pacer: FramePacer::new(),
        }
    }
}

impl<K: Clone> Recognizer<K> for PinchRecognizer {
    fn pointer_down(
        &mut self,
        _pointers: &PointerSet,
        _wanted: GestureFamilies,
        _event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        self.prev = None;
        self.pacer.reset();
    }

    fn pointer_move(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let Some((first, second)) = pointers.pair() else {
            return;
        };
        if !self.pacer.on_move(event.pointer_id) {
            return;
        }

        let cur = PointerDiff::new(first, second);
        match self.prev {
            Some(prev) if prev.length > 0.0 => {
                let scale = cur.length / prev.length;
                let kind = if scale > 1.0 {
                    GestureKind::PinchOut
                } else {
                    GestureKind::PinchIn
                };
                out.push(GestureEvent::new(kind, pointers, event).with_scale(scale));
                out.push(GestureEvent::new(GestureKind::PinchMove, pointers, event).with_scale(scale));
                out.push(GestureEvent::new(GestureKind::Pinch, pointers, event).with_scale(scale));
            }
            // Coincident contacts: no meaningful ratio, wait for separation.
            Some(_) => {}
            None => {
                out.push(GestureEvent::new(GestureKind::PinchStart, pointers, event));
            }
        }
        self.prev = Some(cur);
    }

    fn pointer_up(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if self.prev.take().is_some() {
            out.push(GestureEvent::new(GestureKind::PinchEnd, pointers, event));
        }
        self.pacer.reset();
    }

    fn pointer_cancel(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        out.push(GestureEvent::new(GestureKind::PinchCancel, pointers, event));
        self.prev = None;
        self.pacer.reset();
    }
}
