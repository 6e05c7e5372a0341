// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan: a single pointer dragging across the surface.

use flick_pointer::{MoveDirection, PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies, GestureKind};
use crate::recognizer::{Emitted, Recognizer};

/// Recognizes a pan gesture from single-pointer movement.
///
/// Pan and swipe are mutually exclusive for a binding: while any swipe-family
/// callback is registered, pan move frames are never recognized. Each
/// recognized frame emits, in order, a generic [`GestureKind::Pan`] carrying
/// the move delta, then [`GestureKind::PanStart`] (first frame of the
/// session) or [`GestureKind::PanMove`], then a directional variant when the
/// move direction is a cardinal.
#[derive(Clone, Copy, Debug)]
pub struct PanRecognizer {
    pan_started: bool,
}

impl PanRecognizer {
    /// Create a recognizer with no active session.
    pub fn new() -> Self {
        Self { pan_started: true }
    }
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The directional pan kind for a cardinal direction.
fn directional_kind(direction: MoveDirection) -> Option<GestureKind> {
    match direction {
        MoveDirection::LEFT => Some(GestureKind::PanLeft),
        MoveDirection::RIGHT => Some(GestureKind::PanRight),
        MoveDirection::UP => Some(GestureKind::PanUp),
        MoveDirection::DOWN => Some(GestureKind::PanDown),
        _ => None,
    }
}

impl<K: Clone> Recognizer<K> for PanRecognizer {
    fn pointer_down(
        &mut self,
        _pointers: &PointerSet,
        _wanted: GestureFamilies,
        _event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        self.pan_started = true;
    }

    fn pointer_move(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if pointers.len() != 1 || wanted.intersects(GestureFamilies::SWIPE) {
            return;
        }
        let Some(ptr) = pointers.first() else {
            return;
        };
        let Some(delta) = ptr.delta else {
            return;
        };

        out.push(GestureEvent::new(GestureKind::Pan, pointers, event).with_delta(delta));

        let phase = if self.pan_started {
            self.pan_started = false;
            GestureKind::PanStart
        } else {
            GestureKind::PanMove
        };
        out.push(GestureEvent::new(phase, pointers, event));

        if let Some(kind) = directional_kind(ptr.direction) {
            out.push(GestureEvent::new(kind, pointers, event).with_direction(ptr.direction));
        }
    }

    fn pointer_up(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        // A down/up pair with no intervening move leaves delta unset.
        let Some(ptr) = pointers.first() else {
            return;
        };
        let mut ev = GestureEvent::new(GestureKind::PanEnd, pointers, event);
        if let Some(delta) = ptr.delta {
            ev = ev.with_delta(delta);
        }
        out.push(ev);
    }

    fn pointer_cancel(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let Some(ptr) = pointers.first() else {
            return;
        };
        let mut ev = GestureEvent::new(GestureKind::PanCancel, pointers, event);
        if let Some(delta) = ptr.delta {
            ev = ev.with_delta(delta);
        }
        out.push(ev);
        self.pan_started = true;
    }
}
