// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe: a fast or long single-pointer stroke, classified on release.

use kurbo::Point;

use flick_pointer::{MoveDirection, PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies, GestureKind};
use crate::recognizer::{Emitted, Recognizer};

/// Minimum straight-line distance, in position units, that triggers a swipe
/// regardless of speed.
pub const SWIPE_TRIGGER_DISTANCE: f64 = 10.0;

/// Minimum velocity, in position units per millisecond, that triggers a swipe
/// regardless of distance.
pub const SWIPE_TRIGGER_VELOCITY: f64 = 0.33;

/// Start of a swipe session, captured on the first move rather than at
/// pointer-down so a stationary press does not count toward the elapsed time.
#[derive(Clone, Copy, Debug)]
struct SwipeStart {
    position: Point,
    time: u64,
}

/// Recognizes a swipe from single-pointer displacement at pointer-up.
///
/// The stroke is recognized when its straight-line velocity exceeds
/// [`SWIPE_TRIGGER_VELOCITY`] or its distance exceeds
/// [`SWIPE_TRIGGER_DISTANCE`], and its discretized direction is a cardinal.
/// Recognition emits the generic [`GestureKind::Swipe`] followed by the
/// directional variant, both carrying the total delta and the direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeRecognizer {
    start: Option<SwipeStart>,
}

impl SwipeRecognizer {
    /// Create a recognizer with no active session.
    pub fn new() -> Self {
        Self { start: None }
    }
}

/// The directional swipe kind for a cardinal direction.
fn directional_kind(direction: MoveDirection) -> Option<GestureKind> {
    match direction {
        MoveDirection::LEFT => Some(GestureKind::SwipeLeft),
        MoveDirection::RIGHT => Some(GestureKind::SwipeRight),
        MoveDirection::UP => Some(GestureKind::SwipeUp),
        MoveDirection::DOWN => Some(GestureKind::SwipeDown),
        _ => None,
    }
}

impl<K: Clone> Recognizer<K> for SwipeRecognizer {
    fn pointer_down(
        &mut self,
        _pointers: &PointerSet,
        _wanted: GestureFamilies,
        _event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        self.start = None;
    }

    fn pointer_move(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        if pointers.len() == 1 && self.start.is_none() {
            if let Some(ptr) = pointers.first() {
                self.start = Some(SwipeStart {
                    position: ptr.position,
                    time: event.timestamp,
                });
            }
        }
    }

    fn pointer_up(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        if pointers.len() != 1 {
            return;
        }
        let Some(start) = self.start.take() else {
            return;
        };
        let Some(ptr) = pointers.first() else {
            return;
        };

        let delta = ptr.position - start.position;
        let distance = delta.hypot();
        let elapsed = event.timestamp.saturating_sub(start.time);
        // Zero elapsed time on a nonzero stroke reads as infinitely fast.
        let velocity = distance / elapsed as f64;

        if velocity > SWIPE_TRIGGER_VELOCITY || distance > SWIPE_TRIGGER_DISTANCE {
            let direction = MoveDirection::classify(delta);
            if let Some(kind) = directional_kind(direction) {
                out.push(
                    GestureEvent::new(GestureKind::Swipe, pointers, event)
                        .with_delta(delta)
                        .with_direction(direction),
                );
                out.push(
                    GestureEvent::new(kind, pointers, event)
                        .with_delta(delta)
                        .with_direction(direction),
                );
            }
        }
    }

    fn pointer_cancel(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        out.push(GestureEvent::new(GestureKind::SwipeCancel, pointers, event));
        self.start = None;
    }
}
