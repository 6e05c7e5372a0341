// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition across press sessions.
//!
//! A tap is a press shorter than `tap_interval`. A double-tap is two such
//! presses on the same target whose pointer-downs fall within
//! `double_tap_interval` of each other (the window is measured down-to-down).
//!
//! ## Shared context
//!
//! Double-tap pairing has to survive across press sessions and, when several
//! bindings observe the same input surface, across recognizer instances. The
//! continuity state therefore lives in a [`TapContext`] that every tap
//! recognizer receives at construction:
//!
//! - the *sentinel*: the target of the pending first tap, if any;
//! - the pending tap's down time and whether it already produced a `Tap`;
//! - the two interval knobs, shared by every recognizer built from the
//!   context.
//!
//! The context is single-writer by contract: the engine is single-threaded
//! and fully synchronous, so a plain `Rc<RefCell<_>>` suffices. Tests build an
//! isolated context each, keeping them hermetic.
//!
//! ## Classification at pointer-down
//!
//! ```text
//! down on target T:
//!   sentinel != T (or none pending)  -> fresh Tap candidate, sentinel = T
//!   sentinel == T, press still held  -> a chord, not a pairing; stays Tap
//!   sentinel == T, gap in window     -> this press is the DoubleTap half
//!   sentinel == T, gap expired       -> flush the stale candidate as a
//!                                       catch-up Tap (if it never emitted),
//!                                       then start over
//! ```
//!
//! Pairing requires the candidate's press to have ended: a second finger
//! landing on the same target while the first is still down is a chord, and
//! its eventual single-pointer release is a plain tap. The sentinel clears
//! after the second press of a completed pairing either way, so a third
//! quick press starts a fresh pairing rather than a triple-tap chain.
//!
//! ## Example
//!
//! ```
//! use flick_recognizer::tap::{TapContext, TapRecognizer};
//! use flick_recognizer::{GestureFamilies, GestureKind, Recognizer};
//! use flick_pointer::{PointerTracker, RawPointerEvent};
//! use kurbo::Point;
//!
//! let ctx = TapContext::new().shared();
//! let mut tap = TapRecognizer::new(ctx);
//! let mut tracker = PointerTracker::new();
//! let mut out = Vec::new();
//! let families = GestureFamilies::TAP;
//!
//! let down = RawPointerEvent::new(1, Point::new(5.0, 5.0), 42_u32, 1000);
//! tracker.on_down(1, down.position, down.timestamp);
//! tap.pointer_down(tracker.pointers(), families, &down, &mut out);
//!
//! let up = RawPointerEvent::new(1, Point::new(5.0, 5.0), 42_u32, 1100);
//! tap.pointer_up(tracker.pointers(), families, &up, &mut out);
//! tracker.on_up(1);
//!
//! assert_eq!(out.len(), 1);
//! assert_eq!(out[0].kind, GestureKind::Tap);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use flick_pointer::{PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies, GestureKind};
use crate::recognizer::{Emitted, Recognizer};

/// Default maximum down-to-up duration for a press to count as a tap, in
/// milliseconds.
pub const DEFAULT_TAP_INTERVAL: u64 = 250;

/// Default maximum down-to-down gap pairing two presses into a double-tap,
/// in milliseconds.
pub const DEFAULT_DOUBLE_TAP_INTERVAL: u64 = 250;

/// Continuity state and tuning shared by every tap recognizer built from it.
#[derive(Clone, Debug)]
pub struct TapContext<K> {
    /// Maximum down-to-up duration for a tap press.
    pub tap_interval: u64,
    /// Maximum down-to-down gap pairing a double-tap.
    pub double_tap_interval: u64,
    /// Target of the pending first tap, if a pairing is open.
    sentinel: Option<K>,
    /// Down time of the pending first tap.
    pending_down_time: u64,
    /// Whether the pending candidate already emitted its `Tap` at pointer-up.
    pending_emitted: bool,
    /// Whether the pending candidate's press has ended.
    pending_released: bool,
}

/// Shared handle to a [`TapContext`]; single-writer under the synchronous
/// event model.
pub type SharedTapContext<K> = Rc<RefCell<TapContext<K>>>;

impl<K> TapContext<K> {
    /// Create a context with the default intervals.
    pub fn new() -> Self {
        Self::with_intervals(DEFAULT_TAP_INTERVAL, DEFAULT_DOUBLE_TAP_INTERVAL)
    }

    /// Create a context with explicit intervals, in milliseconds.
    pub fn with_intervals(tap_interval: u64, double_tap_interval: u64) -> Self {
        Self {
            tap_interval,
            double_tap_interval,
            sentinel: None,
            pending_down_time: 0,
            pending_emitted: false,
            pending_released: false,
        }
    }

    /// Wrap the context for sharing across recognizer instances.
    pub fn shared(self) -> SharedTapContext<K> {
        Rc::new(RefCell::new(self))
    }
}

impl<K> Default for TapContext<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Recognizes taps and double-taps from short press sessions.
#[derive(Debug)]
pub struct TapRecognizer<K> {
    context: SharedTapContext<K>,
    down_time: Option<u64>,
    kind: GestureKind,
}

impl<K> TapRecognizer<K> {
    /// Create a recognizer bound to a shared [`TapContext`].
    pub fn new(context: SharedTapContext<K>) -> Self {
        Self {
            context,
            down_time: None,
            kind: GestureKind::Tap,
        }
    }
}

impl<K: Clone + PartialEq> Recognizer<K> for TapRecognizer<K> {
    fn pointer_down(
        &mut self,
        pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        self.down_time = Some(event.timestamp);
        self.kind = GestureKind::Tap;

        let mut ctx = self.context.borrow_mut();
        let same_target = ctx.sentinel.as_ref() == Some(&event.target);
        if same_target && ctx.pending_released {
            let gap = event.timestamp.saturating_sub(ctx.pending_down_time);
            if gap < ctx.double_tap_interval {
                self.kind = GestureKind::DoubleTap;
            } else if !ctx.pending_emitted {
                // The candidate expired as a plain tap without ever reaching
                // its handler; flush it now.
                out.push(GestureEvent::new(GestureKind::Tap, pointers, event));
            }
            // The pairing is spent either way; a third press starts over.
            ctx.sentinel = None;
        } else if !same_target {
            ctx.sentinel = Some(event.target.clone());
            ctx.pending_down_time = event.timestamp;
            ctx.pending_emitted = false;
            ctx.pending_released = false;
        }
        // Same target with the candidate's press still held: a chord. The
        // press stays a plain tap and the pending state is left alone.
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
        let Some(down_time) = self.down_time.take() else {
            return;
        };

        let mut ctx = self.context.borrow_mut();
        ctx.pending_released = true;
        let duration = event.timestamp.saturating_sub(down_time);
        if duration < ctx.tap_interval {
            if self.kind == GestureKind::Tap {
                ctx.pending_emitted = true;
            }
            out.push(GestureEvent::new(self.kind, pointers, event));
        }
    }

    fn pointer_cancel(
        &mut self,
        _pointers: &PointerSet,
        _wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        _out: &mut Emitted<K>,
    ) {
        // No cancel kind exists for taps; just drop the press session.
        self.down_time = None;
        self.kind = GestureKind::Tap;

        // An abandoned press cannot anchor a pairing.
        let mut ctx = self.context.borrow_mut();
        if ctx.sentinel.as_ref() == Some(&event.target) {
            ctx.sentinel = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TapContext, TapRecognizer};
    use crate::event::{GestureFamilies, GestureKind};
    use crate::recognizer::{Emitted, Recognizer};
    use alloc::vec::Vec;
    use flick_pointer::{PointerTracker, RawPointerEvent};
    use kurbo::Point;

    const WANTED: GestureFamilies = GestureFamilies::TAP;

    fn raw(target: u32, t: u64) -> RawPointerEvent<u32> {
        RawPointerEvent::new(1, Point::new(5.0, 5.0), target, t)
    }

    /// Run a full down/up press and return the emissions.
    fn press(
        tap: &mut TapRecognizer<u32>,
        target: u32,
        down_t: u64,
        up_t: u64,
    ) -> Emitted<u32> {
        let mut tracker = PointerTracker::new();
        let mut out: Emitted<u32> = Vec::new();
        tracker.on_down(1, Point::new(5.0, 5.0), down_t);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(target, down_t), &mut out);
        tap.pointer_up(tracker.pointers(), WANTED, &raw(target, up_t), &mut out);
        tracker.on_up(1);
        out
    }

    #[test]
    fn short_press_is_a_tap() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let out = press(&mut tap, 42, 1000, 1240);
        let kinds: Vec<_> = out.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [GestureKind::Tap]);
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let out = press(&mut tap, 42, 1000, 1250);
        assert!(out.is_empty());
    }

    #[test]
    fn quick_second_press_is_a_double_tap() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let first = press(&mut tap, 42, 1000, 1100);
        let second = press(&mut tap, 42, 1200, 1300);

        let first: Vec<_> = first.iter().map(|e| e.kind).collect();
        let second: Vec<_> = second.iter().map(|e| e.kind).collect();
        assert_eq!(first, [GestureKind::Tap]);
        assert_eq!(second, [GestureKind::DoubleTap]);
    }

    #[test]
    fn late_second_press_is_an_independent_tap() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let first = press(&mut tap, 42, 1000, 1100);
        // Down-to-down gap of 260 ms exceeds the 250 ms window.
        let second = press(&mut tap, 42, 1260, 1360);

        let first: Vec<_> = first.iter().map(|e| e.kind).collect();
        let second: Vec<_> = second.iter().map(|e| e.kind).collect();
        assert_eq!(first, [GestureKind::Tap]);
        assert_eq!(second, [GestureKind::Tap]);
    }

    #[test]
    fn different_target_starts_a_fresh_candidate() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let first = press(&mut tap, 42, 1000, 1100);
        let second = press(&mut tap, 99, 1150, 1250);

        assert_eq!(first[0].kind, GestureKind::Tap);
        assert_eq!(second[0].kind, GestureKind::Tap);
    }

    #[test]
    fn third_quick_press_does_not_chain_triple_taps() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        press(&mut tap, 42, 1000, 1050);
        let second = press(&mut tap, 42, 1100, 1150);
        let third = press(&mut tap, 42, 1200, 1250);

        assert_eq!(second[0].kind, GestureKind::DoubleTap);
        // The pairing was spent; this press opens a new one.
        assert_eq!(third[0].kind, GestureKind::Tap);
    }

    #[test]
    fn stale_unemitted_candidate_is_flushed_at_next_down() {
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        // A long press records the candidate but never emits at up.
        let first = press(&mut tap, 42, 1000, 1400);
        assert!(first.is_empty());

        // Next press on the same target after the window expired: the stale
        // candidate is flushed as a catch-up tap, then the press itself taps.
        let second = press(&mut tap, 42, 1500, 1560);
        let kinds: Vec<_> = second.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [GestureKind::Tap, GestureKind::Tap]);
    }

    #[test]
    fn intervals_are_shared_through_the_context() {
        let ctx = TapContext::with_intervals(100, 400).shared();
        let mut tap = TapRecognizer::new(ctx);

        // 120 ms press fails the tightened tap interval.
        let out = press(&mut tap, 42, 1000, 1120);
        assert!(out.is_empty());

        // A 300 ms down-to-down gap still pairs under the widened window.
        let first = press(&mut tap, 7, 2000, 2050);
        let second = press(&mut tap, 7, 2300, 2350);
        assert_eq!(first[0].kind, GestureKind::Tap);
        assert_eq!(second[0].kind, GestureKind::DoubleTap);
    }

    #[test]
    fn context_is_shared_across_recognizer_instances() {
        let ctx = TapContext::new().shared();
        let mut a = TapRecognizer::new(ctx.clone());
        let mut b = TapRecognizer::new(ctx);

        let first = press(&mut a, 42, 1000, 1050);
        // The second instance sees the pending candidate from the first.
        let second = press(&mut b, 42, 1100, 1150);

        assert_eq!(first[0].kind, GestureKind::Tap);
        assert_eq!(second[0].kind, GestureKind::DoubleTap);
    }

    #[test]
    fn multi_pointer_release_is_not_a_tap() {
        let mut tracker = PointerTracker::new();
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let mut out: Emitted<u32> = Vec::new();

        tracker.on_down(1, Point::new(0.0, 0.0), 1000);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1000), &mut out);
        tracker.on_down(2, Point::new(9.0, 0.0), 1010);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1010), &mut out);

        tap.pointer_up(tracker.pointers(), WANTED, &raw(42, 1050), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn chorded_second_contact_stays_a_plain_tap() {
        let mut tracker = PointerTracker::new();
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let mut out: Emitted<u32> = Vec::new();

        // Second finger lands on the same target while the first is held.
        tracker.on_down(1, Point::new(0.0, 0.0), 1000);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1000), &mut out);
        tracker.on_down(2, Point::new(9.0, 0.0), 1040);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1040), &mut out);

        tap.pointer_up(tracker.pointers(), WANTED, &raw(42, 1080), &mut out);
        tracker.on_up(2);
        tap.pointer_up(tracker.pointers(), WANTED, &raw(42, 1120), &mut out);
        tracker.on_up(1);

        let kinds: Vec<_> = out.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [GestureKind::Tap]);
    }

    #[test]
    fn cancelled_press_does_not_anchor_pairing() {
        let mut tracker = PointerTracker::new();
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let mut out: Emitted<u32> = Vec::new();

        tracker.on_down(1, Point::new(0.0, 0.0), 1000);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1000), &mut out);
        tap.pointer_cancel(tracker.pointers(), WANTED, &raw(42, 1020), &mut out);
        tracker.on_cancel(1);
        assert!(out.is_empty());

        // A later quick pair on the same target pairs among themselves, not
        // against the abandoned press.
        let first = press(&mut tap, 42, 1300, 1350);
        let second = press(&mut tap, 42, 1400, 1450);
        assert_eq!(first[0].kind, GestureKind::Tap);
        assert_eq!(second[0].kind, GestureKind::DoubleTap);
    }

    #[test]
    fn cancel_drops_the_press() {
        let mut tracker = PointerTracker::new();
        let mut tap = TapRecognizer::new(TapContext::new().shared());
        let mut out: Emitted<u32> = Vec::new();

        tracker.on_down(1, Point::new(0.0, 0.0), 1000);
        tap.pointer_down(tracker.pointers(), WANTED, &raw(42, 1000), &mut out);
        tap.pointer_cancel(tracker.pointers(), WANTED, &raw(42, 1020), &mut out);
        tap.pointer_up(tracker.pointers(), WANTED, &raw(42, 1040), &mut out);

        assert!(out.is_empty());
    }
}
