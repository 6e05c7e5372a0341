// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture dispatcher: pointer events in, handler callbacks out.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use flick_pointer::{PointerSet, PointerTracker, RawPointerEvent};
use flick_recognizer::pan::PanRecognizer;
use flick_recognizer::pinch::PinchRecognizer;
use flick_recognizer::rotate::RotateRecognizer;
use flick_recognizer::swipe::SwipeRecognizer;
use flick_recognizer::tap::{SharedTapContext, TapContext, TapRecognizer};
use flick_recognizer::{Emitted, GestureEvent, GestureFamilies, GestureKind, Recognizer};

use crate::registry::HandlerMap;

/// Drives a fixed set of recognizers over a raw pointer stream and routes
/// their emissions to registered handlers.
///
/// Construction selects which recognizer units exist (one per requested
/// family, in a fixed order: pan, pinch, rotate, swipe, tap). Mutual
/// exclusion is decided separately, by the capability set of kinds the
/// consumer actually registered via [`on`](Self::on); see
/// [`HandlerMap::families`].
///
/// Per raw event the dispatcher:
///
/// 1. updates the pointer tracker (for down and move; untracked moves are
///    dropped before any recognizer runs),
/// 2. runs every recognizer in registration order, collecting emissions,
/// 3. delivers emissions in order to the handlers, skipping kinds with no
///    handler,
/// 4. for up and cancel, removes the pointer only after the recognizers ran,
///    so they still observe the departing contact.
///
/// The dispatcher is fully synchronous: all callbacks for an input event
/// return before the next event is processed, and an identical event
/// sequence produces an identical callback sequence.
pub struct Dispatcher<K> {
    tracker: PointerTracker,
    recognizers: Vec<Box<dyn Recognizer<K>>>,
    handlers: HandlerMap<K>,
    tap_context: SharedTapContext<K>,
}

impl<K: Clone + PartialEq + 'static> Dispatcher<K> {
    /// Create a dispatcher with built-in recognizers for `families`, using a
    /// fresh tap context with default intervals.
    pub fn new(families: GestureFamilies) -> Self {
        Self::with_tap_context(families, TapContext::new().shared())
    }

    /// Create a dispatcher with built-in recognizers for `families`, sharing
    /// an existing tap context (for double-tap pairing across dispatchers or
    /// for custom intervals).
    pub fn with_tap_context(families: GestureFamilies, tap_context: SharedTapContext<K>) -> Self {
        let mut recognizers: Vec<Box<dyn Recognizer<K>>> = Vec::new();
        if families.intersects(GestureFamilies::PAN) {
            recognizers.push(Box::new(PanRecognizer::new()));
        }
        if families.intersects(GestureFamilies::PINCH) {
            recognizers.push(Box::new(PinchRecognizer::new()));
        }
        if families.intersects(GestureFamilies::ROTATE) {
            recognizers.push(Box::new(RotateRecognizer::new()));
        }
        if families.intersects(GestureFamilies::SWIPE) {
            recognizers.push(Box::new(SwipeRecognizer::new()));
        }
        if families.intersects(GestureFamilies::TAP) {
            recognizers.push(Box::new(TapRecognizer::new(Rc::clone(&tap_context))));
        }
        Self {
            tracker: PointerTracker::new(),
            recognizers,
            handlers: HandlerMap::new(),
            tap_context,
        }
    }

    /// Register `handler` for one gesture kind, replacing any previous
    /// handler for that kind.
    pub fn on(
        &mut self,
        kind: GestureKind,
        handler: impl FnMut(&GestureEvent<K>) + 'static,
    ) -> &mut Self {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    /// Append a custom recognizer; it runs after the built-ins.
    pub fn push_recognizer(&mut self, recognizer: Box<dyn Recognizer<K>>) {
        self.recognizers.push(recognizer);
    }

    /// The capability set derived from registered handlers.
    pub fn families(&self) -> GestureFamilies {
        self.handlers.families()
    }

    /// The currently tracked pointers.
    pub fn pointers(&self) -> &PointerSet {
        self.tracker.pointers()
    }

    /// The shared tap context, for pairing with other dispatchers.
    pub fn tap_context(&self) -> &SharedTapContext<K> {
        &self.tap_context
    }

    /// Feed a pointer-down event.
    pub fn pointer_down(&mut self, event: &RawPointerEvent<K>) {
        self.tracker
            .on_down(event.pointer_id, event.position, event.timestamp);
        let wanted = self.handlers.families();
        let mut out: Emitted<K> = Vec::new();
        for recognizer in &mut self.recognizers {
            recognizer.pointer_down(self.tracker.pointers(), wanted, event, &mut out);
        }
        self.deliver(&out);
    }

    /// Feed a pointer-move event. Moves for pointers with no preceding down
    /// are dropped.
    pub fn pointer_move(&mut self, event: &RawPointerEvent<K>) {
        if !self
            .tracker
            .on_move(event.pointer_id, event.position, event.timestamp)
        {
            return;
        }
        let wanted = self.handlers.families();
        let mut out: Emitted<K> = Vec::new();
        for recognizer in &mut self.recognizers {
            recognizer.pointer_move(self.tracker.pointers(), wanted, event, &mut out);
        }
        self.deliver(&out);
    }

    /// Feed a pointer-up event. Recognizers observe the departing pointer;
    /// it leaves the tracker afterwards.
    pub fn pointer_up(&mut self, event: &RawPointerEvent<K>) {
        let wanted = self.handlers.families();
        let mut out: Emitted<K> = Vec::new();
        for recognizer in &mut self.recognizers {
            recognizer.pointer_up(self.tracker.pointers(), wanted, event, &mut out);
        }
        self.tracker.on_up(event.pointer_id);
        self.deliver(&out);
    }

    /// Feed a pointer-cancel event. Like up, but session-ending recognizers
    /// report their cancel kinds.
    pub fn pointer_cancel(&mut self, event: &RawPointerEvent<K>) {
        let wanted = self.handlers.families();
        let mut out: Emitted<K> = Vec::new();
        for recognizer in &mut self.recognizers {
            recognizer.pointer_cancel(self.tracker.pointers(), wanted, event, &mut out);
        }
        self.tracker.on_cancel(event.pointer_id);
        self.deliver(&out);
    }

    fn deliver(&mut self, out: &Emitted<K>) {
        for event in out {
            self.handlers.deliver(event);
        }
    }
}

// Recognizers are trait objects without Debug; show the observable state.
impl<K> fmt::Debug for Dispatcher<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("tracker", &self.tracker)
            .field("recognizers", &self.recognizers.len())
            .field("handlers", &self.handlers)
            .finish_non_exhaustive()
    }
}
