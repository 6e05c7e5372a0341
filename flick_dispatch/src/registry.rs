// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler registration keyed by gesture kind.

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;

use flick_recognizer::{GestureEvent, GestureFamilies, GestureKind};

/// A consumer callback for one gesture kind.
pub type Handler<K> = Box<dyn FnMut(&GestureEvent<K>)>;

/// Registered handlers, one per [`GestureKind`], plus the derived capability
/// set.
///
/// The capability set is the union of the families of every registered kind.
/// It is maintained incrementally at registration time rather than recomputed
/// per event, and recognizers consult it for mutual exclusion (a `SwipeLeft`
/// handler suppresses pan recognition, any pinch handler disables rotation).
pub struct HandlerMap<K> {
    handlers: HashMap<GestureKind, Handler<K>>,
    families: GestureFamilies,
}

impl<K> HandlerMap<K> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            families: GestureFamilies::empty(),
        }
    }

    /// Register `handler` for `kind`, replacing any previous handler for the
    /// same kind.
    ///
    /// The kind's family joins the capability set permanently; replacement
    /// never narrows the set.
    pub fn insert(&mut self, kind: GestureKind, handler: Handler<K>) {
        self.families |= kind.family();
        self.handlers.insert(kind, handler);
    }

    /// The union of families with at least one registered handler.
    pub fn families(&self) -> GestureFamilies {
        self.families
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invoke the handler registered for `event.kind`, if any.
    ///
    /// Returns whether a handler ran. Emissions for unregistered kinds are
    /// dropped silently; that is the normal case, not an error.
    pub fn deliver(&mut self, event: &GestureEvent<K>) -> bool {
        if let Some(handler) = self.handlers.get_mut(&event.kind) {
            handler(event);
            true
        } else {
            false
        }
    }
}

impl<K> Default for HandlerMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Handlers are not Debug; show the registered kinds and the capability set.
impl<K> fmt::Debug for HandlerMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerMap")
            .field("kinds", &self.handlers.keys())
            .field("families", &self.families)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::HandlerMap;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;
    use flick_pointer::{PointerSet, RawPointerEvent};
    use flick_recognizer::{GestureEvent, GestureFamilies, GestureKind};
    use kurbo::Point;

    fn event(kind: GestureKind) -> GestureEvent<u32> {
        let set = PointerSet::new();
        let raw = RawPointerEvent::new(1, Point::new(0.0, 0.0), 0_u32, 0);
        GestureEvent::new(kind, &set, &raw)
    }

    #[test]
    fn families_union_follows_registration() {
        let mut map: HandlerMap<u32> = HandlerMap::new();
        assert_eq!(map.families(), GestureFamilies::empty());

        map.insert(GestureKind::SwipeLeft, Box::new(|_| {}));
        assert_eq!(map.families(), GestureFamilies::SWIPE);

        map.insert(GestureKind::PinchMove, Box::new(|_| {}));
        assert_eq!(map.families(), GestureFamilies::SWIPE | GestureFamilies::PINCH);
    }

    #[test]
    fn replacement_does_not_narrow_families() {
        let mut map: HandlerMap<u32> = HandlerMap::new();
        map.insert(GestureKind::Tap, Box::new(|_| {}));
        map.insert(GestureKind::Tap, Box::new(|_| {}));
        assert_eq!(map.len(), 1);
        assert_eq!(map.families(), GestureFamilies::TAP);
    }

    #[test]
    fn deliver_routes_by_kind() {
        let mut map: HandlerMap<u32> = HandlerMap::new();
        let hits = Rc::new(Cell::new(0));
        let hits2 = hits.clone();
        map.insert(GestureKind::Tap, Box::new(move |_| hits2.set(hits2.get() + 1)));

        assert!(map.deliver(&event(GestureKind::Tap)));
        assert!(!map.deliver(&event(GestureKind::DoubleTap)));
        assert_eq!(hits.get(), 1);
    }
}
