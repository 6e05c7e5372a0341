// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: owns the live [`PointerSet`] and applies lifecycle events.

use kurbo::Point;

use crate::event::PointerId;
use crate::pointer::Pointer;
use crate::set::PointerSet;

/// Maintains the live set of active pointers across lifecycle events.
///
/// The tracker is the only writer of the [`PointerSet`]; recognizers read it.
/// Unknown ids on move/up/cancel are ignored rather than treated as errors,
/// since they may represent stale or already-cancelled contacts.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    set: PointerSet,
}

impl PointerTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            set: PointerSet::new(),
        }
    }

    /// Insert a fresh pointer with no motion data yet.
    ///
    /// A duplicate id silently overwrites; the input device is responsible for
    /// id uniqueness among live contacts.
    pub fn on_down(&mut self, id: PointerId, position: Point, timestamp: u64) {
        self.set.insert(id, Pointer::new(position, timestamp));
    }

    /// Update a tracked pointer's position and derived motion quantities.
    ///
    /// Returns `true` if the id was tracked; an untracked id is a no-op.
    pub fn on_move(&mut self, id: PointerId, position: Point, timestamp: u64) -> bool {
        match self.set.get_mut(id) {
            Some(ptr) => {
                ptr.move_to(position, timestamp);
                true
            }
            None => false,
        }
    }

    /// Remove a pointer on pointer-up. No-op if absent.
    pub fn on_up(&mut self, id: PointerId) -> Option<Pointer> {
        self.set.remove(id)
    }

    /// Remove a pointer on pointer-cancel. No-op if absent.
    pub fn on_cancel(&mut self, id: PointerId) -> Option<Pointer> {
        self.set.remove(id)
    }

    /// The live pointer set, read-only.
    pub fn pointers(&self) -> &PointerSet {
        &self.set
    }

    /// Drop all tracked pointers.
    pub fn clear(&mut self) {
        self.set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::PointerTracker;
    use kurbo::Point;

    #[test]
    fn down_move_up_lifecycle() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(1, Point::new(0.0, 0.0), 100);
        assert_eq!(tracker.pointers().len(), 1);

        assert!(tracker.on_move(1, Point::new(5.0, 0.0), 110));
        let ptr = tracker.pointers().get(1).unwrap();
        assert_eq!(ptr.position, Point::new(5.0, 0.0));
        assert_eq!(ptr.dt, Some(10));

        assert!(tracker.on_up(1).is_some());
        assert!(tracker.pointers().is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.on_move(3, Point::new(1.0, 1.0), 100));
        assert!(tracker.on_up(3).is_none());
        assert!(tracker.on_cancel(3).is_none());
    }

    #[test]
    fn cancel_removes_the_contact() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(1, Point::new(0.0, 0.0), 100);
        tracker.on_down(2, Point::new(9.0, 0.0), 101);
        assert!(tracker.on_cancel(1).is_some());
        assert_eq!(tracker.pointers().len(), 1);
        assert!(tracker.pointers().contains(2));
    }

    #[test]
    fn duplicate_down_overwrites() {
        let mut tracker = PointerTracker::new();
        tracker.on_down(1, Point::new(0.0, 0.0), 100);
        tracker.on_move(1, Point::new(5.0, 0.0), 110);
        tracker.on_down(1, Point::new(2.0, 2.0), 120);

        let ptr = tracker.pointers().get(1).unwrap();
        assert_eq!(ptr.position, Point::new(2.0, 2.0));
        // A fresh contact carries no motion data.
        assert_eq!(ptr.delta, None);
    }
}
