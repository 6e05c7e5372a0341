// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered set of live pointers.

use smallvec::SmallVec;

use crate::event::PointerId;
use crate::pointer::Pointer;

/// A by-value copy of the live pointers, taken at gesture emission time.
pub type PointerSnapshot = SmallVec<[Pointer; 2]>;

/// Mapping from pointer id to [`Pointer`], preserving insertion order.
///
/// Order matters: two-pointer recognizers derive the difference vector from
/// the first to the second contact, so the sign of scale/rotation deltas
/// depends on which contact arrived first.
///
/// Backed by a small inline vector; lookups are linear scans, which is the
/// right trade-off for the handful of simultaneous contacts real devices
/// produce.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerSet {
    entries: SmallVec<[(PointerId, Pointer); 2]>,
}

impl PointerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Number of live pointers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pointers are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the id is currently tracked.
    pub fn contains(&self, id: PointerId) -> bool {
        self.entries.iter().any(|(k, _)| *k == id)
    }

    /// Look up a pointer by id.
    pub fn get(&self, id: PointerId) -> Option<&Pointer> {
        self.entries.iter().find(|(k, _)| *k == id).map(|(_, p)| p)
    }

    /// Look up a pointer by id, mutably.
    pub fn get_mut(&mut self, id: PointerId) -> Option<&mut Pointer> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == id)
            .map(|(_, p)| p)
    }

    /// Insert a pointer. A duplicate id overwrites in place, keeping its
    /// original position in the order.
    pub fn insert(&mut self, id: PointerId, pointer: Pointer) {
        match self.get_mut(id) {
            Some(slot) => *slot = pointer,
            None => self.entries.push((id, pointer)),
        }
    }

    /// Remove a pointer by id, preserving the order of the remainder.
    pub fn remove(&mut self, id: PointerId) -> Option<Pointer> {
        let idx = self.entries.iter().position(|(k, _)| *k == id)?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterate `(id, pointer)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointerId, &Pointer)> {
        self.entries.iter().map(|(k, p)| (*k, p))
    }

    /// Iterate pointers in insertion order.
    pub fn pointers(&self) -> impl Iterator<Item = &Pointer> {
        self.entries.iter().map(|(_, p)| p)
    }

    /// The earliest-inserted live pointer.
    pub fn first(&self) -> Option<&Pointer> {
        self.entries.first().map(|(_, p)| p)
    }

    /// The first and second contacts, when exactly two pointers are live.
    pub fn pair(&self) -> Option<(&Pointer, &Pointer)> {
        match self.entries.as_slice() {
            [(_, a), (_, b)] => Some((a, b)),
            _ => None,
        }
    }

    /// Copy the live pointers in insertion order.
    pub fn snapshot(&self) -> PointerSnapshot {
        self.entries.iter().map(|(_, p)| *p).collect()
    }

    /// Remove all pointers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
