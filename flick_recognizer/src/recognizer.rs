// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifecycle contract shared by all recognizers.

use alloc::vec::Vec;

use flick_pointer::{PointerSet, RawPointerEvent};

use crate::event::{GestureEvent, GestureFamilies};

/// Output sink for gesture emissions, in emission order.
pub type Emitted<K> = Vec<GestureEvent<K>>;

/// A unit reacting to the four pointer lifecycle phases.
///
/// Each call receives the live [`PointerSet`] read-only (the tracker has
/// already applied the event for down/move; for up/cancel the departing
/// pointer is still present), the capability set of callback families the
/// consumer registered (`wanted`, used for mutual exclusion), the raw event,
/// and the emission sink. Implementations push zero or more
/// [`GestureEvent`]s; delivery order is emission order.
///
/// All methods default to no-ops so implementations only override the phases
/// they care about. A recognizer must never panic on unexpected sequences —
/// missing per-pointer data degrades to emitting nothing.
pub trait Recognizer<K> {
    /// A new contact appeared.
    fn pointer_down(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let _ = (pointers, wanted, event, out);
    }

    /// A tracked contact moved.
    fn pointer_move(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let _ = (pointers, wanted, event, out);
    }

    /// A contact lifted.
    fn pointer_up(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let _ = (pointers, wanted, event, out);
    }

    /// A contact was cancelled by the host. Recognizers with an active
    /// session emit their Cancel-kind event and reset session state.
    fn pointer_cancel(
        &mut self,
        pointers: &PointerSet,
        wanted: GestureFamilies,
        event: &RawPointerEvent<K>,
        out: &mut Emitted<K>,
    ) {
        let _ = (pointers, wanted, event, out);
    }
}
