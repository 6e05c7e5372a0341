// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture kinds, capability families, and the emitted event value.

use kurbo::Vec2;

use flick_pointer::{MoveDirection, PointerSet, PointerSnapshot, RawPointerEvent};

/// Every recognizable gesture occurrence, including phase and directional
/// sub-variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Generic pan frame, carries the move delta.
    Pan,
    /// First recognized pan frame of a session.
    PanStart,
    /// Subsequent pan frame of a session.
    PanMove,
    /// Pan session ended by pointer-up.
    PanEnd,
    /// Pan session ended by pointer-cancel.
    PanCancel,
    /// Pan frame moving dominantly left.
    PanLeft,
    /// Pan frame moving dominantly right.
    PanRight,
    /// Pan frame moving dominantly up.
    PanUp,
    /// Pan frame moving dominantly down.
    PanDown,
    /// Generic pinch sample, carries the scale ratio.
    Pinch,
    /// First two-pointer sample of a pinch session.
    PinchStart,
    /// Subsequent pinch sample, carries the scale ratio.
    PinchMove,
    /// Pinch session ended by pointer-up.
    PinchEnd,
    /// Pinch session ended by pointer-cancel.
    PinchCancel,
    /// Contacts converging (scale at most 1).
    PinchIn,
    /// Contacts separating (scale above 1).
    PinchOut,
    /// Rotation sample, carries the angle delta in degrees.
    Rotate,
    /// First two-pointer sample of a rotate session.
    RotateStart,
    /// Rotate session ended by pointer-up.
    RotateEnd,
    /// Rotate session ended by pointer-cancel.
    RotateCancel,
    /// Generic swipe, carries delta and direction.
    Swipe,
    /// Swipe moving dominantly left.
    SwipeLeft,
    /// Swipe moving dominantly right.
    SwipeRight,
    /// Swipe moving dominantly up.
    SwipeUp,
    /// Swipe moving dominantly down.
    SwipeDown,
    /// Swipe session ended by pointer-cancel.
    SwipeCancel,
    /// Short single press.
    Tap,
    /// Two short presses on the same target within the double-tap window.
    DoubleTap,
}

impl GestureKind {
    /// Canonical name, matching the handler-registration key the consumer uses.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pan => "Pan",
            Self::PanStart => "PanStart",
            Self::PanMove => "PanMove",
            Self::PanEnd => "PanEnd",
            Self::PanCancel => "PanCancel",
            Self::PanLeft => "PanLeft",
            Self::PanRight => "PanRight",
            Self::PanUp => "PanUp",
            Self::PanDown => "PanDown",
            Self::Pinch => "Pinch",
            Self::PinchStart => "PinchStart",
            Self::PinchMove => "PinchMove",
            Self::PinchEnd => "PinchEnd",
            Self::PinchCancel => "PinchCancel",
            Self::PinchIn => "PinchIn",
            Self::PinchOut => "PinchOut",
            Self::Rotate => "Rotate",
            Self::RotateStart => "RotateStart",
            Self::RotateEnd => "RotateEnd",
            Self::RotateCancel => "RotateCancel",
            Self::Swipe => "Swipe",
            Self::SwipeLeft => "SwipeLeft",
            Self::SwipeRight => "SwipeRight",
            Self::SwipeUp => "SwipeUp",
            Self::SwipeDown => "SwipeDown",
            Self::SwipeCancel => "SwipeCancel",
            Self::Tap => "Tap",
            Self::DoubleTap => "DoubleTap",
        }
    }

    /// The generic family this kind belongs to.
    pub const fn family(self) -> GestureFamilies {
        match self {
            Self::Pan
            | Self::PanStart
            | Self::PanMove
            | Self::PanEnd
            | Self::PanCancel
            | Self::PanLeft
            | Self::PanRight
            | Self::PanUp
            | Self::PanDown => GestureFamilies::PAN,
            Self::Pinch
            | Self::PinchStart
            | Self::PinchMove
            | Self::PinchEnd
            | Self::PinchCancel
            | Self::PinchIn
            | Self::PinchOut => GestureFamilies::PINCH,
            Self::Rotate | Self::RotateStart | Self::RotateEnd | Self::RotateCancel => {
                GestureFamilies::ROTATE
            }
            Self::Swipe
            | Self::SwipeLeft
            | Self::SwipeRight
            | Self::SwipeUp
            | Self::SwipeDown
            | Self::SwipeCancel => GestureFamilies::SWIPE,
            Self::Tap | Self::DoubleTap => GestureFamilies::TAP,
        }
    }
}

bitflags::bitflags! {
    /// Set of generic gesture families.
    ///
    /// Used in two roles: the families a binding activates recognizers for,
    /// and the families the consumer registered callbacks for. The latter
    /// drives mutual exclusion (pan vs. swipe, rotate vs. pinch).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureFamilies: u8 {
        /// The pan family.
        const PAN    = 1 << 0;
        /// The pinch family.
        const PINCH  = 1 << 1;
        /// The rotate family.
        const ROTATE = 1 << 2;
        /// The swipe family.
        const SWIPE  = 1 << 3;
        /// The tap family (tap and double-tap).
        const TAP    = 1 << 4;
        /// All five families.
        const ALL = Self::PAN.bits()
            | Self::PINCH.bits()
            | Self::ROTATE.bits()
            | Self::SWIPE.bits()
            | Self::TAP.bits();
    }
}

/// One recognized gesture occurrence.
///
/// Constructed fresh for every emission and never mutated after delivery. The
/// pointer snapshot is a copy taken at emission time, immune to later tracker
/// mutation. Kind-specific quantities are optional: `delta` for pan/swipe,
/// `scale` for pinch, `angle` for rotate, `direction` for the directional
/// variants.
#[derive(Clone, Debug)]
pub struct GestureEvent<K> {
    /// What was recognized.
    pub kind: GestureKind,
    /// Copies of the contributing pointers, in contact order.
    pub pointers: PointerSnapshot,
    /// The raw pointer event that triggered this emission.
    pub raw: RawPointerEvent<K>,
    /// Displacement, for pan and swipe kinds.
    pub delta: Option<Vec2>,
    /// Scale ratio (current separation / previous separation), for pinch kinds.
    pub scale: Option<f64>,
    /// Angle delta in degrees, for rotate kinds.
    pub angle: Option<f64>,
    /// Discretized direction, for directional kinds.
    pub direction: MoveDirection,
}

impl<K: Clone> GestureEvent<K> {
    /// Create an event snapshotting the current pointer set.
    pub fn new(kind: GestureKind, pointers: &PointerSet, raw: &RawPointerEvent<K>) -> Self {
        Self {
            kind,
            pointers: pointers.snapshot(),
            raw: raw.clone(),
            delta: None,
            scale: None,
            angle: None,
            direction: MoveDirection::NONE,
        }
    }

    /// Attach a move delta.
    pub fn with_delta(mut self, delta: Vec2) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Attach a scale ratio.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Attach an angle delta in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Attach a discretized direction.
    pub fn with_direction(mut self, direction: MoveDirection) -> Self {
        self.direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{GestureEvent, GestureFamilies, GestureKind};
    use flick_pointer::{Pointer, PointerSet, RawPointerEvent};
    use kurbo::Point;

    #[test]
    fn names_are_canonical() {
        assert_eq!(GestureKind::PanStart.name(), "PanStart");
        assert_eq!(GestureKind::SwipeLeft.name(), "SwipeLeft");
        assert_eq!(GestureKind::DoubleTap.name(), "DoubleTap");
        assert_eq!(GestureKind::PinchOut.name(), "PinchOut");
    }

    #[test]
    fn families_cover_all_kinds() {
        assert_eq!(GestureKind::PanLeft.family(), GestureFamilies::PAN);
        assert_eq!(GestureKind::PinchCancel.family(), GestureFamilies::PINCH);
        assert_eq!(GestureKind::RotateStart.family(), GestureFamilies::ROTATE);
        assert_eq!(GestureKind::SwipeCancel.family(), GestureFamilies::SWIPE);
        assert_eq!(GestureKind::DoubleTap.family(), GestureFamilies::TAP);
        assert!(GestureFamilies::ALL.contains(GestureKind::Rotate.family()));
    }

    #[test]
    fn snapshot_is_immune_to_tracker_mutation() {
        let mut set = PointerSet::new();
        set.insert(1, Pointer::new(Point::new(2.0, 3.0), 0));
        let raw = RawPointerEvent::new(1, Point::new(2.0, 3.0), 0_u32, 0);

        let ev = GestureEvent::new(GestureKind::Pan, &set, &raw);
        set.get_mut(1).unwrap().move_to(Point::new(99.0, 99.0), 16);

        assert_eq!(ev.pointers.len(), 1);
        assert_eq!(ev.pointers[0].position, Point::new(2.0, 3.0));
    }
}
