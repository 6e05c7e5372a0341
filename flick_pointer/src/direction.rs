// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discretized move directions.

use kurbo::Vec2;

bitflags::bitflags! {
    /// Cardinal classification of a pointer displacement.
    ///
    /// The four cardinal values are mutually exclusive when produced by
    /// [`MoveDirection::classify`]; the composite masks exist for matching
    /// (e.g. "any horizontal motion").
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveDirection: u8 {
        /// No dominant direction (`dx == dy`, including a stationary pointer).
        const NONE  = 1 << 0;
        /// Dominantly leftward motion.
        const LEFT  = 1 << 1;
        /// Dominantly rightward motion.
        const RIGHT = 1 << 2;
        /// Dominantly upward motion.
        const UP    = 1 << 3;
        /// Dominantly downward motion.
        const DOWN  = 1 << 4;
        /// Either horizontal cardinal.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Either vertical cardinal.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// Any cardinal direction.
        const ANY = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl MoveDirection {
    /// Classify a displacement vector into a single cardinal direction.
    ///
    /// The axis with the greater magnitude wins; magnitude ties resolve to the
    /// horizontal axis. `dx == dy` (which includes the zero vector) is
    /// [`MoveDirection::NONE`].
    ///
    /// ```
    /// use flick_pointer::MoveDirection;
    /// use kurbo::Vec2;
    ///
    /// assert_eq!(MoveDirection::classify(Vec2::new(-3.0, 1.0)), MoveDirection::LEFT);
    /// assert_eq!(MoveDirection::classify(Vec2::new(1.0, 4.0)), MoveDirection::DOWN);
    /// assert_eq!(MoveDirection::classify(Vec2::new(2.0, 2.0)), MoveDirection::NONE);
    /// ```
    pub fn classify(delta: Vec2) -> Self {
        if delta.x == delta.y {
            Self::NONE
        } else if delta.x.abs() >= delta.y.abs() {
            if delta.x < 0.0 { Self::LEFT } else { Self::RIGHT }
        } else if delta.y < 0.0 {
            Self::UP
        } else {
            Self::DOWN
        }
    }

    /// Whether this is exactly one of the four cardinal directions.
    pub fn is_cardinal(self) -> bool {
        matches!(self, Self::LEFT | Self::RIGHT | Self::UP | Self::DOWN)
    }
}

impl Default for MoveDirection {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::MoveDirection;
    use kurbo::Vec2;

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(
            MoveDirection::classify(Vec2::new(-5.0, 2.0)),
            MoveDirection::LEFT
        );
        assert_eq!(
            MoveDirection::classify(Vec2::new(5.0, -2.0)),
            MoveDirection::RIGHT
        );
        assert_eq!(
            MoveDirection::classify(Vec2::new(1.0, -5.0)),
            MoveDirection::UP
        );
        assert_eq!(
            MoveDirection::classify(Vec2::new(-1.0, 5.0)),
            MoveDirection::DOWN
        );
    }

    #[test]
    fn equal_components_are_none() {
        assert_eq!(
            MoveDirection::classify(Vec2::ZERO),
            MoveDirection::NONE
        );
        assert_eq!(
            MoveDirection::classify(Vec2::new(3.0, 3.0)),
            MoveDirection::NONE
        );
    }

    #[test]
    fn magnitude_tie_resolves_horizontal() {
        // |dx| == |dy| with differing values takes the horizontal branch.
        assert_eq!(
            MoveDirection::classify(Vec2::new(-3.0, 3.0)),
            MoveDirection::LEFT
        );
        assert_eq!(
            MoveDirection::classify(Vec2::new(3.0, -3.0)),
            MoveDirection::RIGHT
        );
    }

    #[test]
    fn composite_masks_match_cardinals() {
        assert!(MoveDirection::HORIZONTAL.contains(MoveDirection::LEFT));
        assert!(MoveDirection::VERTICAL.contains(MoveDirection::DOWN));
        assert!(MoveDirection::ANY.contains(MoveDirection::UP));
        assert!(!MoveDirection::ANY.contains(MoveDirection::NONE));
    }

    #[test]
    fn cardinal_predicate() {
        assert!(MoveDirection::LEFT.is_cardinal());
        assert!(!MoveDirection::NONE.is_cardinal());
        assert!(!MoveDirection::HORIZONTAL.is_cardinal());
    }
}
