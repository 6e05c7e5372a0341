// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flick Pointer: tracked contact points for gesture recognition.
//!
//! ## Overview
//!
//! This crate maintains the live set of active pointers (touch contacts, pen,
//! mouse) and derives per-pointer motion quantities on every move: the last
//! move delta, the curvilinear distance traveled, the elapsed time since the
//! previous move, and a discretized [`MoveDirection`](direction::MoveDirection).
//!
//! It knows nothing about gestures. Recognizer crates consume the
//! [`PointerSet`](set::PointerSet) read-only and derive their own state from it.
//!
//! ## Event shape
//!
//! The host input system feeds normalized [`RawPointerEvent`](event::RawPointerEvent)
//! values: a pointer id, a position in `kurbo` coordinates, an opaque target
//! identity, and a caller-supplied millisecond timestamp. The crate never reads
//! a wall clock, so replaying a recorded event sequence is fully deterministic.
//!
//! ## Example
//!
//! ```
//! use flick_pointer::{MoveDirection, PointerTracker};
//! use kurbo::Point;
//!
//! let mut tracker = PointerTracker::new();
//! tracker.on_down(7, Point::new(10.0, 10.0), 1000);
//! tracker.on_move(7, Point::new(4.0, 11.0), 1016);
//!
//! let ptr = tracker.pointers().get(7).unwrap();
//! assert_eq!(ptr.direction, MoveDirection::LEFT);
//! assert_eq!(ptr.dt, Some(16));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod diff;
pub mod direction;
pub mod event;
pub mod pointer;
pub mod set;
pub mod tracker;

pub use diff::PointerDiff;
pub use direction::MoveDirection;
pub use event::{PointerId, RawPointerEvent};
pub use pointer::Pointer;
pub use set::{PointerSet, PointerSnapshot};
pub use tracker::PointerTracker;
