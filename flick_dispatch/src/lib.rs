// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flick Dispatch: the consumer-facing gesture engine.
//!
//! The [`Dispatcher`] owns a pointer tracker, a set of recognizer state
//! machines, and a handler registry keyed by [`GestureKind`]. Feed it raw
//! pointer lifecycle events and it invokes the callbacks you registered,
//! synchronously and in a deterministic order.
//!
//! ## Example
//!
//! ```
//! use flick_dispatch::Dispatcher;
//! use flick_pointer::RawPointerEvent;
//! use flick_recognizer::{GestureFamilies, GestureKind};
//! use kurbo::Point;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! // Targets can be any cloneable, comparable key; here a widget id.
//! let mut gestures: Dispatcher<u32> = Dispatcher::new(GestureFamilies::TAP);
//!
//! let taps = Rc::new(Cell::new(0));
//! let seen = taps.clone();
//! gestures.on(GestureKind::Tap, move |_| seen.set(seen.get() + 1));
//!
//! gestures.pointer_down(&RawPointerEvent::new(1, Point::new(4.0, 4.0), 17, 1000));
//! gestures.pointer_up(&RawPointerEvent::new(1, Point::new(4.0, 4.0), 17, 1080));
//!
//! assert_eq!(taps.get(), 1);
//! ```
//!
//! ## Determinism
//!
//! All state lives in the dispatcher and the shared
//! [`TapContext`](flick_recognizer::tap::TapContext); there are no globals
//! and no timers. Replaying an identical event sequence through a fresh
//! dispatcher produces an identical callback sequence.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod registry;

pub use dispatcher::Dispatcher;
pub use registry::{Handler, HandlerMap};

// Re-exported so consumers only need this crate for the common path.
pub use flick_recognizer::{GestureEvent, GestureFamilies, GestureKind};
