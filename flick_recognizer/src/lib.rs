// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flick Recognizer: independent gesture state machines over a raw pointer stream.
//!
//! ## Overview
//!
//! Each recognizer is a small state machine that consumes the four pointer
//! lifecycle phases — down, move, up, cancel — and pushes zero or more typed
//! [`GestureEvent`](event::GestureEvent)s into an output sink. Recognizers
//! never invoke consumer callbacks themselves; a higher layer (see the
//! `flick_dispatch` crate) routes emissions to registered handlers.
//!
//! Five recognizers are provided:
//!
//! - [`PanRecognizer`](pan::PanRecognizer): single-pointer drag, with
//!   start/move phases and directional variants.
//! - [`PinchRecognizer`](pinch::PinchRecognizer): two pointers separating or
//!   converging, reported as a scale ratio.
//! - [`RotateRecognizer`](rotate::RotateRecognizer): two pointers rotating,
//!   reported as an angle delta in degrees.
//! - [`SwipeRecognizer`](swipe::SwipeRecognizer): a fast or long single-pointer
//!   stroke, classified by direction on release.
//! - [`TapRecognizer`](tap::TapRecognizer): short press, with double-tap
//!   pairing across sessions via a shared [`TapContext`](tap::TapContext).
//!
//! ## Mutual exclusion
//!
//! Competing recognizers are arbitrated by the capability set of callback
//! families the consumer registered, passed into every lifecycle call as
//! [`GestureFamilies`](event::GestureFamilies): pan never recognizes while any
//! swipe-family callback is present, and rotate is disabled entirely while any
//! pinch-family callback is present. The policy is deterministic and is not an
//! error condition.
//!
//! ## Custom recognizers
//!
//! The [`Recognizer`](recognizer::Recognizer) trait is public; consumers can
//! implement their own units and register them alongside the built-ins.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod event;
pub mod pace;
pub mod pan;
pub mod pinch;
pub mod recognizer;
pub mod rotate;
pub mod swipe;
pub mod tap;

pub use event::{GestureEvent, GestureFamilies, GestureKind};
pub use recognizer::{Emitted, Recognizer};
