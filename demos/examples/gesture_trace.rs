// Copyright 2025 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a synthetic pointer trace through a gesture dispatcher.
//!
//! The trace drags one pointer across a list pane, pinches a canvas with two
//! pointers, then double-taps a button; every recognized gesture is printed
//! with its payload.
//!
//! Run:
//! - `cargo run -p flick_examples --example gesture_trace`

use kurbo::Point;

use flick_dispatch::{Dispatcher, GestureFamilies, GestureKind};
use flick_pointer::RawPointerEvent;

/// Widgets under the pointer; the shell would resolve these by hit testing.
const LIST: u32 = 1;
const CANVAS: u32 = 2;
const BUTTON: u32 = 3;

/// One raw input, as a platform shell would hand it to us.
#[derive(Clone, Copy, Debug)]
enum Input {
    Down(u64, f64, f64, u32, u64),
    Move(u64, f64, f64, u32, u64),
    Up(u64, f64, f64, u32, u64),
}

fn main() {
    let mut gestures: Dispatcher<u32> = Dispatcher::new(GestureFamilies::ALL);

    for kind in [
        GestureKind::PanStart,
        GestureKind::Pan,
        GestureKind::PanEnd,
        GestureKind::PinchStart,
        GestureKind::Pinch,
        GestureKind::PinchEnd,
        GestureKind::Tap,
        GestureKind::DoubleTap,
    ] {
        gestures.on(kind, |ev| {
            print!("{:>10}  target {}", ev.kind.name(), ev.raw.target);
            if let Some(delta) = ev.delta {
                print!("  delta ({:+.1}, {:+.1})", delta.x, delta.y);
            }
            if let Some(scale) = ev.scale {
                print!("  scale {scale:.3}");
            }
            println!();
        });
    }

    let trace = [
        // Drag pointer 1 across the list.
        Input::Down(1, 10.0, 50.0, LIST, 0),
        Input::Move(1, 18.0, 50.0, LIST, 16),
        Input::Move(1, 27.0, 51.0, LIST, 32),
        Input::Up(1, 27.0, 51.0, LIST, 320),
        // Pinch the canvas out with two pointers.
        Input::Down(1, 40.0, 40.0, CANVAS, 400),
        Input::Down(2, 60.0, 40.0, CANVAS, 400),
        Input::Move(1, 40.0, 40.0, CANVAS, 416),
        Input::Move(2, 60.0, 40.0, CANVAS, 416),
        Input::Move(1, 35.0, 40.0, CANVAS, 432),
        Input::Move(2, 65.0, 40.0, CANVAS, 432),
        Input::Up(2, 65.0, 40.0, CANVAS, 448),
        Input::Up(1, 35.0, 40.0, CANVAS, 700),
        // Double-tap the button.
        Input::Down(1, 50.0, 50.0, BUTTON, 1000),
        Input::Up(1, 50.0, 50.0, BUTTON, 1080),
        Input::Down(1, 50.0, 50.0, BUTTON, 1200),
        Input::Up(1, 50.0, 50.0, BUTTON, 1280),
    ];

    for input in trace {
        match input {
            Input::Down(id, x, y, target, t) => {
                gestures.pointer_down(&RawPointerEvent::new(id, Point::new(x, y), target, t));
            }
            Input::Move(id, x, y, target, t) => {
                gestures.pointer_move(&RawPointerEvent::new(id, Point::new(x, y), target, t));
            }
            Input::Up(id, x, y, target, t) => {
                gestures.pointer_up(&RawPointerEvent::new(id, Point::new(x, y), target, t));
            }
        }
    }
}
