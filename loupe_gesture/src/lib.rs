// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: turns raw pointer and touch samples into pan and zoom
//! operations on a [`loupe_view::ViewTransform`].
//!
//! This crate provides the interaction half of Loupe:
//!
//! - [`GestureController`]: a small state machine (idle / single-pointer pan /
//!   two-pointer pinch) that normalizes mouse and multi-touch input into
//!   [`GestureAction`] values: screen-space pan deltas and anchored scale
//!   factors. Pinch zooming is filtered through a configurable anti-jitter
//!   threshold so near-stationary fingers do not tremble the view.
//! - [`ZoomSession`]: the owning lifecycle object for one presented image. It
//!   holds the view transform and the controller, adopts a target on
//!   [`start`](ZoomSession::start), computes the initial fit-to-viewport
//!   placement once content dimensions are known, routes input while active,
//!   and detaches synchronously on [`stop`](ZoomSession::stop).
//!
//! The crate does not attach event listeners or read the DOM. Hosts feed it
//! plain screen-coordinate samples from their own event wiring: mouse handlers
//! call the `pointer_*` methods, touch handlers pass the full set of
//! currently-down points, and wheel handlers pass the cursor position plus the
//! scroll delta's y component.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::{GestureAction, GestureController};
//!
//! let mut gestures = GestureController::default();
//!
//! // A mouse drag: button down, then a move.
//! gestures.pointer_down(Point::new(10.0, 10.0));
//! let action = gestures.pointer_move(Point::new(15.0, 12.0));
//! assert_eq!(action, Some(GestureAction::Pan(Vec2::new(5.0, 2.0))));
//!
//! // Wheel zoom is anchored at the cursor.
//! let action = gestures.wheel(Point::new(40.0, 40.0), -120.0);
//! assert!(matches!(action, Some(GestureAction::ScaleAt { .. })));
//! ```
//!
//! ## Coordinate space
//!
//! All positions are viewport-local logical coordinates, the same space
//! `loupe_view` uses. Delivering touch midpoints in one space and mouse
//! positions in another breaks anchor invariance, so hosts translate
//! everything before it reaches this crate.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod sample;
mod session;

pub use config::GestureConfig;
pub use controller::{GestureAction, GestureController, Phase};
pub use session::ZoomSession;
