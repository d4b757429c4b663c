// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratus_controller --heading-base-level=0

//! Stratus Controller: the interaction layer over headless pan/zoom views.
//!
//! This crate wires raw pointer and wheel events into the `stratus_view`
//! transform primitives:
//!
//! - [`InputEvent`] models the events the controller consumes: pointer
//!   down/move/up/leave and wheel, all carrying positions in the view's local
//!   coordinate frame.
//! - [`PanZoomController`] is the façade state machine (Idle / Dragging). It
//!   owns the current [`Transform`], routes pointer drags through a
//!   `stratus_event_state` drag session, resolves wheel events with the
//!   anchored zoom solver, and invokes an observer closure after every
//!   committed transform change.
//!
//! Dispatch is synchronous and single-writer: the host delivers one event at
//! a time and each is handled to completion, so there is no locking and no
//! event reordering.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use stratus_controller::{InputEvent, PanZoomController};
//!
//! let mut controller = PanZoomController::new();
//! let mut last = controller.transform();
//!
//! // Drag the surface 50 px right and 20 px up.
//! controller.handle(InputEvent::PointerDown(Point::new(200.0, 200.0)), |t| last = t);
//! controller.handle(InputEvent::PointerMove(Point::new(250.0, 180.0)), |t| last = t);
//! controller.handle(InputEvent::PointerUp(Point::new(250.0, 180.0)), |t| last = t);
//!
//! assert_eq!(last.offset.x, 50.0);
//! assert_eq!(last.offset.y, -20.0);
//!
//! // Wheel towards the screen zooms in 10%, anchored under the cursor.
//! controller.handle(
//!     InputEvent::Wheel { pos: Point::new(100.0, 50.0), delta_y: -120.0 },
//!     |t| last = t,
//! );
//! assert!((last.scale - 1.1).abs() < 1e-12);
//! ```
//!
//! The controller does not own the content it transforms. Rendering hosts
//! keep their own handle on the content layer and apply the committed
//! [`Transform`] (translate by offset, then scale) whenever the observer
//! fires.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod controller;
mod events;

pub use controller::{ControllerDebugInfo, PanZoomController};
pub use events::{InputEvent, PanDirection};

pub use stratus_view::{ScaleLimits, Transform};
