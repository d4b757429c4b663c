// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratus_event_state --heading-base-level=0

//! Stratus Event State: stateful tracking for multi-event input gestures.
//!
//! Some input interactions need state carried across several host events. This
//! crate provides small, focused state machines for those patterns; currently:
//!
//! - [`drag`]: track a pointer-drag pan gesture and convert it into view
//!   offsets.
//!
//! Each manager is:
//!
//! - **Minimal and focused**: one interaction pattern per module.
//! - **Stateful but simple**: just enough state to compute the next value.
//! - **Host-agnostic**: it consumes plain pointer positions: no event loop,
//!   UI framework, or scene graph is assumed.
//!
//! ## Drag tracking
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use stratus_event_state::drag::DragSession;
//!
//! let mut drag = DragSession::default();
//!
//! // Pointer down at (200, 200) while the view offset is (0, 0).
//! drag.begin(Point::new(200.0, 200.0), Vec2::ZERO);
//! assert!(drag.is_active());
//!
//! // Pointer moves to (250, 180): the view offset becomes (50, -20).
//! let offset = drag.update(Point::new(250.0, 180.0)).unwrap();
//! assert_eq!(offset, Vec2::new(50.0, -20.0));
//!
//! // Pointer up ends the session; further updates are no-ops.
//! drag.end();
//! assert!(drag.update(Point::new(0.0, 0.0)).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
