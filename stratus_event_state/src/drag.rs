// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: compute pan offsets from pointer movement.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::begin`], passing the pointer
//!    position and the view offset in effect at drag start.
//! 2) On each move event, call [`DragSession::update`] to get the new view
//!    offset for that pointer position.
//! 3) End the session with [`DragSession::end`] on pointer-up or
//!    pointer-leave.
//!
//! The offset is recomputed from the original anchor on every update rather
//! than accumulated delta by delta, so a long drag with many intermediate
//! move events cannot pick up floating-point drift: the result depends only
//! on the anchor and the latest pointer position.

use kurbo::{Point, Vec2};

/// Tracks an in-flight pointer-drag pan gesture.
///
/// A session is a snapshot taken at drag start: the anchor pointer position
/// and the view offset at that moment. While active, each pointer position
/// maps to `anchor_offset + (pointer - anchor_pointer)`. While inactive the
/// anchor is absent and [`DragSession::update`] returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    anchor: Option<Anchor>,
}

#[derive(Clone, Copy, Debug)]
struct Anchor {
    pointer: Point,
    offset: Vec2,
}

impl DragSession {
    /// Starts a session, recording the pointer position and current offset.
    ///
    /// Calling this while a session is already active starts a fresh session
    /// and discards the stale anchor. This matches pointer-capture semantics:
    /// a new pointer-down always re-anchors.
    pub fn begin(&mut self, pointer: Point, offset: Vec2) {
        self.anchor = Some(Anchor { pointer, offset });
    }

    /// Returns the view offset for the given pointer position.
    ///
    /// `None` while no session is active; updating an inactive session is a
    /// graceful no-op, never an error.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        self.anchor
            .map(|anchor| anchor.offset + (pointer - anchor.pointer))
    }

    /// Ends the session. Idempotent: ending an inactive session is a no-op.
    pub fn end(&mut self) {
        self.anchor = None;
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }
}
