// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// An input event consumed by [`PanZoomController`](crate::PanZoomController).
///
/// Positions are in the controller's local coordinate frame, i.e. relative to
/// the top-left of the viewport element the host attaches its listeners to.
/// Hosts translate their native pointer/mouse/wheel events into this shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed. Starts (or re-anchors) a drag session.
    PointerDown(Point),
    /// Pointer moved. Pans the view while a drag session is active.
    PointerMove(Point),
    /// Pointer released. Ends the drag session.
    PointerUp(Point),
    /// Pointer left the viewport. Ends the drag session the same way a
    /// release does; an in-flight drag is cleanly ended, not rolled back.
    PointerLeave(Point),
    /// Wheel scrolled over the viewport.
    Wheel {
        /// Cursor position, which anchors the zoom.
        pos: Point,
        /// Vertical wheel delta with standard semantics: positive values
        /// zoom out, negative values zoom in. Only the sign is consulted.
        delta_y: f64,
    },
}

/// A discrete pan direction for button-style controls.
///
/// The offset mapping follows the button controls this crate grew out of:
/// panning "up" shifts the content down (increasing Y offset), revealing the
/// content area above the current view, and likewise for the other arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    /// Reveal content above: offset Y increases.
    Up,
    /// Reveal content below: offset Y decreases.
    Down,
    /// Reveal content to the left: offset X increases.
    Left,
    /// Reveal content to the right: offset X decreases.
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_event_carries_anchor_and_delta() {
        let ev = InputEvent::Wheel {
            pos: Point::new(3.0, 4.0),
            delta_y: -53.0,
        };
        match ev {
            InputEvent::Wheel { pos, delta_y } => {
                assert_eq!(pos, Point::new(3.0, 4.0));
                assert!(delta_y < 0.0);
            }
            _ => panic!("expected a wheel event"),
        }
    }
}
