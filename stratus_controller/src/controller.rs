// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use stratus_event_state::drag::DragSession;
use stratus_view::{
    DEFAULT_ZOOM_STEP, ScaleLimits, Transform, TransformState, anchored_zoom, wheel_zoom_factor,
};

use crate::events::{InputEvent, PanDirection};

/// Default pan distance in view pixels for button-style pan commands.
const DEFAULT_PAN_STEP: f64 = 50.0;

/// Pan/zoom interaction controller: the façade over the view transform.
///
/// The controller is a two-state machine, Idle and Dragging, where
/// "dragging" is the activity of the owned drag session:
///
/// - Pointer-down starts (or re-anchors) a drag session.
/// - Pointer-move while dragging pans the view; while idle it does nothing.
/// - Pointer-up and pointer-leave end the drag session.
/// - Wheel events zoom around the cursor in either state, without
///   interrupting an active drag.
///
/// Every committed transform change is reported to the observer closure
/// passed to the dispatching call, after the write. The observer's return
/// value is not consulted.
///
/// Wheel zoom during an active drag keeps the drag anchor, which still
/// refers to the pre-zoom offset; the next pointer-move therefore snaps the
/// offset back onto the drag line. This mirrors the interaction behavior of
/// the map views this controller was extracted from.
#[derive(Clone, Copy, Debug)]
pub struct PanZoomController {
    state: TransformState,
    drag: DragSession,
    zoom_step: f64,
    pan_step: f64,
}

impl PanZoomController {
    /// Creates a controller at the identity transform with default
    /// configuration: scale limits `0.5 ..= 5.0`, zoom step `0.1` (±10% per
    /// wheel tick), pan step `50.0` pixels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(ScaleLimits::default())
    }

    /// Creates a controller with the given scale limits.
    #[must_use]
    pub fn with_limits(limits: ScaleLimits) -> Self {
        Self {
            state: TransformState::new(limits),
            drag: DragSession::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_step: DEFAULT_PAN_STEP,
        }
    }

    /// Returns the current view transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.get()
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.state.limits()
    }

    /// Installs new scale limits, re-clamping the current scale into them.
    ///
    /// There is no stored observer to notify, so hosts that reconfigure
    /// limits mid-flight should read [`PanZoomController::transform`]
    /// afterwards if they render outside the event path.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.state.set_limits(limits);
    }

    /// Returns the multiplicative zoom step per wheel tick.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Sets the multiplicative zoom step. Non-positive or non-finite steps
    /// are ignored.
    pub fn set_zoom_step(&mut self, step: f64) {
        if step.is_finite() && step > 0.0 {
            self.zoom_step = step;
        }
    }

    /// Returns the pan distance used by button-style pan commands.
    #[must_use]
    pub fn pan_step(&self) -> f64 {
        self.pan_step
    }

    /// Sets the pan distance for button-style pan commands. Non-finite steps
    /// are ignored.
    pub fn set_pan_step(&mut self, step: f64) {
        if step.is_finite() {
            self.pan_step = step;
        }
    }

    /// Dispatches one input event, invoking `on_interaction` after every
    /// transform change it commits.
    ///
    /// Dispatch is synchronous; events must be fed in the order the host
    /// delivers them. Events that do not change the transform (pointer-down,
    /// pointer-up/leave, moves while idle) commit nothing and do not notify.
    pub fn handle(&mut self, event: InputEvent, mut on_interaction: impl FnMut(Transform)) {
        match event {
            InputEvent::PointerDown(pos) => {
                // A down while already dragging re-anchors; see DragSession.
                self.drag.begin(pos, self.state.get().offset);
            }
            InputEvent::PointerMove(pos) => {
                if let Some(offset) = self.drag.update(pos) {
                    let committed = self.state.set(self.state.get().with_offset(offset));
                    on_interaction(committed);
                }
            }
            InputEvent::PointerUp(_) | InputEvent::PointerLeave(_) => {
                self.drag.end();
            }
            InputEvent::Wheel { pos, delta_y } => {
                let factor = wheel_zoom_factor(self.zoom_step, delta_y);
                self.zoom_by(pos, factor, &mut on_interaction);
            }
        }
    }

    /// Zooms in one step, anchored at the given view point.
    pub fn zoom_in(&mut self, anchor: Point, mut on_interaction: impl FnMut(Transform)) {
        self.zoom_by(anchor, 1.0 + self.zoom_step, &mut on_interaction);
    }

    /// Zooms out one step, anchored at the given view point.
    pub fn zoom_out(&mut self, anchor: Point, mut on_interaction: impl FnMut(Transform)) {
        self.zoom_by(anchor, 1.0 / (1.0 + self.zoom_step), &mut on_interaction);
    }

    /// Pans one step towards the given direction (button-style control).
    pub fn pan_towards(&mut self, direction: PanDirection, on_interaction: impl FnMut(Transform)) {
        let step = self.pan_step;
        let delta = match direction {
            PanDirection::Up => Vec2::new(0.0, step),
            PanDirection::Down => Vec2::new(0.0, -step),
            PanDirection::Left => Vec2::new(step, 0.0),
            PanDirection::Right => Vec2::new(-step, 0.0),
        };
        self.pan_by(delta, on_interaction);
    }

    /// Pans by an arbitrary view-space delta.
    pub fn pan_by(&mut self, delta: Vec2, mut on_interaction: impl FnMut(Transform)) {
        let current = self.state.get();
        let committed = self.state.set(current.with_offset(current.offset + delta));
        on_interaction(committed);
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            transform: self.state.get(),
            dragging: self.drag.is_active(),
            scale_limits: self.state.limits(),
            zoom_step: self.zoom_step,
            pan_step: self.pan_step,
        }
    }

    fn zoom_by(&mut self, anchor: Point, factor: f64, on_interaction: &mut impl FnMut(Transform)) {
        let next = anchored_zoom(self.state.get(), anchor, factor, self.state.limits());
        let committed = self.state.set(next);
        on_interaction(committed);
    }
}

impl Default for PanZoomController {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`PanZoomController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Current view transform.
    pub transform: Transform,
    /// Whether a pointer drag is in progress.
    pub dragging: bool,
    /// Configured scale limits.
    pub scale_limits: ScaleLimits,
    /// Multiplicative zoom step per wheel tick.
    pub zoom_step: f64,
    /// Pan distance for button-style pan commands.
    pub pan_step: f64,
}
