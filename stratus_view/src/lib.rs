// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=stratus_view --heading-base-level=0

//! Stratus View: headless pan/zoom view transform primitives.
//!
//! This crate provides the small numeric core underneath an interactive
//! pan-and-zoom surface (for example a map or radar image). It focuses on:
//! - The view transform itself ([`Transform`]): a uniform scale plus a 2D
//!   offset, mapping content space into view/device space.
//! - Scale clamping ([`ScaleLimits`]) and an owned, validated current value
//!   ([`TransformState`]).
//! - Coordinate conversion between content and view space.
//! - Anchored ("zoom-to-cursor") zoom: computing a new transform so that the
//!   content point under a chosen view position stays put ([`anchored_zoom`]).
//!
//! It does **not** own any scene graph, rendering backend, or input event
//! loop. Callers are expected to:
//! - Wire pointer/wheel events into these primitives at a higher layer (see
//!   the `stratus_controller` crate).
//! - Apply [`Transform::affine`] (or an equivalent "translate then scale"
//!   mapping) to whatever content layer they render.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use stratus_view::{ScaleLimits, Transform, anchored_zoom};
//!
//! // Identity view: content space and view space coincide.
//! let t = Transform::IDENTITY;
//!
//! // Zoom in 10% anchored at the view point (100, 50).
//! let zoomed = anchored_zoom(t, Point::new(100.0, 50.0), 1.1, ScaleLimits::default());
//! assert!((zoomed.scale - 1.1).abs() < 1e-12);
//!
//! // The content point that was under (100, 50) is still under (100, 50).
//! let before = t.view_to_content_point(Point::new(100.0, 50.0));
//! let after = zoomed.view_to_content_point(Point::new(100.0, 50.0));
//! assert!((before.x - after.x).abs() < 1e-9);
//! assert!((before.y - after.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform convention is **translate by offset, then scale** in CSS
//!   order: a content point `c` maps to `c * scale + offset` in view space.
//!   Renderers must apply the same order or the anchored zoom math will not
//!   line up.
//! - Scale is uniform; offsets are unconstrained (no clamping against content
//!   extents). Out-of-range scales are clamped rather than rejected; nothing
//!   in this crate returns an error.
//! - Rotation is intentionally left out and could be added later as a
//!   backwards-compatible extension.
//!
//! This crate is `no_std`.

#![no_std]

mod state;
mod transform;
mod zoom;

pub use state::TransformState;
pub use transform::{ScaleLimits, Transform};
pub use zoom::{DEFAULT_ZOOM_STEP, anchored_zoom, wheel_zoom_factor};
