// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored ("zoom-to-cursor") zoom solving.
//!
//! Given the current [`Transform`], a zoom factor, and an anchor point in view
//! coordinates, [`anchored_zoom`] computes a new transform whose scale is the
//! clamped product and whose offset keeps the content point under the anchor
//! visually stationary. [`wheel_zoom_factor`] turns the vertical sign of a
//! wheel event into the matching multiplicative factor.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use stratus_view::{DEFAULT_ZOOM_STEP, ScaleLimits, Transform, anchored_zoom, wheel_zoom_factor};
//!
//! // One wheel tick towards the screen (negative delta) zooms in 10%.
//! let factor = wheel_zoom_factor(DEFAULT_ZOOM_STEP, -120.0);
//! let t = anchored_zoom(
//!     Transform::IDENTITY,
//!     Point::new(100.0, 50.0),
//!     factor,
//!     ScaleLimits::default(),
//! );
//! assert!((t.scale - 1.1).abs() < 1e-12);
//! assert!((t.offset.x - -10.0).abs() < 1e-9);
//! assert!((t.offset.y - -5.0).abs() < 1e-9);
//! ```

use kurbo::Point;

use crate::transform::{ScaleLimits, Transform};

/// Default multiplicative zoom step per wheel tick (±10%).
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Converts a wheel event's vertical delta into a zoom factor.
///
/// Standard wheel semantics: a negative delta (scrolling towards the screen)
/// zooms in by `1 + step`, a positive delta zooms out by `1 / (1 + step)`.
/// A zero delta yields `1.0`, which makes the zoom a no-op. Only the sign of
/// `delta_y` is consulted; host-specific delta magnitudes do not change the
/// step size.
#[must_use]
pub fn wheel_zoom_factor(step: f64, delta_y: f64) -> f64 {
    if delta_y < 0.0 {
        1.0 + step
    } else if delta_y > 0.0 {
        1.0 / (1.0 + step)
    } else {
        1.0
    }
}

/// Zooms `current` by `factor` around an anchor point in view coordinates.
///
/// The new scale is `current.scale * factor` clamped into `limits`. The new
/// offset is solved so that the content point under `anchor` before the zoom
/// maps back to `anchor` after it: with `ratio = new_scale / old_scale`,
///
/// ```text
/// new_offset = anchor - (anchor - old_offset) * ratio
/// ```
///
/// which is exact for the "translate then scale" convention used by
/// [`Transform`].
///
/// If the clamped scale equals the current scale (already at a bound, or
/// factor `1.0`), `current` is returned completely unchanged; no zero-delta
/// offset correction is applied, so repeated wheel events at a bound cannot
/// accumulate floating-point drift. Non-positive or non-finite factors are
/// ignored the same way.
#[must_use]
pub fn anchored_zoom(
    current: Transform,
    anchor: Point,
    factor: f64,
    limits: ScaleLimits,
) -> Transform {
    if !factor.is_finite() || factor <= 0.0 {
        return current;
    }
    let old_scale = current.scale;
    let new_scale = limits.clamp(old_scale * factor);
    if (new_scale - old_scale).abs() < f64::EPSILON {
        return current;
    }

    let ratio = new_scale / old_scale;
    let anchor = anchor.to_vec2();
    let offset = anchor - (anchor - current.offset) * ratio;
    Transform::new(new_scale, offset)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{ScaleLimits, Transform, anchored_zoom, wheel_zoom_factor};

    const EPS: f64 = 1e-6;

    #[test]
    fn zoom_in_from_identity_matches_closed_form() {
        let t = anchored_zoom(
            Transform::IDENTITY,
            Point::new(100.0, 50.0),
            1.1,
            ScaleLimits::default(),
        );
        assert!((t.scale - 1.1).abs() < EPS);
        assert!((t.offset.x - -10.0).abs() < EPS);
        assert!((t.offset.y - -5.0).abs() < EPS);
    }

    #[test]
    fn anchor_point_stays_fixed_in_content_space() {
        let limits = ScaleLimits::default();
        let anchor = Point::new(320.0, 180.0);
        let before = Transform::new(1.4, Vec2::new(-55.0, 23.0));

        let after = anchored_zoom(before, anchor, 1.1, limits);
        let content_before = before.view_to_content_point(anchor);
        let content_after = after.view_to_content_point(anchor);

        assert!((content_before.x - content_after.x).abs() < EPS);
        assert!((content_before.y - content_after.y).abs() < EPS);
    }

    #[test]
    fn anchor_holds_across_a_zoom_sequence() {
        let limits = ScaleLimits::default();
        let anchor = Point::new(64.0, 400.0);
        let mut t = Transform::new(0.9, Vec2::new(12.0, -80.0));
        let content = t.view_to_content_point(anchor);

        // In, in, out, in: anchor must hold as long as no bound is hit.
        for delta in [-1.0, -1.0, 1.0, -1.0] {
            t = anchored_zoom(t, anchor, wheel_zoom_factor(0.1, delta), limits);
            let now = t.view_to_content_point(anchor);
            assert!((now.x - content.x).abs() < EPS);
            assert!((now.y - content.y).abs() < EPS);
        }
    }

    #[test]
    fn clamped_zoom_at_bound_leaves_transform_untouched() {
        let limits = ScaleLimits::new(0.5, 3.0);
        let at_max = Transform::new(3.0, Vec2::new(-40.0, 17.0));

        let t = anchored_zoom(at_max, Point::new(10.0, 10.0), 1.1, limits);
        // Scale *and* offsets are unchanged; no zero-delta correction.
        assert_eq!(t, at_max);

        let at_min = Transform::new(0.5, Vec2::new(4.0, 4.0));
        let t = anchored_zoom(at_min, Point::new(10.0, 10.0), 1.0 / 1.1, limits);
        assert_eq!(t, at_min);
    }

    #[test]
    fn zoom_past_bound_is_partially_applied_with_anchor_held() {
        let limits = ScaleLimits::new(0.5, 3.0);
        let anchor = Point::new(200.0, 100.0);
        let before = Transform::new(2.9, Vec2::new(-10.0, -10.0));

        // 2.9 * 1.1 = 3.19 clamps to 3.0; the anchor must still hold for the
        // partial step that was applied.
        let after = anchored_zoom(before, anchor, 1.1, limits);
        assert!((after.scale - 3.0).abs() < EPS);

        let content_before = before.view_to_content_point(anchor);
        let content_after = after.view_to_content_point(anchor);
        assert!((content_before.x - content_after.x).abs() < EPS);
        assert!((content_before.y - content_after.y).abs() < EPS);
    }

    #[test]
    fn degenerate_factors_are_ignored() {
        let t = Transform::new(1.5, Vec2::new(5.0, 5.0));
        let limits = ScaleLimits::default();
        assert_eq!(anchored_zoom(t, Point::ZERO, 0.0, limits), t);
        assert_eq!(anchored_zoom(t, Point::ZERO, -2.0, limits), t);
        assert_eq!(anchored_zoom(t, Point::ZERO, f64::NAN, limits), t);
        assert_eq!(anchored_zoom(t, Point::ZERO, 1.0, limits), t);
    }

    #[test]
    fn wheel_factor_follows_delta_sign() {
        assert_eq!(wheel_zoom_factor(0.1, -3.0), 1.1);
        assert!((wheel_zoom_factor(0.1, 240.0) - 1.0 / 1.1).abs() < 1e-12);
        assert_eq!(wheel_zoom_factor(0.1, 0.0), 1.0);
    }
}
