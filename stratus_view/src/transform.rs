// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform pan+zoom mapping from content space into view/device space.
///
/// The convention is "translate by [`offset`](Self::offset), then scale" in
/// CSS transform order: a content point `c` maps to `c * scale + offset` in
/// view coordinates. [`Transform::affine`] returns the same mapping as a
/// kurbo [`Affine`] for renderers that consume matrices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor applied to content.
    pub scale: f64,
    /// Translation applied to content, in view/device pixels.
    pub offset: Vec2,
}

impl Transform {
    /// The identity transform: scale `1.0`, zero offset.
    ///
    /// This is the value a freshly mounted view starts from.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Creates a transform from a scale factor and an offset.
    #[must_use]
    pub fn new(scale: f64, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Returns this transform with a different scale, keeping the offset.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Returns this transform with a different offset, keeping the scale.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    /// Returns the content → view mapping as an affine matrix.
    ///
    /// Composed as `translate(offset) * scale(scale)`, so content is scaled
    /// first and then translated into place.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Converts a content-space point into view/device coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale + self.offset.x,
            pt.y * self.scale + self.offset.y,
        )
    }

    /// Converts a view/device-space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.scale,
            (pt.y - self.offset.y) / self.scale,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Configured minimum/maximum allowed scale.
///
/// Limits are normalized on construction so that `min <= max`. The current
/// scale of a view is never allowed outside this range; requests past a bound
/// are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates scale limits, swapping the bounds if given out of order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// The minimum allowed scale.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The maximum allowed scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a scale factor into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    /// The default `0.5 ..= 5.0` range used by interactive map views.
    fn default() -> Self {
        Self { min: 0.5, max: 5.0 }
    }
}
