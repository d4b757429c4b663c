// Copyright 2025 the Stratus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::transform::{ScaleLimits, Transform};

/// Owned current view transform with validated writes.
///
/// `TransformState` is the single source of truth for a view's pan/zoom
/// state. Writes go through [`TransformState::set`], which clamps the scale
/// into the configured [`ScaleLimits`] and returns the committed value;
/// offsets pass through untouched. There are no error conditions.
///
/// The state is ephemeral view state: it starts at [`Transform::IDENTITY`]
/// and is expected to be mutated by exactly one writer (the interaction
/// controller) for its whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct TransformState {
    current: Transform,
    limits: ScaleLimits,
}

impl TransformState {
    /// Creates a state at the identity transform with the given limits.
    #[must_use]
    pub fn new(limits: ScaleLimits) -> Self {
        Self {
            current: Transform::IDENTITY,
            limits,
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn get(&self) -> Transform {
        self.current
    }

    /// Applies `next` after clamping its scale, returning the committed value.
    pub fn set(&mut self, next: Transform) -> Transform {
        self.current = next.with_scale(self.limits.clamp(next.scale));
        self.current
    }

    /// Returns the configured scale limits.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Installs new scale limits and re-clamps the current scale into them.
    pub fn set_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
        self.current = self.current.with_scale(limits.clamp(self.current.scale));
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(ScaleLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{ScaleLimits, Transform, TransformState};

    #[test]
    fn starts_at_identity() {
        let state = TransformState::default();
        assert_eq!(state.get(), Transform::IDENTITY);
    }

    #[test]
    fn set_clamps_scale_but_not_offset() {
        let mut state = TransformState::new(ScaleLimits::new(0.5, 3.0));
        let committed = state.set(Transform::new(10.0, Vec2::new(1e6, -1e6)));
        assert_eq!(committed.scale, 3.0);
        // Offsets are unconstrained.
        assert_eq!(committed.offset, Vec2::new(1e6, -1e6));
        assert_eq!(state.get(), committed);
    }

    #[test]
    fn set_below_minimum_clamps_up() {
        let mut state = TransformState::new(ScaleLimits::new(0.5, 3.0));
        let committed = state.set(Transform::new(0.01, Vec2::ZERO));
        assert_eq!(committed.scale, 0.5);
    }

    #[test]
    fn new_limits_reclamp_current_scale() {
        let mut state = TransformState::new(ScaleLimits::new(0.5, 5.0));
        state.set(Transform::new(4.0, Vec2::ZERO));

        state.set_limits(ScaleLimits::new(0.5, 3.0));
        assert_eq!(state.get().scale, 3.0);
        assert_eq!(state.limits(), ScaleLimits::new(0.5, 3.0));
    }
}
