//! Host-facing expression model

use std::collections::HashMap;

use cymple_core::Expression;

/// 2D gaze direction: x = yaw, y = pitch
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

/// Per-eye output state
#[derive(Clone, Copy, Debug, Default)]
pub struct EyeState {
    /// Gaze direction (yaw, pitch)
    pub gaze: Vec2,
    /// 0.0 = closed, 1.0 = open
    pub openness: f32,
    /// Pupil diameter in millimeters
    pub pupil_diameter_mm: f32,
}

/// Both eyes plus the dilation range the host normalizes against
#[derive(Clone, Copy, Debug)]
pub struct EyePair {
    pub left: EyeState,
    pub right: EyeState,
    pub min_dilation: f32,
    pub max_dilation: f32,
}

impl Default for EyePair {
    fn default() -> Self {
        EyePair {
            left: EyeState::default(),
            right: EyeState::default(),
            min_dilation: 0.0,
            max_dilation: 10.0,
        }
    }
}

/// The output model the mapper writes into each tick.
///
/// The weight map is keyed by expression identifier; a host model may
/// carry a subset (or a superset) of the identifiers the mapper knows.
/// Writes land only on keys that are present - presence is checked, never
/// assumed.
#[derive(Clone, Debug)]
pub struct ExpressionModel {
    pub eyes: EyePair,
    shapes: HashMap<Expression, f32>,
}

impl ExpressionModel {
    /// Model carrying every identifier the mapper can set
    pub fn unified() -> Self {
        Self::with_shapes(Expression::ALL)
    }

    /// Model carrying only the given identifiers
    pub fn with_shapes(shapes: impl IntoIterator<Item = Expression>) -> Self {
        ExpressionModel {
            eyes: EyePair::default(),
            shapes: shapes.into_iter().map(|s| (s, 0.0)).collect(),
        }
    }

    /// Whether the model exposes this identifier
    #[inline]
    pub fn supports(&self, shape: Expression) -> bool {
        self.shapes.contains_key(&shape)
    }

    /// Write a weight if the identifier is present; otherwise a no-op
    #[inline]
    pub fn set(&mut self, shape: Expression, weight: f32) {
        if let Some(slot) = self.shapes.get_mut(&shape) {
            *slot = weight;
        }
    }

    /// Read a weight, if the identifier is present
    #[inline]
    pub fn weight(&self, shape: Expression) -> Option<f32> {
        self.shapes.get(&shape).copied()
    }

    /// Iterate over the carried identifiers and weights
    pub fn iter(&self) -> impl Iterator<Item = (&Expression, &f32)> {
        self.shapes.iter()
    }
}

impl Default for ExpressionModel {
    fn default() -> Self {
        ExpressionModel::unified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_carries_all() {
        let model = ExpressionModel::unified();
        for shape in Expression::ALL {
            assert!(model.supports(shape));
            assert_eq!(model.weight(shape), Some(0.0));
        }
    }

    #[test]
    fn test_subset_model_ignores_unknown_writes() {
        let mut model = ExpressionModel::with_shapes([Expression::JawOpen]);
        model.set(Expression::JawOpen, 0.7);
        model.set(Expression::TongueRoll, 0.9);

        assert_eq!(model.weight(Expression::JawOpen), Some(0.7));
        assert_eq!(model.weight(Expression::TongueRoll), None);
        assert!(!model.supports(Expression::TongueRoll));
    }

    #[test]
    fn test_default_dilation_bounds() {
        let model = ExpressionModel::unified();
        assert_eq!(model.eyes.min_dilation, 0.0);
        assert_eq!(model.eyes.max_dilation, 10.0);
    }
}
