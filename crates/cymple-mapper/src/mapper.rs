//! Per-tick mapping from the tracking store into the expression model

use cymple_core::{Category, Expression};
use cymple_state::TrackingStore;
use cymple_wire::TrackingFrame;
use tracing::info;

use crate::{ExpressionModel, Vec2};

/// Split a signed axis value into (negative, positive) weights.
///
/// Exactly one side is nonzero unless the value is zero.
#[inline]
pub fn split_axis(value: f32) -> (f32, f32) {
    if value > 0.0 {
        (0.0, value)
    } else {
        (-value, 0.0)
    }
}

/// Same split with zero landing on the positive side, so an exact 0.0
/// yields (0, 0). Used for tongue up/down.
#[inline]
pub fn split_axis_inclusive(value: f32) -> (f32, f32) {
    if value >= 0.0 {
        (0.0, value)
    } else {
        (-value, 0.0)
    }
}

/// Apply the latest stored frame to the model. One call per polling tick.
///
/// A category is applied only while its flag bit is set AND its activation
/// latch was already set on a previous tick: the tick that first observes a
/// category only latches and logs, it does not move the model. When a bit
/// is unset the category's outputs are left untouched, so stale weights
/// persist until the sender resumes that category.
pub fn apply(store: &TrackingStore, model: &mut ExpressionModel) {
    let frame = store.snapshot();

    if frame.flags.has_eye() {
        if store.try_activate(Category::Eye) {
            info!("{} activated", Category::Eye.label());
        } else {
            apply_eyes(&frame, model);
        }
    }

    if frame.flags.has_expression() {
        if store.try_activate(Category::Expression) {
            info!("{} activated", Category::Expression.label());
        } else {
            apply_cheeks(&frame, model);
            apply_lips(&frame, model);
            apply_mouth(&frame, model);
            apply_tongue(&frame, model);
        }
    }
}

fn apply_eyes(frame: &TrackingFrame, model: &mut ExpressionModel) {
    // Pitch is shared across both eyes
    model.eyes.left.gaze = Vec2::new(frame.eye_yaw_left, frame.eye_pitch);
    model.eyes.right.gaze = Vec2::new(frame.eye_yaw_right, frame.eye_pitch);

    model.eyes.left.openness = 1.0 - frame.eyelid_close_left;
    model.eyes.right.openness = 1.0 - frame.eyelid_close_right;

    model.eyes.min_dilation = 0.0;
    model.eyes.max_dilation = 10.0;
    model.eyes.left.pupil_diameter_mm = 5.0 + frame.eye_pupil_left * 5.0;
    model.eyes.right.pupil_diameter_mm = 5.0 + frame.eye_pupil_right * 5.0;

    model.set(Expression::EyeSquintLeft, frame.eye_squint_left);
    model.set(Expression::EyeSquintRight, frame.eye_squint_right);
}

fn apply_cheeks(frame: &TrackingFrame, model: &mut ExpressionModel) {
    model.set(Expression::CheekPuffLeft, frame.cheek_puff_left);
    model.set(Expression::CheekPuffRight, frame.cheek_puff_right);

    // One suck channel mirrored to both sides
    model.set(Expression::CheekSuckLeft, frame.cheek_suck);
    model.set(Expression::CheekSuckRight, frame.cheek_suck);
}

fn apply_lips(frame: &TrackingFrame, model: &mut ExpressionModel) {
    model.set(Expression::LipSuckUpperLeft, frame.lip_suck_upper);
    model.set(Expression::LipSuckUpperRight, frame.lip_suck_upper);
    model.set(Expression::LipSuckLowerLeft, frame.lip_suck_lower);
    model.set(Expression::LipSuckLowerRight, frame.lip_suck_lower);

    model.set(Expression::MouthUpperUpLeft, frame.lip_raise_left);
    model.set(Expression::MouthUpperUpRight, frame.lip_raise_right);
    model.set(Expression::MouthUpperDeepenLeft, frame.lip_depress_left);
    model.set(Expression::MouthUpperDeepenRight, frame.lip_depress_right);

    for shape in [
        Expression::LipFunnelUpperLeft,
        Expression::LipFunnelUpperRight,
        Expression::LipFunnelLowerLeft,
        Expression::LipFunnelLowerRight,
    ] {
        model.set(shape, frame.mouth_funnel);
    }
    for shape in [
        Expression::LipPuckerUpperLeft,
        Expression::LipPuckerUpperRight,
        Expression::LipPuckerLowerLeft,
        Expression::LipPuckerLowerRight,
    ] {
        model.set(shape, frame.mouth_pucker);
    }

    let (left, right) = split_axis(frame.lip_shift_up);
    model.set(Expression::MouthUpperLeft, left);
    model.set(Expression::MouthUpperRight, right);

    let (left, right) = split_axis(frame.lip_shift_down);
    model.set(Expression::MouthLowerLeft, left);
    model.set(Expression::MouthLowerRight, right);

    // Mouth roll lands in the lip-suck slots and overwrites the assignment
    // above whenever both channels arrive in the same tick. Later write
    // wins; the sender protocol relies on this ordering.
    model.set(Expression::LipSuckUpperLeft, frame.mouth_roll_up);
    model.set(Expression::LipSuckUpperRight, frame.mouth_roll_up);
    model.set(Expression::LipSuckLowerLeft, frame.mouth_roll_down);
    model.set(Expression::LipSuckLowerRight, frame.mouth_roll_down);

    model.set(Expression::MouthRaiserLower, frame.mouth_shrug_lower);
}

fn apply_mouth(frame: &TrackingFrame, model: &mut ExpressionModel) {
    model.set(Expression::JawOpen, frame.jaw_open);
    model.set(Expression::JawForward, frame.jaw_forward);

    let (left, right) = split_axis(frame.jaw_left_right);
    model.set(Expression::JawLeft, left);
    model.set(Expression::JawRight, right);

    // Both corner rows move together; this also supersedes the lip-shift
    // corner weights written during the lip pass.
    let (left, right) = split_axis(frame.mouth_left_right);
    model.set(Expression::MouthUpperLeft, left);
    model.set(Expression::MouthLowerLeft, left);
    model.set(Expression::MouthUpperRight, right);
    model.set(Expression::MouthLowerRight, right);

    model.set(Expression::MouthClosed, frame.mouth_close);

    // Smile feeds both the pull and the slant channel per side
    model.set(Expression::MouthCornerPullLeft, frame.mouth_smile_left);
    model.set(Expression::MouthCornerSlantLeft, frame.mouth_smile_left);
    model.set(Expression::MouthCornerPullRight, frame.mouth_smile_right);
    model.set(Expression::MouthCornerSlantRight, frame.mouth_smile_right);

    model.set(Expression::MouthFrownLeft, frame.mouth_sad_left);
    model.set(Expression::MouthFrownRight, frame.mouth_sad_right);
}

fn apply_tongue(frame: &TrackingFrame, model: &mut ExpressionModel) {
    model.set(Expression::TongueOut, frame.tongue_out);

    let (left, right) = split_axis(frame.tongue_left_right);
    model.set(Expression::TongueLeft, left);
    model.set(Expression::TongueRight, right);

    let (down, up) = split_axis_inclusive(frame.tongue_up_down);
    model.set(Expression::TongueUp, up);
    model.set(Expression::TongueDown, down);

    model.set(Expression::TongueRoll, frame.tongue_roll);
    model.set(Expression::TongueFlat, frame.tongue_wide);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cymple_wire::CategoryFlags;
    use proptest::prelude::*;

    fn frame_with(flags: u32) -> TrackingFrame {
        TrackingFrame {
            flags: CategoryFlags(flags),
            ..TrackingFrame::default()
        }
    }

    /// Store with both categories already past their activation tick
    fn activated_store(frame: TrackingFrame) -> TrackingStore {
        let store = TrackingStore::new();
        store.try_activate(Category::Eye);
        store.try_activate(Category::Expression);
        store.store_frame(frame);
        store
    }

    #[test]
    fn test_activation_tick_applies_nothing() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.jaw_open = 0.75;

        let store = TrackingStore::new();
        store.store_frame(frame);
        let mut model = ExpressionModel::unified();

        // First tick latches only
        apply(&store, &mut model);
        assert_eq!(model.weight(Expression::JawOpen), Some(0.0));
        assert!(store.is_active(Category::Expression));

        // Second tick moves the model
        apply(&store, &mut model);
        assert_eq!(model.weight(Expression::JawOpen), Some(0.75));
    }

    #[test]
    fn test_categories_activate_independently() {
        let mut frame = frame_with(CategoryFlags::EYE);
        frame.eye_squint_left = 0.5;
        frame.jaw_open = 0.9;

        let store = TrackingStore::new();
        store.store_frame(frame);
        let mut model = ExpressionModel::unified();

        apply(&store, &mut model);
        apply(&store, &mut model);

        // Eye data flowed; expression never latched, let alone applied
        assert_eq!(model.weight(Expression::EyeSquintLeft), Some(0.5));
        assert_eq!(model.weight(Expression::JawOpen), Some(0.0));
        assert!(!store.is_active(Category::Expression));
    }

    #[test]
    fn test_unset_bit_leaves_stale_values() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.jaw_open = 0.6;
        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);
        assert_eq!(model.weight(Expression::JawOpen), Some(0.6));

        // Sender stops sending the expression category; output persists
        store.store_frame(frame_with(CategoryFlags::EYE));
        apply(&store, &mut model);
        assert_eq!(model.weight(Expression::JawOpen), Some(0.6));
    }

    #[test]
    fn test_gaze_shares_pitch() {
        let mut frame = frame_with(CategoryFlags::EYE);
        frame.eye_pitch = 0.1;
        frame.eye_yaw_left = 0.2;
        frame.eye_yaw_right = -0.2;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.eyes.left.gaze, Vec2::new(0.2, 0.1));
        assert_eq!(model.eyes.right.gaze, Vec2::new(-0.2, 0.1));
    }

    #[test]
    fn test_openness_inverts_closure() {
        let mut frame = frame_with(CategoryFlags::EYE);
        frame.eyelid_close_left = 0.3;
        frame.eyelid_close_right = 1.0;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert!((model.eyes.left.openness - 0.7).abs() < 1e-6);
        assert_eq!(model.eyes.right.openness, 0.0);
    }

    #[test]
    fn test_pupil_diameter_mapping() {
        let mut frame = frame_with(CategoryFlags::EYE);
        frame.eye_pupil_left = 0.3;
        frame.eye_pupil_right = -0.5;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert!((model.eyes.left.pupil_diameter_mm - 6.5).abs() < 1e-6);
        assert!((model.eyes.right.pupil_diameter_mm - 2.5).abs() < 1e-6);
        assert_eq!(model.eyes.min_dilation, 0.0);
        assert_eq!(model.eyes.max_dilation, 10.0);
    }

    #[test]
    fn test_mouth_left_right_moves_both_rows() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.mouth_left_right = -0.4;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::MouthUpperLeft), Some(0.4));
        assert_eq!(model.weight(Expression::MouthLowerLeft), Some(0.4));
        assert_eq!(model.weight(Expression::MouthUpperRight), Some(0.0));
        assert_eq!(model.weight(Expression::MouthLowerRight), Some(0.0));
    }

    #[test]
    fn test_mouth_left_right_supersedes_lip_shift() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.lip_shift_up = 0.8;
        frame.mouth_left_right = -0.4;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        // The mouth pass runs after the lip pass and owns the corner slots
        assert_eq!(model.weight(Expression::MouthUpperLeft), Some(0.4));
        assert_eq!(model.weight(Expression::MouthUpperRight), Some(0.0));
    }

    #[test]
    fn test_mouth_roll_overwrites_lip_suck() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.lip_suck_upper = 0.5;
        frame.lip_suck_lower = 0.6;
        frame.mouth_roll_up = 0.2;
        frame.mouth_roll_down = 0.1;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::LipSuckUpperLeft), Some(0.2));
        assert_eq!(model.weight(Expression::LipSuckUpperRight), Some(0.2));
        assert_eq!(model.weight(Expression::LipSuckLowerLeft), Some(0.1));
        assert_eq!(model.weight(Expression::LipSuckLowerRight), Some(0.1));
    }

    #[test]
    fn test_smile_feeds_pull_and_slant() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.mouth_smile_left = 0.4;
        frame.mouth_smile_right = 0.7;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::MouthCornerPullLeft), Some(0.4));
        assert_eq!(model.weight(Expression::MouthCornerSlantLeft), Some(0.4));
        assert_eq!(model.weight(Expression::MouthCornerPullRight), Some(0.7));
        assert_eq!(model.weight(Expression::MouthCornerSlantRight), Some(0.7));
    }

    #[test]
    fn test_mirrored_passthrough() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.cheek_suck = 0.3;
        frame.mouth_funnel = 0.8;
        frame.mouth_pucker = 0.9;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::CheekSuckLeft), Some(0.3));
        assert_eq!(model.weight(Expression::CheekSuckRight), Some(0.3));
        for shape in [
            Expression::LipFunnelUpperLeft,
            Expression::LipFunnelUpperRight,
            Expression::LipFunnelLowerLeft,
            Expression::LipFunnelLowerRight,
        ] {
            assert_eq!(model.weight(shape), Some(0.8));
        }
        for shape in [
            Expression::LipPuckerUpperLeft,
            Expression::LipPuckerUpperRight,
            Expression::LipPuckerLowerLeft,
            Expression::LipPuckerLowerRight,
        ] {
            assert_eq!(model.weight(shape), Some(0.9));
        }
    }

    #[test]
    fn test_tongue_up_down_zero_boundary() {
        assert_eq!(split_axis_inclusive(0.0), (0.0, 0.0));

        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.tongue_up_down = 0.0;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::TongueUp), Some(0.0));
        assert_eq!(model.weight(Expression::TongueDown), Some(0.0));
    }

    #[test]
    fn test_tongue_axes() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION);
        frame.tongue_left_right = -0.6;
        frame.tongue_up_down = 0.4;
        frame.tongue_wide = 0.2;

        let store = activated_store(frame);
        let mut model = ExpressionModel::unified();
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::TongueLeft), Some(0.6));
        assert_eq!(model.weight(Expression::TongueRight), Some(0.0));
        assert_eq!(model.weight(Expression::TongueUp), Some(0.4));
        assert_eq!(model.weight(Expression::TongueDown), Some(0.0));
        assert_eq!(model.weight(Expression::TongueFlat), Some(0.2));
    }

    #[test]
    fn test_subset_model_tolerated() {
        let mut frame = frame_with(CategoryFlags::EXPRESSION | CategoryFlags::EYE);
        frame.jaw_open = 0.5;
        frame.tongue_roll = 0.8;

        let store = activated_store(frame);
        let mut model = ExpressionModel::with_shapes([Expression::JawOpen]);
        apply(&store, &mut model);

        assert_eq!(model.weight(Expression::JawOpen), Some(0.5));
        assert_eq!(model.weight(Expression::TongueRoll), None);
    }

    proptest! {
        #[test]
        fn prop_split_axis_weights(v in -1.0f32..=1.0) {
            for (neg, pos) in [split_axis(v), split_axis_inclusive(v)] {
                prop_assert!(neg >= 0.0);
                prop_assert!(pos >= 0.0);
                if v != 0.0 {
                    // Exactly one side carries the magnitude
                    prop_assert!((neg == 0.0) != (pos == 0.0));
                    prop_assert_eq!(neg + pos, v.abs());
                } else {
                    prop_assert_eq!(neg, 0.0);
                    prop_assert_eq!(pos, 0.0);
                }
            }
        }
    }
}
