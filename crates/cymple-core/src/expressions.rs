//! Output expression identifiers
//!
//! The host-facing weight vector is keyed by these identifiers. The set
//! mirrors the unified blendshape vocabulary the host understands; a host
//! model may expose only a subset, so writers look keys up by name rather
//! than assuming presence.

/// One named expression weight in the host model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    // Eye region
    EyeSquintLeft,
    EyeSquintRight,

    // Cheek region
    CheekPuffLeft,
    CheekPuffRight,
    CheekSuckLeft,
    CheekSuckRight,

    // Lip suck (also the landing slots for mouth roll)
    LipSuckUpperLeft,
    LipSuckUpperRight,
    LipSuckLowerLeft,
    LipSuckLowerRight,

    // Upper lip raise / deepen
    MouthUpperUpLeft,
    MouthUpperUpRight,
    MouthUpperDeepenLeft,
    MouthUpperDeepenRight,

    // Funnel / pucker
    LipFunnelUpperLeft,
    LipFunnelUpperRight,
    LipFunnelLowerLeft,
    LipFunnelLowerRight,
    LipPuckerUpperLeft,
    LipPuckerUpperRight,
    LipPuckerLowerLeft,
    LipPuckerLowerRight,

    // Mouth corner shift
    MouthUpperLeft,
    MouthUpperRight,
    MouthLowerLeft,
    MouthLowerRight,

    // Jaw
    JawOpen,
    JawForward,
    JawLeft,
    JawRight,

    // Mouth
    MouthClosed,
    MouthCornerPullLeft,
    MouthCornerPullRight,
    MouthCornerSlantLeft,
    MouthCornerSlantRight,
    MouthFrownLeft,
    MouthFrownRight,
    MouthRaiserLower,

    // Tongue
    TongueOut,
    TongueLeft,
    TongueRight,
    TongueUp,
    TongueDown,
    TongueRoll,
    TongueFlat,
}

impl Expression {
    /// Every identifier the mapper knows how to set
    pub const ALL: [Expression; 45] = [
        Expression::EyeSquintLeft,
        Expression::EyeSquintRight,
        Expression::CheekPuffLeft,
        Expression::CheekPuffRight,
        Expression::CheekSuckLeft,
        Expression::CheekSuckRight,
        Expression::LipSuckUpperLeft,
        Expression::LipSuckUpperRight,
        Expression::LipSuckLowerLeft,
        Expression::LipSuckLowerRight,
        Expression::MouthUpperUpLeft,
        Expression::MouthUpperUpRight,
        Expression::MouthUpperDeepenLeft,
        Expression::MouthUpperDeepenRight,
        Expression::LipFunnelUpperLeft,
        Expression::LipFunnelUpperRight,
        Expression::LipFunnelLowerLeft,
        Expression::LipFunnelLowerRight,
        Expression::LipPuckerUpperLeft,
        Expression::LipPuckerUpperRight,
        Expression::LipPuckerLowerLeft,
        Expression::LipPuckerLowerRight,
        Expression::MouthUpperLeft,
        Expression::MouthUpperRight,
        Expression::MouthLowerLeft,
        Expression::MouthLowerRight,
        Expression::JawOpen,
        Expression::JawForward,
        Expression::JawLeft,
        Expression::JawRight,
        Expression::MouthClosed,
        Expression::MouthCornerPullLeft,
        Expression::MouthCornerPullRight,
        Expression::MouthCornerSlantLeft,
        Expression::MouthCornerSlantRight,
        Expression::MouthFrownLeft,
        Expression::MouthFrownRight,
        Expression::MouthRaiserLower,
        Expression::TongueOut,
        Expression::TongueLeft,
        Expression::TongueRight,
        Expression::TongueUp,
        Expression::TongueDown,
        Expression::TongueRoll,
        Expression::TongueFlat,
    ];
}
