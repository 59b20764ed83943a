//! Tracking field enumeration
//!
//! The wire payload is a fixed-stride array of 39 little-endian floats.
//! `TrackingField` enumerates them in wire order; the discriminant IS the
//! wire index, so `field as usize` addresses the payload directly.

/// Number of float fields in one tracking payload
pub const FIELD_COUNT: usize = 39;

/// One float field of the tracking payload, in wire order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TrackingField {
    EyePitch = 0,
    EyeYawLeft = 1,
    EyeYawRight = 2,
    EyePupilLeft = 3,
    EyePupilRight = 4,
    EyelidCloseLeft = 5,
    EyelidCloseRight = 6,
    EyeSquintLeft = 7,
    EyeSquintRight = 8,
    CheekPuffLeft = 9,
    CheekPuffRight = 10,
    CheekSuck = 11,
    JawOpen = 12,
    JawForward = 13,
    JawLeftRight = 14,
    MouthClose = 15,
    MouthLeftRight = 16,
    LipSuckUpper = 17,
    LipSuckLower = 18,
    MouthFunnel = 19,
    MouthPucker = 20,
    LipRaiseLeft = 21,
    LipRaiseRight = 22,
    LipDepressLeft = 23,
    LipDepressRight = 24,
    LipShiftUp = 25,
    LipShiftDown = 26,
    MouthRollUp = 27,
    MouthRollDown = 28,
    MouthShrugLower = 29,
    MouthSmileLeft = 30,
    MouthSmileRight = 31,
    MouthSadLeft = 32,
    MouthSadRight = 33,
    TongueOut = 34,
    TongueLeftRight = 35,
    TongueUpDown = 36,
    TongueWide = 37,
    TongueRoll = 38,
}

impl TrackingField {
    /// All fields in wire order
    pub const ORDER: [TrackingField; FIELD_COUNT] = [
        TrackingField::EyePitch,
        TrackingField::EyeYawLeft,
        TrackingField::EyeYawRight,
        TrackingField::EyePupilLeft,
        TrackingField::EyePupilRight,
        TrackingField::EyelidCloseLeft,
        TrackingField::EyelidCloseRight,
        TrackingField::EyeSquintLeft,
        TrackingField::EyeSquintRight,
        TrackingField::CheekPuffLeft,
        TrackingField::CheekPuffRight,
        TrackingField::CheekSuck,
        TrackingField::JawOpen,
        TrackingField::JawForward,
        TrackingField::JawLeftRight,
        TrackingField::MouthClose,
        TrackingField::MouthLeftRight,
        TrackingField::LipSuckUpper,
        TrackingField::LipSuckLower,
        TrackingField::MouthFunnel,
        TrackingField::MouthPucker,
        TrackingField::LipRaiseLeft,
        TrackingField::LipRaiseRight,
        TrackingField::LipDepressLeft,
        TrackingField::LipDepressRight,
        TrackingField::LipShiftUp,
        TrackingField::LipShiftDown,
        TrackingField::MouthRollUp,
        TrackingField::MouthRollDown,
        TrackingField::MouthShrugLower,
        TrackingField::MouthSmileLeft,
        TrackingField::MouthSmileRight,
        TrackingField::MouthSadLeft,
        TrackingField::MouthSadRight,
        TrackingField::TongueOut,
        TrackingField::TongueLeftRight,
        TrackingField::TongueUpDown,
        TrackingField::TongueWide,
        TrackingField::TongueRoll,
    ];

    /// Wire index of this field
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field at a wire index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ORDER.get(index).copied()
    }
}
