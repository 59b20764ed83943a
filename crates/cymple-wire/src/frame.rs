//! Tracking frame - one decoded blendshape payload
//!
//! Payload = 39 consecutive little-endian f32 values starting at offset 12.
//! Field assignment goes through a static ordered table so the 39-field
//! contract is a checkable constant instead of a branch chain.

use bytes::Buf;
use cymple_core::{CympleError, CympleResult, TrackingField, FIELD_COUNT};

use crate::{CategoryFlags, PacketHeader, HEADER_SIZE};

/// Payload size in bytes (39 x f32)
pub const PAYLOAD_SIZE: usize = FIELD_COUNT * 4;

/// Minimum size of a complete blendshape datagram
pub const PACKET_SIZE: usize = HEADER_SIZE + PAYLOAD_SIZE;

/// One decoded tracking update
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackingFrame {
    /// Categories present in this update
    pub flags: CategoryFlags,

    pub eye_pitch: f32,
    pub eye_yaw_left: f32,
    pub eye_yaw_right: f32,
    pub eye_pupil_left: f32,
    pub eye_pupil_right: f32,
    pub eyelid_close_left: f32,
    pub eyelid_close_right: f32,
    pub eye_squint_left: f32,
    pub eye_squint_right: f32,
    pub cheek_puff_left: f32,
    pub cheek_puff_right: f32,
    pub cheek_suck: f32,
    pub jaw_open: f32,
    pub jaw_forward: f32,
    pub jaw_left_right: f32,
    pub mouth_close: f32,
    pub mouth_left_right: f32,
    pub lip_suck_upper: f32,
    pub lip_suck_lower: f32,
    pub mouth_funnel: f32,
    pub mouth_pucker: f32,
    pub lip_raise_left: f32,
    pub lip_raise_right: f32,
    pub lip_depress_left: f32,
    pub lip_depress_right: f32,
    pub lip_shift_up: f32,
    pub lip_shift_down: f32,
    pub mouth_roll_up: f32,
    pub mouth_roll_down: f32,
    pub mouth_shrug_lower: f32,
    pub mouth_smile_left: f32,
    pub mouth_smile_right: f32,
    pub mouth_sad_left: f32,
    pub mouth_sad_right: f32,
    pub tongue_out: f32,
    pub tongue_left_right: f32,
    pub tongue_up_down: f32,
    pub tongue_wide: f32,
    pub tongue_roll: f32,
}

/// One entry of the wire-order field table
pub struct FieldSlot {
    /// Which field this wire index carries
    pub field: TrackingField,
    /// Read the field from a frame
    pub get: fn(&TrackingFrame) -> f32,
    /// Write the field into a frame
    pub set: fn(&mut TrackingFrame, f32),
}

/// Wire index -> field accessors, in payload order
pub const FIELD_TABLE: [FieldSlot; FIELD_COUNT] = [
    FieldSlot { field: TrackingField::EyePitch, get: |f| f.eye_pitch, set: |f, v| f.eye_pitch = v },
    FieldSlot { field: TrackingField::EyeYawLeft, get: |f| f.eye_yaw_left, set: |f, v| f.eye_yaw_left = v },
    FieldSlot { field: TrackingField::EyeYawRight, get: |f| f.eye_yaw_right, set: |f, v| f.eye_yaw_right = v },
    FieldSlot { field: TrackingField::EyePupilLeft, get: |f| f.eye_pupil_left, set: |f, v| f.eye_pupil_left = v },
    FieldSlot { field: TrackingField::EyePupilRight, get: |f| f.eye_pupil_right, set: |f, v| f.eye_pupil_right = v },
    FieldSlot { field: TrackingField::EyelidCloseLeft, get: |f| f.eyelid_close_left, set: |f, v| f.eyelid_close_left = v },
    FieldSlot { field: TrackingField::EyelidCloseRight, get: |f| f.eyelid_close_right, set: |f, v| f.eyelid_close_right = v },
    FieldSlot { field: TrackingField::EyeSquintLeft, get: |f| f.eye_squint_left, set: |f, v| f.eye_squint_left = v },
    FieldSlot { field: TrackingField::EyeSquintRight, get: |f| f.eye_squint_right, set: |f, v| f.eye_squint_right = v },
    FieldSlot { field: TrackingField::CheekPuffLeft, get: |f| f.cheek_puff_left, set: |f, v| f.cheek_puff_left = v },
    FieldSlot { field: TrackingField::CheekPuffRight, get: |f| f.cheek_puff_right, set: |f, v| f.cheek_puff_right = v },
    FieldSlot { field: TrackingField::CheekSuck, get: |f| f.cheek_suck, set: |f, v| f.cheek_suck = v },
    FieldSlot { field: TrackingField::JawOpen, get: |f| f.jaw_open, set: |f, v| f.jaw_open = v },
    FieldSlot { field: TrackingField::JawForward, get: |f| f.jaw_forward, set: |f, v| f.jaw_forward = v },
    FieldSlot { field: TrackingField::JawLeftRight, get: |f| f.jaw_left_right, set: |f, v| f.jaw_left_right = v },
    FieldSlot { field: TrackingField::MouthClose, get: |f| f.mouth_close, set: |f, v| f.mouth_close = v },
    FieldSlot { field: TrackingField::MouthLeftRight, get: |f| f.mouth_left_right, set: |f, v| f.mouth_left_right = v },
    FieldSlot { field: TrackingField::LipSuckUpper, get: |f| f.lip_suck_upper, set: |f, v| f.lip_suck_upper = v },
    FieldSlot { field: TrackingField::LipSuckLower, get: |f| f.lip_suck_lower, set: |f, v| f.lip_suck_lower = v },
    FieldSlot { field: TrackingField::MouthFunnel, get: |f| f.mouth_funnel, set: |f, v| f.mouth_funnel = v },
    FieldSlot { field: TrackingField::MouthPucker, get: |f| f.mouth_pucker, set: |f, v| f.mouth_pucker = v },
    FieldSlot { field: TrackingField::LipRaiseLeft, get: |f| f.lip_raise_left, set: |f, v| f.lip_raise_left = v },
    FieldSlot { field: TrackingField::LipRaiseRight, get: |f| f.lip_raise_right, set: |f, v| f.lip_raise_right = v },
    FieldSlot { field: TrackingField::LipDepressLeft, get: |f| f.lip_depress_left, set: |f, v| f.lip_depress_left = v },
    FieldSlot { field: TrackingField::LipDepressRight, get: |f| f.lip_depress_right, set: |f, v| f.lip_depress_right = v },
    FieldSlot { field: TrackingField::LipShiftUp, get: |f| f.lip_shift_up, set: |f, v| f.lip_shift_up = v },
    FieldSlot { field: TrackingField::LipShiftDown, get: |f| f.lip_shift_down, set: |f, v| f.lip_shift_down = v },
    FieldSlot { field: TrackingField::MouthRollUp, get: |f| f.mouth_roll_up, set: |f, v| f.mouth_roll_up = v },
    FieldSlot { field: TrackingField::MouthRollDown, get: |f| f.mouth_roll_down, set: |f, v| f.mouth_roll_down = v },
    FieldSlot { field: TrackingField::MouthShrugLower, get: |f| f.mouth_shrug_lower, set: |f, v| f.mouth_shrug_lower = v },
    FieldSlot { field: TrackingField::MouthSmileLeft, get: |f| f.mouth_smile_left, set: |f, v| f.mouth_smile_left = v },
    FieldSlot { field: TrackingField::MouthSmileRight, get: |f| f.mouth_smile_right, set: |f, v| f.mouth_smile_right = v },
    FieldSlot { field: TrackingField::MouthSadLeft, get: |f| f.mouth_sad_left, set: |f, v| f.mouth_sad_left = v },
    FieldSlot { field: TrackingField::MouthSadRight, get: |f| f.mouth_sad_right, set: |f, v| f.mouth_sad_right = v },
    FieldSlot { field: TrackingField::TongueOut, get: |f| f.tongue_out, set: |f, v| f.tongue_out = v },
    FieldSlot { field: TrackingField::TongueLeftRight, get: |f| f.tongue_left_right, set: |f, v| f.tongue_left_right = v },
    FieldSlot { field: TrackingField::TongueUpDown, get: |f| f.tongue_up_down, set: |f, v| f.tongue_up_down = v },
    FieldSlot { field: TrackingField::TongueWide, get: |f| f.tongue_wide, set: |f, v| f.tongue_wide = v },
    FieldSlot { field: TrackingField::TongueRoll, get: |f| f.tongue_roll, set: |f, v| f.tongue_roll = v },
];

impl TrackingFrame {
    /// Read a field by its wire identity
    #[inline]
    pub fn get(&self, field: TrackingField) -> f32 {
        (FIELD_TABLE[field.index()].get)(self)
    }

    /// Write a field by its wire identity
    #[inline]
    pub fn set(&mut self, field: TrackingField, value: f32) {
        (FIELD_TABLE[field.index()].set)(self, value)
    }
}

/// Decode one datagram into a tracking frame.
///
/// Pure: storing the result is the caller's responsibility. Every failure
/// leaves upstream state untouched; there is no partial application.
pub fn decode(raw: &[u8]) -> CympleResult<TrackingFrame> {
    let header = PacketHeader::parse(raw)?;
    header.validate()?;

    if raw.len() < PACKET_SIZE {
        return Err(CympleError::TooShort {
            expected: PACKET_SIZE,
            actual: raw.len(),
        });
    }

    let mut frame = TrackingFrame {
        flags: header.flags,
        ..TrackingFrame::default()
    };

    let mut payload = &raw[HEADER_SIZE..];
    for slot in &FIELD_TABLE {
        (slot.set)(&mut frame, payload.get_f32_le());
    }

    Ok(frame)
}

/// Encode a frame into the sender's datagram format.
///
/// Exact inverse of [`decode`]; used by tests and diagnostic senders.
pub fn encode(frame: &TrackingFrame) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PACKET_SIZE);
    buf.extend_from_slice(&PacketHeader::new(frame.flags).to_bytes());
    for slot in &FIELD_TABLE {
        buf.extend_from_slice(&(slot.get)(frame).to_le_bytes());
    }
    buf
}
