//! Fixed header for the Cymple wire protocol
//!
//! Fixed header is 12 bytes:
//! - Bytes 0-3: Magic prefix (i32, LE)
//! - Bytes 4-7: Category flags (u32, network byte order)
//! - Bytes 8-9: Message type (u16, LE)
//! - Bytes 10-11: Declared payload length (i16, LE) - informational only,
//!   never cross-checked against the actual datagram size

use cymple_core::{CympleError, CympleResult};

use crate::CategoryFlags;

/// Fixed header size in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic prefix every valid datagram starts with
pub const MSG_PREFIX: i32 = 0xCFCF;

/// Message type carrying one blendshape payload
pub const MSG_TYPE_BLENDSHAPE: u16 = 0x0000;

/// UDP port the sender transmits to
pub const DEFAULT_PORT: u16 = 22999;

/// Fixed header structure
#[derive(Clone, Copy, Debug)]
pub struct PacketHeader {
    /// Magic prefix
    pub prefix: i32,
    /// Category flags
    pub flags: CategoryFlags,
    /// Message type
    pub msg_type: u16,
    /// Declared payload length
    pub declared_len: i16,
}

impl PacketHeader {
    /// Create a blendshape-data header with the given flags
    pub fn new(flags: CategoryFlags) -> Self {
        PacketHeader {
            prefix: MSG_PREFIX,
            flags,
            msg_type: MSG_TYPE_BLENDSHAPE,
            declared_len: crate::PAYLOAD_SIZE as i16,
        }
    }

    /// Parse header from bytes
    pub fn parse(buf: &[u8]) -> CympleResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(CympleError::TooShort {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        // Bytes 0-3: Prefix
        let prefix = i32::from_le_bytes(buf[0..4].try_into().unwrap());

        // Bytes 4-7: Flags, byte-swapped from network order
        let flags = CategoryFlags::new(u32::from_be_bytes(buf[4..8].try_into().unwrap()));

        // Bytes 8-9: Type
        let msg_type = u16::from_le_bytes(buf[8..10].try_into().unwrap());

        // Bytes 10-11: Declared length
        let declared_len = i16::from_le_bytes(buf[10..12].try_into().unwrap());

        Ok(PacketHeader {
            prefix,
            flags,
            msg_type,
            declared_len,
        })
    }

    /// Reject headers that do not carry a blendshape payload.
    ///
    /// Unknown future message types are rejected here rather than being
    /// misparsed as float data.
    pub fn validate(&self) -> CympleResult<()> {
        if self.prefix != MSG_PREFIX {
            return Err(CympleError::BadMagic(self.prefix));
        }
        if self.msg_type != MSG_TYPE_BLENDSHAPE {
            return Err(CympleError::UnknownType(self.msg_type));
        }
        Ok(())
    }

    /// Serialize header to bytes
    pub fn serialize(&self, buf: &mut [u8]) -> CympleResult<()> {
        if buf.len() < HEADER_SIZE {
            return Err(CympleError::TooShort {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        buf[0..4].copy_from_slice(&self.prefix.to_le_bytes());
        buf[4..8].copy_from_slice(&self.flags.0.to_be_bytes());
        buf[8..10].copy_from_slice(&self.msg_type.to_le_bytes());
        buf[10..12].copy_from_slice(&self.declared_len.to_le_bytes());

        Ok(())
    }

    /// Serialize header to a new Vec
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        self.serialize(&mut buf).unwrap();
        buf
    }
}
