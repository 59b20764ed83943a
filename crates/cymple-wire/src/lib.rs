//! Cymple Wire Protocol - Binary packet format
//!
//! This crate implements the sender's datagram format:
//! - Fixed header (12 bytes): magic prefix, category flags, message type,
//!   declared length
//! - Payload: 39 little-endian f32 fields at a fixed stride
//!
//! Only the flags word is carried in network byte order; everything else,
//! including the float payload, is little-endian.

pub mod flags;
pub mod frame;
pub mod header;

pub use flags::*;
pub use frame::*;
pub use header::*;
