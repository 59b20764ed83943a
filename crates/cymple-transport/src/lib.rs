//! Cymple Transport - UDP socket primitive
//!
//! The receiver listens on a single UDP socket, accepts datagrams from any
//! source address, and surfaces receive timeouts as a distinct error so the
//! liveness monitor can treat them as a signal rather than a fault.

pub mod udp;

pub use udp::*;
