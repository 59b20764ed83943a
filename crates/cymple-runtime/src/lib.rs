//! Cymple Runtime - Receive loop and module lifecycle
//!
//! This crate drives the decode-and-store cycle on a dedicated task,
//! watches connection liveness via receive timeouts, and exposes the
//! host-facing module surface (initialize / update / teardown).

pub mod config;
pub mod module;
pub mod receiver;

pub use config::*;
pub use module::*;
pub use receiver::*;

pub use cymple_state::ConnectionState;
