//! Cymple State - Shared tracking state between the receive loop and the
//! host polling tick
//!
//! The receive loop is the sole frame writer; the mapper reads copy-out
//! snapshots. Activation and connection flags are atomics with
//! edge-returning transitions so log messages fire exactly once per edge.

pub mod store;

pub use store::*;
