//! Cymple Mapper - Tracking frame to expression model
//!
//! Invoked once per host polling tick (not per packet). Transforms the
//! latest stored frame into the host's expression model, applying the
//! axis-splitting and mirroring rules per blendshape group.

pub mod mapper;
pub mod model;

pub use mapper::*;
pub use model::*;
