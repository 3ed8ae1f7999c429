//! Services layer for access-core.
//!
//! Pure authorization predicates and the gate that maps decisions to
//! caller-facing effects.

pub mod authz;
pub mod gate;

pub use authz::{AccessDecision, AccessRequirement, Authz, ForbiddenReason};
pub use gate::{Gate, GateResult, GateRoutes};
