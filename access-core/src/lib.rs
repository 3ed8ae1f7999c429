//! access-core: role-based access-control core.
//!
//! The pure half of the RBAC layer: the role vocabulary, the session
//! snapshot model, the authorization predicates, and the gate that maps
//! decisions onto redirects and fallbacks. Stateful session storage
//! lives in the `session-store` crate.

pub mod models;
pub mod services;

pub use models::{Role, Session, UserProfile};
pub use services::{
    AccessDecision, AccessRequirement, Authz, ForbiddenReason, Gate, GateResult, GateRoutes,
};
