//! Access gate.
//!
//! Translates an `AccessDecision` into a caller-facing effect (redirect
//! target or inline fallback) without embedding policy of its own.

use crate::models::{Role, Session};
use crate::services::authz::{AccessDecision, AccessRequirement, Authz, ForbiddenReason};

/// Caller-facing outcome of guarding an operation or renderable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateResult {
    /// Run the protected operation / render the protected content.
    Proceed,
    /// Send the caller to the given route.
    RedirectTo(String),
    /// Render this message in place of the protected content.
    ShowFallback(String),
}

/// Route targets the gate redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRoutes {
    pub login_route: String,
    pub forbidden_route: String,
}

impl Default for GateRoutes {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            forbidden_route: "/forbidden".to_string(),
        }
    }
}

/// Gate service.
#[derive(Debug, Clone)]
pub struct Gate;

impl Gate {
    /// Guard in a routing context: every denial becomes a redirect.
    pub fn guard(session: &Session, requirement: &AccessRequirement, routes: &GateRoutes) -> GateResult {
        match Authz::evaluate(session, requirement) {
            AccessDecision::Allowed => GateResult::Proceed,
            AccessDecision::NeedsLogin => GateResult::RedirectTo(routes.login_route.clone()),
            AccessDecision::Forbidden(_) => GateResult::RedirectTo(routes.forbidden_route.clone()),
        }
    }

    /// Guard in an inline-content context: missing authentication still
    /// redirects to login, but a forbidden decision renders a fallback
    /// message (the caller may supply its own).
    pub fn guard_content(
        session: &Session,
        requirement: &AccessRequirement,
        routes: &GateRoutes,
        fallback: Option<&str>,
    ) -> GateResult {
        match Authz::evaluate(session, requirement) {
            AccessDecision::Allowed => GateResult::Proceed,
            AccessDecision::NeedsLogin => GateResult::RedirectTo(routes.login_route.clone()),
            AccessDecision::Forbidden(reason) => {
                let message = match fallback {
                    Some(text) => text.to_string(),
                    None => match reason {
                        ForbiddenReason::RoleMismatch => Self::role_message(&requirement.allowed_roles),
                        ForbiddenReason::NotResourceOwner => {
                            "You do not have access to this resource.".to_string()
                        }
                    },
                };
                GateResult::ShowFallback(message)
            }
        }
    }

    /// Standard restricted-content message for a role restriction.
    pub fn role_message(allowed_roles: &[Role]) -> String {
        if allowed_roles.is_empty() {
            return "This content is restricted.".to_string();
        }
        let list = allowed_roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        format!("This content is restricted to {} users only.", list)
    }

    /// Landing route for a role after login. Total: unknown or missing
    /// roles land on the default route.
    pub fn dashboard_route_for(role: Option<Role>) -> &'static str {
        match role {
            Some(Role::Attendee) => "/dashboard/attendee",
            Some(Role::Organizer) => "/dashboard/organizer",
            Some(Role::VenueOwner) => "/dashboard/venue-owner",
            Some(Role::Admin) => "/dashboard/admin",
            Some(Role::Unknown) | None => "/",
        }
    }
}
