//! Authorization engine.
//!
//! Pure predicate evaluation over a session snapshot and an access
//! requirement. No side effects, no I/O; denial is a return value,
//! never an error.

use uuid::Uuid;

use crate::models::{Role, Session};

/// What a protected operation demands of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRequirement {
    /// Roles admitted by the operation. Empty means any authenticated
    /// role passes (the role step is skipped entirely).
    pub allowed_roles: Vec<Role>,
    /// Whether the operation requires an authenticated session at all.
    pub require_auth: bool,
    /// Owner of the resource under access, when the operation is
    /// owner-scoped. Admins pass regardless.
    pub resource_owner: Option<Uuid>,
}

impl AccessRequirement {
    /// Any authenticated session.
    pub fn authenticated() -> Self {
        Self {
            allowed_roles: Vec::new(),
            require_auth: true,
            resource_owner: None,
        }
    }

    /// Sessions holding one of the given roles.
    pub fn roles(allowed: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: allowed.into_iter().collect(),
            require_auth: true,
            resource_owner: None,
        }
    }

    /// No demands at all; everyone passes.
    pub fn public() -> Self {
        Self {
            allowed_roles: Vec::new(),
            require_auth: false,
            resource_owner: None,
        }
    }

    /// Additionally demand ownership of the resource owned by `owner`.
    pub fn owned_by(mut self, owner: Uuid) -> Self {
        self.resource_owner = Some(owner);
        self
    }
}

impl Default for AccessRequirement {
    fn default() -> Self {
        Self::authenticated()
    }
}

/// Why an authenticated session was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForbiddenReason {
    RoleMismatch,
    NotResourceOwner,
}

impl std::fmt::Display for ForbiddenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForbiddenReason::RoleMismatch => write!(f, "role mismatch"),
            ForbiddenReason::NotResourceOwner => write!(f, "not resource owner"),
        }
    }
}

/// Outcome of evaluating a session against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    NeedsLogin,
    Forbidden(ForbiddenReason),
}

/// Authorization predicate service.
#[derive(Debug, Clone)]
pub struct Authz;

impl Authz {
    /// A session is authenticated iff it holds both a non-blank token
    /// and a user record.
    pub fn is_authenticated(session: &Session) -> bool {
        session.is_authenticated()
    }

    /// Whether the session holds exactly `role`. Always false for an
    /// unauthenticated session.
    pub fn has_role(session: &Session, role: Role) -> bool {
        session.role() == Some(role)
    }

    /// Whether the session's role is contained in `roles`.
    ///
    /// Always false for an unauthenticated session, and false for an
    /// empty slice (no role is a member of the empty set). Callers that
    /// mean "any authenticated role" should express that through an
    /// empty `AccessRequirement::allowed_roles` instead.
    pub fn has_any_role(session: &Session, roles: &[Role]) -> bool {
        match session.role() {
            Some(role) => roles.contains(&role),
            None => false,
        }
    }

    /// Whether the session may act on a resource owned by `owner`:
    /// admins always, otherwise only the owner themselves.
    pub fn can_access_owned_resource(session: &Session, owner: Uuid) -> bool {
        if Self::has_role(session, Role::Admin) {
            return true;
        }
        session.user_id() == Some(owner)
    }

    /// Evaluate a requirement against a session.
    ///
    /// Authentication is checked first: an unauthenticated caller gets
    /// `NeedsLogin` and never learns which roles or owner the
    /// requirement names.
    pub fn evaluate(session: &Session, requirement: &AccessRequirement) -> AccessDecision {
        if requirement.require_auth && !Self::is_authenticated(session) {
            return AccessDecision::NeedsLogin;
        }

        if !requirement.allowed_roles.is_empty()
            && !Self::has_any_role(session, &requirement.allowed_roles)
        {
            return AccessDecision::Forbidden(ForbiddenReason::RoleMismatch);
        }

        if let Some(owner) = requirement.resource_owner {
            if !Self::can_access_owned_resource(session, owner) {
                return AccessDecision::Forbidden(ForbiddenReason::NotResourceOwner);
            }
        }

        AccessDecision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn session_with_role(role: Role) -> Session {
        let user = UserProfile::new(Uuid::new_v4(), "Test User", "user@example.com", role);
        Session::authenticated("tok-abc", user)
    }

    fn anonymous() -> Session {
        Session::anonymous()
    }

    #[test]
    fn test_unauthenticated_fails_every_role_check() {
        let session = anonymous();
        for role in [Role::Attendee, Role::Organizer, Role::VenueOwner, Role::Admin] {
            assert!(!Authz::has_role(&session, role));
        }
        assert!(!Authz::has_any_role(&session, &[Role::Attendee, Role::Admin]));
        assert!(!Authz::has_any_role(&session, &[]));
    }

    #[test]
    fn test_partial_session_fails_role_checks() {
        let user = UserProfile::new(Uuid::new_v4(), "Partial", "p@example.com", Role::Admin);
        let session = Session::from_parts(None, Some(user));
        assert!(!Authz::is_authenticated(&session));
        assert!(!Authz::has_role(&session, Role::Admin));
    }

    #[test]
    fn test_has_any_role_empty_slice_is_false() {
        let session = session_with_role(Role::Organizer);
        assert!(!Authz::has_any_role(&session, &[]));
    }

    #[test]
    fn test_has_any_role_membership() {
        let session = session_with_role(Role::Organizer);
        assert!(Authz::has_any_role(&session, &[Role::Organizer, Role::Admin]));
        assert!(!Authz::has_any_role(&session, &[Role::Attendee, Role::VenueOwner]));
    }

    #[test]
    fn test_admin_accesses_any_owned_resource() {
        let session = session_with_role(Role::Admin);
        assert!(Authz::can_access_owned_resource(&session, Uuid::new_v4()));
    }

    #[test]
    fn test_owner_matrix_for_non_admin() {
        let user = UserProfile::new(Uuid::new_v4(), "Owner", "o@example.com", Role::Organizer);
        let own_id = user.id;
        let session = Session::authenticated("tok-own", user);
        assert!(Authz::can_access_owned_resource(&session, own_id));
        assert!(!Authz::can_access_owned_resource(&session, Uuid::new_v4()));
    }

    #[test]
    fn test_unauthenticated_never_owns() {
        assert!(!Authz::can_access_owned_resource(&anonymous(), Uuid::new_v4()));
    }

    #[test]
    fn test_evaluate_checks_auth_before_roles() {
        // Anonymous caller failing both checks must see NeedsLogin,
        // never the role restriction.
        let requirement = AccessRequirement::roles([Role::Admin]);
        assert_eq!(
            Authz::evaluate(&anonymous(), &requirement),
            AccessDecision::NeedsLogin
        );
    }

    #[test]
    fn test_evaluate_role_mismatch() {
        let requirement = AccessRequirement::roles([Role::Organizer]);
        let session = session_with_role(Role::Attendee);
        assert_eq!(
            Authz::evaluate(&session, &requirement),
            AccessDecision::Forbidden(ForbiddenReason::RoleMismatch)
        );
    }

    #[test]
    fn test_evaluate_empty_roles_admits_any_authenticated() {
        let requirement = AccessRequirement::authenticated();
        let session = session_with_role(Role::Attendee);
        assert_eq!(
            Authz::evaluate(&session, &requirement),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn test_evaluate_public_requirement_admits_anonymous() {
        let requirement = AccessRequirement::public();
        assert_eq!(
            Authz::evaluate(&anonymous(), &requirement),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn test_evaluate_ownership_denied() {
        let session = session_with_role(Role::Attendee);
        let requirement = AccessRequirement::authenticated().owned_by(Uuid::new_v4());
        assert_eq!(
            Authz::evaluate(&session, &requirement),
            AccessDecision::Forbidden(ForbiddenReason::NotResourceOwner)
        );
    }

    #[test]
    fn test_evaluate_ownership_allowed_for_owner_and_admin() {
        let user = UserProfile::new(Uuid::new_v4(), "Owner", "o@example.com", Role::VenueOwner);
        let own_id = user.id;
        let session = Session::authenticated("tok-v", user);
        let requirement = AccessRequirement::authenticated().owned_by(own_id);
        assert_eq!(
            Authz::evaluate(&session, &requirement),
            AccessDecision::Allowed
        );

        let admin = session_with_role(Role::Admin);
        let requirement = AccessRequirement::authenticated().owned_by(Uuid::new_v4());
        assert_eq!(
            Authz::evaluate(&admin, &requirement),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn test_evaluate_unknown_role_fails_role_restriction() {
        let session = session_with_role(Role::Unknown);
        let requirement = AccessRequirement::roles([Role::Organizer]);
        assert_eq!(
            Authz::evaluate(&session, &requirement),
            AccessDecision::Forbidden(ForbiddenReason::RoleMismatch)
        );
    }
}
