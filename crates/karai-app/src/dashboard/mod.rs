//! Role-scoped dashboard view models.
//!
//! Each view resolves the session before rendering. A missing session is an
//! unauthenticated state; a wrong role renders a visible "not authorized"
//! outcome — never a silent failure — and skips every fetch. The top-level
//! router ([`crate::routes`]) is the only place that redirects instead.

pub mod admin;
pub mod customer;
pub mod provider;

use karai_domain::user::Role;

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Unauthenticated,
    NotAuthorized,
}

/// Gate a view on the required role.
pub fn check_access(session: &SessionState, required: Role) -> Access {
    match session {
        SessionState::Unresolved | SessionState::Unauthenticated => Access::Unauthenticated,
        SessionState::Authenticated(user) if user.role == required => Access::Granted,
        SessionState::Authenticated(_) => Access::NotAuthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karai_testing::fixture::{test_admin, test_customer};

    #[test]
    fn should_grant_matching_role() {
        let session = SessionState::Authenticated(test_admin());
        assert_eq!(check_access(&session, Role::Admin), Access::Granted);
    }

    #[test]
    fn should_mark_foreign_role_not_authorized() {
        let session = SessionState::Authenticated(test_customer());
        assert_eq!(check_access(&session, Role::Admin), Access::NotAuthorized);
    }

    #[test]
    fn should_mark_missing_session_unauthenticated() {
        assert_eq!(
            check_access(&SessionState::Unauthenticated, Role::Customer),
            Access::Unauthenticated
        );
        assert_eq!(
            check_access(&SessionState::Unresolved, Role::Customer),
            Access::Unauthenticated
        );
    }
}
