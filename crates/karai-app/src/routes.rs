//! Role-gated dashboard routing.
//!
//! A user must never see another role's dashboard subtree: navigation into a
//! foreign subtree redirects back to the user's own dashboard root, the
//! generic `/dashboard` fans out per role, and unauthenticated (or
//! unresolved) sessions land on the login page. Non-dashboard paths are
//! never gated here.

use karai_domain::user::Role;

use crate::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

const DASHBOARD_ROOTS: [&str; 3] = ["/dashboard-admin", "/dashboard-provider", "/dashboard-customer"];

/// Static role → dashboard-root mapping.
pub fn dashboard_root(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard-admin",
        Role::Provider => "/dashboard-provider",
        Role::Customer => "/dashboard-customer",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` lies inside the subtree rooted at `root`.
fn in_subtree(path: &str, root: &str) -> bool {
    path == root || path.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
}

/// Whether the router gates `path` at all.
pub fn is_gated(path: &str) -> bool {
    in_subtree(path, DASHBOARD_PATH) || DASHBOARD_ROOTS.iter().any(|root| in_subtree(path, root))
}

/// Routing decision for `path` under the given session state.
pub fn route_decision(path: &str, session: &SessionState) -> RouteDecision {
    if !is_gated(path) {
        return RouteDecision::Allow;
    }
    let Some(role) = session.role() else {
        // Unresolved sessions redirect too: the gate never renders a
        // dashboard on a guess.
        return RouteDecision::Redirect(LOGIN_PATH);
    };
    let own_root = dashboard_root(role);
    if in_subtree(path, DASHBOARD_PATH) {
        return RouteDecision::Redirect(own_root);
    }
    if in_subtree(path, own_root) {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(own_root)
    }
}
