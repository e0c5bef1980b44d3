//! Session resolution and the shared session store.

use karai_api::ApiError;
use karai_domain::user::{Role, User};

use crate::gateway::SessionGateway;
use crate::store::Store;

/// Resolved session state. Every role-gated view reads this before
/// rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Resolution has not completed yet.
    #[default]
    Unresolved,
    /// The backend reported no user.
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Shared, subscribe-able session store. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    store: Store<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a known state (tests, server-side rendering where
    /// the gateway already resolved the user).
    pub fn with_state(state: SessionState) -> Self {
        Self {
            store: Store::new(state),
        }
    }

    pub fn state(&self) -> SessionState {
        self.store.get()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<SessionState> {
        self.store.subscribe()
    }

    /// Resolve the session via the gateway and publish the outcome.
    ///
    /// A transport failure leaves the current state untouched and surfaces
    /// the error to the caller.
    pub async fn resolve<G: SessionGateway>(&self, gateway: &G) -> Result<SessionState, ApiError> {
        let state = match gateway.fetch_session().await? {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        };
        self.store.set(state.clone());
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karai_testing::fixture::test_customer;

    struct StaticSession(Option<User>);

    impl SessionGateway for StaticSession {
        async fn fetch_session(&self) -> Result<Option<User>, ApiError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSession;

    impl SessionGateway for FailingSession {
        async fn fetch_session(&self) -> Result<Option<User>, ApiError> {
            Err(ApiError::backend("session service down"))
        }
    }

    #[tokio::test]
    async fn should_publish_authenticated_state() {
        let store = SessionStore::new();
        assert_eq!(store.state(), SessionState::Unresolved);

        let state = store.resolve(&StaticSession(Some(test_customer()))).await.unwrap();
        assert!(state.is_authenticated());
        assert_eq!(store.state().role(), Some(Role::Customer));
    }

    #[tokio::test]
    async fn should_publish_unauthenticated_when_no_user() {
        let store = SessionStore::new();
        store.resolve(&StaticSession(None)).await.unwrap();
        assert_eq!(store.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn should_keep_state_on_resolution_failure() {
        let store = SessionStore::with_state(SessionState::Authenticated(test_customer()));
        let err = store.resolve(&FailingSession).await.unwrap_err();
        assert_eq!(err.kind(), "BACKEND");
        assert!(store.state().is_authenticated());
    }
}
