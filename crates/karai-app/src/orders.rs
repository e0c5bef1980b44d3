//! Order lifecycle controller: creation and role-guarded transitions.
//!
//! Transition legality is checked against the acting role before any
//! request goes out — backend enforcement is independent, the local guard
//! exists so an illegal action never costs a round trip.

use tokio::sync::watch;

use karai_api::ApiError;
use karai_domain::id::OrderId;
use karai_domain::order::{
    Order, OrderDraft, OrderStatus, TransitionError, check_transition,
};
use karai_domain::user::Role;

use crate::gateway::OrderGateway;
use crate::inflight::SeqGate;
use crate::loadable::Loadable;
use crate::session::{SessionState, SessionStore};
use crate::store::Store;

pub struct OrderController<G> {
    gateway: G,
    session: SessionStore,
    orders: Store<Loadable<Vec<Order>>>,
    refresh_gate: SeqGate,
}

impl<G: OrderGateway> OrderController<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            orders: Store::default(),
            refresh_gate: SeqGate::new(),
        }
    }

    pub fn orders(&self) -> Loadable<Vec<Order>> {
        self.orders.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Loadable<Vec<Order>>> {
        self.orders.subscribe()
    }

    /// Refetch the role-scoped order list.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let seq = self.refresh_gate.begin();
        if matches!(self.orders.get(), Loadable::NotAsked) {
            self.orders.set(Loadable::Loading);
        }
        match self.gateway.list_orders().await {
            Ok(list) => {
                if self.refresh_gate.try_commit(seq) {
                    self.orders.set(Loadable::Ready(list));
                }
                Ok(())
            }
            Err(e) => {
                if self.refresh_gate.try_commit(seq)
                    && !matches!(self.orders.get(), Loadable::Ready(_))
                {
                    self.orders.set(Loadable::Failed(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Place an order from a draft. Customers only; the draft is validated
    /// (non-empty address, at least one item, single provider) and
    /// `totalAmount` computed from captured prices before the request.
    pub async fn place(&self, draft: OrderDraft) -> Result<Order, ApiError> {
        let role = self.require_role()?;
        if role != Role::Customer {
            return Err(ApiError::Authorization);
        }
        let payload = draft
            .into_payload()
            .map_err(|e| ApiError::validation(e.to_string()))?;
        let order = self.gateway.create_order(&payload).await?;
        let _ = self.refresh().await;
        Ok(order)
    }

    /// Cancel an order (customer path: only `PLACED → CANCELLED`).
    pub async fn cancel(&self, order: &Order) -> Result<Order, ApiError> {
        self.transition(order, OrderStatus::Cancelled).await
    }

    /// Advance an order one forward step (provider path).
    pub async fn advance(&self, order: &Order) -> Result<Order, ApiError> {
        let next = order
            .status
            .next_forward()
            .ok_or_else(|| ApiError::validation(format!("order is already {}", order.status)))?;
        self.transition(order, next).await
    }

    /// Role-guarded transition; rejected locally before any network call
    /// when the acting role has no authority over it.
    pub async fn transition(&self, order: &Order, to: OrderStatus) -> Result<Order, ApiError> {
        let role = self.require_role()?;
        check_transition(role, order.status, to).map_err(|e| match e {
            TransitionError::RoleNotAllowed { .. } => ApiError::Authorization,
            TransitionError::InvalidStep { .. } => ApiError::validation(e.to_string()),
        })?;
        let updated = self.gateway.update_status(&order.id, to).await?;
        let _ = self.refresh().await;
        Ok(updated)
    }

    /// Admin-only order deletion. The confirmation step lives in the view
    /// layer; this guard covers the role.
    pub async fn delete(&self, id: &OrderId) -> Result<(), ApiError> {
        if self.require_role()? != Role::Admin {
            return Err(ApiError::Authorization);
        }
        self.gateway.delete_order(id).await?;
        let _ = self.refresh().await;
        Ok(())
    }

    fn require_role(&self) -> Result<Role, ApiError> {
        match self.session.state() {
            SessionState::Authenticated(user) => Ok(user.role),
            _ => Err(ApiError::Authorization),
        }
    }
}
