//! The customer cart controller.
//!
//! Consistency strategy is full-refetch-after-write: the backend may merge
//! an added meal into an existing line or create a new one, so the
//! controller never patches locally and always refetches the cart after a
//! mutation. Every successful mutation broadcasts a cart-changed event so
//! observers (cart-count badge, cart page) resynchronize without coupling.

use tokio::sync::{broadcast, watch};

use karai_api::ApiError;
use karai_domain::cart::{CartItem, cart_total, is_valid_quantity};
use karai_domain::id::{CartItemId, MealId};
use karai_domain::user::Role;

use crate::gateway::CartGateway;
use crate::inflight::{KeyedLocks, SeqGate};
use crate::loadable::Loadable;
use crate::session::{SessionState, SessionStore};
use crate::store::Store;

/// Broadcast on every successful cart mutation, scoped to this process
/// (the browser session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    Changed,
}

pub struct CartController<G> {
    gateway: G,
    session: SessionStore,
    items: Store<Loadable<Vec<CartItem>>>,
    events: broadcast::Sender<CartEvent>,
    refresh_gate: SeqGate,
    item_locks: KeyedLocks,
}

impl<G: CartGateway> CartController<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            gateway,
            session,
            items: Store::default(),
            events,
            refresh_gate: SeqGate::new(),
            item_locks: KeyedLocks::new(),
        }
    }

    pub fn items(&self) -> Loadable<Vec<CartItem>> {
        self.items.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Loadable<Vec<CartItem>>> {
        self.items.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Derived total over the current lines; recomputed on every read,
    /// never persisted.
    pub fn total(&self) -> f64 {
        match self.items.get() {
            Loadable::Ready(items) => cart_total(&items),
            _ => 0.0,
        }
    }

    /// Refetch the full cart. Stale responses (superseded by a later
    /// refresh that already committed) are discarded.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let seq = self.refresh_gate.begin();
        if matches!(self.items.get(), Loadable::NotAsked) {
            self.items.set(Loadable::Loading);
        }
        match self.gateway.list_items().await {
            Ok(list) => {
                if self.refresh_gate.try_commit(seq) {
                    self.items.set(Loadable::Ready(list));
                } else {
                    tracing::debug!(seq, "discarding stale cart refresh");
                }
                Ok(())
            }
            Err(e) => {
                // Keep the last good list on a failed refresh; only an
                // initial load surfaces the failure as view state.
                if self.refresh_gate.try_commit(seq)
                    && !matches!(self.items.get(), Loadable::Ready(_))
                {
                    self.items.set(Loadable::Failed(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Add a meal to the cart. Only an authenticated customer may call
    /// this; anyone else is rejected before any request is issued.
    pub async fn add(&self, meal_id: &MealId, quantity: u32) -> Result<(), ApiError> {
        self.require_customer()?;
        if !is_valid_quantity(quantity) {
            return Err(ApiError::validation("quantity must be at least 1"));
        }
        let lock = self.item_locks.lock_for(meal_id.as_str());
        let _guard = lock.lock().await;
        self.gateway.add_item(meal_id, quantity).await?;
        self.refresh().await?;
        self.notify();
        Ok(())
    }

    /// Set a line's quantity. A target below 1 is rejected locally with no
    /// request issued and no state change.
    pub async fn set_quantity(&self, id: &CartItemId, quantity: u32) -> Result<(), ApiError> {
        if !is_valid_quantity(quantity) {
            return Err(ApiError::validation("quantity must be at least 1"));
        }
        let lock = self.item_locks.lock_for(id.as_str());
        let _guard = lock.lock().await;
        self.gateway.set_quantity(id, quantity).await?;
        self.refresh().await?;
        self.notify();
        Ok(())
    }

    /// Remove a line unconditionally.
    pub async fn remove(&self, id: &CartItemId) -> Result<(), ApiError> {
        let lock = self.item_locks.lock_for(id.as_str());
        let _guard = lock.lock().await;
        self.gateway.remove_item(id).await?;
        self.refresh().await?;
        self.notify();
        Ok(())
    }

    fn require_customer(&self) -> Result<(), ApiError> {
        match self.session.state() {
            SessionState::Authenticated(user) if user.role == Role::Customer => Ok(()),
            _ => Err(ApiError::Authorization),
        }
    }

    fn notify(&self) {
        // No subscribers is fine.
        let _ = self.events.send(CartEvent::Changed);
    }
}
