//! Customer dashboard: profile, order history with cancel/review, and the
//! cart page with its one-line-per-order checkout flow.

use std::sync::Arc;

use karai_api::ApiError;
use karai_domain::cart::{CartItem, cart_total};
use karai_domain::id::{CartItemId, MealId};
use karai_domain::order::{Order, OrderDraft, OrderDraftItem};
use karai_domain::user::{Role, User};

use crate::cart::CartController;
use crate::dashboard::{Access, check_access};
use crate::gateway::{CartGateway, OrderGateway, ReviewGateway};
use crate::loadable::Loadable;
use crate::orders::OrderController;
use crate::reviews::{ReviewController, ReviewForm};
use crate::session::SessionStore;

// ── Profile ──────────────────────────────────────────────────────────────────

pub struct CustomerProfileView {
    session: SessionStore,
}

impl CustomerProfileView {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Customer)
    }

    pub fn user(&self) -> Option<User> {
        self.session.state().user().cloned()
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

pub struct CustomerOrdersView<G, R> {
    orders: OrderController<G>,
    reviews: ReviewController<R>,
    session: SessionStore,
}

impl<G: OrderGateway, R: ReviewGateway> CustomerOrdersView<G, R> {
    pub fn new(order_gateway: G, review_gateway: R, session: SessionStore) -> Self {
        Self {
            orders: OrderController::new(order_gateway, session.clone()),
            reviews: ReviewController::new(review_gateway),
            session,
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Customer)
    }

    pub fn rows(&self) -> Vec<Order> {
        self.orders.orders().ready().cloned().unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.orders.orders().error().map(str::to_owned)
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.orders.refresh().await
    }

    /// Cancel a PLACED order; any other state is rejected locally.
    pub async fn cancel(&self, order: &Order) -> Result<Order, ApiError> {
        self.orders.cancel(order).await
    }

    /// Whether the review action is offered for this (order, meal) pair.
    pub fn can_review(&self, order: &Order, meal_id: &MealId) -> bool {
        self.reviews.can_review(order, meal_id)
    }

    /// Open the review modal: rating starts unselected (0), keeping submit
    /// disabled.
    pub fn open_review(&self, meal_id: MealId) -> ReviewForm {
        ReviewForm::new(meal_id)
    }

    pub async fn submit_review(&self, order: &Order, form: &ReviewForm) -> Result<(), ApiError> {
        self.reviews.submit(order, form).await?;
        let _ = self.orders.refresh().await;
        Ok(())
    }
}

// ── Cart page ────────────────────────────────────────────────────────────────

/// What the cart page renders. Empty is explicit and distinct from both the
/// loading and the error state.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView {
    Loading,
    Empty,
    Items { items: Vec<CartItem>, total: f64 },
    Failed(String),
}

pub struct CartPageView<C, O> {
    cart: Arc<CartController<C>>,
    orders: OrderController<O>,
    session: SessionStore,
}

impl<C: CartGateway, O: OrderGateway> CartPageView<C, O> {
    pub fn new(cart: Arc<CartController<C>>, order_gateway: O, session: SessionStore) -> Self {
        Self {
            cart,
            orders: OrderController::new(order_gateway, session.clone()),
            session,
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Customer)
    }

    pub fn view(&self) -> CartView {
        match self.cart.items() {
            Loadable::NotAsked | Loadable::Loading => CartView::Loading,
            Loadable::Ready(items) if items.is_empty() => CartView::Empty,
            Loadable::Ready(items) => {
                let total = cart_total(&items);
                CartView::Items { items, total }
            }
            Loadable::Failed(message) => CartView::Failed(message),
        }
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        self.cart.refresh().await
    }

    pub async fn set_quantity(&self, id: &CartItemId, quantity: u32) -> Result<(), ApiError> {
        self.cart.set_quantity(id, quantity).await
    }

    pub async fn remove(&self, id: &CartItemId) -> Result<(), ApiError> {
        self.cart.remove(id).await
    }

    /// Place an order for a single cart line (orders are one-provider; the
    /// page submits one line at a time), then drop the line and refetch.
    pub async fn place_order(&self, item: &CartItem, address: &str) -> Result<Order, ApiError> {
        let Some(provider_id) = item.provider_id.clone() else {
            return Err(ApiError::validation("provider info missing for this item"));
        };
        let draft = OrderDraft {
            provider_id: provider_id.clone(),
            address: address.to_owned(),
            items: vec![OrderDraftItem {
                meal_id: item.meal_id.clone(),
                quantity: item.quantity,
                price: item.meal_price,
                provider_id: Some(provider_id),
            }],
        };
        let order = self.orders.place(draft).await?;
        self.cart.remove(&item.id).await?;
        Ok(order)
    }
}
