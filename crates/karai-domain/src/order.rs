//! Orders: lifecycle state machine, transition authority, and creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{MealId, OrderId, ProviderId, UserId};
use crate::meal::{Cuisine, Dietary};
use crate::user::Role;

/// Order lifecycle status.
///
/// Forward path: `PLACED → PREPARING → READY → DELIVERED`.
/// The only cancellation is `PLACED → CANCELLED`. `DELIVERED` and
/// `CANCELLED` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "PLACED",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// The single next forward step, if any.
    pub fn next_forward(self) -> Option<Self> {
        match self {
            Self::Placed => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected status transition. Raised by the client-side guard before any
/// request is issued; the backend re-checks independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot move order from {from} to {to}")]
    InvalidStep { from: OrderStatus, to: OrderStatus },
    #[error("{role} is not allowed to move an order to {to}")]
    RoleNotAllowed { role: Role, to: OrderStatus },
}

/// Check whether `role` may move an order from `from` to `to`.
///
/// - CUSTOMER: only `PLACED → CANCELLED`.
/// - PROVIDER: only the single next forward step from the current status.
/// - ADMIN: read/delete only, never drives transitions.
pub fn check_transition(
    role: Role,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<(), TransitionError> {
    match role {
        Role::Customer => {
            if to != OrderStatus::Cancelled {
                return Err(TransitionError::RoleNotAllowed { role, to });
            }
            if from != OrderStatus::Placed {
                return Err(TransitionError::InvalidStep { from, to });
            }
            Ok(())
        }
        Role::Provider => {
            if to == OrderStatus::Cancelled {
                return Err(TransitionError::RoleNotAllowed { role, to });
            }
            if from.next_forward() != Some(to) {
                return Err(TransitionError::InvalidStep { from, to });
            }
            Ok(())
        }
        Role::Admin => Err(TransitionError::RoleNotAllowed { role, to }),
    }
}

/// Meal snapshot nested in an order item (slimmer than the catalog
/// [`crate::meal::Meal`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMeal {
    pub id: MealId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Dietary>,
}

/// One line of a placed order. `price` is the captured per-unit price at
/// creation time, not a live meal lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<MealId>,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<OrderMeal>,
}

/// A placed order. `total_amount` is computed at creation and immutable
/// thereafter, regardless of later price changes to the referenced meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub provider_id: ProviderId,
    pub address: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

// ── Order creation ───────────────────────────────────────────────────────────

/// One draft line; `provider_id` is carried for the single-provider check
/// and never sent on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraftItem {
    pub meal_id: MealId,
    pub quantity: u32,
    /// Captured unit price from the cart line.
    pub price: f64,
    pub provider_id: Option<ProviderId>,
}

/// Order submission draft, validated before any request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub provider_id: ProviderId,
    pub address: String,
    pub items: Vec<OrderDraftItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderDraftError {
    #[error("delivery address is required")]
    EmptyAddress,
    #[error("order must contain at least one item")]
    NoItems,
    #[error("item quantity must be at least 1")]
    ZeroQuantity,
    #[error("all items in an order must belong to one provider")]
    MixedProviders,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<(), OrderDraftError> {
        if self.address.trim().is_empty() {
            return Err(OrderDraftError::EmptyAddress);
        }
        if self.items.is_empty() {
            return Err(OrderDraftError::NoItems);
        }
        if self.items.iter().any(|i| i.quantity < 1) {
            return Err(OrderDraftError::ZeroQuantity);
        }
        let mixed = self
            .items
            .iter()
            .filter_map(|i| i.provider_id.as_ref())
            .any(|p| *p != self.provider_id);
        if mixed {
            return Err(OrderDraftError::MixedProviders);
        }
        Ok(())
    }

    /// Total from the captured per-item prices, not a live meal lookup.
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    /// Validate and convert into the wire payload, computing `totalAmount`.
    pub fn into_payload(self) -> Result<OrderCreate, OrderDraftError> {
        self.validate()?;
        let total_amount = self.total_amount();
        Ok(OrderCreate {
            provider_id: self.provider_id,
            address: self.address,
            total_amount,
            items: self
                .items
                .into_iter()
                .map(|i| OrderItemInput {
                    meal_id: i.meal_id,
                    quantity: i.quantity,
                    price: i.price,
                })
                .collect(),
        })
    }
}

/// Wire payload for `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub provider_id: ProviderId,
    pub address: String,
    pub total_amount: f64,
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub meal_id: MealId,
    pub quantity: u32,
    pub price: f64,
}
