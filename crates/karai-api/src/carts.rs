//! Cart resource calls.
//!
//! The backend may merge an added meal into an existing line or create a new
//! one; callers must not assume which and should refetch the full cart after
//! every mutation.

use serde::Serialize;

use karai_domain::cart::CartItem;
use karai_domain::id::{CartItemId, MealId};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub meal_id: MealId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateCartItem {
    pub quantity: u32,
}

impl ApiClient {
    pub async fn list_cart_items(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get("/api/carts").await
    }

    pub async fn add_cart_item(&self, payload: &AddCartItem) -> Result<CartItem, ApiError> {
        self.post("/api/carts", payload).await
    }

    pub async fn update_cart_item(
        &self,
        id: &CartItemId,
        payload: &UpdateCartItem,
    ) -> Result<CartItem, ApiError> {
        self.put(&format!("/api/carts/{id}"), payload).await
    }

    pub async fn delete_cart_item(&self, id: &CartItemId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/carts/{id}")).await
    }
}
