//! Order resource calls. The list endpoint is role-scoped by the backend
//! (customers see their own orders, providers their incoming ones, admins
//! everything).

use serde::Serialize;

use karai_domain::id::OrderId;
use karai_domain::order::{Order, OrderCreate, OrderStatus};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy, Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

impl ApiClient {
    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/api/orders").await
    }

    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/api/orders/{id}")).await
    }

    pub async fn create_order(&self, payload: &OrderCreate) -> Result<Order, ApiError> {
        self.post("/api/orders", payload).await
    }

    /// Issue a status transition. Legality for the acting role must already
    /// have been checked by the caller; the backend re-checks regardless.
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.patch(&format!("/api/orders/{id}/status"), &StatusUpdate { status })
            .await
    }

    pub async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/orders/{id}")).await
    }
}
