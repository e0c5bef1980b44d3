//! Ports to the backend, one trait per resource concern.
//!
//! Controllers and dashboard views stay generic over these so their guards
//! and state transitions are testable without a network; [`crate::infra`]
//! implements them on the real API client.

#![allow(async_fn_in_trait)]

use karai_api::ApiError;
use karai_api::meals::MealPage;
use karai_domain::cart::CartItem;
use karai_domain::category::{Category, CategoryInput};
use karai_domain::id::{CartItemId, CategoryId, MealId, OrderId, ProviderId, UserId};
use karai_domain::meal::{Meal, MealFilter, MealInput, MealPatch};
use karai_domain::order::{Order, OrderCreate, OrderStatus};
use karai_domain::provider::{ProviderInput, ProviderProfile};
use karai_domain::review::ReviewInput;
use karai_domain::stats::{AdminStats, ProviderStats};
use karai_domain::user::{User, UserPatch, UserStatus};

/// Session resolution against the external auth collaborator.
pub trait SessionGateway: Send + Sync {
    async fn fetch_session(&self) -> Result<Option<User>, ApiError>;
}

/// Catalog reads plus provider-side meal CRUD.
pub trait CatalogGateway: Send + Sync {
    async fn list_meals(&self, filter: &MealFilter) -> Result<MealPage, ApiError>;
    async fn get_meal(&self, id: &MealId) -> Result<Meal, ApiError>;
    async fn create_meal(&self, input: &MealInput) -> Result<Meal, ApiError>;
    async fn update_meal(&self, id: &MealId, patch: &MealPatch) -> Result<Meal, ApiError>;
    async fn delete_meal(&self, id: &MealId) -> Result<(), ApiError>;
}

/// Cart mutations. The backend decides whether an add merges into an
/// existing line; callers refetch the full cart after every mutation.
pub trait CartGateway: Send + Sync {
    async fn list_items(&self) -> Result<Vec<CartItem>, ApiError>;
    async fn add_item(&self, meal_id: &MealId, quantity: u32) -> Result<(), ApiError>;
    async fn set_quantity(&self, id: &CartItemId, quantity: u32) -> Result<(), ApiError>;
    async fn remove_item(&self, id: &CartItemId) -> Result<(), ApiError>;
}

pub trait OrderGateway: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn create_order(&self, payload: &OrderCreate) -> Result<Order, ApiError>;
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, ApiError>;
    async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError>;
}

pub trait ReviewGateway: Send + Sync {
    async fn submit_review(&self, input: &ReviewInput) -> Result<(), ApiError>;
}

pub trait CategoryGateway: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError>;
    async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError>;
    async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError>;
}

pub trait AdminGateway: Send + Sync {
    async fn stats(&self) -> Result<AdminStats, ApiError>;
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError>;
    async fn update_user_status(&self, id: &UserId, status: UserStatus) -> Result<User, ApiError>;
    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError>;
}

pub trait ProviderGateway: Send + Sync {
    /// The profile owned by `user_id`, if one exists (zero-or-one per
    /// provider user).
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<ProviderProfile>, ApiError>;
    async fn create_profile(&self, input: &ProviderInput) -> Result<ProviderProfile, ApiError>;
    async fn update_profile(
        &self,
        id: &ProviderId,
        input: &ProviderInput,
    ) -> Result<ProviderProfile, ApiError>;
    async fn delete_profile(&self, id: &ProviderId) -> Result<(), ApiError>;
    async fn stats(&self) -> Result<ProviderStats, ApiError>;
}
