//! Gateway implementations over the real backend client.

use karai_api::carts::{AddCartItem, UpdateCartItem};
use karai_api::meals::MealPage;
use karai_api::{ApiClient, ApiError};
use karai_domain::cart::CartItem;
use karai_domain::category::{Category, CategoryInput};
use karai_domain::id::{CartItemId, CategoryId, MealId, OrderId, ProviderId, UserId};
use karai_domain::meal::{Meal, MealFilter, MealInput, MealPatch};
use karai_domain::order::{Order, OrderCreate, OrderStatus};
use karai_domain::provider::{ProviderInput, ProviderProfile};
use karai_domain::review::ReviewInput;
use karai_domain::stats::{AdminStats, ProviderStats};
use karai_domain::user::{User, UserPatch, UserStatus};

use crate::gateway::{
    AdminGateway, CartGateway, CatalogGateway, CategoryGateway, OrderGateway, ProviderGateway,
    ReviewGateway, SessionGateway,
};

impl SessionGateway for ApiClient {
    async fn fetch_session(&self) -> Result<Option<User>, ApiError> {
        Ok(self.get_session(None).await?.user)
    }
}

impl CatalogGateway for ApiClient {
    async fn list_meals(&self, filter: &MealFilter) -> Result<MealPage, ApiError> {
        ApiClient::list_meals(self, filter).await
    }
    async fn get_meal(&self, id: &MealId) -> Result<Meal, ApiError> {
        ApiClient::get_meal(self, id).await
    }
    async fn create_meal(&self, input: &MealInput) -> Result<Meal, ApiError> {
        ApiClient::create_meal(self, input).await
    }
    async fn update_meal(&self, id: &MealId, patch: &MealPatch) -> Result<Meal, ApiError> {
        ApiClient::update_meal(self, id, patch).await
    }
    async fn delete_meal(&self, id: &MealId) -> Result<(), ApiError> {
        ApiClient::delete_meal(self, id).await
    }
}

impl CartGateway for ApiClient {
    async fn list_items(&self) -> Result<Vec<CartItem>, ApiError> {
        self.list_cart_items().await
    }
    async fn add_item(&self, meal_id: &MealId, quantity: u32) -> Result<(), ApiError> {
        self.add_cart_item(&AddCartItem {
            meal_id: meal_id.clone(),
            quantity: Some(quantity),
        })
        .await?;
        Ok(())
    }
    async fn set_quantity(&self, id: &CartItemId, quantity: u32) -> Result<(), ApiError> {
        self.update_cart_item(id, &UpdateCartItem { quantity }).await?;
        Ok(())
    }
    async fn remove_item(&self, id: &CartItemId) -> Result<(), ApiError> {
        self.delete_cart_item(id).await
    }
}

impl OrderGateway for ApiClient {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        ApiClient::list_orders(self).await
    }
    async fn create_order(&self, payload: &OrderCreate) -> Result<Order, ApiError> {
        ApiClient::create_order(self, payload).await
    }
    async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<Order, ApiError> {
        self.update_order_status(id, status).await
    }
    async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError> {
        ApiClient::delete_order(self, id).await
    }
}

impl ReviewGateway for ApiClient {
    async fn submit_review(&self, input: &ReviewInput) -> Result<(), ApiError> {
        self.create_review(input).await
    }
}

impl CategoryGateway for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        ApiClient::list_categories(self).await
    }
    async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        ApiClient::create_category(self, input).await
    }
    async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        ApiClient::update_category(self, id, input).await
    }
    async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        ApiClient::delete_category(self, id).await
    }
}

impl AdminGateway for ApiClient {
    async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.admin_stats().await
    }
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        ApiClient::list_users(self).await
    }
    async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        ApiClient::update_user(self, id, patch).await
    }
    async fn update_user_status(&self, id: &UserId, status: UserStatus) -> Result<User, ApiError> {
        ApiClient::update_user_status(self, id, status).await
    }
    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        ApiClient::delete_user(self, id).await
    }
}

impl ProviderGateway for ApiClient {
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<ProviderProfile>, ApiError> {
        // The backend has no owner-scoped lookup; list and match, as the
        // profile page has always done.
        let providers = self.list_providers().await?;
        Ok(providers.into_iter().find(|p| &p.user_id == user_id))
    }
    async fn create_profile(&self, input: &ProviderInput) -> Result<ProviderProfile, ApiError> {
        self.create_provider(input).await
    }
    async fn update_profile(
        &self,
        id: &ProviderId,
        input: &ProviderInput,
    ) -> Result<ProviderProfile, ApiError> {
        self.update_provider(id, input).await
    }
    async fn delete_profile(&self, id: &ProviderId) -> Result<(), ApiError> {
        self.delete_provider(id).await
    }
    async fn stats(&self) -> Result<ProviderStats, ApiError> {
        self.provider_stats().await
    }
}
