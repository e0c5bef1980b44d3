//! Category resource calls.

use karai_domain::category::{Category, CategoryInput};
use karai_domain::id::CategoryId;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/api/categories").await
    }

    pub async fn get_category(&self, id: &CategoryId) -> Result<Category, ApiError> {
        self.get(&format!("/api/categories/{id}")).await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.post("/api/categories", input).await
    }

    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        self.put(&format!("/api/categories/{id}"), input).await
    }

    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/categories/{id}")).await
    }
}
