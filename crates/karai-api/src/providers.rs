//! Provider profile and stats calls.

use karai_domain::id::ProviderId;
use karai_domain::provider::{ProviderInput, ProviderProfile};
use karai_domain::stats::ProviderStats;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn list_providers(&self) -> Result<Vec<ProviderProfile>, ApiError> {
        self.get("/api/providers").await
    }

    pub async fn get_provider(&self, id: &ProviderId) -> Result<ProviderProfile, ApiError> {
        self.get(&format!("/api/providers/{id}")).await
    }

    pub async fn create_provider(&self, input: &ProviderInput) -> Result<ProviderProfile, ApiError> {
        self.post("/api/providers", input).await
    }

    pub async fn update_provider(
        &self,
        id: &ProviderId,
        input: &ProviderInput,
    ) -> Result<ProviderProfile, ApiError> {
        self.put(&format!("/api/providers/{id}"), input).await
    }

    pub async fn delete_provider(&self, id: &ProviderId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/providers/{id}")).await
    }

    pub async fn provider_stats(&self) -> Result<ProviderStats, ApiError> {
        self.get("/api/providers/stats").await
    }
}
