//! Review submission.

use karai_domain::review::ReviewInput;

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    pub async fn create_review(&self, input: &ReviewInput) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post("/api/reviews", input).await?;
        Ok(())
    }
}
