//! Admin-only calls: platform stats and user management.

use serde::Serialize;

use karai_domain::id::UserId;
use karai_domain::stats::AdminStats;
use karai_domain::user::{User, UserPatch, UserStatus};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy, Serialize)]
struct StatusUpdate {
    status: UserStatus,
}

impl ApiClient {
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        self.get("/api/admin/stats").await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/api/admin/users").await
    }

    pub async fn get_user(&self, id: &UserId) -> Result<User, ApiError> {
        self.get(&format!("/api/admin/users/{id}")).await
    }

    pub async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        self.patch(&format!("/api/admin/users/{id}"), patch).await
    }

    pub async fn update_user_status(
        &self,
        id: &UserId,
        status: UserStatus,
    ) -> Result<User, ApiError> {
        self.patch(
            &format!("/api/admin/users/{id}/status"),
            &StatusUpdate { status },
        )
        .await
    }

    pub async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/admin/users/{id}")).await
    }
}
