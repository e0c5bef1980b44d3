//! Meal catalog calls.

use serde::Deserialize;

use karai_domain::id::MealId;
use karai_domain::meal::{Meal, MealFilter, MealInput, MealPatch};
use karai_domain::pagination::PageInfo;

use crate::error::ApiError;
use crate::http::ApiClient;

/// A page of catalog results. An empty `items` list is a valid non-error
/// outcome ("no meals found"), never an error state.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPage {
    pub items: Vec<Meal>,
    pub pagination: PageInfo,
}

/// The meal list endpoint nests its payload one level deeper than the rest:
/// `data: { data: [...], pagination: {...} }`.
#[derive(Debug, Deserialize)]
struct MealListData {
    #[serde(default)]
    data: Vec<Meal>,
    pagination: Option<PageInfo>,
}

impl ApiClient {
    /// List meals with optional filters (AND-combined). An empty filter
    /// returns the unfiltered first page. Read-only.
    pub async fn list_meals(&self, filter: &MealFilter) -> Result<MealPage, ApiError> {
        let limit = filter.limit.unwrap_or(10);
        let list: MealListData = self.get_with_query("/api/meals", filter).await?;
        Ok(MealPage {
            items: list.data,
            pagination: list.pagination.unwrap_or_else(|| PageInfo::empty(limit)),
        })
    }

    pub async fn get_meal(&self, id: &MealId) -> Result<Meal, ApiError> {
        self.get(&format!("/api/meals/{id}")).await
    }

    pub async fn create_meal(&self, input: &MealInput) -> Result<Meal, ApiError> {
        self.post("/api/meals", input).await
    }

    pub async fn update_meal(&self, id: &MealId, patch: &MealPatch) -> Result<Meal, ApiError> {
        self.put(&format!("/api/meals/{id}"), patch).await
    }

    pub async fn delete_meal(&self, id: &MealId) -> Result<(), ApiError> {
        self.delete_void(&format!("/api/meals/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_nested_list_payload() {
        let json = r#"{
            "data": [],
            "pagination": {"total": 0, "page": 1, "limit": 10, "totalPages": 1}
        }"#;
        let list: MealListData = serde_json::from_str(json).unwrap();
        assert!(list.data.is_empty());
        assert_eq!(list.pagination.unwrap().limit, 10);
    }

    #[test]
    fn should_tolerate_missing_pagination_block() {
        let list: MealListData = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(list.pagination.is_none());
    }
}
