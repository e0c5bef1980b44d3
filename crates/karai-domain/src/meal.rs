//! Meals and the catalog filter contract.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::id::{CategoryId, MealId, ProviderId, UserId};
use crate::pagination::SortOrder;

/// Cuisine classification. Wire format: SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cuisine {
    Bengali,
    Indian,
    Chinese,
    Italian,
    Thai,
}

/// Dietary classification. Wire format: SCREAMING_SNAKE_CASE
/// (`NON_VEG` for [`Dietary::NonVeg`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dietary {
    Veg,
    NonVeg,
    Vegan,
    Halal,
}

/// A sellable catalog item, owned by the provider user who created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub description: String,
    /// Positive; the backend validates, views must not render non-positive
    /// prices as orderable.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
    pub cuisine: Cuisine,
    pub dietary: Dietary,
    pub category_id: CategoryId,
    pub provider_id: ProviderId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Payload for creating a meal. `provider_id` is optional when the backend
/// assigns it from the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<ProviderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Dietary>,
}

/// Partial update payload; absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Dietary>,
}

/// Catalog list filter. All fields optional and AND-combined; absent fields
/// are omitted from the query string entirely. No fields set means the
/// unfiltered first page.
///
/// Wire keys are camelCase (`categoryId`, `minPrice`, ...), matching the
/// backend's query contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary: Option<Dietary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<ProviderId>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Observed sort key: `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl MealFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
