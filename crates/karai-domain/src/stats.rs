//! Read-only aggregation payloads for the admin and provider dashboards.

use serde::{Deserialize, Serialize};

/// `GET /api/admin/stats` payload. Pure display; no logic beyond rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_customers: u64,
    pub total_providers: u64,
    pub active_users: u64,
    pub suspended_users: u64,
    pub total_meals: u64,
    pub total_categories: u64,
    pub total_provider_profiles: u64,
    pub total_orders: u64,
    pub placed_orders: u64,
    pub preparing_orders: u64,
    pub ready_orders: u64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
    pub total_revenue: f64,
}

/// Provider stats payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderStats {
    pub provider_name: String,
    pub restaurant_name: String,
    pub logo: Option<String>,
    pub total_meals: u64,
    pub total_categories_used: u64,
    pub total_orders: u64,
    pub placed_orders: u64,
    pub preparing_orders: u64,
    pub ready_orders: u64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
    pub total_revenue: f64,
}
