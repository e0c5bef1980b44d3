//! Provider (restaurant) profiles.

use serde::{Deserialize, Serialize};

use crate::id::{ProviderId, UserId};

/// A restaurant profile. Each PROVIDER user owns zero or one; meal
/// management requires the profile to exist first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    pub id: ProviderId,
    pub user_id: UserId,
    pub restaurant_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Create/replace payload for the owner's profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInput {
    pub restaurant_name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_profile_from_wire_shape() {
        let json = r#"{
            "id": "prov_1",
            "userId": "u7",
            "restaurantName": "Dhaka Biryani House",
            "address": "Mirpur 10",
            "phone": "01700000000"
        }"#;
        let profile: ProviderProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.restaurant_name, "Dhaka Biryani House");
        assert!(profile.logo.is_none());
    }

    #[test]
    fn should_skip_absent_logo_on_input() {
        let input = ProviderInput {
            restaurant_name: "Dhaka Biryani House".into(),
            address: "Mirpur 10".into(),
            phone: "01700000000".into(),
            logo: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("logo").is_none());
    }
}
