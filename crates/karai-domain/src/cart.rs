//! Cart line items and total computation.

use serde::{Deserialize, Serialize};

use crate::id::{CartItemId, MealId, ProviderId};

/// A customer's cart line. Meal name/price/image are captured copies taken
/// when the line was added, so the cart renders without a meal lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub meal_id: MealId,
    /// Always ≥ 1; decrements below 1 must be rejected before any request.
    pub quantity: u32,
    pub meal_name: String,
    pub meal_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<ProviderId>,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.meal_price * f64::from(self.quantity)
    }
}

/// Derived cart total: Σ(meal_price × quantity). Never persisted; recompute
/// on every read.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Whether a requested line quantity satisfies the ≥ 1 invariant.
pub fn is_valid_quantity(quantity: u32) -> bool {
    quantity >= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: CartItemId::from(id),
            meal_id: MealId::from("meal_1"),
            quantity,
            meal_name: "Beef Tehari".into(),
            meal_price: price,
            meal_image: None,
            provider_id: Some(ProviderId::from("prov_1")),
        }
    }

    #[test]
    fn should_sum_line_totals() {
        let items = vec![item("c1", 120.0, 2), item("c2", 80.5, 1)];
        assert_eq!(cart_total(&items), 320.5);
    }

    #[test]
    fn should_return_zero_total_for_empty_cart() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn should_reject_zero_quantity() {
        assert!(!is_valid_quantity(0));
        assert!(is_valid_quantity(1));
        assert!(is_valid_quantity(7));
    }

    #[test]
    fn should_deserialize_cart_item_from_wire_shape() {
        let json = r#"{
            "id": "cart_1",
            "mealId": "meal_9",
            "quantity": 3,
            "mealName": "Chicken Chap",
            "mealPrice": 150.0,
            "providerId": "prov_2"
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.line_total(), 450.0);
    }
}
