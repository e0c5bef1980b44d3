//! Domain fixture constructors shared across test targets.

use chrono::{TimeZone, Utc};

use karai_domain::cart::CartItem;
use karai_domain::category::{Category, CategoryCounts};
use karai_domain::id::{CartItemId, CategoryId, MealId, OrderId, ProviderId, UserId};
use karai_domain::meal::{Cuisine, Dietary, Meal};
use karai_domain::order::{Order, OrderItem, OrderMeal, OrderStatus};
use karai_domain::provider::ProviderProfile;
use karai_domain::user::{Role, User, UserStatus};

pub fn test_user(id: &str, role: Role) -> User {
    User {
        id: UserId::from(id),
        name: format!("user {id}"),
        email: format!("{id}@example.com"),
        role,
        status: UserStatus::Active,
        image: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn test_customer() -> User {
    test_user("u_customer", Role::Customer)
}

pub fn test_provider_user() -> User {
    test_user("u_provider", Role::Provider)
}

pub fn test_admin() -> User {
    test_user("u_admin", Role::Admin)
}

pub fn test_category(id: &str, name: &str, meals: u64) -> Category {
    Category {
        id: CategoryId::from(id),
        name: name.to_owned(),
        slug: karai_domain::category::derive_slug(name),
        image_url: None,
        counts: Some(CategoryCounts { meals }),
    }
}

pub fn test_meal(id: &str, provider: &str, price: f64) -> Meal {
    Meal {
        id: MealId::from(id),
        name: format!("meal {id}"),
        description: "a test meal".to_owned(),
        price,
        image_url: None,
        is_available: true,
        cuisine: Cuisine::Bengali,
        dietary: Dietary::NonVeg,
        category_id: CategoryId::from("cat_1"),
        provider_id: ProviderId::from(provider),
        user_id: UserId::from("u_provider"),
        category: None,
    }
}

pub fn test_cart_item(id: &str, meal: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id: CartItemId::from(id),
        meal_id: MealId::from(meal),
        quantity,
        meal_name: format!("meal {meal}"),
        meal_price: price,
        meal_image: None,
        provider_id: Some(ProviderId::from("prov_1")),
    }
}

pub fn test_order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        customer_id: UserId::from("u_customer"),
        provider_id: ProviderId::from("prov_1"),
        address: "12 Mirpur Road, Dhaka".to_owned(),
        total_amount: 300.0,
        status,
        created_at: Utc.with_ymd_and_hms(2026, 5, 2, 12, 30, 0).unwrap(),
        items: vec![OrderItem {
            id: format!("{id}_item_1"),
            meal_id: Some(MealId::from("meal_1")),
            quantity: 2,
            price: 150.0,
            meal: Some(OrderMeal {
                id: MealId::from("meal_1"),
                name: "Kacchi Biryani".to_owned(),
                price: 150.0,
                image_url: None,
                cuisine: Some(Cuisine::Bengali),
                dietary: Some(Dietary::NonVeg),
            }),
        }],
    }
}

pub fn test_provider_profile(id: &str, user: &str) -> ProviderProfile {
    ProviderProfile {
        id: ProviderId::from(id),
        user_id: UserId::from(user),
        restaurant_name: "Dhaka Biryani House".to_owned(),
        address: "Mirpur 10, Dhaka".to_owned(),
        phone: "01700000000".to_owned(),
        logo: None,
    }
}
