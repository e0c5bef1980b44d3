//! Newtype wrappers for domain identifiers.
//!
//! The backend assigns ids as opaque strings (cuid-style); wrappers keep the
//! different resources from being mixed up at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

string_id!(
    /// Identifies a user account.
    UserId
);
string_id!(
    /// Identifies a provider (restaurant) profile.
    ProviderId
);
string_id!(
    /// Identifies a meal category.
    CategoryId
);
string_id!(
    /// Identifies a sellable meal.
    MealId
);
string_id!(
    /// Identifies a cart line item.
    CartItemId
);
string_id!(
    /// Identifies a placed order.
    OrderId
);
