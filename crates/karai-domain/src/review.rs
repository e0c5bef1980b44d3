//! Meal reviews and rating bounds.

use serde::{Deserialize, Serialize};

use crate::id::MealId;

/// Star rating, 1–5 inclusive. Constructed only through [`Rating::new`] so
/// an out-of-range value never reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5")]
pub struct RatingOutOfRange;

impl Rating {
    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Wire payload for `POST /api/reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    pub meal_id: MealId,
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}
