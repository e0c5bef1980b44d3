//! Review submission: eligibility gating and the rating form.
//!
//! A meal is reviewable only from a DELIVERED order, once per session — the
//! seen-set lives in local memory only and is not backend-verified (known
//! gap, preserved deliberately).

use std::collections::HashSet;
use std::sync::Mutex;

use karai_api::ApiError;
use karai_domain::id::MealId;
use karai_domain::order::{Order, OrderStatus};
use karai_domain::review::{Rating, ReviewInput};

use crate::gateway::ReviewGateway;

/// Review modal state. Rating starts at 0 ("unselected"); submission stays
/// disabled until a real star is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub meal_id: MealId,
    pub rating: u8,
    pub comment: String,
}

impl ReviewForm {
    pub fn new(meal_id: MealId) -> Self {
        Self {
            meal_id,
            rating: 0,
            comment: String::new(),
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    /// Drives the submit button's enabled state.
    pub fn can_submit(&self) -> bool {
        Rating::new(self.rating).is_ok()
    }
}

pub struct ReviewController<G> {
    gateway: G,
    seen: Mutex<HashSet<MealId>>,
}

impl<G: ReviewGateway> ReviewController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Whether the review action is offered for `meal_id` on this order.
    pub fn can_review(&self, order: &Order, meal_id: &MealId) -> bool {
        order.status == OrderStatus::Delivered
            && order
                .items
                .iter()
                .any(|item| item.meal_id.as_ref() == Some(meal_id))
            && !self.seen.lock().unwrap().contains(meal_id)
    }

    /// Submit a review. The rating bound and eligibility are enforced
    /// before any request; success marks the meal reviewed for this
    /// session.
    pub async fn submit(&self, order: &Order, form: &ReviewForm) -> Result<(), ApiError> {
        let rating =
            Rating::new(form.rating).map_err(|e| ApiError::validation(e.to_string()))?;
        if order.status != OrderStatus::Delivered {
            return Err(ApiError::validation(
                "only delivered orders can be reviewed",
            ));
        }
        if self.seen.lock().unwrap().contains(&form.meal_id) {
            return Err(ApiError::validation("meal already reviewed"));
        }
        let comment = if form.comment.trim().is_empty() {
            None
        } else {
            Some(form.comment.clone())
        };
        self.gateway
            .submit_review(&ReviewInput {
                meal_id: form.meal_id.clone(),
                rating,
                comment,
            })
            .await?;
        self.seen.lock().unwrap().insert(form.meal_id.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use karai_testing::fixture::test_order;

    use super::*;

    #[derive(Clone, Default)]
    struct CountingReviews {
        calls: Arc<AtomicU32>,
    }

    impl ReviewGateway for CountingReviews {
        async fn submit_review(&self, _input: &ReviewInput) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_block_zero_rating_submission() {
        let gateway = CountingReviews::default();
        let controller = ReviewController::new(gateway.clone());
        let order = test_order("ord_1", OrderStatus::Delivered);
        let form = ReviewForm::new(MealId::from("meal_1"));

        assert!(!form.can_submit());
        let err = controller.submit(&order, &form).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_enable_submit_once_rating_selected() {
        let mut form = ReviewForm::new(MealId::from("meal_1"));
        form.set_rating(4);
        assert!(form.can_submit());
        form.set_rating(6);
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn should_only_offer_reviews_on_delivered_orders() {
        let controller = ReviewController::new(CountingReviews::default());
        let meal = MealId::from("meal_1");
        assert!(controller.can_review(&test_order("ord_1", OrderStatus::Delivered), &meal));
        assert!(!controller.can_review(&test_order("ord_2", OrderStatus::Ready), &meal));
        assert!(!controller.can_review(&test_order("ord_3", OrderStatus::Cancelled), &meal));
        // A meal the order does not contain is not reviewable.
        assert!(!controller.can_review(
            &test_order("ord_4", OrderStatus::Delivered),
            &MealId::from("meal_other")
        ));
    }

    #[tokio::test]
    async fn should_track_reviewed_meals_for_the_session() {
        let gateway = CountingReviews::default();
        let controller = ReviewController::new(gateway.clone());
        let order = test_order("ord_1", OrderStatus::Delivered);
        let meal = MealId::from("meal_1");

        let mut form = ReviewForm::new(meal.clone());
        form.set_rating(5);
        controller.submit(&order, &form).await.unwrap();
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        // Repeat submission in the same session is blocked locally.
        assert!(!controller.can_review(&order, &meal));
        let err = controller.submit(&order, &form).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_drop_blank_comment() {
        struct CaptureReviews {
            last: Mutex<Option<ReviewInput>>,
        }
        impl ReviewGateway for CaptureReviews {
            async fn submit_review(&self, input: &ReviewInput) -> Result<(), ApiError> {
                *self.last.lock().unwrap() = Some(input.clone());
                Ok(())
            }
        }

        let controller = ReviewController::new(CaptureReviews {
            last: Mutex::new(None),
        });
        let order = test_order("ord_1", OrderStatus::Delivered);
        let mut form = ReviewForm::new(MealId::from("meal_1"));
        form.set_rating(3);
        form.comment = "   ".into();
        controller.submit(&order, &form).await.unwrap();
        let sent = controller.gateway.last.lock().unwrap().clone().unwrap();
        assert!(sent.comment.is_none());
    }
}
