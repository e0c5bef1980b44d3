//! Provider dashboard: profile management, meal management (gated on a
//! profile existing), incoming orders, and stats.

use karai_api::ApiError;
use karai_domain::id::MealId;
use karai_domain::meal::{Meal, MealFilter, MealInput, MealPatch};
use karai_domain::order::Order;
use karai_domain::provider::{ProviderInput, ProviderProfile};
use karai_domain::stats::ProviderStats;
use karai_domain::user::Role;

use crate::confirm::Confirmation;
use crate::dashboard::{Access, check_access};
use crate::gateway::{CatalogGateway, OrderGateway, ProviderGateway};
use crate::loadable::Loadable;
use crate::orders::OrderController;
use crate::session::{SessionState, SessionStore};
use crate::store::Store;

// ── Profile ──────────────────────────────────────────────────────────────────

pub struct ProviderProfileView<G> {
    gateway: G,
    session: SessionStore,
    profile: Store<Loadable<Option<ProviderProfile>>>,
}

impl<G: ProviderGateway> ProviderProfileView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            profile: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Provider)
    }

    pub fn profile(&self) -> Loadable<Option<ProviderProfile>> {
        self.profile.get()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        let SessionState::Authenticated(user) = self.session.state() else {
            return Err(ApiError::Authorization);
        };
        if user.role != Role::Provider {
            return Err(ApiError::Authorization);
        }
        self.profile.set(Loadable::Loading);
        match self.gateway.find_profile(&user.id).await {
            Ok(profile) => {
                self.profile.set(Loadable::Ready(profile));
                Ok(())
            }
            Err(e) => {
                self.profile.set(Loadable::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Create the profile, or update the existing one in place.
    pub async fn save(&self, input: &ProviderInput) -> Result<ProviderProfile, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        if input.restaurant_name.trim().is_empty() {
            return Err(ApiError::validation("restaurant name is required"));
        }
        let saved = match self.profile.get().ready().cloned().flatten() {
            Some(existing) => self.gateway.update_profile(&existing.id, input).await?,
            None => self.gateway.create_profile(input).await?,
        };
        self.profile.set(Loadable::Ready(Some(saved.clone())));
        Ok(saved)
    }

    /// Two-step confirmed delete of the owner's profile.
    pub async fn delete(&self, confirm: &mut Confirmation) -> Result<bool, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        let Some(existing) = self.profile.get().ready().cloned().flatten() else {
            return Err(ApiError::validation("no profile to delete"));
        };
        if !confirm.take() {
            confirm.request();
            return Ok(false);
        }
        self.gateway.delete_profile(&existing.id).await?;
        self.profile.set(Loadable::Ready(None));
        Ok(true)
    }
}

// ── Meals ────────────────────────────────────────────────────────────────────

/// Manage-meals view state. Without a provider profile the view prompts to
/// create one and renders no meal form at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MealsViewState {
    #[default]
    NotAsked,
    Loading,
    NeedsProfile,
    Ready {
        profile: ProviderProfile,
        meals: Vec<Meal>,
    },
    Failed(String),
}

pub struct ProviderMealsView<G> {
    gateway: G,
    session: SessionStore,
    state: Store<MealsViewState>,
}

impl<G: ProviderGateway + CatalogGateway> ProviderMealsView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            state: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Provider)
    }

    pub fn state(&self) -> MealsViewState {
        self.state.get()
    }

    /// Whether the meal creation/edit form may be rendered.
    pub fn meal_form_available(&self) -> bool {
        matches!(self.state.get(), MealsViewState::Ready { .. })
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        let SessionState::Authenticated(user) = self.session.state() else {
            return Err(ApiError::Authorization);
        };
        if user.role != Role::Provider {
            return Err(ApiError::Authorization);
        }
        self.state.set(MealsViewState::Loading);
        let profile = match self.gateway.find_profile(&user.id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                self.state.set(MealsViewState::NeedsProfile);
                return Ok(());
            }
            Err(e) => {
                self.state.set(MealsViewState::Failed(e.to_string()));
                return Err(e);
            }
        };
        let filter = MealFilter {
            provider_id: Some(profile.id.clone()),
            ..Default::default()
        };
        match self.gateway.list_meals(&filter).await {
            Ok(page) => {
                self.state.set(MealsViewState::Ready {
                    profile,
                    meals: page.items,
                });
                Ok(())
            }
            Err(e) => {
                self.state.set(MealsViewState::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Create a meal under the provider's profile. Requires the profile to
    /// exist — the referential precondition is enforced here, before any
    /// request, not just in the data layer.
    pub async fn create_meal(&self, mut input: MealInput) -> Result<Meal, ApiError> {
        let MealsViewState::Ready { profile, .. } = self.state.get() else {
            return Err(ApiError::validation("create a provider profile first"));
        };
        if input.price <= 0.0 {
            return Err(ApiError::validation("price must be positive"));
        }
        input.provider_id = Some(profile.id.clone());
        let created = CatalogGateway::create_meal(&self.gateway, &input).await?;
        self.load().await?;
        Ok(created)
    }

    pub async fn update_meal(&self, id: &MealId, patch: &MealPatch) -> Result<Meal, ApiError> {
        if !self.meal_form_available() {
            return Err(ApiError::validation("create a provider profile first"));
        }
        if patch.price.is_some_and(|p| p <= 0.0) {
            return Err(ApiError::validation("price must be positive"));
        }
        let updated = CatalogGateway::update_meal(&self.gateway, id, patch).await?;
        self.load().await?;
        Ok(updated)
    }

    pub async fn delete_meal(
        &self,
        id: &MealId,
        confirm: &mut Confirmation,
    ) -> Result<bool, ApiError> {
        if !self.meal_form_available() {
            return Err(ApiError::validation("create a provider profile first"));
        }
        if !confirm.take() {
            confirm.request();
            return Ok(false);
        }
        CatalogGateway::delete_meal(&self.gateway, id).await?;
        self.load().await?;
        Ok(true)
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

/// Incoming orders: forward transitions only, one step at a time.
pub struct ProviderOrdersView<G> {
    controller: OrderController<G>,
    session: SessionStore,
}

impl<G: OrderGateway> ProviderOrdersView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            controller: OrderController::new(gateway, session.clone()),
            session,
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Provider)
    }

    pub fn rows(&self) -> Vec<Order> {
        self.controller.orders().ready().cloned().unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.controller.orders().error().map(str::to_owned)
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.controller.refresh().await
    }

    pub async fn advance(&self, order: &Order) -> Result<Order, ApiError> {
        self.controller.advance(order).await
    }
}

// ── Stats ────────────────────────────────────────────────────────────────────

pub struct ProviderStatsView<G> {
    gateway: G,
    session: SessionStore,
    stats: Store<Loadable<ProviderStats>>,
}

impl<G: ProviderGateway> ProviderStatsView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            stats: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Provider)
    }

    pub fn stats(&self) -> Loadable<ProviderStats> {
        self.stats.get()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.stats.set(Loadable::Loading);
        match ProviderGateway::stats(&self.gateway).await {
            Ok(stats) => {
                self.stats.set(Loadable::Ready(stats));
                Ok(())
            }
            Err(e) => {
                self.stats.set(Loadable::Failed(e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicU32, Ordering};

    use karai_api::meals::MealPage;
    use karai_domain::id::{ProviderId, UserId};
    use karai_domain::pagination::PageInfo;
    use karai_testing::fixture::{test_meal, test_provider_profile, test_provider_user};

    use super::*;
    use crate::session::SessionState;

    fn provider_session() -> SessionStore {
        SessionStore::with_state(SessionState::Authenticated(test_provider_user()))
    }

    #[derive(Default)]
    struct MockProviderInner {
        profile: Option<ProviderProfile>,
        meals: Vec<Meal>,
        meal_calls: u32,
    }

    #[derive(Clone, Default)]
    struct MockProvider {
        inner: Arc<Mutex<MockProviderInner>>,
        delete_profile_calls: Arc<AtomicU32>,
    }

    impl MockProvider {
        fn with_profile(profile: ProviderProfile) -> Self {
            let mock = Self::default();
            mock.inner.lock().unwrap().profile = Some(profile);
            mock
        }
    }

    impl ProviderGateway for MockProvider {
        async fn find_profile(
            &self,
            user_id: &UserId,
        ) -> Result<Option<ProviderProfile>, ApiError> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .profile
                .clone()
                .filter(|p| &p.user_id == user_id))
        }
        async fn create_profile(&self, input: &ProviderInput) -> Result<ProviderProfile, ApiError> {
            let profile = ProviderProfile {
                id: ProviderId::from("prov_new"),
                user_id: UserId::from("u_provider"),
                restaurant_name: input.restaurant_name.clone(),
                address: input.address.clone(),
                phone: input.phone.clone(),
                logo: input.logo.clone(),
            };
            self.inner.lock().unwrap().profile = Some(profile.clone());
            Ok(profile)
        }
        async fn update_profile(
            &self,
            _id: &ProviderId,
            input: &ProviderInput,
        ) -> Result<ProviderProfile, ApiError> {
            let mut inner = self.inner.lock().unwrap();
            let profile = inner.profile.as_mut().ok_or(ApiError::NotFound)?;
            profile.restaurant_name = input.restaurant_name.clone();
            Ok(profile.clone())
        }
        async fn delete_profile(&self, _id: &ProviderId) -> Result<(), ApiError> {
            self.delete_profile_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.lock().unwrap().profile = None;
            Ok(())
        }
        async fn stats(&self) -> Result<ProviderStats, ApiError> {
            Ok(ProviderStats::default())
        }
    }

    impl CatalogGateway for MockProvider {
        async fn list_meals(&self, filter: &MealFilter) -> Result<MealPage, ApiError> {
            let items: Vec<Meal> = self
                .inner
                .lock()
                .unwrap()
                .meals
                .iter()
                .filter(|m| {
                    filter
                        .provider_id
                        .as_ref()
                        .is_none_or(|p| &m.provider_id == p)
                })
                .cloned()
                .collect();
            let total = items.len() as u64;
            Ok(MealPage {
                items,
                pagination: PageInfo {
                    total,
                    page: 1,
                    limit: 10,
                    total_pages: 1,
                },
            })
        }
        async fn get_meal(&self, _: &MealId) -> Result<Meal, ApiError> {
            Err(ApiError::NotFound)
        }
        async fn create_meal(&self, input: &MealInput) -> Result<Meal, ApiError> {
            let mut inner = self.inner.lock().unwrap();
            inner.meal_calls += 1;
            let mut meal = test_meal("meal_new", "prov_1", input.price);
            meal.name = input.name.clone();
            inner.meals.push(meal.clone());
            Ok(meal)
        }
        async fn update_meal(&self, _: &MealId, _: &MealPatch) -> Result<Meal, ApiError> {
            self.inner.lock().unwrap().meal_calls += 1;
            Ok(test_meal("meal_1", "prov_1", 100.0))
        }
        async fn delete_meal(&self, id: &MealId) -> Result<(), ApiError> {
            let mut inner = self.inner.lock().unwrap();
            inner.meal_calls += 1;
            inner.meals.retain(|m| &m.id != id);
            Ok(())
        }
    }

    fn meal_input(name: &str, price: f64) -> MealInput {
        MealInput {
            name: name.to_owned(),
            description: None,
            price,
            category_id: "cat_1".into(),
            provider_id: None,
            image_url: None,
            is_available: Some(true),
            cuisine: None,
            dietary: None,
        }
    }

    #[tokio::test]
    async fn should_prompt_profile_creation_when_none_exists() {
        let gateway = MockProvider::default();
        let view = ProviderMealsView::new(gateway.clone(), provider_session());

        view.load().await.unwrap();
        assert_eq!(view.state(), MealsViewState::NeedsProfile);
        assert!(!view.meal_form_available());

        // Meal creation is refused locally while no profile exists.
        let err = view.create_meal(meal_input("Kacchi", 320.0)).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.inner.lock().unwrap().meal_calls, 0);
    }

    #[tokio::test]
    async fn should_list_own_meals_once_profile_exists() {
        let gateway = MockProvider::with_profile(test_provider_profile("prov_1", "u_provider"));
        {
            let mut inner = gateway.inner.lock().unwrap();
            inner.meals.push(test_meal("meal_1", "prov_1", 100.0));
            inner.meals.push(test_meal("meal_other", "prov_2", 100.0));
        }
        let view = ProviderMealsView::new(gateway, provider_session());

        view.load().await.unwrap();
        match view.state() {
            MealsViewState::Ready { meals, profile } => {
                assert_eq!(profile.id.as_str(), "prov_1");
                assert_eq!(meals.len(), 1);
                assert_eq!(meals[0].id.as_str(), "meal_1");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
        assert!(view.meal_form_available());
    }

    #[tokio::test]
    async fn should_create_meal_under_own_profile() {
        let gateway = MockProvider::with_profile(test_provider_profile("prov_1", "u_provider"));
        let view = ProviderMealsView::new(gateway, provider_session());
        view.load().await.unwrap();

        let created = view.create_meal(meal_input("Kacchi", 320.0)).await.unwrap();
        assert_eq!(created.name, "Kacchi");
    }

    #[tokio::test]
    async fn should_reject_non_positive_meal_price() {
        let gateway = MockProvider::with_profile(test_provider_profile("prov_1", "u_provider"));
        let view = ProviderMealsView::new(gateway.clone(), provider_session());
        view.load().await.unwrap();

        let err = view.create_meal(meal_input("Free Lunch", 0.0)).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.inner.lock().unwrap().meal_calls, 0);
    }

    #[tokio::test]
    async fn should_save_profile_as_create_then_update() {
        let gateway = MockProvider::default();
        let view = ProviderProfileView::new(gateway, provider_session());
        view.load().await.unwrap();
        assert_eq!(view.profile().ready(), Some(&None));

        let input = ProviderInput {
            restaurant_name: "Dhaka Biryani House".into(),
            address: "Mirpur 10".into(),
            phone: "01700000000".into(),
            logo: None,
        };
        let created = view.save(&input).await.unwrap();
        assert_eq!(created.id.as_str(), "prov_new");

        let renamed = ProviderInput {
            restaurant_name: "Old Dhaka Biryani".into(),
            ..input
        };
        let updated = view.save(&renamed).await.unwrap();
        assert_eq!(updated.restaurant_name, "Old Dhaka Biryani");
    }

    #[tokio::test]
    async fn should_delete_profile_only_after_confirmation() {
        let gateway = MockProvider::with_profile(test_provider_profile("prov_1", "u_provider"));
        let view = ProviderProfileView::new(gateway.clone(), provider_session());
        view.load().await.unwrap();

        let mut confirm = Confirmation::new();
        assert!(!view.delete(&mut confirm).await.unwrap());
        assert_eq!(gateway.delete_profile_calls.load(Ordering::SeqCst), 0);
        assert!(view.delete(&mut confirm).await.unwrap());
        assert_eq!(view.profile().ready(), Some(&None));
    }

    #[tokio::test]
    async fn should_block_customer_from_provider_views() {
        let gateway = MockProvider::default();
        let session = SessionStore::with_state(SessionState::Authenticated(
            karai_testing::fixture::test_customer(),
        ));
        let view = ProviderMealsView::new(gateway, session);
        assert_eq!(view.access(), Access::NotAuthorized);
        assert!(view.load().await.is_err());
        assert_eq!(view.state(), MealsViewState::NotAsked);
    }
}
