//! Admin dashboard: platform stats, user management, category management,
//! and the all-orders table.

use karai_api::ApiError;
use karai_domain::category::{Category, CategoryInput, derive_slug};
use karai_domain::id::{CategoryId, OrderId, UserId};
use karai_domain::order::Order;
use karai_domain::stats::AdminStats;
use karai_domain::user::{Role, User, UserPatch, UserStatus};

use crate::confirm::Confirmation;
use crate::dashboard::{Access, check_access};
use crate::gateway::{AdminGateway, CategoryGateway, OrderGateway};
use crate::loadable::Loadable;
use crate::orders::OrderController;
use crate::session::SessionStore;
use crate::store::Store;

// ── Stats ────────────────────────────────────────────────────────────────────

pub struct AdminStatsView<G> {
    gateway: G,
    session: SessionStore,
    stats: Store<Loadable<AdminStats>>,
}

impl<G: AdminGateway> AdminStatsView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            stats: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Admin)
    }

    pub fn stats(&self) -> Loadable<AdminStats> {
        self.stats.get()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.stats.set(Loadable::Loading);
        match self.gateway.stats().await {
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

// ── Users ────────────────────────────────────────────────────────────────────

pub struct AdminUsersView<G> {
    gateway: G,
    session: SessionStore,
    users: Store<Loadable<Vec<User>>>,
}

impl<G: AdminGateway> AdminUsersView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            users: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Admin)
    }

    /// Rows to render. A failed load shows its error alongside an empty
    /// list — never a crash, never a stale grid posing as current.
    pub fn rows(&self) -> Vec<User> {
        self.users.get().ready().cloned().unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.users.get().error().map(str::to_owned)
    }

    pub fn is_loading(&self) -> bool {
        self.users.get().is_loading()
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.users.set(Loadable::Loading);
        match self.gateway.list_users().await {
            Ok(users) => {
                self.users.set(Loadable::Ready(users));
                Ok(())
            }
            Err(e) => {
                self.users.set(Loadable::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn set_status(&self, id: &UserId, status: UserStatus) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.gateway.update_user_status(id, status).await?;
        self.load().await
    }

    /// Edit a user's profile fields. An all-empty patch is rejected before
    /// any request.
    pub async fn update_profile(&self, id: &UserId, patch: &UserPatch) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        if patch.name.is_none() && patch.email.is_none() && patch.image.is_none() {
            return Err(ApiError::validation("nothing to update"));
        }
        self.gateway.update_user(id, patch).await?;
        self.load().await
    }

    /// Two-step delete: the first call arms the confirmation and returns
    /// `false` without touching the network; the second call performs the
    /// delete.
    pub async fn delete(
        &self,
        id: &UserId,
        confirm: &mut Confirmation,
    ) -> Result<bool, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        if !confirm.take() {
            confirm.request();
            return Ok(false);
        }
        self.gateway.delete_user(id).await?;
        self.load().await?;
        Ok(true)
    }
}

// ── Categories ───────────────────────────────────────────────────────────────

/// Category form state. The slug tracks the name (lowercased, hyphenated)
/// until the user edits it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    slug_edited: bool,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            image_url: category.image_url.clone(),
            slug_edited: true,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.slug_edited {
            self.slug = derive_slug(&self.name);
        }
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.slug_edited = !self.slug.is_empty();
        if !self.slug_edited {
            self.slug = derive_slug(&self.name);
        }
    }

    pub fn to_input(&self) -> CategoryInput {
        CategoryInput::new(self.name.clone(), Some(self.slug.clone()), self.image_url.clone())
    }
}

pub struct AdminCategoriesView<G> {
    gateway: G,
    session: SessionStore,
    categories: Store<Loadable<Vec<Category>>>,
}

impl<G: CategoryGateway> AdminCategoriesView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            gateway,
            session,
            categories: Store::default(),
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Admin)
    }

    pub fn rows(&self) -> Vec<Category> {
        self.categories.get().ready().cloned().unwrap_or_default()
    }

    pub fn error(&self) -> Option<String> {
        self.categories.get().error().map(str::to_owned)
    }

    pub async fn load(&self) -> Result<(), ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        self.categories.set(Loadable::Loading);
        match self.gateway.list_categories().await {
            Ok(categories) => {
                self.categories.set(Loadable::Ready(categories));
                Ok(())
            }
            Err(e) => {
                self.categories.set(Loadable::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn create(&self, form: &CategoryForm) -> Result<Category, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        if form.name.trim().is_empty() {
            return Err(ApiError::validation("name is required"));
        }
        let created = self.gateway.create_category(&form.to_input()).await?;
        self.load().await?;
        Ok(created)
    }

    pub async fn update(&self, id: &CategoryId, form: &CategoryForm) -> Result<Category, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        let updated = self.gateway.update_category(id, &form.to_input()).await?;
        self.load().await?;
        Ok(updated)
    }

    /// Whether the delete action is offered for `category` (disabled while
    /// meals are attached, regardless of role).
    pub fn can_delete(&self, category: &Category) -> bool {
        category.can_delete()
    }

    /// Two-step confirmed delete. A category with meals is rejected
    /// locally; the backend enforces the same rule authoritatively.
    pub async fn delete(
        &self,
        category: &Category,
        confirm: &mut Confirmation,
    ) -> Result<bool, ApiError> {
        if self.access() != Access::Granted {
            return Err(ApiError::Authorization);
        }
        if !category.can_delete() {
            return Err(ApiError::validation("category still has meals"));
        }
        if !confirm.take() {
            confirm.request();
            return Ok(false);
        }
        self.gateway.delete_category(&category.id).await?;
        self.load().await?;
        Ok(true)
    }
}

// ── Orders ───────────────────────────────────────────────────────────────────

/// Admin order table: read and delete only, no status transitions.
pub struct AdminOrdersView<G> {
    controller: OrderController<G>,
    session: SessionStore,
}

impl<G: OrderGateway> AdminOrdersView<G> {
    pub fn new(gateway: G, session: SessionStore) -> Self {
        Self {
            controller: OrderController::new(gateway, session.clone()),
            session,
        }
    }

    pub fn access(&self) -> Access {
        check_access(&self.session.state(), Role::Admin)
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

    pub async fn delete(
        &self,
        id: &OrderId,
        confirm: &mut Confirmation,
    ) -> Result<bool, ApiError> {
        if !confirm.take() {
            confirm.request();
            return Ok(false);
        }
        self.controller.delete(id).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::sync::atomic::{AtomicU32, Ordering};

    use karai_testing::fixture::{test_admin, test_category, test_customer, test_user};

    use super::*;
    use crate::session::SessionState;

    fn admin_session() -> SessionStore {
        SessionStore::with_state(SessionState::Authenticated(test_admin()))
    }

    // ── Users view ───────────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct MockAdmin {
        users: Arc<Mutex<Vec<User>>>,
        fail_list: Arc<Mutex<bool>>,
        calls: Arc<AtomicU32>,
    }

    impl AdminGateway for MockAdmin {
        async fn stats(&self) -> Result<AdminStats, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AdminStats::default())
        }
        async fn list_users(&self) -> Result<Vec<User>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if *self.fail_list.lock().unwrap() {
                return Err(ApiError::backend("unexpected response shape"));
            }
            Ok(self.users.lock().unwrap().clone())
        }
        async fn update_user(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| &u.id == id)
                .ok_or(ApiError::NotFound)?;
            if let Some(name) = &patch.name {
                user.name = name.clone();
            }
            if let Some(email) = &patch.email {
                user.email = email.clone();
            }
            Ok(user.clone())
        }
        async fn update_user_status(
            &self,
            id: &UserId,
            status: UserStatus,
        ) -> Result<User, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| &u.id == id)
                .ok_or(ApiError::NotFound)?;
            user.status = status;
            Ok(user.clone())
        }
        async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.users.lock().unwrap().retain(|u| &u.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_render_error_and_empty_rows_on_failed_user_load() {
        let gateway = MockAdmin::default();
        *gateway.fail_list.lock().unwrap() = true;
        let view = AdminUsersView::new(gateway, admin_session());

        assert!(view.load().await.is_err());
        assert!(view.rows().is_empty());
        assert_eq!(view.error().as_deref(), Some("unexpected response shape"));
    }

    #[tokio::test]
    async fn should_block_non_admin_without_network_call() {
        let gateway = MockAdmin::default();
        let view = AdminUsersView::new(
            gateway.clone(),
            SessionStore::with_state(SessionState::Authenticated(test_customer())),
        );
        assert_eq!(view.access(), Access::NotAuthorized);
        assert!(view.load().await.is_err());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_suspend_and_reactivate_users() {
        let gateway = MockAdmin::default();
        gateway
            .users
            .lock()
            .unwrap()
            .push(test_user("u_1", Role::Customer));
        let view = AdminUsersView::new(gateway, admin_session());

        view.set_status(&UserId::from("u_1"), UserStatus::Suspended)
            .await
            .unwrap();
        assert_eq!(view.rows()[0].status, UserStatus::Suspended);
    }

    #[tokio::test]
    async fn should_edit_user_profile_fields() {
        let gateway = MockAdmin::default();
        gateway
            .users
            .lock()
            .unwrap()
            .push(test_user("u_1", Role::Customer));
        let view = AdminUsersView::new(gateway.clone(), admin_session());

        // An empty patch never reaches the network.
        let err = view
            .update_profile(&UserId::from("u_1"), &UserPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);

        let patch = UserPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        view.update_profile(&UserId::from("u_1"), &patch).await.unwrap();
        assert_eq!(view.rows()[0].name, "Renamed");
    }

    #[tokio::test]
    async fn should_require_confirmation_before_user_delete() {
        let gateway = MockAdmin::default();
        gateway
            .users
            .lock()
            .unwrap()
            .push(test_user("u_1", Role::Customer));
        let view = AdminUsersView::new(gateway.clone(), admin_session());
        let mut confirm = Confirmation::new();

        // First step arms the dialog; nothing is deleted.
        let deleted = view.delete(&UserId::from("u_1"), &mut confirm).await.unwrap();
        assert!(!deleted);
        assert!(confirm.is_pending());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);

        // Second step performs the delete.
        let deleted = view.delete(&UserId::from("u_1"), &mut confirm).await.unwrap();
        assert!(deleted);
        assert!(view.rows().is_empty());
    }

    // ── Categories view ──────────────────────────────────────────────────────

    #[derive(Clone, Default)]
    struct MockCategories {
        categories: Arc<Mutex<Vec<Category>>>,
        delete_calls: Arc<AtomicU32>,
    }

    impl CategoryGateway for MockCategories {
        async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
            Ok(self.categories.lock().unwrap().clone())
        }
        async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
            let category = Category {
                id: CategoryId::from("cat_new"),
                name: input.name.clone(),
                slug: input.slug.clone(),
                image_url: input.image_url.clone(),
                counts: None,
            };
            self.categories.lock().unwrap().push(category.clone());
            Ok(category)
        }
        async fn update_category(
            &self,
            id: &CategoryId,
            input: &CategoryInput,
        ) -> Result<Category, ApiError> {
            let mut categories = self.categories.lock().unwrap();
            let category = categories
                .iter_mut()
                .find(|c| &c.id == id)
                .ok_or(ApiError::NotFound)?;
            category.name = input.name.clone();
            category.slug = input.slug.clone();
            Ok(category.clone())
        }
        async fn delete_category(&self, id: &CategoryId) -> Result<(), ApiError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.categories.lock().unwrap().retain(|c| &c.id != id);
            Ok(())
        }
    }

    #[test]
    fn should_track_name_in_slug_until_edited() {
        let mut form = CategoryForm::new();
        form.set_name("Spicy Wings!!");
        assert_eq!(form.slug, "spicy-wings");

        form.set_slug("wings");
        form.set_name("Spicy Wings Deluxe");
        assert_eq!(form.slug, "wings");
    }

    #[tokio::test]
    async fn should_disable_delete_while_category_has_meals() {
        let gateway = MockCategories::default();
        let in_use = test_category("cat_1", "Biryani", 3);
        gateway.categories.lock().unwrap().push(in_use.clone());
        let view = AdminCategoriesView::new(gateway.clone(), admin_session());
        view.load().await.unwrap();

        assert!(!view.can_delete(&in_use));
        let mut confirm = Confirmation::new();
        confirm.request();
        let err = view.delete(&in_use, &mut confirm).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
        assert_eq!(gateway.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_delete_empty_category_after_confirmation() {
        let gateway = MockCategories::default();
        let empty = test_category("cat_1", "Snacks", 0);
        gateway.categories.lock().unwrap().push(empty.clone());
        let view = AdminCategoriesView::new(gateway.clone(), admin_session());
        view.load().await.unwrap();

        let mut confirm = Confirmation::new();
        assert!(!view.delete(&empty, &mut confirm).await.unwrap());
        assert!(view.delete(&empty, &mut confirm).await.unwrap());
        assert!(view.rows().is_empty());
    }

    #[tokio::test]
    async fn should_create_category_from_form() {
        let gateway = MockCategories::default();
        let view = AdminCategoriesView::new(gateway, admin_session());
        let mut form = CategoryForm::new();
        form.set_name("Street Food");
        let created = view.create(&form).await.unwrap();
        assert_eq!(created.slug, "street-food");
        assert_eq!(view.rows().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_blank_category_name() {
        let view = AdminCategoriesView::new(MockCategories::default(), admin_session());
        let err = view.create(&CategoryForm::new()).await.unwrap_err();
        assert_eq!(err.kind(), "VALIDATION");
    }
}
