//! In-process stand-in for the remote backend API.
//!
//! Speaks the backend's real envelope shapes — `{success, data}` on success,
//! `{success: false, message}` on failure, the nested meal-list payload, and
//! the bare session body — over in-memory state, so client and gateway tests
//! exercise the same decoding paths as production.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use karai_domain::cart::CartItem;
use karai_domain::category::Category;
use karai_domain::id::{CartItemId, CategoryId, MealId, OrderId, ProviderId, UserId};
use karai_domain::meal::Meal;
use karai_domain::order::{Order, OrderItem, OrderStatus};
use karai_domain::provider::ProviderProfile;
use karai_domain::stats::{AdminStats, ProviderStats};
use karai_domain::user::{User, UserStatus};

#[derive(Default)]
struct Inner {
    session_user: Option<User>,
    categories: Vec<Category>,
    meals: Vec<Meal>,
    cart: Vec<CartItem>,
    orders: Vec<Order>,
    users: Vec<User>,
    providers: Vec<ProviderProfile>,
    admin_stats: AdminStats,
    provider_stats: ProviderStats,
    reviews: Vec<Value>,
    meal_queries: Vec<String>,
    uploads: u64,
    /// Raw body substituted for `GET /api/admin/users` (malformed-response
    /// scenarios).
    users_body_override: Option<String>,
    next_id: u64,
}

impl Inner {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}_{}", self.next_id)
    }
}

#[derive(Clone)]
struct SharedState(Arc<Mutex<Inner>>);

/// Builder for the mock backend's initial state.
#[derive(Default)]
pub struct MockBackend {
    inner: Inner,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_user(mut self, user: User) -> Self {
        self.inner.session_user = Some(user);
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.inner.categories = categories;
        self
    }

    pub fn with_meals(mut self, meals: Vec<Meal>) -> Self {
        self.inner.meals = meals;
        self
    }

    pub fn with_cart(mut self, cart: Vec<CartItem>) -> Self {
        self.inner.cart = cart;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.inner.orders = orders;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.inner.users = users;
        self
    }

    pub fn with_providers(mut self, providers: Vec<ProviderProfile>) -> Self {
        self.inner.providers = providers;
        self
    }

    pub fn with_admin_stats(mut self, stats: AdminStats) -> Self {
        self.inner.admin_stats = stats;
        self
    }

    pub fn with_provider_stats(mut self, stats: ProviderStats) -> Self {
        self.inner.provider_stats = stats;
        self
    }

    /// Replace the `GET /api/admin/users` body with `body` verbatim
    /// (simulates a malformed or error response).
    pub fn with_users_body(mut self, body: impl Into<String>) -> Self {
        self.inner.users_body_override = Some(body.into());
        self
    }

    /// Bind to `127.0.0.1:0` and serve in a background task.
    pub async fn spawn(self) -> MockBackendHandle {
        let state = SharedState(Arc::new(Mutex::new(self.inner)));
        let router = build_router(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        MockBackendHandle {
            base_url: format!("http://{addr}"),
            state,
        }
    }
}

/// Handle to a running mock backend: its base URL plus state inspection
/// and mutation for assertions.
pub struct MockBackendHandle {
    pub base_url: String,
    state: SharedState,
}

impl MockBackendHandle {
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.state.0.lock().unwrap().cart.clone()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.state.0.lock().unwrap().orders.clone()
    }

    pub fn reviews(&self) -> Vec<Value> {
        self.state.0.lock().unwrap().reviews.clone()
    }

    /// Query strings the meal list endpoint received, in order.
    pub fn meal_queries(&self) -> Vec<String> {
        self.state.0.lock().unwrap().meal_queries.clone()
    }

    /// Number of image uploads accepted.
    pub fn uploads(&self) -> u64 {
        self.state.0.lock().unwrap().uploads
    }

    pub fn set_session_user(&self, user: Option<User>) {
        self.state.0.lock().unwrap().session_user = user;
    }

    /// Mutate a catalog price after orders were created (order totals must
    /// not move).
    pub fn set_meal_price(&self, id: &MealId, price: f64) {
        let mut inner = self.state.0.lock().unwrap();
        if let Some(meal) = inner.meals.iter_mut().find(|m| &m.id == id) {
            meal.price = price;
        }
    }
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/auth/session", get(get_session))
        .route("/api/categories", get(list_categories).post(create_category))
        .route(
            "/api/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/api/meals", get(list_meals).post(create_meal))
        .route(
            "/api/meals/{id}",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
        .route("/api/carts", get(list_cart).post(add_cart_item))
        .route(
            "/api/carts/{id}",
            axum::routing::put(update_cart_item).delete(delete_cart_item),
        )
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", axum::routing::delete(delete_order))
        .route("/api/orders/{id}/status", axum::routing::patch(update_order_status))
        .route("/api/reviews", post(create_review))
        .route("/api/admin/stats", get(admin_stats))
        .route("/api/admin/users", get(list_users))
        .route(
            "/api/admin/users/{id}",
            get(get_admin_user).patch(update_admin_user).delete(delete_admin_user),
        )
        .route("/api/admin/users/{id}/status", axum::routing::patch(update_user_status))
        .route("/api/providers", get(list_providers).post(create_provider))
        .route("/api/providers/stats", get(provider_stats))
        .route(
            "/api/providers/{id}",
            get(get_provider).put(update_provider).delete(delete_provider),
        )
        // Image-host stand-in (imgbb-shaped endpoint).
        .route("/1/upload", post(upload_image))
        .with_state(state)
}

// ── Envelope helpers ─────────────────────────────────────────────────────────

fn ok(data: Value) -> Response {
    Json(json!({"success": true, "data": data})).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "message": message}))).into_response()
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap()
}

// ── Session ──────────────────────────────────────────────────────────────────

async fn get_session(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    // Bare payload, no envelope.
    Json(json!({"user": to_value(&inner.session_user)})).into_response()
}

// ── Categories ───────────────────────────────────────────────────────────────

async fn list_categories(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.categories))
}

async fn create_category(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let id = inner.next_id("cat");
    let category = Category {
        id: CategoryId::from(id.as_str()),
        name: body["name"].as_str().unwrap_or_default().to_owned(),
        slug: body["slug"].as_str().unwrap_or_default().to_owned(),
        image_url: body["imageUrl"].as_str().map(str::to_owned),
        counts: None,
    };
    inner.categories.push(category.clone());
    ok(to_value(&category))
}

async fn get_category(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let inner = state.0.lock().unwrap();
    match inner.categories.iter().find(|c| c.id.as_str() == id) {
        Some(category) => ok(to_value(category)),
        None => fail(StatusCode::NOT_FOUND, "Category not found"),
    }
}

async fn update_category(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    match inner.categories.iter_mut().find(|c| c.id.as_str() == id) {
        Some(category) => {
            if let Some(name) = body["name"].as_str() {
                category.name = name.to_owned();
            }
            if let Some(slug) = body["slug"].as_str() {
                category.slug = slug.to_owned();
            }
            let updated = category.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "Category not found"),
    }
}

async fn delete_category(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let Some(index) = inner.categories.iter().position(|c| c.id.as_str() == id) else {
        return fail(StatusCode::NOT_FOUND, "Category not found");
    };
    if inner.categories[index].meal_count() > 0 {
        return fail(StatusCode::CONFLICT, "Category has meals");
    }
    inner.categories.remove(index);
    ok(json!(true))
}

// ── Meals ────────────────────────────────────────────────────────────────────

async fn list_meals(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
    uri: axum::http::Uri,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    inner
        .meal_queries
        .push(uri.query().unwrap_or_default().to_owned());

    let mut meals: Vec<Meal> = inner
        .meals
        .iter()
        .filter(|m| {
            params.get("search").is_none_or(|s| {
                m.name.to_lowercase().contains(&s.to_lowercase())
            }) && params
                .get("cuisine")
                .is_none_or(|c| wire_name(&m.cuisine) == *c)
                && params
                    .get("dietary")
                    .is_none_or(|d| wire_name(&m.dietary) == *d)
                && params
                    .get("categoryId")
                    .is_none_or(|c| m.category_id.as_str() == c)
                && params
                    .get("providerId")
                    .is_none_or(|p| m.provider_id.as_str() == p)
                && params
                    .get("isAvailable")
                    .is_none_or(|a| m.is_available.to_string() == *a)
                && params
                    .get("minPrice")
                    .and_then(|p| p.parse::<f64>().ok())
                    .is_none_or(|p| m.price >= p)
                && params
                    .get("maxPrice")
                    .and_then(|p| p.parse::<f64>().ok())
                    .is_none_or(|p| m.price <= p)
        })
        .cloned()
        .collect();

    if params.get("sortBy").map(String::as_str) == Some("price") {
        meals.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal));
        if params.get("sortOrder").map(String::as_str) == Some("desc") {
            meals.reverse();
        }
    }

    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1);
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .filter(|&l| l >= 1)
        .unwrap_or(10);
    let total = meals.len();
    let total_pages = total.div_ceil(limit).max(1);
    let items: Vec<Meal> = meals
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    ok(json!({
        "data": to_value(&items),
        "pagination": {
            "total": total,
            "page": page,
            "limit": limit,
            "totalPages": total_pages,
        }
    }))
}

fn wire_name<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_owned))
        .unwrap_or_default()
}

async fn get_meal(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let inner = state.0.lock().unwrap();
    match inner.meals.iter().find(|m| m.id.as_str() == id) {
        Some(meal) => ok(to_value(meal)),
        None => fail(StatusCode::NOT_FOUND, "Meal not found"),
    }
}

async fn create_meal(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let id = inner.next_id("meal");
    let meal: Meal = match serde_json::from_value(merge_meal_defaults(&id, body)) {
        Ok(meal) => meal,
        Err(e) => return fail(StatusCode::BAD_REQUEST, &e.to_string()),
    };
    inner.meals.push(meal.clone());
    ok(to_value(&meal))
}

fn merge_meal_defaults(id: &str, body: Value) -> Value {
    let mut meal = json!({
        "id": id,
        "name": "",
        "description": "",
        "price": 0.0,
        "isAvailable": true,
        "cuisine": "BENGALI",
        "dietary": "NON_VEG",
        "categoryId": "cat_1",
        "providerId": "prov_1",
        "userId": "u_provider",
    });
    if let (Some(target), Some(source)) = (meal.as_object_mut(), body.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    meal
}

async fn update_meal(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    let Some(meal) = inner.meals.iter_mut().find(|m| m.id.as_str() == id) else {
        return fail(StatusCode::NOT_FOUND, "Meal not found");
    };
    let mut value = to_value(&*meal);
    if let (Some(target), Some(source)) = (value.as_object_mut(), body.as_object()) {
        for (key, patch) in source {
            target.insert(key.clone(), patch.clone());
        }
    }
    match serde_json::from_value::<Meal>(value) {
        Ok(updated) => {
            *meal = updated.clone();
            ok(to_value(&updated))
        }
        Err(e) => fail(StatusCode::BAD_REQUEST, &e.to_string()),
    }
}

async fn delete_meal(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let before = inner.meals.len();
    inner.meals.retain(|m| m.id.as_str() != id);
    if inner.meals.len() == before {
        return fail(StatusCode::NOT_FOUND, "Meal not found");
    }
    ok(json!(true))
}

// ── Cart ─────────────────────────────────────────────────────────────────────

async fn list_cart(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.cart))
}

async fn add_cart_item(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    if inner.session_user.is_none() {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let meal_id = body["mealId"].as_str().unwrap_or_default().to_owned();
    let quantity = body["quantity"].as_u64().unwrap_or(1) as u32;

    // Server-determined merge: an existing line for the meal absorbs the add.
    if let Some(line) = inner.cart.iter_mut().find(|c| c.meal_id.as_str() == meal_id) {
        line.quantity += quantity;
        let merged = line.clone();
        return ok(to_value(&merged));
    }

    let (meal_name, meal_price, provider_id) = inner
        .meals
        .iter()
        .find(|m| m.id.as_str() == meal_id)
        .map(|m| (m.name.clone(), m.price, Some(m.provider_id.clone())))
        .unwrap_or_else(|| ("unknown meal".to_owned(), 0.0, None));
    let id = inner.next_id("cart");
    let item = CartItem {
        id: CartItemId::from(id.as_str()),
        meal_id: MealId::from(meal_id.as_str()),
        quantity,
        meal_name,
        meal_price,
        meal_image: None,
        provider_id,
    };
    inner.cart.push(item.clone());
    ok(to_value(&item))
}

async fn update_cart_item(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    let Some(quantity) = body["quantity"].as_u64() else {
        return fail(StatusCode::BAD_REQUEST, "quantity is required");
    };
    match inner.cart.iter_mut().find(|c| c.id.as_str() == id) {
        Some(item) => {
            item.quantity = quantity as u32;
            let updated = item.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "Cart item not found"),
    }
}

async fn delete_cart_item(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let before = inner.cart.len();
    inner.cart.retain(|c| c.id.as_str() != id);
    if inner.cart.len() == before {
        return fail(StatusCode::NOT_FOUND, "Cart item not found");
    }
    ok(json!(true))
}

// ── Orders ───────────────────────────────────────────────────────────────────

async fn list_orders(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.orders))
}

async fn create_order(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let customer_id = inner
        .session_user
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| UserId::from("u_customer"));
    let id = inner.next_id("ord");
    let items = body["items"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(n, item)| OrderItem {
            id: format!("{id}_item_{n}"),
            meal_id: item["mealId"].as_str().map(MealId::from),
            quantity: item["quantity"].as_u64().unwrap_or(1) as u32,
            price: item["price"].as_f64().unwrap_or(0.0),
            meal: None,
        })
        .collect();
    let order = Order {
        id: OrderId::from(id.as_str()),
        customer_id,
        provider_id: ProviderId::from(body["providerId"].as_str().unwrap_or_default()),
        address: body["address"].as_str().unwrap_or_default().to_owned(),
        total_amount: body["totalAmount"].as_f64().unwrap_or(0.0),
        status: OrderStatus::Placed,
        created_at: chrono::Utc::now(),
        items,
    };
    inner.orders.push(order.clone());
    ok(to_value(&order))
}

async fn update_order_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    let Ok(status) = serde_json::from_value::<OrderStatus>(body["status"].clone()) else {
        return fail(StatusCode::BAD_REQUEST, "unknown status");
    };
    match inner.orders.iter_mut().find(|o| o.id.as_str() == id) {
        Some(order) => {
            order.status = status;
            let updated = order.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "Order not found"),
    }
}

async fn delete_order(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let before = inner.orders.len();
    inner.orders.retain(|o| o.id.as_str() != id);
    if inner.orders.len() == before {
        return fail(StatusCode::NOT_FOUND, "Order not found");
    }
    ok(json!(true))
}

// ── Reviews ──────────────────────────────────────────────────────────────────

async fn create_review(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    inner.reviews.push(body);
    ok(json!(true))
}

// ── Image host ───────────────────────────────────────────────────────────────

async fn upload_image(State(state): State<SharedState>) -> Response {
    let mut inner = state.0.lock().unwrap();
    inner.uploads += 1;
    let n = inner.uploads;
    ok(json!({"url": format!("https://images.example.com/karai/{n}.png")}))
}

// ── Admin ────────────────────────────────────────────────────────────────────

async fn admin_stats(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.admin_stats))
}

async fn list_users(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    if let Some(body) = &inner.users_body_override {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response();
    }
    ok(to_value(&inner.users))
}

async fn get_admin_user(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let inner = state.0.lock().unwrap();
    match inner.users.iter().find(|u| u.id.as_str() == id) {
        Some(user) => ok(to_value(user)),
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_admin_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    match inner.users.iter_mut().find(|u| u.id.as_str() == id) {
        Some(user) => {
            if let Some(name) = body["name"].as_str() {
                user.name = name.to_owned();
            }
            if let Some(email) = body["email"].as_str() {
                user.email = email.to_owned();
            }
            let updated = user.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn update_user_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    let Ok(status) = serde_json::from_value::<UserStatus>(body["status"].clone()) else {
        return fail(StatusCode::BAD_REQUEST, "unknown status");
    };
    match inner.users.iter_mut().find(|u| u.id.as_str() == id) {
        Some(user) => {
            user.status = status;
            let updated = user.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn delete_admin_user(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let before = inner.users.len();
    inner.users.retain(|u| u.id.as_str() != id);
    if inner.users.len() == before {
        return fail(StatusCode::NOT_FOUND, "User not found");
    }
    ok(json!(true))
}

// ── Providers ────────────────────────────────────────────────────────────────

async fn list_providers(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.providers))
}

async fn get_provider(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let inner = state.0.lock().unwrap();
    match inner.providers.iter().find(|p| p.id.as_str() == id) {
        Some(provider) => ok(to_value(provider)),
        None => fail(StatusCode::NOT_FOUND, "Provider not found"),
    }
}

async fn create_provider(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let user_id = inner
        .session_user
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| UserId::from("u_provider"));
    let id = inner.next_id("prov");
    let provider = ProviderProfile {
        id: ProviderId::from(id.as_str()),
        user_id,
        restaurant_name: body["restaurantName"].as_str().unwrap_or_default().to_owned(),
        address: body["address"].as_str().unwrap_or_default().to_owned(),
        phone: body["phone"].as_str().unwrap_or_default().to_owned(),
        logo: body["logo"].as_str().map(str::to_owned),
    };
    inner.providers.push(provider.clone());
    ok(to_value(&provider))
}

async fn update_provider(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut inner = state.0.lock().unwrap();
    match inner.providers.iter_mut().find(|p| p.id.as_str() == id) {
        Some(provider) => {
            if let Some(name) = body["restaurantName"].as_str() {
                provider.restaurant_name = name.to_owned();
            }
            if let Some(address) = body["address"].as_str() {
                provider.address = address.to_owned();
            }
            if let Some(phone) = body["phone"].as_str() {
                provider.phone = phone.to_owned();
            }
            let updated = provider.clone();
            ok(to_value(&updated))
        }
        None => fail(StatusCode::NOT_FOUND, "Provider not found"),
    }
}

async fn delete_provider(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut inner = state.0.lock().unwrap();
    let before = inner.providers.len();
    inner.providers.retain(|p| p.id.as_str() != id);
    if inner.providers.len() == before {
        return fail(StatusCode::NOT_FOUND, "Provider not found");
    }
    ok(json!(true))
}

async fn provider_stats(State(state): State<SharedState>) -> Response {
    let inner = state.0.lock().unwrap();
    ok(to_value(&inner.provider_stats))
}
