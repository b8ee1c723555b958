//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Footwear catalog
//! GET  /footwear               - Listing (page/query/category via URL params)
//! POST /footwear               - Apply facet filters (facets stay out of the URL)
//! GET  /footwear/reset         - Reset every filter, back to page 1
//! GET  /footwear/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (redirects back to the cart)
//! POST /cart/update            - Overwrite a line quantity (0 removes)
//! POST /cart/remove            - Remove a line
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout (requires the auth flag)
//! GET  /checkout               - Order summary and confirmation form
//! POST /checkout/place-order   - Simulated order placement; clears the cart
//!
//! # Auth (simulated, local flag only)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod footwear;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Shared chrome data rendered by the base layout on every page.
#[derive(Clone)]
pub struct Shell {
    pub cart_count: u32,
    pub is_authenticated: bool,
    pub user_name: Option<String>,
}

impl Shell {
    /// Snapshot the navbar state from the stores.
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let auth = state.auth().current();
        Self {
            cart_count: state.cart().item_count(),
            is_authenticated: auth.is_authenticated,
            user_name: auth.user.map(|u| u.name),
        }
    }
}

/// Create the footwear routes router.
pub fn footwear_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(footwear::index).post(footwear::apply_filters))
        .route("/reset", get(footwear::reset_filters))
        .route("/{id}", get(footwear::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .nest("/footwear", footwear_routes())
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", get(checkout::show))
        .route("/checkout/place-order", post(checkout::place_order))
        // Auth
        .nest("/auth", auth_routes())
}
