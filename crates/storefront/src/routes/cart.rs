//! Cart route handlers.
//!
//! Mutations are plain form POSTs followed by a redirect back to the cart
//! page; the count badge has its own lightweight fragment endpoint. Every
//! mutation also publishes a storage change event, which is what any other
//! open view of the same profile resynchronizes from.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use sole_street_core::{OrderSummary, ProductId, order_summary};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::Shell;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    pub image_url: String,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: i64,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: i64,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub shell: Shell,
    pub items: Vec<CartItemView>,
    pub summary: OrderSummary,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let lines = state.cart().lines(catalog);

    let summary = order_summary(
        lines.iter().map(|line| (line.product, line.quantity)),
        state.config().tax_rate,
        state.config().shipping_fee,
    );

    let items = lines
        .iter()
        .map(|line| {
            let line_total =
                line.product.price_cad * rust_decimal::Decimal::from(line.quantity);
            CartItemView {
                id: line.product.id.as_i64(),
                brand: line.product.brand.clone(),
                model: line.product.model.clone(),
                price: format!("${:.2}", line.product.price_cad.round_dp(2)),
                quantity: line.quantity,
                line_total: format!("${:.2}", line_total.round_dp(2)),
                image_url: line.product.image_url.clone(),
            }
        })
        .collect();

    Ok(CartShowTemplate {
        shell: Shell::from_state(&state),
        items,
        summary,
    })
}

/// Add an item to the cart.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse> {
    let quantity = form.quantity.unwrap_or(1).max(1);
    state.cart().add(ProductId::new(form.id), quantity)?;
    Ok(Redirect::to("/cart"))
}

/// Overwrite a line quantity; zero removes the line.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Result<impl IntoResponse> {
    state.cart().set_quantity(ProductId::new(form.id), form.quantity)?;
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<impl IntoResponse> {
    state.cart().remove(ProductId::new(form.id))?;
    Ok(Redirect::to("/cart"))
}

/// Cart count badge fragment.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    CartCountTemplate {
        count: state.cart().item_count(),
    }
}
