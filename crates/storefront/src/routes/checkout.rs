//! Checkout route handlers.
//!
//! Checkout is gated on the local auth flag; there is no payment processing.
//! Placing the order just clears the persisted cart and shows a confirmation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use sole_street_core::{OrderSummary, order_summary};

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

use super::Shell;
use super::cart::CartItemView;

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub shell: Shell,
    pub items: Vec<CartItemView>,
    pub summary: OrderSummary,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub shell: Shell,
    pub total: String,
}

/// Display the checkout page, or bounce to login/cart as appropriate.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Response> {
    if !state.auth().is_authenticated() {
        return Ok(Redirect::to("/auth/login").into_response());
    }

    let catalog = state.catalog();
    let lines = state.cart().lines(catalog);
    if lines.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

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

    Ok(CheckoutTemplate {
        shell: Shell::from_state(&state),
        items,
        summary,
    }
    .into_response())
}

/// Place the simulated order: clear the cart, confirm the total.
#[instrument(skip(state))]
pub async fn place_order(State(state): State<AppState>) -> Result<Response> {
    if !state.auth().is_authenticated() {
        return Ok(Redirect::to("/auth/login").into_response());
    }

    let catalog = state.catalog();
    let lines = state.cart().lines(catalog);
    if lines.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let summary = order_summary(
        lines.iter().map(|line| (line.product, line.quantity)),
        state.config().tax_rate,
        state.config().shipping_fee,
    );

    state.cart().clear()?;
    tracing::info!(total = %summary.total, "order placed");

    Ok(ConfirmationTemplate {
        shell: Shell::from_state(&state),
        total: format!("${:.2}", summary.total.round_dp(2)),
    }
    .into_response())
}
