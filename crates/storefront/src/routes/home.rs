//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

use super::Shell;
use super::footwear::ProductCard;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 4;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub featured: Vec<ProductCard>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();

    let featured = catalog
        .products()
        .iter()
        .take(FEATURED_COUNT)
        .map(|product| ProductCard {
            id: product.id.as_i64(),
            brand: product.brand.clone(),
            model: product.model.clone(),
            category: product.category.to_string(),
            price: format!("${:.2}", product.price_cad.round_dp(2)),
            unit_total: format!("${:.2}", catalog.unit_total(product).round_dp(2)),
            stock_status: product.stock_status.to_string(),
            sustainability: product.sustainability.to_string(),
            comfort_rating: product.comfort_rating_on_5,
            image_url: product.image_url.clone(),
        })
        .collect();

    HomeTemplate {
        shell: Shell::from_state(&state),
        featured,
    }
}
