//! Footwear catalog route handlers: listing, facet filtering, detail.
//!
//! The listing is driven by two inputs with deliberately different
//! lifetimes: `{page, query, category}` live in the URL and survive reloads
//! and sharing, while the facet filters (brand, sustainability, fit, stock,
//! price range) arrive only through the "Apply Filters" form POST and reset
//! on a full reload. `UrlState::PERSISTED_PARAMS` names that split.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, RawForm, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;
use url::form_urlencoded;

use sole_street_core::{Category, FitType, Product, StockStatus, SustainabilityRating};

use crate::catalog::{
    CategoryFilter, FilterSpec, PageEntry, PageWindow, UrlState, page_entries, page_slice,
};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

use super::Shell;

/// Product card display data for the listing grid.
#[derive(Clone)]
pub struct ProductCard {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub price: String,
    pub unit_total: String,
    pub stock_status: String,
    pub sustainability: String,
    pub comfort_rating: f32,
    pub image_url: String,
}

/// One entry in the rendered pager.
#[derive(Clone)]
pub struct PagerItem {
    pub label: String,
    pub href: String,
    pub is_current: bool,
    pub is_ellipsis: bool,
}

/// A category tab in the listing header.
#[derive(Clone)]
pub struct CategoryTab {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// A checkbox option in the facet sidebar.
#[derive(Clone)]
pub struct FacetOption {
    pub value: String,
    pub checked: bool,
}

/// Footwear listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "footwear/index.html")]
pub struct FootwearIndexTemplate {
    pub shell: Shell,
    pub query: String,
    pub category: String,
    pub category_tabs: Vec<CategoryTab>,
    pub products: Vec<ProductCard>,
    pub window: PageWindow,
    pub pager: Vec<PagerItem>,
    pub brand_options: Vec<FacetOption>,
    pub sustainability_options: Vec<FacetOption>,
    pub fit_options: Vec<FacetOption>,
    pub stock_options: Vec<FacetOption>,
    pub price_min: String,
    pub price_max: String,
    pub bound_min: String,
    pub bound_max: String,
    pub filters_active: bool,
    pub out_of_range: bool,
    pub first_page_href: String,
    pub reset_href: String,
}

/// Retailer row on the detail page.
#[derive(Clone)]
pub struct RetailerRow {
    pub name: String,
    pub price: String,
    pub url: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "footwear/show.html")]
pub struct FootwearShowTemplate {
    pub shell: Shell,
    pub product: Product,
    pub price: String,
    pub resale_price: Option<String>,
    pub unit_total: String,
    pub sizes: String,
    pub retailers: Vec<RetailerRow>,
}

/// Display the footwear listing from URL state alone (all facets at their
/// unconstrained defaults - a full reload drops them by design).
#[instrument(skip(state, params))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse> {
    let url_state = UrlState::from_params(&params);

    let mut spec = state.catalog().unconstrained_filter();
    spec.query.clone_from(&url_state.query);
    spec.category = url_state.category;

    Ok(render_listing(&state, &url_state, &spec))
}

/// Apply facet filters (the explicit "Apply Filters" action).
///
/// Facets never touch the URL. The Apply Filters button itself carries no
/// `page` field, so applying resets to page 1; the faceted pager re-submits
/// the same form with an explicit `page`, which is how facet state survives
/// page changes.
#[instrument(skip(state, form))]
pub async fn apply_filters(
    State(state): State<AppState>,
    RawForm(form): RawForm,
) -> Result<impl IntoResponse> {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(&form)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let spec = FilterSpec::from_form_pairs(
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        state.catalog().price_bounds(),
    );

    let url_state = UrlState {
        page: page_from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        query: spec.query.clone(),
        category: spec.category,
    };

    Ok(render_listing(&state, &url_state, &spec))
}

/// The requested page from facet-form pairs. Absent or garbage means 1.
fn page_from_pairs<'a, I>(pairs: I) -> u32
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Reset every filter to its unconstrained default.
#[instrument]
pub async fn reset_filters() -> impl IntoResponse {
    Redirect::to(&UrlState::default().href())
}

/// Display a product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let catalog = state.catalog();
    let product = catalog
        .get(id.into())
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let retailers = product
        .retailers
        .iter()
        .map(|(name, offer)| RetailerRow {
            name: name.clone(),
            price: format!("${:.2}", offer.price.round_dp(2)),
            url: offer.url.clone(),
        })
        .collect();

    let sizes = product
        .available_sizes_us
        .iter()
        .map(|s| format!("US {s}"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(FootwearShowTemplate {
        shell: Shell::from_state(&state),
        price: format!("${:.2}", product.price_cad.round_dp(2)),
        resale_price: product
            .resale_price_cad
            .map(|p| format!("${:.2}", p.round_dp(2))),
        unit_total: format!("${:.2}", catalog.unit_total(product).round_dp(2)),
        sizes,
        retailers,
        product: product.clone(),
    })
}

/// Run the engine for the given state and build the listing template.
fn render_listing(
    state: &AppState,
    url_state: &UrlState,
    spec: &FilterSpec,
) -> FootwearIndexTemplate {
    let catalog = state.catalog();
    let matches = catalog.filter(spec);
    let window = PageWindow::new(matches.len(), url_state.page);
    let visible = page_slice(&matches, url_state.page);

    let products = visible
        .iter()
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

    let pager = page_entries(url_state.page, window.total_pages)
        .into_iter()
        .map(|entry| match entry {
            PageEntry::Page(page) => PagerItem {
                label: page.to_string(),
                href: url_state.with_page(page).href(),
                is_current: page == url_state.page,
                is_ellipsis: false,
            },
            PageEntry::Ellipsis => PagerItem {
                label: "…".to_string(),
                href: String::new(),
                is_current: false,
                is_ellipsis: true,
            },
        })
        .collect();

    let mut category_tabs = vec![CategoryTab {
        label: CategoryFilter::ALL_CATEGORIES.to_string(),
        href: UrlState {
            page: 1,
            query: url_state.query.clone(),
            category: CategoryFilter::All,
        }
        .href(),
        selected: url_state.category == CategoryFilter::All,
    }];
    for category in Category::ALL {
        category_tabs.push(CategoryTab {
            label: category.to_string(),
            href: UrlState {
                page: 1,
                query: url_state.query.clone(),
                category: CategoryFilter::Only(*category),
            }
            .href(),
            selected: url_state.category == CategoryFilter::Only(*category),
        });
    }

    let bounds = catalog.price_bounds();
    let (price_min, price_max) = spec.price_range;

    FootwearIndexTemplate {
        shell: Shell::from_state(state),
        query: url_state.query.clone(),
        category: url_state.category.to_string(),
        category_tabs,
        products,
        pager,
        brand_options: facet_options(catalog.brands().iter().map(String::as_str), &spec.brands),
        sustainability_options: enum_options(SustainabilityRating::ALL, &spec.sustainability),
        fit_options: enum_options(FitType::ALL, &spec.fit_types),
        stock_options: enum_options(StockStatus::ALL, &spec.stock_statuses),
        price_min: price_min.to_string(),
        price_max: price_max.to_string(),
        bound_min: bounds.0.to_string(),
        bound_max: bounds.1.to_string(),
        filters_active: spec.has_facet_constraints(bounds),
        out_of_range: window.is_out_of_range(),
        first_page_href: url_state.with_page(1).href(),
        reset_href: "/footwear/reset".to_string(),
        window,
    }
}

fn facet_options<'a>(
    values: impl Iterator<Item = &'a str>,
    selected: &[String],
) -> Vec<FacetOption> {
    values
        .map(|value| FacetOption {
            value: value.to_string(),
            checked: selected.iter().any(|s| s == value),
        })
        .collect()
}

fn enum_options<T>(values: &[T], selected: &[T]) -> Vec<FacetOption>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    values
        .iter()
        .map(|value| FacetOption {
            value: value.to_string(),
            checked: selected.contains(value),
        })
        .collect()
}
