//! The filter specification and its matching predicate.
//!
//! A product matches when every active facet accepts it (logical AND across
//! facets, OR within a facet's multi-select). An empty selection for any
//! facet means "no constraint on that facet", never "match nothing".
//! Matching preserves catalog order; there is no relevance scoring.

use rust_decimal::Decimal;

use sole_street_core::{Category, FitType, Product, StockStatus, SustainabilityRating};

/// The category selector: a single category or the "All Categories" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The sentinel string used in URLs and the category tab bar.
    pub const ALL_CATEGORIES: &'static str = "All Categories";

    /// Parse a URL/form parameter. Total: anything that is not a known
    /// category falls back to the sentinel.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        value.parse::<Category>().map_or(Self::All, Self::Only)
    }

    /// The wire string for URLs and templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => Self::ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete filter specification for the catalog listing.
///
/// Value equality (and `Hash`) is what keys the engine's memoization cache,
/// so every field participates in `PartialEq`/`Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    /// Free-text query matched against brand, model, and category.
    pub query: String,
    /// Category tab selection.
    pub category: CategoryFilter,
    /// Inclusive range over computed single-unit order totals.
    pub price_range: (Decimal, Decimal),
    /// Brand multi-select; empty = unconstrained.
    pub brands: Vec<String>,
    /// Sustainability multi-select; empty = unconstrained.
    pub sustainability: Vec<SustainabilityRating>,
    /// Fit-type multi-select; empty = unconstrained.
    pub fit_types: Vec<FitType>,
    /// Stock-status multi-select; empty = unconstrained.
    pub stock_statuses: Vec<StockStatus>,
}

impl FilterSpec {
    /// Every facet at its default "unconstrained" value, with the price
    /// range spanning the given slider bounds.
    #[must_use]
    pub fn unconstrained(price_bounds: (Decimal, Decimal)) -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            price_range: price_bounds,
            brands: Vec::new(),
            sustainability: Vec::new(),
            fit_types: Vec::new(),
            stock_statuses: Vec::new(),
        }
    }

    /// Whether `product` (with its precomputed single-unit order total)
    /// passes every active facet.
    #[must_use]
    pub fn matches(&self, product: &Product, unit_total: Decimal) -> bool {
        self.matches_query(product)
            && self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_sustainability(product)
            && self.matches_fit(product)
            && self.matches_stock(product)
            && self.matches_price(unit_total)
    }

    fn matches_query(&self, product: &Product) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        product.brand.to_lowercase().contains(&needle)
            || product.model.to_lowercase().contains(&needle)
            || product.category.as_str().to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == category,
        }
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|b| *b == product.brand)
    }

    fn matches_sustainability(&self, product: &Product) -> bool {
        self.sustainability.is_empty() || self.sustainability.contains(&product.sustainability)
    }

    fn matches_fit(&self, product: &Product) -> bool {
        self.fit_types.is_empty() || self.fit_types.contains(&product.fit)
    }

    fn matches_stock(&self, product: &Product) -> bool {
        self.stock_statuses.is_empty() || self.stock_statuses.contains(&product.stock_status)
    }

    fn matches_price(&self, unit_total: Decimal) -> bool {
        let (min, max) = self.price_range;
        unit_total >= min && unit_total <= max
    }

    /// Build a spec from decoded facet-form pairs (the "Apply Filters" POST).
    ///
    /// Total over untrusted input: unknown keys and unparseable values are
    /// ignored, missing price bounds fall back to the slider bounds. The
    /// persisted URL params (`query`, `category`) ride along in the same
    /// form so one submission carries the whole state.
    #[must_use]
    pub fn from_form_pairs<'a, I>(pairs: I, price_bounds: (Decimal, Decimal)) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut spec = Self::unconstrained(price_bounds);
        let (mut min, mut max) = price_bounds;

        for (key, value) in pairs {
            match key {
                "query" => spec.query = value.to_string(),
                "category" => spec.category = CategoryFilter::from_param(value),
                "price_min" => {
                    if let Ok(v) = value.parse::<Decimal>() {
                        min = v;
                    }
                }
                "price_max" => {
                    if let Ok(v) = value.parse::<Decimal>() {
                        max = v;
                    }
                }
                "brand" => spec.brands.push(value.to_string()),
                "sustainability" => {
                    if let Ok(v) = value.parse::<SustainabilityRating>() {
                        spec.sustainability.push(v);
                    }
                }
                "fit" => {
                    if let Ok(v) = value.parse::<FitType>() {
                        spec.fit_types.push(v);
                    }
                }
                "stock" => {
                    if let Ok(v) = value.parse::<StockStatus>() {
                        spec.stock_statuses.push(v);
                    }
                }
                _ => {}
            }
        }

        spec.price_range = (min, max);
        spec
    }

    /// Whether any facet outside the URL-persisted trio is active.
    #[must_use]
    pub fn has_facet_constraints(&self, price_bounds: (Decimal, Decimal)) -> bool {
        !self.brands.is_empty()
            || !self.sustainability.is_empty()
            || !self.fit_types.is_empty()
            || !self.stock_statuses.is_empty()
            || self.price_range != price_bounds
    }
}
