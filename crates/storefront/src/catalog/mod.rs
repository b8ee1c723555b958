//! The product catalog store and its filter/pagination engine.
//!
//! The catalog is loaded once at startup from the bundled JSON dataset and is
//! immutable for the life of the process. Everything derived from it (brand
//! index, price slider bounds, filtered views) is recomputed from the arena
//! of products, never cached as mutable state. The one cache that does exist
//! memoizes filtered id-lists keyed on the filter's value equality, which is
//! safe precisely because the catalog never changes.

mod filter;
mod pagination;
mod url_state;

pub use filter::{CategoryFilter, FilterSpec};
pub use pagination::{PAGE_SIZE, PageEntry, PageWindow, page_entries, page_slice, total_pages};
pub use url_state::UrlState;

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use sole_street_core::{Product, ProductId, order_summary};

/// How many distinct filter combinations to keep memoized.
const FILTER_CACHE_CAPACITY: u64 = 256;

/// Errors loading the catalog dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("duplicate product id {0} in dataset")]
    DuplicateId(ProductId),
}

/// The immutable product catalog plus its derived indexes.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    products: Vec<Product>,
    brands: Vec<String>,
    price_bounds: (Decimal, Decimal),
    tax_rate: Decimal,
    shipping_fee: Decimal,
    filter_cache: moka::sync::Cache<FilterSpec, Arc<Vec<ProductId>>>,
}

impl Catalog {
    /// Load the catalog from a JSON dataset file.
    ///
    /// `tax_rate` and `shipping_fee` are needed up front because price-range
    /// filtering and the slider bounds work over computed single-unit order
    /// totals, not raw list prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if two
    /// products share an id.
    pub fn load(
        path: &Path,
        tax_rate: Decimal,
        shipping_fee: Decimal,
    ) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(count = products.len(), path = %path.display(), "catalog loaded");
        Self::from_products(products, tax_rate, shipping_fee)
    }

    /// Build a catalog from an in-memory product list (used by tests and the
    /// CLI seeder).
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id.
    pub fn from_products(
        products: Vec<Product>,
        tax_rate: Decimal,
        shipping_fee: Decimal,
    ) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        let brands = brand_index(&products);
        let price_bounds = price_bounds(&products, tax_rate, shipping_fee);

        Ok(Self {
            inner: Arc::new(CatalogInner {
                products,
                brands,
                price_bounds,
                tax_rate,
                shipping_fee,
                filter_cache: moka::sync::Cache::new(FILTER_CACHE_CAPACITY),
            }),
        })
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == id)
    }

    /// All brands present in the catalog, sorted and deduplicated.
    #[must_use]
    pub fn brands(&self) -> &[String] {
        &self.inner.brands
    }

    /// Price slider bounds: min/max single-unit order totals across the
    /// catalog, floor/ceil-rounded outward to the nearest multiple of 100
    /// whole currency units.
    #[must_use]
    pub fn price_bounds(&self) -> (Decimal, Decimal) {
        self.inner.price_bounds
    }

    /// The configured tax rate, applied when computing unit totals.
    #[must_use]
    pub fn tax_rate(&self) -> Decimal {
        self.inner.tax_rate
    }

    /// The configured flat shipping fee.
    #[must_use]
    pub fn shipping_fee(&self) -> Decimal {
        self.inner.shipping_fee
    }

    /// The single-unit order total used for price-range filtering.
    #[must_use]
    pub fn unit_total(&self, product: &Product) -> Decimal {
        order_summary(
            [(product, 1)],
            self.inner.tax_rate,
            self.inner.shipping_fee,
        )
        .total
    }

    /// A filter spec with every facet at its unconstrained default and the
    /// price range spanning the full slider bounds.
    #[must_use]
    pub fn unconstrained_filter(&self) -> FilterSpec {
        FilterSpec::unconstrained(self.inner.price_bounds)
    }

    /// Products matching `spec`, in catalog order.
    ///
    /// The underlying id-list is memoized per filter value; the catalog is
    /// immutable so entries never go stale.
    #[must_use]
    pub fn filter(&self, spec: &FilterSpec) -> Vec<&Product> {
        let ids = self
            .inner
            .filter_cache
            .get_with_by_ref(spec, || Arc::new(self.matching_ids(spec)));

        // Ids come from the catalog itself, so every one resolves.
        ids.iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    fn matching_ids(&self, spec: &FilterSpec) -> Vec<ProductId> {
        self.inner
            .products
            .iter()
            .filter(|p| spec.matches(p, self.unit_total(p)))
            .map(|p| p.id)
            .collect()
    }
}

/// Brands present in the catalog, sorted and deduplicated.
fn brand_index(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = products.iter().map(|p| p.brand.clone()).collect();
    brands.sort();
    brands.dedup();
    brands
}

/// Min/max single-unit totals, rounded outward to whole hundreds.
fn price_bounds(products: &[Product], tax_rate: Decimal, shipping_fee: Decimal) -> (Decimal, Decimal) {
    let hundred = Decimal::from(100);
    let mut min: Option<Decimal> = None;
    let mut max: Option<Decimal> = None;

    for product in products {
        let total = order_summary([(product, 1)], tax_rate, shipping_fee).total;
        min = Some(min.map_or(total, |m| m.min(total)));
        max = Some(max.map_or(total, |m| m.max(total)));
    }

    match (min, max) {
        (Some(min), Some(max)) => (
            (min / hundred).floor() * hundred,
            (max / hundred).ceil() * hundred,
        ),
        // Empty catalog: degenerate zero-width range.
        _ => (Decimal::ZERO, Decimal::ZERO),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_fixtures {
    use rust_decimal::Decimal;
    use sole_street_core::{
        Category, FitType, MarketTrend, Product, ProductId, Retailers, StockStatus,
        SustainabilityRating, WidthType,
    };

    pub const TAX_RATE: &str = "0.13";
    pub const SHIPPING_FEE: &str = "15";

    pub fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    pub fn product(id: i64, brand: &str, model: &str, category: Category, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            brand: brand.to_string(),
            model: model.to_string(),
            category,
            colorway: Vec::new(),
            release_year: 2023,
            material: "Mesh".to_string(),
            price_cad: dec(price),
            resale_price_cad: None,
            market_trend: MarketTrend::Stable,
            fit: FitType::TrueToSize,
            width: WidthType::Standard,
            wide_fit_sizes: None,
            comfort_rating_on_5: 4.0,
            durability_rating_on_5: 4.0,
            sustainability: SustainabilityRating::Standard,
            best_for: Vec::new(),
            available_sizes_us: vec![9.0],
            stock_status: StockStatus::InStock,
            retailers: Retailers::default(),
            image_url: String::new(),
            image_urls: Vec::new(),
        }
    }

    pub fn catalog_of(products: Vec<Product>) -> super::Catalog {
        super::Catalog::from_products(products, dec(TAX_RATE), dec(SHIPPING_FEE)).unwrap()
    }
}
