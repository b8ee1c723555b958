//! Dataset validation command.
//!
//! Loads a dataset through the same path the storefront uses at startup, so
//! schema errors (unknown enum strings, malformed prices) surface exactly as
//! they would in production, then runs extra integrity checks the loader does
//! not enforce.

use std::path::Path;

use rust_decimal::Decimal;
use tracing::{error, info};

use sole_street_core::Product;
use sole_street_storefront::catalog::Catalog;

/// Rating fields are on a 1-5 scale.
const RATING_MIN: f32 = 1.0;
const RATING_MAX: f32 = 5.0;

/// Validate the dataset at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or any integrity check
/// fails. Every problem found is logged before the command exits.
pub fn run(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    info!(path = %path.display(), "validating dataset");

    let raw = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;

    let problems = integrity_problems(&products);
    for problem in &problems {
        error!("{problem}");
    }

    // The catalog constructor owns the duplicate-id check; price bounds only
    // influence the report, so any plausible rates do here.
    let tax_rate: Decimal = "0.13".parse()?;
    let shipping_fee: Decimal = "15".parse()?;
    let catalog = Catalog::from_products(products, tax_rate, shipping_fee)?;

    if !problems.is_empty() {
        return Err(format!("{} integrity problem(s) found", problems.len()).into());
    }

    let (low, high) = catalog.price_bounds();
    info!(
        products = catalog.products().len(),
        brands = catalog.brands().len(),
        price_low = %low,
        price_high = %high,
        "dataset OK"
    );
    Ok(())
}

/// Run the per-product integrity checks, returning one message per problem.
fn integrity_problems(products: &[Product]) -> Vec<String> {
    let mut problems = Vec::new();

    for product in products {
        let label = format!("product {} ({} {})", product.id, product.brand, product.model);

        for (field, value) in [
            ("comfortRatingOn5", product.comfort_rating_on_5),
            ("durabilityRatingOn5", product.durability_rating_on_5),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                problems.push(format!("{label}: {field} {value} outside 1-5"));
            }
        }

        if product.available_sizes_us.is_empty() {
            problems.push(format!("{label}: no available sizes"));
        }

        if product.price_cad <= Decimal::ZERO {
            problems.push(format!("{label}: non-positive price {}", product.price_cad));
        }

        if product.brand.trim().is_empty() || product.model.trim().is_empty() {
            problems.push(format!("{label}: blank brand or model"));
        }

        if let Some(wide) = &product.wide_fit_sizes {
            if wide.is_empty() {
                problems.push(format!("{label}: wideFitSizes present but empty"));
            }
        }
    }

    problems
}
