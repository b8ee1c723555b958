//! Dataset multiplication command.
//!
//! Emits `multiply` copies of a source dataset with fresh ids, which is the
//! quickest way to get enough products to exercise pagination and the filter
//! cache against a realistic catalog size.

use std::path::Path;

use tracing::info;

use sole_street_core::{Product, ProductId};
use sole_street_storefront::catalog::Catalog;

/// Multiply the dataset at `data` and write the result to `out`.
///
/// # Errors
///
/// Returns an error if the source cannot be loaded, the multiplied ids would
/// collide, or the output cannot be written.
pub fn run(data: &Path, multiply: u32, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let raw = std::fs::read_to_string(data)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;

    let seeded = multiply_products(&products, multiply);

    // Trip the same duplicate-id check the storefront loader runs.
    let tax_rate: rust_decimal::Decimal = "0.13".parse()?;
    let shipping_fee: rust_decimal::Decimal = "15".parse()?;
    Catalog::from_products(seeded.clone(), tax_rate, shipping_fee)?;

    std::fs::write(out, serde_json::to_vec_pretty(&seeded)?)?;
    info!(
        source = products.len(),
        written = seeded.len(),
        out = %out.display(),
        "seed dataset written"
    );
    Ok(())
}

/// Emit `multiply` copies of `products`, offsetting ids by the highest source
/// id so every copy keeps a distinct identity.
fn multiply_products(products: &[Product], multiply: u32) -> Vec<Product> {
    let stride = products.iter().map(|p| p.id.as_i64()).max().unwrap_or(0);

    let mut seeded = Vec::with_capacity(products.len() * multiply as usize);
    for copy in 0..i64::from(multiply) {
        for product in products {
            let mut clone = product.clone();
            clone.id = ProductId::new(product.id.as_i64() + copy * stride);
            seeded.push(clone);
        }
    }
    seeded
}
