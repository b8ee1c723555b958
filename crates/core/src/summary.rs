//! The order summary calculator.
//!
//! A pure function over (product, quantity) pairs: no I/O, no rounding.
//! Presentation layers round to two decimal places for display only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Derived order totals. Never stored; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Compute the order summary for a set of cart lines.
///
/// - subtotal = sum of list price x quantity
/// - shipping = `shipping_fee` once if the line set is non-empty, else zero
/// - tax = subtotal x `tax_rate`
/// - total = subtotal + shipping + tax
///
/// Total-defined for any input; the empty sequence yields all zeros.
#[must_use]
pub fn order_summary<'a, I>(lines: I, tax_rate: Decimal, shipping_fee: Decimal) -> OrderSummary
where
    I: IntoIterator<Item = (&'a Product, u32)>,
{
    let mut subtotal = Decimal::ZERO;
    let mut any = false;

    for (product, quantity) in lines {
        any = true;
        subtotal += product.price_cad * Decimal::from(quantity);
    }

    let shipping = if any { shipping_fee } else { Decimal::ZERO };
    let tax = subtotal * tax_rate;

    OrderSummary {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{
        Category, FitType, MarketTrend, Product, ProductId, Retailers, StockStatus,
        SustainabilityRating, WidthType,
    };

    fn product(id: i64, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            brand: "Nike".to_string(),
            model: format!("Model {id}"),
            category: Category::Running,
            colorway: Vec::new(),
            release_year: 2023,
            material: "Mesh".to_string(),
            price_cad: price.parse().unwrap(),
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

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let summary = order_summary([], dec("0.13"), dec("15"));
        assert_eq!(summary, OrderSummary::default());
    }

    #[test]
    fn test_known_totals() {
        // subtotal=250, shipping=15, tax=32.5, total=297.5
        let a = product(1, "100");
        let b = product(2, "50");
        let summary = order_summary([(&a, 2), (&b, 1)], dec("0.13"), dec("15"));
        assert_eq!(summary.subtotal, dec("250"));
        assert_eq!(summary.shipping, dec("15"));
        assert_eq!(summary.tax, dec("32.5"));
        assert_eq!(summary.total, dec("297.5"));
    }

    #[test]
    fn test_no_internal_rounding() {
        let a = product(1, "9.99");
        let summary = order_summary([(&a, 1)], dec("0.13"), dec("0"));
        // 9.99 * 0.13 = 1.2987, kept exact
        assert_eq!(summary.tax, dec("1.2987"));
        assert_eq!(summary.total, dec("11.2887"));
    }

    #[test]
    fn test_subtotal_additive_over_disjoint_sets() {
        let a = product(1, "120.50");
        let b = product(2, "89.99");
        let c = product(3, "45.00");

        let left = order_summary([(&a, 1), (&b, 2)], dec("0.13"), dec("15"));
        let right = order_summary([(&c, 3)], dec("0.13"), dec("15"));
        let both = order_summary([(&a, 1), (&b, 2), (&c, 3)], dec("0.13"), dec("15"));

        assert_eq!(both.subtotal, left.subtotal + right.subtotal);
    }

    #[test]
    fn test_shipping_is_flat_not_per_line() {
        let a = product(1, "10");
        let b = product(2, "10");
        let one = order_summary([(&a, 1)], dec("0.13"), dec("15"));
        let two = order_summary([(&a, 1), (&b, 1)], dec("0.13"), dec("15"));
        assert_eq!(one.shipping, dec("15"));
        assert_eq!(two.shipping, dec("15"));
    }
}
