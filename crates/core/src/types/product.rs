//! The catalog product record and its closed enums.
//!
//! Field names and enum wire strings match the bundled dataset schema, so the
//! whole module round-trips through `serde_json` against `footwear.json`
//! unchanged. All enums are closed sets; anything outside them is a dataset
//! error, not a runtime state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Error returned when parsing an enum from its wire string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every value of the closed set, in dataset order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire string used in the dataset and in URLs.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Shoe category. Doubles as the "best for" tag set.
    Category, "category" {
        CasualWear => "Casual Wear",
        Lifestyle => "Lifestyle",
        Basketball => "Basketball",
        Hiking => "Hiking",
        Running => "Running",
        Tennis => "Tennis",
        Soccer => "Soccer",
        CrossTrainers => "Cross-Trainers",
        WaterShoe => "Water Shoe",
        IndoorMat => "Indoor Mat",
        SlipOn => "Slip-On",
        Flats => "Flats",
        Heels => "Heels",
        Boots => "Boots",
        Workwear => "Workwear",
        TrailRunning => "Trail Running",
        Cycling => "Cycling",
        Formal => "Formal",
    }
}

wire_enum! {
    /// Resale market trend for a model.
    MarketTrend, "market trend" {
        Rise => "rise",
        Stable => "stable",
        Decline => "decline",
        Volatile => "volatile",
        Emerging => "emerging",
        FallingSharply => "falling sharply",
    }
}

wire_enum! {
    /// Sustainability rating facet.
    SustainabilityRating, "sustainability rating" {
        Standard => "Standard",
        SustainableMaterials => "Sustainable Materials",
        EcoFriendlyProduction => "Eco-Friendly Production",
        RecycledMaterials => "Recycled Materials",
        CarbonNeutral => "Carbon Neutral",
        Vegan => "Vegan",
    }
}

wire_enum! {
    /// How the shoe fits relative to its nominal size.
    FitType, "fit type" {
        TrueToSize => "True to size",
        RunsSmall => "Runs small",
        RunsLarge => "Runs large",
        SlimFit => "Slim Fit",
        LooseFit => "Loose Fit",
        Oversized => "Oversized",
    }
}

wire_enum! {
    /// Shoe width designation.
    WidthType, "width" {
        ExtraNarrow => "Extra Narrow (2A)",
        Narrow => "Narrow (B)",
        Standard => "Standard (D)",
        Wide => "Wide (2E)",
        ExtraWide => "Extra Wide (4E)",
        UltraWide => "Ultra Wide (6E)",
        SuperWide => "Super Wide (8E)",
    }
}

wire_enum! {
    /// Named colorway colors.
    Color, "color" {
        Black => "Black",
        White => "White",
        Red => "Red",
        Blue => "Blue",
        Green => "Green",
        Yellow => "Yellow",
        Orange => "Orange",
        Purple => "Purple",
        Pink => "Pink",
        Brown => "Brown",
        Grey => "Grey",
        Beige => "Beige",
        MultiColor => "Multi-Color",
    }
}

wire_enum! {
    /// Availability facet.
    StockStatus, "stock status" {
        InStock => "In Stock",
        OutOfStock => "Out of Stock",
        LimitedStock => "Limited Stock",
        PreOrder => "Pre-Order",
        Backordered => "Backordered",
        Discontinued => "Discontinued",
    }
}

/// One retailer's offer for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailerOffer {
    /// Offer price in the catalog currency.
    pub price: Decimal,
    /// Direct link to the retailer's listing.
    pub url: String,
}

/// Mapping from retailer name to its offer.
///
/// `BTreeMap` keeps retailer rendering order stable across runs.
pub type Retailers = BTreeMap<String, RetailerOffer>;

/// An immutable catalog product record.
///
/// Loaded once at startup from the bundled dataset and never mutated;
/// identity is the integer [`ProductId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub brand: String,
    pub model: String,
    pub category: Category,
    pub colorway: Vec<Color>,
    pub release_year: u16,
    pub material: String,
    #[serde(rename = "priceCAD")]
    pub price_cad: Decimal,
    #[serde(rename = "resalePriceCAD", default, skip_serializing_if = "Option::is_none")]
    pub resale_price_cad: Option<Decimal>,
    pub market_trend: MarketTrend,
    pub fit: FitType,
    pub width: WidthType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wide_fit_sizes: Option<Vec<f32>>,
    pub comfort_rating_on_5: f32,
    pub durability_rating_on_5: f32,
    pub sustainability: SustainabilityRating,
    pub best_for: Vec<Category>,
    #[serde(rename = "availableSizesUS")]
    pub available_sizes_us: Vec<f32>,
    pub stock_status: StockStatus,
    pub retailers: Retailers,
    /// Main image for product pages.
    pub image_url: String,
    /// Other images for a gallery (top, side, etc.).
    pub image_urls: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "brand": "Nike",
            "model": "Air Zoom Pegasus 40",
            "category": "Running",
            "colorway": ["Black", "White"],
            "releaseYear": 2023,
            "material": "Engineered mesh",
            "priceCAD": "179.99",
            "marketTrend": "stable",
            "fit": "True to size",
            "width": "Standard (D)",
            "comfortRatingOn5": 4.5,
            "durabilityRatingOn5": 4.0,
            "sustainability": "Recycled Materials",
            "bestFor": ["Running", "Cross-Trainers"],
            "availableSizesUS": [8, 8.5, 9, 10],
            "stockStatus": "In Stock",
            "retailers": {
                "nike": { "price": "179.99", "url": "https://nike.example/pegasus-40" }
            },
            "imageUrl": "/static/img/pegasus-40.jpg",
            "imageUrls": ["/static/img/pegasus-40-top.jpg"]
        }"#
    }

    #[test]
    fn test_product_deserializes_dataset_schema() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.category, Category::Running);
        assert_eq!(product.fit, FitType::TrueToSize);
        assert_eq!(product.stock_status, StockStatus::InStock);
        assert_eq!(product.price_cad, Decimal::new(17999, 2));
        assert!(product.resale_price_cad.is_none());
        assert_eq!(product.retailers.len(), 1);
    }

    #[test]
    fn test_product_serialization_roundtrip() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_category_wire_strings() {
        assert_eq!(Category::CrossTrainers.as_str(), "Cross-Trainers");
        assert_eq!("Trail Running".parse::<Category>().unwrap(), Category::TrailRunning);
        assert!("Nonexistent".parse::<Category>().is_err());
        assert_eq!(Category::ALL.len(), 18);
    }

    #[test]
    fn test_stock_status_closed_set() {
        assert_eq!(StockStatus::ALL.len(), 6);
        assert_eq!(
            "Limited Stock".parse::<StockStatus>().unwrap(),
            StockStatus::LimitedStock
        );
    }

    #[test]
    fn test_market_trend_lowercase_wire() {
        assert_eq!(
            "falling sharply".parse::<MarketTrend>().unwrap(),
            MarketTrend::FallingSharply
        );
        let json = serde_json::to_string(&MarketTrend::Rise).unwrap();
        assert_eq!(json, "\"rise\"");
    }
}
