//! Core types for Sole Street.
//!
//! This module provides the catalog product record, its closed enums, and the
//! small persisted value types (cart line items, auth state).

pub mod cart;
pub mod id;
pub mod product;
pub mod session;

pub use cart::CartItem;
pub use id::*;
pub use product::{
    Category, Color, FitType, MarketTrend, Product, RetailerOffer, Retailers, StockStatus,
    SustainabilityRating, WidthType,
};
pub use session::{AuthState, UserProfile};
