//! Sole Street Core - Shared domain types library.
//!
//! This crate provides the common types used across all Sole Street components:
//! - `storefront` - Public-facing footwear store
//! - `cli` - Command-line tools for dataset validation and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no template rendering. This keeps it lightweight and allows it to be used
//! anywhere, including inside tests that need deterministic fixtures.
//!
//! # Modules
//!
//! - [`types`] - Product records, closed catalog enums, cart line items, and
//!   the session/auth state
//! - [`summary`] - The order summary calculator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod summary;
pub mod types;

pub use summary::{OrderSummary, order_summary};
pub use types::*;
