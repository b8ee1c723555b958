//! CLI command implementations.

pub mod seed;
pub mod validate;
