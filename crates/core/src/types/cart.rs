//! Cart line items as persisted in the cart collection.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One persisted cart line: a product reference and how many of it.
///
/// Quantity is always >= 1; a quantity that would drop to zero removes the
/// line instead (enforced by the cart store, not by this type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub quantity: u32,
}

impl CartItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(id: ProductId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}
