//! The cart store: the sole mutable persisted collection in the system.
//!
//! Every operation is a read-modify-write of the whole line-item collection
//! under one well-known storage key. There is no partial-update primitive and
//! no locking; two views racing on the cart lose at full-collection
//! granularity (last write wins), and subscribers converge after the change
//! notification fires.

use tracing::instrument;

use sole_street_core::{CartItem, Product, ProductId};

use crate::catalog::Catalog;
use crate::storage::{LocalStore, StorageError};

/// Storage key for the persisted cart collection.
pub const CART_STORAGE_KEY: &str = "footwear-cart-items";

/// A cart line joined against the catalog for rendering.
#[derive(Debug, Clone)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

/// Cart operations over the durable store.
#[derive(Debug, Clone)]
pub struct CartStore {
    store: LocalStore,
}

impl CartStore {
    /// Wrap a [`LocalStore`].
    #[must_use]
    pub const fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// All persisted line items. Missing or malformed state is an empty cart.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.store.get(CART_STORAGE_KEY).unwrap_or_default()
    }

    /// Total quantity across all lines (the navbar badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    /// Add `quantity` of a product. Merges into an existing line for the
    /// same id rather than appending a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    #[instrument(skip(self))]
    pub fn add(&self, id: ProductId, quantity: u32) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.items();

        if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
            existing.quantity += quantity;
        } else {
            items.push(CartItem::new(id, quantity));
        }

        self.store.set(CART_STORAGE_KEY, &items)?;
        Ok(items)
    }

    /// Remove the line for a product id entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    #[instrument(skip(self))]
    pub fn remove(&self, id: ProductId) -> Result<Vec<CartItem>, StorageError> {
        let items: Vec<CartItem> = self
            .items()
            .into_iter()
            .filter(|item| item.id != id)
            .collect();
        self.store.set(CART_STORAGE_KEY, &items)?;
        Ok(items)
    }

    /// Overwrite the quantity for a line. A quantity of zero (callers pass
    /// an unsigned value, so "<= 0" collapses to zero) removes the line.
    /// Setting a quantity for an id not in the cart is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    #[instrument(skip(self))]
    pub fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<Vec<CartItem>, StorageError> {
        if quantity == 0 {
            return self.remove(id);
        }

        let mut items = self.items();
        if let Some(existing) = items.iter_mut().find(|item| item.id == id) {
            existing.quantity = quantity;
            self.store.set(CART_STORAGE_KEY, &items)?;
        }
        Ok(items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the collection fails.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.set(CART_STORAGE_KEY, &Vec::<CartItem>::new())
    }

    /// Join the persisted lines against the catalog for rendering.
    ///
    /// A line whose product id no longer resolves is silently dropped - a
    /// stale reference is not an error, the item just disappears from view.
    #[must_use]
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.items()
            .into_iter()
            .filter_map(|item| match catalog.get(item.id) {
                Some(product) => Some(CartLine {
                    product,
                    quantity: item.quantity,
                }),
                None => {
                    tracing::debug!(id = %item.id, "dropping cart line for unknown product");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{catalog_of, product};
    use sole_street_core::Category;

    fn cart() -> (tempfile::TempDir, CartStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, CartStore::new(store))
    }

    #[test]
    fn test_empty_cart_by_default() {
        let (_dir, cart) = cart();
        assert!(cart.items().is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_merges_by_id() {
        // add(5, 1) then add(5, 2) => one line with quantity 3
        let (_dir, cart) = cart();
        cart.add(ProductId::new(5), 1).unwrap();
        let items = cart.add(ProductId::new(5), 2).unwrap();
        assert_eq!(items, vec![CartItem::new(ProductId::new(5), 3)]);
    }

    #[test]
    fn test_add_appends_new_ids_in_order() {
        let (_dir, cart) = cart();
        cart.add(ProductId::new(1), 1).unwrap();
        cart.add(ProductId::new(2), 4).unwrap();
        let items = cart.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().unwrap().id, ProductId::new(1));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let (_dir, cart) = cart();
        cart.add(ProductId::new(1), 2).unwrap();
        let items = cart.set_quantity(ProductId::new(1), 0).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let (_dir, cart) = cart();
        cart.add(ProductId::new(1), 2).unwrap();
        let items = cart.set_quantity(ProductId::new(1), 7).unwrap();
        assert_eq!(items, vec![CartItem::new(ProductId::new(1), 7)]);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let (_dir, cart) = cart();
        cart.add(ProductId::new(1), 2).unwrap();
        let items = cart.set_quantity(ProductId::new(9), 7).unwrap();
        assert_eq!(items, vec![CartItem::new(ProductId::new(1), 2)]);
    }

    #[test]
    fn test_clear_persists_empty_collection() {
        let (_dir, cart) = cart();
        cart.add(ProductId::new(1), 2).unwrap();
        cart.clear().unwrap();
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_lines_drop_dangling_references() {
        let (_dir, cart) = cart();
        let catalog = catalog_of(vec![product(1, "Nike", "A", Category::Running, "100")]);

        cart.add(ProductId::new(1), 2).unwrap();
        cart.add(ProductId::new(999), 1).unwrap();

        let lines = cart.lines(&catalog);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().product.id, ProductId::new(1));
        assert_eq!(lines.first().unwrap().quantity, 2);
    }
}
