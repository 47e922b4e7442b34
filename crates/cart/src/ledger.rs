use serde::Serialize;

use storefront_catalog::{Catalog, Product};
use storefront_core::{DomainError, DomainResult, Price, ProductId};

/// One product in the cart. `quantity` is at least 1 while the entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    product_id: ProductId,
    quantity: u32,
}

impl CartEntry {
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A cart entry resolved against the catalog, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'c> {
    pub product: &'c Product,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Shopping cart ledger.
///
/// Entries keep first-add order. An entry is created by the first `add` of a
/// product and destroyed when `remove` brings its quantity to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    entries: Vec<CartEntry>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity of `product_id` in the cart (0 when absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.position(product_id)
            .map(|i| self.entries[i].quantity)
            .unwrap_or(0)
    }

    /// Add one unit of `product_id`; returns the new quantity.
    ///
    /// Fails with [`DomainError::UnknownProduct`] if the product is not in
    /// `catalog`; the ledger is left untouched.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId) -> DomainResult<u32> {
        catalog.require(product_id)?;

        let quantity = match self.position(product_id) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.quantity = entry
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| DomainError::invariant("cart quantity overflow"))?;
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry {
                    product_id,
                    quantity: 1,
                });
                1
            }
        };

        tracing::debug!(product_id = %product_id, quantity, "added to cart");
        Ok(quantity)
    }

    /// Remove one unit of `product_id`; returns the remaining quantity.
    ///
    /// The entry is deleted when its quantity reaches zero. Removing a product
    /// that has no entry is a no-op. A product that is not in `catalog` fails
    /// with [`DomainError::UnknownProduct`].
    pub fn remove(&mut self, catalog: &Catalog, product_id: ProductId) -> DomainResult<u32> {
        catalog.require(product_id)?;

        let Some(i) = self.position(product_id) else {
            return Ok(0);
        };

        let remaining = self.entries[i].quantity - 1;
        if remaining == 0 {
            self.entries.remove(i);
        } else {
            self.entries[i].quantity = remaining;
        }

        tracing::debug!(product_id = %product_id, remaining, "removed from cart");
        Ok(remaining)
    }

    /// Sum of `price × quantity`, priced against `catalog` now.
    pub fn total(&self, catalog: &Catalog) -> DomainResult<Price> {
        self.entries.iter().try_fold(Price::ZERO, |acc, entry| {
            let subtotal = subtotal(catalog.require(entry.product_id)?, entry.quantity)?;
            acc.checked_add(subtotal)
                .ok_or_else(|| DomainError::invariant("cart total overflow"))
        })
    }

    /// Sum of all quantities.
    pub fn count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries resolved against `catalog`, in cart order.
    pub fn lines<'c>(&self, catalog: &'c Catalog) -> DomainResult<Vec<CartLine<'c>>> {
        self.entries
            .iter()
            .map(|entry| {
                let product = catalog.require(entry.product_id)?;
                Ok(CartLine {
                    product,
                    quantity: entry.quantity,
                    subtotal: subtotal(product, entry.quantity)?,
                })
            })
            .collect()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.entries.iter().position(|e| e.product_id == product_id)
    }
}

fn subtotal(product: &Product, quantity: u32) -> DomainResult<Price> {
    product
        .price()
        .checked_mul(quantity)
        .ok_or_else(|| DomainError::invariant("cart line overflow"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    fn catalog() -> Catalog {
        let product = |n: u64, title: &str, cents: u64| {
            Product::new(id(n), title, Price::from_cents(cents), "Home").unwrap()
        };
        Catalog::new(vec![
            product(1, "Coffee Mug", 1250),
            product(2, "Desk Lamp", 4500),
            product(3, "Throw Pillow", 1500),
        ])
    }

    #[test]
    fn add_twice_remove_once_leaves_one() {
        let catalog = catalog();
        let mut cart = CartLedger::new();

        assert_eq!(cart.add(&catalog, id(1)).unwrap(), 1);
        assert_eq!(cart.add(&catalog, id(1)).unwrap(), 2);
        assert_eq!(cart.remove(&catalog, id(1)).unwrap(), 1);

        assert_eq!(cart.quantity_of(id(1)), 1);
        assert_eq!(cart.total(&catalog).unwrap(), Price::from_cents(1250));
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn add_unknown_product_fails_without_mutation() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add(&catalog, id(2)).unwrap();
        let before = cart.clone();

        let err = cart.add(&catalog, id(99)).unwrap_err();
        assert_eq!(err, DomainError::UnknownProduct(id(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_unknown_product_is_reported() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        assert!(matches!(cart.remove(&catalog, id(42)), Err(DomainError::UnknownProduct(_))));
    }

    #[test]
    fn remove_without_entry_is_a_noop() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        assert_eq!(cart.remove(&catalog, id(3)).unwrap(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn entry_is_deleted_at_zero() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add(&catalog, id(3)).unwrap();
        cart.remove(&catalog, id(3)).unwrap();
        assert!(cart.entries().is_empty());
        assert_eq!(cart.total(&catalog).unwrap(), Price::ZERO);
    }

    #[test]
    fn lines_follow_first_add_order() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add(&catalog, id(2)).unwrap();
        cart.add(&catalog, id(1)).unwrap();
        cart.add(&catalog, id(2)).unwrap();

        let lines = cart.lines(&catalog).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.title(), "Desk Lamp");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].subtotal, Price::from_cents(9000));
        assert_eq!(lines[1].product.title(), "Coffee Mug");
        assert_eq!(cart.total(&catalog).unwrap(), Price::from_cents(10250));
    }

    #[test]
    fn total_against_catalog_missing_an_entry_reports_unknown_product() {
        let full = catalog();
        let mut cart = CartLedger::new();
        cart.add(&full, id(3)).unwrap();

        let reduced = Catalog::new(vec![full.get(id(1)).unwrap().clone()]);
        assert_eq!(cart.total(&reduced).unwrap_err(), DomainError::UnknownProduct(id(3)));
        assert!(cart.lines(&reduced).is_err());
    }

    #[test]
    fn clear_empties_the_ledger() {
        let catalog = catalog();
        let mut cart = CartLedger::new();
        cart.add(&catalog, id(1)).unwrap();
        cart.add(&catalog, id(2)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        Remove(u64),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![(1u64..=3).prop_map(Op::Add), (1u64..=3).prop_map(Op::Remove)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: count equals the sum of quantities, every entry has
        /// quantity >= 1, and the total matches the per-entry subtotals.
        #[test]
        fn count_and_total_track_entries(ops in prop::collection::vec(arb_op(), 0..60)) {
            let catalog = catalog();
            let mut cart = CartLedger::new();

            for op in ops {
                match op {
                    Op::Add(n) => { cart.add(&catalog, id(n)).unwrap(); }
                    Op::Remove(n) => { cart.remove(&catalog, id(n)).unwrap(); }
                }
            }

            let quantities: u64 = cart.entries().iter().map(|e| u64::from(e.quantity())).sum();
            prop_assert_eq!(cart.count(), quantities);
            prop_assert!(cart.entries().iter().all(|e| e.quantity() >= 1));

            let expected: u64 = cart
                .entries()
                .iter()
                .map(|e| catalog.get(e.product_id()).unwrap().price().cents() * u64::from(e.quantity()))
                .sum();
            prop_assert_eq!(cart.total(&catalog).unwrap().cents(), expected);
        }

        /// Property: add(id) followed by remove(id) restores the previous ledger.
        #[test]
        fn add_then_remove_round_trips(
            ops in prop::collection::vec(arb_op(), 0..30),
            target in 1u64..=3
        ) {
            let catalog = catalog();
            let mut cart = CartLedger::new();
            for op in ops {
                match op {
                    Op::Add(n) => { cart.add(&catalog, id(n)).unwrap(); }
                    Op::Remove(n) => { cart.remove(&catalog, id(n)).unwrap(); }
                }
            }

            let before = cart.clone();
            let total_before = cart.total(&catalog).unwrap();
            cart.add(&catalog, id(target)).unwrap();
            cart.remove(&catalog, id(target)).unwrap();

            prop_assert_eq!(&cart, &before);
            prop_assert_eq!(cart.total(&catalog).unwrap(), total_before);
        }
    }
}
