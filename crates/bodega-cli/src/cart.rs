//! Client-side cart state
//!
//! The cart exists only for the current shopping session; it is never
//! persisted and never sent to the server as a unit. At checkout it turns
//! into one item-create request per distinct product. Operations are
//! functional updates: each returns a new cart value and the caller
//! replaces its reference, so a cart in hand is never mutated under it.

use std::collections::BTreeMap;

use uuid::Uuid;

/// Mapping from product id to desired quantity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: BTreeMap<Uuid, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new cart with one more unit of `product_id` (inserted at 1 if absent)
    pub fn add(&self, product_id: Uuid) -> Cart {
        let mut entries = self.entries.clone();
        *entries.entry(product_id).or_insert(0) += 1;
        Cart { entries }
    }

    /// A new cart with one unit of `product_id` removed.
    ///
    /// An entry that reaches zero is dropped entirely, never left at zero;
    /// removing an absent product is a no-op. Quantities cannot go negative.
    pub fn remove(&self, product_id: Uuid) -> Cart {
        let mut entries = self.entries.clone();
        match entries.get_mut(&product_id) {
            Some(quantity) if *quantity > 1 => *quantity -= 1,
            Some(_) => {
                entries.remove(&product_id);
            }
            None => {}
        }
        Cart { entries }
    }

    /// Stored quantity for `product_id`, or 0 if absent
    pub fn quantity_of(&self, product_id: Uuid) -> u32 {
        self.entries.get(&product_id).copied().unwrap_or(0)
    }

    /// Sum of all quantities across entries (not the distinct-entry count)
    pub fn total_items(&self) -> u32 {
        self.entries.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products in the cart
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Distinct products and their quantities
    pub fn entries(&self) -> impl Iterator<Item = (Uuid, u32)> + '_ {
        self.entries.iter().map(|(id, quantity)| (*id, *quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_has_no_items() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.quantity_of(Uuid::new_v4()), 0);
    }

    #[test]
    fn add_inserts_at_one_then_increments() {
        let product = Uuid::new_v4();
        let cart = Cart::new().add(product);
        assert_eq!(cart.quantity_of(product), 1);

        let cart = cart.add(product);
        assert_eq!(cart.quantity_of(product), 2);
    }

    #[test]
    fn add_does_not_mutate_the_input_cart() {
        let product = Uuid::new_v4();
        let before = Cart::new().add(product);
        let after = before.add(product);

        assert_eq!(before.quantity_of(product), 1);
        assert_eq!(after.quantity_of(product), 2);
    }

    #[test]
    fn remove_decrements_and_drops_zeroed_entries() {
        let product = Uuid::new_v4();
        let cart = Cart::new().add(product).add(product);

        let cart = cart.remove(product);
        assert_eq!(cart.quantity_of(product), 1);

        let cart = cart.remove(product);
        assert_eq!(cart.quantity_of(product), 0);
        // Absent, not present-with-zero.
        assert_eq!(cart.len(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_of_absent_product_is_a_no_op() {
        let cart = Cart::new().add(Uuid::new_v4());
        let same = cart.remove(Uuid::new_v4());
        assert_eq!(cart, same);
    }

    #[test]
    fn remove_never_goes_negative() {
        let product = Uuid::new_v4();
        let cart = Cart::new().remove(product).remove(product);
        assert_eq!(cart.quantity_of(product), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_then_remove_round_trips_to_the_prior_cart() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let before = Cart::new().add(a).add(a).add(b);

        let after = before.add(b).remove(b);

        assert_eq!(before, after);
    }

    #[test]
    fn total_items_sums_quantities_across_entries() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let cart = Cart::new().add(a).add(a).add(b);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.len(), 2);
    }
}
