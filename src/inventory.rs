//! In-memory product inventory and single-product orders.
//!
//! [`Inventory`] keeps its products sorted by id at all times: every insertion is
//! followed by a re-sort through [`AdaptiveSort`], and every lookup is a binary
//! search through [`find`](crate::search::find).

use crate::algo::{AdaptiveSort, Sorter};
use crate::core::{Key, Keyed};
use crate::error::{InventoryError, Result};
use crate::policy::SortPolicy;
use crate::search::{find, find_record, find_record_mut};
use std::collections::BTreeSet;
use tracing::{info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: Key,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: u64,
    pub supplier: String,
}

impl Keyed for Product {
    #[inline]
    fn key(&self) -> Key {
        self.id
    }
}

/// Partial update of a product. `None` fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub quantity: Option<u32>,
    pub price: Option<u64>,
    pub supplier: Option<String>,
}

/// Products ordered by id, plus the ids freed by deletions.
///
/// New products take the smallest freed id if there is one, otherwise one past the
/// largest id in use.
///
/// ```
/// use keysort::inventory::Inventory;
///
/// let mut inventory = Inventory::new();
/// let id = inventory.add_product("Laptop", "Electronics", 50, 1000, "Supplier A");
///
/// assert_eq!(id, 1);
/// assert_eq!(inventory.get(1).map(|p| p.quantity), Some(50));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
    deleted_ids: BTreeSet<Key>,
    sorter: AdaptiveSort,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: SortPolicy) -> Self {
        Self {
            sorter: AdaptiveSort::new(policy),
            ..Self::default()
        }
    }

    /// Adds a product and returns the id assigned to it.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: u64,
        supplier: impl Into<String>,
    ) -> Key {
        let id = self.next_id();
        self.products.push(Product {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            supplier: supplier.into(),
        });

        // A reused id lands at the end, out of order.
        self.sorter.sort(&mut self.products);

        info!(id, "product added");
        id
    }

    pub fn update_product(&mut self, id: Key, update: ProductUpdate) -> Result<&Product> {
        let product = find_record_mut(&mut self.products, id)
            .ok_or(InventoryError::ProductNotFound { id })?;

        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(supplier) = update.supplier {
            product.supplier = supplier;
        }

        info!(id, "product updated");
        Ok(&*product)
    }

    /// Removes a product and frees its id for reuse.
    pub fn delete_product(&mut self, id: Key) -> Result<Product> {
        let index = find(&self.products, id).ok_or(InventoryError::ProductNotFound { id })?;
        let product = self.products.remove(index);
        self.deleted_ids.insert(id);

        info!(id, "product deleted");
        Ok(product)
    }

    /// Takes `quantity` units of a product out of stock and returns what is left.
    pub fn withdraw(&mut self, id: Key, quantity: u32) -> Result<u32> {
        let product = find_record_mut(&mut self.products, id)
            .ok_or(InventoryError::ProductNotFound { id })?;

        product.quantity = product.quantity.checked_sub(quantity).ok_or(
            InventoryError::InsufficientStock {
                id,
                requested: quantity,
                available: product.quantity,
            },
        )?;
        Ok(product.quantity)
    }

    pub fn get(&self, id: Key) -> Option<&Product> {
        find_record(&self.products, id)
    }

    /// All products, ascending by id.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&mut self) -> Key {
        if let Some(id) = self.deleted_ids.pop_first() {
            return id;
        }
        self.products.last().map_or(1, |p| p.id + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: Key,
    pub quantity: u32,
}

/// An order for exactly one product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    order_id: u64,
    line: Option<OrderLine>,
    customer: Option<String>,
}

impl Order {
    pub fn new(order_id: u64) -> Self {
        Self {
            order_id,
            line: None,
            customer: None,
        }
    }

    pub fn order_id(&self) -> u64 {
        self.order_id
    }

    pub fn line(&self) -> Option<&OrderLine> {
        self.line.as_ref()
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    /// Orders `quantity` units of one product and takes them out of `inventory`.
    ///
    /// Fails without touching the inventory if this order already holds a product,
    /// the product does not exist, or there is not enough of it.
    pub fn place_order(
        &mut self,
        inventory: &mut Inventory,
        product_id: Key,
        quantity: u32,
        customer: Option<String>,
    ) -> Result<()> {
        if self.line.is_some() {
            warn!(order_id = self.order_id, "order already holds a product");
            return Err(InventoryError::OrderAlreadyPlaced {
                order_id: self.order_id,
            });
        }

        let remaining = inventory.withdraw(product_id, quantity).inspect_err(|err| {
            warn!(order_id = self.order_id, product_id, %err, "order rejected");
        })?;

        self.line = Some(OrderLine {
            product_id,
            quantity,
        });
        if customer.is_some() {
            self.customer = customer;
        }

        info!(order_id = self.order_id, product_id, quantity, remaining, "order placed");
        Ok(())
    }
}
