use crate::core::Key;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: Key },

    #[error("Order {order_id} already holds a product; only one product per order")]
    OrderAlreadyPlaced { order_id: u64 },

    #[error("Insufficient stock for product {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: Key,
        requested: u32,
        available: u32,
    },
}

pub type Result<T> = std::result::Result<T, InventoryError>;
