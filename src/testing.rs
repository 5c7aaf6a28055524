//! Product constructors for tests.
//!
//! Compiled into the crate so unit tests, integration tests, and benches
//! all build fixtures the same way, but kept out of the documented API.

#![doc(hidden)]

use crate::types::Product;

/// A minimal product: code, description, stock, everything else empty.
pub fn make_product(code: &str, description: &str, stock: u32) -> Product {
    Product {
        code: code.to_string(),
        description: description.to_string(),
        category: String::new(),
        stock,
        storage_location: String::new(),
        storage_description: String::new(),
        unit: "buc".to_string(),
        tokens: vec![],
    }
}

/// Create a test product with category.
pub fn make_product_in_category(
    code: &str,
    description: &str,
    stock: u32,
    category: &str,
) -> Product {
    let mut product = make_product(code, description, stock);
    product.category = category.to_string();
    product
}

/// Create a test product with storage fields filled in.
pub fn make_stored_product(
    code: &str,
    description: &str,
    stock: u32,
    storage_location: &str,
    storage_description: &str,
) -> Product {
    let mut product = make_product(code, description, stock);
    product.storage_location = storage_location.to_string();
    product.storage_description = storage_description.to_string();
    product
}
