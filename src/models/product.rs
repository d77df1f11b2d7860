//! Product record and its sparse-patch semantics.

use serde::{Deserialize, Serialize};

/// A named, priced item. Identity is the record's index in the store.
///
/// Missing fields deserialize to their zero value, so `{}` is a valid product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Overwrite only the fields of `patch` that are not zero-valued.
    ///
    /// An empty name or a `0.0` price in the patch leaves the field as is, so
    /// neither value can be set through an update.
    pub fn apply_patch(&mut self, patch: &Product) {
        if !patch.name.is_empty() {
            self.name = patch.name.clone();
        }
        if patch.price != 0.0 {
            self.price = patch.price;
        }
    }
}

/// Initial store contents.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Shoes", 25.0),
        Product::new("Webcam", 50.0),
        Product::new("Mic", 20.0),
    ]
}
