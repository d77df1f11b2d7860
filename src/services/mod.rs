//! Business logic: the product store.

pub mod product;

pub use product::ProductService;
