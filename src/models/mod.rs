//! Data models for the product store.

pub mod product;

pub use product::*;
