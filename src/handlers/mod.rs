//! HTTP request handlers.

pub mod http;
pub mod json;
pub mod products;

pub use http::*;
pub use products::*;
