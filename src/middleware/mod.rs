//! Request middleware.

pub mod auth;

pub use auth::is_authorized;
