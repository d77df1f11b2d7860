//! Token demo: issue a JWT, gate a page on it.

mod handlers;
mod jwt;

pub use handlers::{home, login, HOMEPAGE_TEXT};
pub use jwt::{Claims, JwtSecret};
