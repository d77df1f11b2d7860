//! Database layer for the SQL demo: pool and `product` table repository.

mod pool;
mod repositories;
pub mod sql_demo;

pub use pool::{create_pool, driver_names, DbPool};
pub use repositories::*;
