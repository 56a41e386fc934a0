//! Repositories
//!
//! Each entity collection is an independent ordered map behind an async
//! lock. Reads take a snapshot under a read guard; writes replace whole
//! values keyed by id. Concurrent writers to the same id are
//! last-write-wins. Nothing is ever deleted.

pub mod dish;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

pub use dish::{DishRepository, InMemoryDishRepository};
pub use menu::{InMemoryMenuRepository, MenuRepository};
pub use order::{InMemoryOrderRepository, OrderRepository};
pub use restaurant::{InMemoryRestaurantRepository, RestaurantRepository};
pub use user::{InMemoryUserRepository, UserRepository};
