//! Business logic services

pub mod auth;
pub mod dish;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

pub use auth::AuthService;
pub use dish::DishService;
pub use menu::MenuService;
pub use order::OrderService;
pub use restaurant::RestaurantService;
pub use user::UserService;
