//! Domain models

mod dish;
mod menu;
mod order;
mod restaurant;
mod user;

pub use dish::*;
pub use menu::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
