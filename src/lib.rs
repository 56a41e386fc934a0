//! Tavola Core - Food Ordering Backend
//!
//! This crate provides the core functionality for the Tavola food-ordering
//! service: identity (registration, login, bearer tokens), role-based access
//! control, and the restaurant/menu/dish/order domain with its
//! referential-integrity rules.

pub mod api;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
