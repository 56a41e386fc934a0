//! REST API shared utilities (response envelopes)
//!
//! Every response body mirrors its numeric HTTP status in a `status` field,
//! next to either a payload or an error string.

pub mod auth;
pub mod dish;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod user;

use serde::{Deserialize, Serialize};

/// Success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }

    pub fn created(data: T) -> Self {
        Self { status: 201, data }
    }
}
