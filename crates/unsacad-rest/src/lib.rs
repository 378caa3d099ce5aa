//! # Unsacad REST
//!
//! Axum HTTP layer: routing, controllers, the response envelope, and
//! bearer-token authentication.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use responses::{ApiError, ApiResponse, ApiResult};
pub use router::create_router;
pub use state::AppState;
