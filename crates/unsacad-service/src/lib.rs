//! # Unsacad Service
//!
//! Application services: use-case orchestration between the REST layer
//! and the domain. Services validate requests, run domain logic, talk to
//! the persistence ports, and translate outcomes into DTOs.

pub mod auth_service;
pub mod dto;
pub mod user_service;

#[cfg(test)]
mod testing;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use dto::{
    CreateUserRequest, LoginRequest, RefreshTokenRequest, TokenResponse, UserResponse,
};
pub use user_service::{UserService, UserServiceImpl};
