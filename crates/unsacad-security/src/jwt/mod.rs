//! JWT issuance and validation.

mod claims;
mod token_provider;

pub use claims::{Claims, TokenType};
pub use token_provider::{TokenPair, TokenProvider};
