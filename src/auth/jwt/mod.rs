//! JWT bearer tokens
//!
//! Tokens only carry identity. The role is looked up again on every request so a
//! role change takes effect without waiting for tokens to expire.

mod handler;
pub mod types;


pub use handler::JwtHandler;
pub use types::Claims;
