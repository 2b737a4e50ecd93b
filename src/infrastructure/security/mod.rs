//! Credential primitives: password hashing and bearer token signing.
//!
//! - [`password`] - Argon2id password hashing and verification
//! - [`jwt`] - Signed, time-limited bearer tokens

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenService};
