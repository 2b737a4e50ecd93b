//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account that owns links
//! - [`ShortLink`] - A short code mapped to its destination URL
//!
//! Creation inputs live in separate structs ([`NewUser`], [`NewShortLink`]) so
//! that server-generated fields (ids, timestamps, counters) can never be
//! supplied by callers.

pub mod short_link;
pub mod user;

pub use short_link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
