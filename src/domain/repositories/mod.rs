//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts
//! - [`LinkRepository`] - Short links and click counters

pub mod link_repository;
pub mod user_repository;

pub use link_repository::{CreateLinkError, LinkRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
