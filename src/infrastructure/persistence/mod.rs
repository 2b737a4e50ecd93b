//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with bound
//! parameters and `FromRow` mapping.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgLinkRepository`] - Short links and click counters

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;

/// Returns the name of the constraint behind a unique violation, if `e` is one.
pub(crate) fn unique_violation(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or_default().to_string())
}
