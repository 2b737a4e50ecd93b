//! User entity.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// A registered user.
///
/// `password_hash` is an argon2 PHC string. It is never serialized and is
/// redacted from `Debug` output.
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input data for creating a new user.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

    #[test]
    fn test_user_debug_redacts_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: HASH.to_string(),
            created_at: Utc::now(),
        };

        let debug = format!("{user:?}");
        assert!(debug.contains("test@example.com"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(HASH));
        assert!(!debug.contains("argon2"));
    }

    #[test]
    fn test_new_user_debug_redacts_password_hash() {
        let new_user = NewUser {
            email: "test@example.com".to_string(),
            password_hash: HASH.to_string(),
        };

        let debug = format!("{new_user:?}");
        assert!(debug.contains("test@example.com"));
        assert!(!debug.contains(HASH));
    }
}
