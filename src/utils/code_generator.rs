//! Short code generation.
//!
//! Codes are 4 bytes of OS randomness rendered as 8 lowercase hex characters,
//! giving 2^32 possible codes. Uniqueness is enforced by the store; see
//! [`crate::application::services::LinkService`] for the collision retry.

use crate::error::AppError;
use serde_json::json;

/// Number of random bytes per code.
const CODE_LENGTH_BYTES: usize = 4;

/// Length of a generated code in characters.
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES * 2;

/// Generates a random short code.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(hex::encode(buffer))
}
