//! Credential check against the roster. Mock authentication: roster entries
//! created by the admin carry their own password; seeded entries accept the
//! demo password.

use crate::errors::{AppError, AppResult};
use crate::models::user::User;

/// Password accepted for seeded users that carry none of their own.
pub const DEMO_PASSWORD: &str = "123456";

/// Find the roster entry for `email` and verify `password`.
/// Fails with `InvalidCredentials` on any mismatch; the caller cannot tell
/// an unknown email from a wrong password.
pub fn authenticate(roster: &[User], email: &str, password: &str) -> AppResult<User> {
    let found = roster
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .ok_or(AppError::InvalidCredentials)?;

    let expected = found.password.as_deref().unwrap_or(DEMO_PASSWORD);
    if password != expected {
        return Err(AppError::InvalidCredentials);
    }

    Ok(found.clone())
}
