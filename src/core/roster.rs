//! Roster mutation: the admin add-user operation.

use crate::errors::{AppError, AppResult};
use crate::models::seed::avatar_url;
use crate::models::user::{Role, User};

/// Input of the add-user operation. Id and avatar are assigned here.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub password: Option<String>,
    pub courses: Option<Vec<String>>,
}

/// Next roster id: maximum existing numeric id + 1. Non-numeric ids are
/// ignored; an empty roster starts at "1".
pub fn next_user_id(roster: &[User]) -> String {
    let max = roster
        .iter()
        .filter_map(|u| u.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Append a new identity to the roster.
/// Rejects with `DuplicateIdentity` when the email is already registered,
/// leaving the roster untouched. Returns the created record.
pub fn add_user(roster: &mut Vec<User>, new: NewUser) -> AppResult<User> {
    if roster
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(&new.email))
    {
        return Err(AppError::DuplicateIdentity(new.email));
    }

    let created = User {
        id: next_user_id(roster),
        avatar: Some(avatar_url(&new.name)),
        name: new.name,
        email: new.email,
        role: new.role,
        department: new.department,
        password: new.password,
        courses: new.courses,
    };

    roster.push(created.clone());
    Ok(created)
}
