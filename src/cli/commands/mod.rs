pub mod config;
pub mod courses;
pub mod export;
pub mod history;
pub mod init;
pub mod login;
pub mod logout;
pub mod punch;
pub mod schedule;
pub mod status;
pub mod users;
pub mod whoami;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::store::file::FileStore;
use crate::store::session::SessionStore;
use crate::utils::path::expand_tilde;

/// Open the session store over the configured storage directory.
pub fn open_store(cfg: &Config) -> AppResult<SessionStore<FileStore>> {
    let dir = expand_tilde(&cfg.storage);
    Ok(SessionStore::new(FileStore::open(&dir)?))
}

pub fn require_user(store: &mut SessionStore<FileStore>) -> AppResult<User> {
    store.current_user()?.ok_or(AppError::NotLoggedIn)
}

pub fn require_admin(store: &mut SessionStore<FileStore>, what: &str) -> AppResult<User> {
    let user = require_user(store)?;
    if !user.is_admin() {
        return Err(AppError::Unauthorized(what.to_string()));
    }
    Ok(user)
}
