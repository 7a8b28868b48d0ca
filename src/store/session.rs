//! Session store: owns the current authenticated user and the roster,
//! persisted as JSON blobs through the key-value port.

use crate::core::{auth, roster};
use crate::errors::{AppError, AppResult};
use crate::models::seed;
use crate::models::user::User;
use crate::store::kv::KvStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Slot holding the current authenticated user; absent when logged out.
pub const KEY_SESSION: &str = "abtec_user";
/// Slot holding the full roster array.
pub const KEY_ROSTER: &str = "abtec_users";

pub struct SessionStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn parse_slot<T: DeserializeOwned>(key: &str, blob: &str) -> AppResult<T> {
        serde_json::from_str(blob).map_err(|_| AppError::StorageCorrupt(key.to_string()))
    }

    /// Load and parse a slot. A malformed blob is treated as "no stored
    /// value": the slot is cleared and `None` returned, the parse failure
    /// never reaches the caller.
    fn load_slot<T: DeserializeOwned>(&mut self, key: &str) -> AppResult<Option<T>> {
        let Some(blob) = self.store.load(key)? else {
            return Ok(None);
        };

        match Self::parse_slot(key, &blob) {
            Ok(value) => Ok(Some(value)),
            Err(AppError::StorageCorrupt(_)) => {
                self.store.remove(key)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn save_slot<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let blob = serde_json::to_string(value)?;
        self.store.save(key, &blob)
    }

    /// The authenticated user, if any.
    pub fn current_user(&mut self) -> AppResult<Option<User>> {
        self.load_slot(KEY_SESSION)
    }

    /// The roster. An absent (or corrupt) slot falls back to the seed
    /// roster without persisting it; only mutations write the slot.
    pub fn roster(&mut self) -> AppResult<Vec<User>> {
        Ok(self
            .load_slot(KEY_ROSTER)?
            .unwrap_or_else(seed::default_users))
    }

    /// Authenticate against the roster and persist the session slot.
    pub fn login(&mut self, email: &str, password: &str) -> AppResult<User> {
        let roster = self.roster()?;
        let user = auth::authenticate(&roster, email, password)?;
        self.save_slot(KEY_SESSION, &user)?;
        Ok(user)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.store.remove(KEY_SESSION)
    }

    /// Admin add operation: append to the roster and persist it whole.
    pub fn add_user(&mut self, new: roster::NewUser) -> AppResult<User> {
        let mut roster_entries = self.roster()?;
        let created = roster::add_user(&mut roster_entries, new)?;
        self.save_slot(KEY_ROSTER, &roster_entries)?;
        Ok(created)
    }

    /// Reset the roster slot to the seed dataset. Returns the entry count.
    pub fn seed(&mut self) -> AppResult<usize> {
        let users = seed::default_users();
        self.save_slot(KEY_ROSTER, &users)?;
        Ok(users.len())
    }
}
