//! Key-value storage port. The session layer only ever needs these three
//! operations over JSON blobs, so any client-local storage can back it.

use crate::errors::AppResult;

pub trait KvStore {
    /// Load the blob stored under `key`, `None` when the slot is empty.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    fn save(&mut self, key: &str, blob: &str) -> AppResult<()>;

    /// Remove the slot. Removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
