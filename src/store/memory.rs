//! In-process store, used by tests and by embedders that do not want
//! anything written to disk.

use crate::errors::AppResult;
use crate::store::kv::KvStore;
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> AppResult<()> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}
