use std::collections::HashMap;
use std::sync::Mutex;

use super::Storage;

/// In-process storage backend. Sessions kept here do not survive a
/// restart; useful for tests and for callers that opt out of
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("auth_token"), None);

        storage.set("auth_token", "abc123");
        assert_eq!(storage.get("auth_token").as_deref(), Some("abc123"));

        storage.set("auth_token", "def456");
        assert_eq!(storage.get("auth_token").as_deref(), Some("def456"));

        storage.remove("auth_token");
        assert_eq!(storage.get("auth_token"), None);

        // Removing again is fine
        storage.remove("auth_token");
    }
}
