//! Persistent key-value storage for session data.
//!
//! The session store treats storage as an external collaborator behind
//! the `Storage` trait: any durable key-value store satisfies it. Three
//! backends ship with the crate:
//!
//! - `FileStorage`: one file per key under a data directory
//! - `KeyringStorage`: OS keychain entries via the `keyring` crate
//! - `MemoryStorage`: in-process map, for tests and ephemeral sessions
//!
//! Storage failures are logged and swallowed inside each backend; from
//! the caller's view a failed read is simply a missing value. A broken
//! store degrades to "session not persisted", never to a failed login.

pub mod file;
pub mod keyring;
pub mod memory;

pub use file::FileStorage;
pub use keyring::KeyringStorage;
pub use memory::MemoryStorage;

/// Fixed keys for the persisted session entries.
pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user_data";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub trait Storage: Send + Sync {
    /// Read a value. Backend failures surface as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str);

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&self, key: &str);
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
