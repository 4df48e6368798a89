//! Core library for FitLink, a fitness-coaching application.
//!
//! This crate is the testable core behind the app's screens: a thin
//! HTTP client for the backend's auth and exercise endpoints, and a
//! session store that owns the current identity and persists it
//! through a pluggable key-value storage backend.
//!
//! The UI layer drives everything through [`SessionStore`] and
//! [`ApiClient`]; both collaborators are injected, so the whole flow
//! runs under test against a mock backend and in-memory storage.
//!
//! ```no_run
//! use fitlink_core::{ApiClient, Config, FileStorage, SessionStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let api = ApiClient::new(config.base_url.clone())?;
//! let storage = FileStorage::in_user_data_dir()?;
//! let mut store = SessionStore::new(api, storage, config.token_policy);
//!
//! // Pick up a session persisted by a previous run, if any.
//! store.restore();
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod storage;

pub use api::{ApiClient, ApiError, ApiResult};
pub use auth::{AuthError, AuthState, Session, SessionStore};
pub use config::{Config, TokenPolicy};
pub use models::{Exercise, LoginRequest, LoginResponse, RegisterRequest, Role, User};
pub use storage::{FileStorage, KeyringStorage, MemoryStorage, Storage};
