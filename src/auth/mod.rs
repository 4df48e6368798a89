//! Authentication module: session state, its store, and form validation.
//!
//! This module provides:
//! - `SessionStore`: the single owner of authentication state, with
//!   injected API client and storage backend
//! - `Session` / `AuthState`: the state the UI layer reads
//! - `validate`: local field validation for login and registration
//!
//! Sessions are mirrored into persistent storage on login and restored
//! on the next launch.

pub mod session;
pub mod validate;

pub use session::{AuthError, AuthState, Session, SessionStore};
pub use validate::{validate_login, validate_registration, FieldErrors};
