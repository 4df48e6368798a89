//! Session state and the store that owns it.
//!
//! `SessionStore` mediates every authentication state transition and
//! keeps the persisted mirror in sync with memory. Its collaborators
//! (the API client and the storage backend) are injected, so the whole
//! flow is testable against a mock backend and an in-memory store.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config::TokenPolicy;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::storage::{Storage, REFRESH_TOKEN_KEY, TOKEN_KEY, USER_KEY};

use super::validate::{validate_login, validate_registration, FieldErrors};

/// The client-held record of the currently authenticated identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

/// Authentication state as seen by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// Input rejected before any network call. The map carries one
    /// message per offending field.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// A login or register call is already in flight; concurrent
    /// attempts are rejected rather than raced.
    #[error("another authentication request is already in progress")]
    InFlight,

    /// The backend refused the request, or the transport failed. The
    /// message is already human-readable.
    #[error("{0}")]
    Backend(String),
}

impl AuthError {
    /// The per-field messages for validation failures, empty otherwise.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub struct SessionStore<S: Storage> {
    api: ApiClient,
    storage: S,
    token_policy: TokenPolicy,
    session: Session,
    loading: bool,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(api: ApiClient, storage: S, token_policy: TokenPolicy) -> Self {
        Self {
            api,
            storage,
            token_policy,
            session: Session::default(),
            loading: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Authenticated iff a user is present and, under
    /// `TokenPolicy::Required`, a token as well. `login` and `restore`
    /// refuse to populate a session that would break this invariant,
    /// so it holds at every observable point.
    pub fn is_authenticated(&self) -> bool {
        match self.token_policy {
            TokenPolicy::Required => self.session.user.is_some() && self.session.token.is_some(),
            TokenPolicy::Optional => self.session.user.is_some(),
        }
    }

    pub fn state(&self) -> AuthState {
        if self.loading {
            AuthState::Authenticating
        } else if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    /// Log in. On success the session is populated and mirrored into
    /// storage; on any failure the session is left untouched.
    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<User, AuthError> {
        if self.loading {
            return Err(AuthError::InFlight);
        }
        let errors = validate_login(credentials);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        self.loading = true;
        let result = self.api.login(credentials).await;
        self.loading = false;

        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "Login failed".to_string());
            debug!(status = ?result.status_code, "login rejected");
            return Err(AuthError::Backend(message));
        }

        let Some(response) = result.data else {
            return Err(AuthError::Backend("Login response was empty".to_string()));
        };

        if response.token.is_none() && self.token_policy == TokenPolicy::Required {
            warn!("backend issued no token; refusing login under required-token policy");
            return Err(AuthError::Backend(
                "Login response did not include a token".to_string(),
            ));
        }

        self.session.user = Some(response.user.clone());
        self.session.token = response.token.clone();
        self.persist(response.refresh_token.as_deref());
        debug!(user_id = %response.user.id, "login successful");

        Ok(response.user)
    }

    /// Create an account. Success reports the created user but does
    /// not log them in; the session is never touched here.
    pub async fn register(&mut self, data: &RegisterRequest) -> Result<User, AuthError> {
        if self.loading {
            return Err(AuthError::InFlight);
        }
        let errors = validate_registration(data);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        self.loading = true;
        let result = self.api.register(data).await;
        self.loading = false;

        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "Registration failed".to_string());
            return Err(AuthError::Backend(message));
        }

        result
            .data
            .ok_or_else(|| AuthError::Backend("Registration response was empty".to_string()))
    }

    /// Clear the session in memory and delete the persisted entries.
    /// No network call is made.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        debug!("session cleared");
    }

    /// Restore a persisted session, typically once at startup. Any
    /// read or parse failure means "nothing to restore", never an
    /// error. Returns whether a session was restored.
    pub fn restore(&mut self) -> bool {
        let token = self.storage.get(TOKEN_KEY);
        let Some(blob) = self.storage.get(USER_KEY) else {
            debug!("no persisted session found");
            return false;
        };

        let user: User = match serde_json::from_str(&blob) {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "persisted user blob did not parse, ignoring");
                return false;
            }
        };

        if token.is_none() && self.token_policy == TokenPolicy::Required {
            debug!("persisted session has no token, ignoring");
            return false;
        }

        self.session.user = Some(user);
        self.session.token = token;
        debug!("session restored from storage");
        true
    }

    /// Mirror the in-memory session into storage. Failures are the
    /// backend's to log; a broken store never fails the login itself.
    fn persist(&self, refresh_token: Option<&str>) {
        match &self.session.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(blob) => self.storage.set(USER_KEY, &blob),
                Err(e) => warn!(error = %e, "failed to serialize user for storage"),
            },
            None => self.storage.remove(USER_KEY),
        }

        match &self.session.token {
            Some(token) => self.storage.set(TOKEN_KEY, token),
            None => self.storage.remove(TOKEN_KEY),
        }

        if let Some(refresh) = refresh_token {
            self.storage.set(REFRESH_TOKEN_KEY, refresh);
        }
    }
}
