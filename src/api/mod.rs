//! REST API client module for the FitLink backend.
//!
//! This module provides the `ApiClient` for the backend's auth, user,
//! and exercise endpoints. Every operation returns the `ApiResult`
//! envelope: no transport or parsing failure ever escapes the client
//! boundary as an error.

pub mod client;
pub mod error;
pub mod result;

pub use client::ApiClient;
pub use error::ApiError;
pub use result::ApiResult;
