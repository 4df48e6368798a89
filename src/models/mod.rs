//! Data models for the FitLink backend.
//!
//! This module contains the wire-format structures exchanged with the
//! backend:
//!
//! - `User`, `Role`: account records for coaches and athletes
//! - `LoginRequest`, `LoginResponse`, `RegisterRequest`: auth payloads
//! - `Exercise`: catalog entries for the exercise endpoints
//!
//! Field names follow the backend's JSON conventions (`firstname`,
//! `activityLevel`, ...) via explicit serde renames.

pub mod exercise;
pub mod user;

pub use exercise::Exercise;
pub use user::{LoginRequest, LoginResponse, RegisterRequest, Role, User};
