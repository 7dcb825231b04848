// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Error types for Askline
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Askline operations
#[derive(Error, Debug)]
pub enum AsklineError {
    /// Backend request errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// Errors from a single request to the answer backend.
///
/// Non-2xx statuses and schema violations are distinct kinds so that logs can
/// tell a dead server from a misbehaving one; the user-visible rendering of
/// any of these is the same fixed error message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// Backend returned a non-success HTTP status
    #[error("Backend returned status {status}")]
    Status { status: u16 },

    /// Response body did not match the expected schema
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Result type alias for Askline operations
pub type Result<T> = std::result::Result<T, AsklineError>;
