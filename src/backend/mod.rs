// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! HTTP client for the answer backend
//!
//! The backend is an external service reachable at a fixed endpoint that maps
//! a query string to an answer and optional follow-up suggestions.

pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{AnswerResponse, Suggestion};
