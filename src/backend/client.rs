// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Answer backend client
//!
//! Issues `POST /get_answer` requests and maps transport, status, and schema
//! failures into the [`BackendError`] taxonomy.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::backend::types::{AnswerRequest, AnswerResponse};
use crate::error::{BackendError, Result};

/// Path of the answer endpoint, relative to the backend base URL.
pub const ANSWER_PATH: &str = "/get_answer";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the answer backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a query and return the parsed response.
    ///
    /// The HTTP status is checked before the body is parsed, so a dead server
    /// (`Network`), a slow one (`Timeout`), an erroring one (`Status`), and a
    /// misbehaving one (`Malformed`) stay distinguishable in logs.
    pub async fn get_answer(
        &self,
        query: &str,
    ) -> std::result::Result<AnswerResponse, BackendError> {
        let url = format!("{}{}", self.base_url, ANSWER_PATH);
        debug!(target: "askline::backend", %url, query, "sending query");

        let response = self
            .client
            .post(&url)
            .json(&AnswerRequest { query })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let parsed: AnswerResponse = serde_json::from_slice(&body)
            .map_err(|e| BackendError::Malformed(e.to_string()))?;

        if let Some(intent) = &parsed.intent {
            debug!(target: "askline::backend", intent, confidence = ?parsed.confidence, "intent matched");
        }

        Ok(parsed)
    }
}

fn map_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::Network(format!("could not connect to backend: {}", e))
    } else {
        BackendError::Network(e.to_string())
    }
}
