// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! The message-send/response-render cycle
//!
//! [`ChatController`] owns the transcript and the backend client and enforces
//! the contract of a single turn:
//! 1. the query is appended as a user message before any request is issued;
//! 2. at most one request is in flight at a time; overlapping submissions are
//!    queued and dispatched in order, so responses render in submission order;
//! 3. any failure becomes a fixed bot error message, with the typed error
//!    going to the log sink only.
//!
//! The controller is a plain state machine: it hands out [`PendingRequest`]s
//! and is fed their outcomes, so it can be driven from the TUI event loop or
//! directly from tests without a terminal.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::backend::client::BackendClient;
use crate::backend::types::AnswerResponse;
use crate::chat::transcript::{Message, Transcript};
use crate::error::BackendError;

/// Fixed user-visible text for any failed request.
pub const ERROR_MESSAGE: &str = "Error contacting server.";

/// A dispatched request awaiting its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Sequence number; outcomes with a stale sequence are dropped.
    pub seq: u64,
    /// The query text sent to the backend.
    pub query: String,
}

/// Result of submitting input to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The query was appended and a request should be issued now.
    Dispatched(PendingRequest),
    /// The query was appended and queued behind the in-flight request.
    Queued { position: usize },
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
}

/// Controller for one conversation with the answer backend.
pub struct ChatController {
    client: Arc<BackendClient>,
    transcript: Transcript,
    next_seq: u64,
    in_flight: Option<u64>,
    pending: VecDeque<String>,
}

impl ChatController {
    /// Create a controller around a backend client.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client: Arc::new(client),
            transcript: Transcript::new(),
            next_seq: 0,
            in_flight: None,
            pending: VecDeque::new(),
        }
    }

    /// Shared handle to the backend client, for spawned request tasks.
    pub fn client(&self) -> Arc<BackendClient> {
        Arc::clone(&self.client)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether a request is currently in flight.
    pub fn is_processing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of submissions waiting behind the in-flight request.
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Drop the whole conversation and any queued submissions. In-flight
    /// outcomes arriving afterwards are stale and will be dropped.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.pending.clear();
        self.in_flight = None;
    }

    /// Submit user input.
    ///
    /// Trims the input; empty input is a no-op. Otherwise the query is
    /// appended as a user message immediately and either dispatched or queued.
    pub fn submit(&mut self, input: &str) -> Submission {
        let query = input.trim();
        if query.is_empty() {
            return Submission::Ignored;
        }

        self.transcript.push(Message::user(query));

        if self.in_flight.is_some() {
            self.pending.push_back(query.to_string());
            let position = self.pending.len();
            debug!(target: "askline::chat", query, position, "queued behind in-flight request");
            Submission::Queued { position }
        } else {
            Submission::Dispatched(self.dispatch(query.to_string()))
        }
    }

    /// Activate a suggestion from the newest bot turn by index, submitting
    /// its label as the next query.
    pub fn activate_suggestion(&mut self, index: usize) -> Submission {
        let label = match self.transcript.active_suggestions().get(index) {
            Some(suggestion) => suggestion.label.clone(),
            None => return Submission::Ignored,
        };
        self.submit(&label)
    }

    /// Feed the outcome of a dispatched request back into the controller.
    ///
    /// Renders the answer (or the fixed error message), then dispatches the
    /// next queued submission if any, returning it for the caller to issue.
    /// Outcomes whose sequence is not the in-flight one are dropped.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<AnswerResponse, BackendError>,
    ) -> Option<PendingRequest> {
        if self.in_flight != Some(seq) {
            debug!(target: "askline::chat", seq, "dropping stale request outcome");
            return None;
        }
        self.in_flight = None;

        match outcome {
            Ok(response) => {
                self.transcript.push(Message::bot_answer(
                    response.answer,
                    response.confidence,
                    response.suggestions,
                ));
            }
            Err(error) => {
                warn!(target: "askline::chat", %error, "request failed");
                self.transcript.push(Message::bot(ERROR_MESSAGE));
            }
        }

        let next = self.pending.pop_front()?;
        Some(self.dispatch(next))
    }

    /// Submit a query and drive it (and anything it queues) to completion.
    /// Convenience for non-TUI callers and tests.
    pub async fn send_query(&mut self, query: &str) {
        let mut next = match self.submit(query) {
            Submission::Dispatched(request) => Some(request),
            _ => None,
        };
        while let Some(request) = next {
            let outcome = self.client.get_answer(&request.query).await;
            next = self.complete(request.seq, outcome);
        }
    }

    fn dispatch(&mut self, query: String) -> PendingRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        debug!(target: "askline::chat", seq, query = %query, "dispatching request");
        PendingRequest { seq, query }
    }
}
