// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Event system for the chat TUI
//!
//! Events let spawned request tasks communicate with the UI without blocking.
//! Uses tokio mpsc channels for thread-safe messaging.

use tokio::sync::mpsc;

use crate::backend::types::AnswerResponse;
use crate::error::BackendError;

/// Events for async communication between request tasks and the UI
#[derive(Debug, Clone)]
pub enum ChatEvent {
    // === Request outcomes ===
    /// The backend answered a dispatched request
    AnswerReceived { seq: u64, response: AnswerResponse },
    /// A dispatched request failed
    RequestFailed { seq: u64, error: BackendError },

    // === System events ===
    /// Status message to display
    Status(String),
    /// Request to refresh the UI
    Refresh,
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<ChatEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<ChatEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if receiver is dropped
pub fn send_event(tx: &EventSender, event: ChatEvent) {
    let _ = tx.send(event);
}

/// Wrapper that can be cloned and passed to async tasks
#[derive(Clone)]
pub struct EventEmitter {
    tx: EventSender,
}

impl EventEmitter {
    pub fn new(tx: EventSender) -> Self {
        Self { tx }
    }

    pub fn emit(&self, event: ChatEvent) {
        send_event(&self.tx, event);
    }

    pub fn answer_received(&self, seq: u64, response: AnswerResponse) {
        self.emit(ChatEvent::AnswerReceived { seq, response });
    }

    pub fn request_failed(&self, seq: u64, error: BackendError) {
        self.emit(ChatEvent::RequestFailed { seq, error });
    }

    pub fn status(&self, msg: &str) {
        self.emit(ChatEvent::Status(msg.to_string()));
    }
}
