// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Append-only conversation transcript
//!
//! Messages are immutable once appended; the only removal is clearing the
//! whole transcript. Suggestions belong to the bot turn that produced them
//! and only the newest turn's suggestions are offered for activation.

use chrono::{DateTime, Local};

use crate::backend::types::Suggestion;

/// Safely truncate a string at a character boundary, appending "..." if truncated.
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Originator of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "you",
            Sender::Bot => "bot",
        }
    }
}

/// A single turn in the conversation
#[derive(Debug, Clone)]
pub struct Message {
    /// Display text, rendered verbatim
    pub text: String,
    /// Who produced it
    pub sender: Sender,
    /// When it was appended
    pub timestamp: DateTime<Local>,
    /// Backend match confidence (bot turns only)
    pub confidence: Option<f64>,
    /// Follow-up suggestions attached to this turn (bot turns only)
    pub suggestions: Vec<Suggestion>,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: Local::now(),
            confidence: None,
            suggestions: Vec::new(),
        }
    }

    /// Create a plain bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Local::now(),
            confidence: None,
            suggestions: Vec::new(),
        }
    }

    /// Create a bot message carrying confidence and suggestions
    pub fn bot_answer(
        text: impl Into<String>,
        confidence: Option<f64>,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Local::now(),
            confidence,
            suggestions,
        }
    }
}

/// The ordered log of user and bot turns
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages. The only supported removal.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Suggestions still offered for activation: those attached to the newest
    /// message. Older suggestion lists remain visible but are superseded.
    pub fn active_suggestions(&self) -> &[Suggestion] {
        self.messages
            .last()
            .map(|m| m.suggestions.as_slice())
            .unwrap_or(&[])
    }
}
