// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Conversation state and the send/render controller
//!
//! - `transcript`: append-only log of user and bot turns
//! - `controller`: the message-send/response-render cycle with in-order
//!   dispatch of overlapping submissions

pub mod controller;
pub mod transcript;

pub use controller::{ChatController, PendingRequest, Submission, ERROR_MESSAGE};
pub use transcript::{Message, Sender, Transcript};
