// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Askline - terminal chat client for FAQ answer backends.
//!
//! This crate exposes the shared runtime used by:
//! - the `askline` CLI (`src/main.rs`)
//! - the interactive TUI chat session
//!
//! Architecture highlights:
//! - `backend`: typed HTTP client for the `/get_answer` endpoint
//! - `chat`: transcript model and the send/render controller
//! - `tui`: ratatui presentation layer
//! - `cli`, `config`: argument surface and settings file

pub mod backend;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod tui;

pub use error::{AsklineError, Result};
