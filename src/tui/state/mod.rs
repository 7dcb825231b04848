// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! UI state for the chat TUI
//!
//! Split into focused modules:
//! - `input`: input buffer, cursor, history navigation
//! - `scroll`: scroll position and message height calculation

pub mod input;
pub mod scroll;

pub use input::InputState;
pub use scroll::ScrollState;
