// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Reusable widgets for the chat TUI

pub mod input_area;
pub mod message;
pub mod status_bar;

pub use input_area::{render_input_with_hints, InputArea};
pub use message::{render_messages, MessageWidget};
pub use status_bar::StatusBar;
