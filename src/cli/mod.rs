// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Command-line interface

pub mod args;

pub use args::{AskArgs, ChatArgs, Cli, Commands};
