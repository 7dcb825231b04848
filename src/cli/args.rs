// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for askline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// askline - terminal chat client for FAQ answer backends
#[derive(Parser, Debug)]
#[command(name = "askline")]
#[command(version, about = "Terminal chat client for FAQ answer backends")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Answer backend base URL (overrides settings)
    #[arg(short = 'b', long, global = true, env = "ASKLINE_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive chat session (default when no command given)
    Chat(ChatArgs),

    /// Ask a single question (non-interactive)
    Ask(AskArgs),
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    /// Question to submit before entering the session
    pub prompt: Option<String>,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// Question to send to the backend
    pub query: String,
}
