// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! askline - terminal chat client for FAQ answer backends
//!
//! Entry point for the askline CLI application.

use clap::Parser;

use askline::backend::BackendClient;
use askline::cli::{AskArgs, ChatArgs, Cli, Commands};
use askline::config::Settings;
use askline::error::Result;
use askline::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` enables request diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        for directive in ["askline::backend=debug", "askline::chat=debug"] {
            if let Ok(parsed) = directive.parse() {
                env_filter = env_filter.add_directive(parsed);
            }
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load settings, applying CLI overrides
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(url) = cli.backend_url {
        settings.backend.base_url = url;
    }

    match cli.command {
        None => run_chat(ChatArgs::default(), settings).await,
        Some(Commands::Chat(args)) => run_chat(args, settings).await,
        Some(Commands::Ask(args)) => run_ask(args, settings).await,
    }
}

/// Start the interactive TUI session.
async fn run_chat(args: ChatArgs, settings: Settings) -> Result<()> {
    let client =
        BackendClient::with_timeout(settings.backend.base_url.clone(), settings.backend.timeout())?;
    tui::run_tui(client, settings, args.prompt).await
}

/// Send a single question and print the answer to stdout.
async fn run_ask(args: AskArgs, settings: Settings) -> Result<()> {
    let client =
        BackendClient::with_timeout(settings.backend.base_url.clone(), settings.backend.timeout())?;

    let response = client.get_answer(&args.query).await?;
    println!("{}", response.answer);

    if !response.suggestions.is_empty() {
        println!();
        println!("Related questions:");
        for (i, suggestion) in response.suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion.label);
        }
    }

    Ok(())
}
