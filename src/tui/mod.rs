// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Chat TUI module
//!
//! A terminal interface for asking questions against the answer backend:
//! - Scrolling transcript of user and bot messages
//! - Activatable follow-up suggestions on the newest answer
//! - Interactive input with history navigation

pub mod app;
pub mod events;
pub mod state;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::backend::client::BackendClient;
use crate::chat::ChatController;
use crate::config::Settings;
use crate::error::{AsklineError, Result};

pub use app::{ChatApp, ChatMode, TickResult};
pub use events::{ChatEvent, EventEmitter, EventSender};

/// Run the chat TUI
///
/// This is the main entry point for the TUI-based chat interface. An optional
/// initial prompt is submitted before the first draw.
pub async fn run_tui(
    client: BackendClient,
    settings: Settings,
    initial_prompt: Option<String>,
) -> Result<()> {
    // Setup terminal with panic hook to restore terminal on crash
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| AsklineError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AsklineError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| AsklineError::Tui(e.to_string()))?;

    // Create event channel and app
    let (event_tx, event_rx) = events::create_event_channel();
    let controller = ChatController::new(client);
    let mut app = ChatApp::new(controller, event_tx, event_rx, settings);

    if let Some(prompt) = initial_prompt {
        app.submit_query(&prompt);
    }

    // Run the main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    let _ = std::panic::take_hook();

    disable_raw_mode().map_err(|e| AsklineError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| AsklineError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| AsklineError::Tui(e.to_string()))?;

    result
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| AsklineError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}
