// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Chat application state machine
//!
//! The main state container for the chat TUI, handling mode transitions,
//! events, and coordination between the controller and the widgets.

use std::time::Duration;

use crate::chat::{ChatController, PendingRequest, Submission};
use crate::config::Settings;
use crate::error::Result;

use super::events::{ChatEvent, EventEmitter, EventReceiver, EventSender};
use super::state::{InputState, ScrollState};

/// Current mode of the chat UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Viewing chat, can scroll
    Normal,
    /// Typing in input area
    Input,
    /// Navigating the follow-up suggestions of the newest answer
    Suggest,
}

/// Result of a tick (event loop iteration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue running
    Continue,
    /// User wants to quit
    Quit,
}

/// Main application state for the chat TUI
pub struct ChatApp {
    // === UI State ===
    pub mode: ChatMode,
    pub scroll_state: ScrollState,
    pub input: InputState,
    /// Highlighted suggestion index while in Suggest mode
    pub selected_suggestion: usize,
    /// Width of the message area from the last draw
    pub message_area_width: u16,

    // === Status ===
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,

    // === Resources ===
    pub controller: ChatController,
    pub settings: Settings,
    event_tx: EventSender,
    event_rx: EventReceiver,
}

impl ChatApp {
    /// Create a new chat application
    pub fn new(
        controller: ChatController,
        event_tx: EventSender,
        event_rx: EventReceiver,
        settings: Settings,
    ) -> Self {
        Self {
            mode: ChatMode::Input,
            scroll_state: ScrollState::new(),
            input: InputState::with_history_limit(settings.appearance.history_limit),
            selected_suggestion: 0,
            message_area_width: 80,

            status_message: None,
            status_is_error: false,
            should_quit: false,

            controller,
            settings,
            event_tx,
            event_rx,
        }
    }

    /// Get the event sender for passing to async tasks
    pub fn event_sender(&self) -> EventSender {
        self.event_tx.clone()
    }

    /// Submit a query programmatically (used for an initial prompt)
    pub fn submit_query(&mut self, query: &str) {
        match self.controller.submit(query) {
            Submission::Dispatched(request) => self.spawn_request(request),
            Submission::Queued { .. } | Submission::Ignored => {}
        }
        self.after_transcript_change();
    }

    /// Process one tick of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        // Handle events with timeout for smooth UI updates
        tokio::select! {
            Some(event) = self.event_rx.recv() => {
                self.handle_event(event);
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                // Tick for animations/updates
            }
        }

        // Check keyboard input (non-blocking)
        if crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                self.handle_key(key);
            }
        }

        Ok(TickResult::Continue)
    }

    /// Handle a chat event
    pub fn handle_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::AnswerReceived { seq, response } => {
                self.finish_request(seq, Ok(response));
            }

            ChatEvent::RequestFailed { seq, error } => {
                self.finish_request(seq, Err(error));
            }

            ChatEvent::Status(msg) => {
                self.set_status(&msg);
            }

            ChatEvent::Refresh => {
                // Just triggers a redraw
            }
        }
    }

    fn finish_request(
        &mut self,
        seq: u64,
        outcome: std::result::Result<
            crate::backend::types::AnswerResponse,
            crate::error::BackendError,
        >,
    ) {
        if let Some(next) = self.controller.complete(seq, outcome) {
            self.spawn_request(next);
        }
        self.selected_suggestion = 0;
        if self.mode == ChatMode::Suggest
            && self.controller.transcript().active_suggestions().is_empty()
        {
            self.mode = ChatMode::Input;
        }
        self.after_transcript_change();
    }

    /// Issue a dispatched request on a background task
    fn spawn_request(&mut self, request: PendingRequest) {
        let client = self.controller.client();
        let emitter = EventEmitter::new(self.event_tx.clone());
        tokio::spawn(async move {
            match client.get_answer(&request.query).await {
                Ok(response) => emitter.answer_received(request.seq, response),
                Err(error) => emitter.request_failed(request.seq, error),
            }
        });
    }

    /// Handle a keyboard event
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        // Global keys that work in any mode
        if (key.modifiers, key.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        match self.mode {
            ChatMode::Input => self.handle_input_key(key),
            ChatMode::Normal => self.handle_normal_key(key),
            ChatMode::Suggest => self.handle_suggest_key(key),
        }
    }

    /// Handle keys in input mode
    fn handle_input_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.modifiers, key.code) {
            // Submit
            (KeyModifiers::NONE, KeyCode::Enter) => {
                if !self.input.is_empty() {
                    let text = self.input.submit();
                    self.submit_message(text);
                }
            }
            // Escape to normal mode
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.mode = ChatMode::Normal;
            }
            // Suggestion navigation
            (KeyModifiers::NONE, KeyCode::Tab) => {
                self.enter_suggest_mode();
            }
            // History navigation
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.input.history_prev();
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.input.history_next();
            }
            // Cursor movement
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.input.move_home();
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.input.move_end();
            }
            // Deletion
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.input.delete_word();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input.clear();
            }
            // Character input
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys in normal mode (scrolling)
    fn handle_normal_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.modifiers, key.code) {
            // Enter input mode
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('i')) => {
                self.mode = ChatMode::Input;
            }
            // Suggestion navigation
            (KeyModifiers::NONE, KeyCode::Tab) => {
                self.enter_suggest_mode();
            }
            // Scrolling
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                self.scroll_state.scroll_up(1);
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                let total_height = self.total_height();
                self.scroll_state.scroll_down(1, total_height);
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.scroll_state.page_up();
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                let total_height = self.total_height();
                self.scroll_state.page_down(total_height);
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.scroll_state.scroll_to_top();
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
                let total_height = self.total_height();
                self.scroll_state.scroll_to_bottom(total_height);
            }
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Handle keys in suggest mode
    fn handle_suggest_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        let count = self.controller.transcript().active_suggestions().len();

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                if self.selected_suggestion > 0 {
                    self.selected_suggestion -= 1;
                }
            }
            (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j'))
            | (KeyModifiers::NONE, KeyCode::Tab) => {
                if self.selected_suggestion + 1 < count {
                    self.selected_suggestion += 1;
                }
            }
            // Activate the highlighted suggestion as the next query
            (KeyModifiers::NONE, KeyCode::Enter) => {
                let index = self.selected_suggestion;
                match self.controller.activate_suggestion(index) {
                    Submission::Dispatched(request) => self.spawn_request(request),
                    Submission::Queued { position } => {
                        self.set_status(&format!("Queued ({} waiting)", position));
                    }
                    Submission::Ignored => {}
                }
                self.selected_suggestion = 0;
                self.mode = ChatMode::Input;
                self.after_transcript_change();
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.mode = ChatMode::Input;
            }
            _ => {}
        }
    }

    fn enter_suggest_mode(&mut self) {
        if !self.controller.transcript().active_suggestions().is_empty() {
            self.mode = ChatMode::Suggest;
            self.selected_suggestion = 0;
        }
    }

    // === Message management ===

    fn submit_message(&mut self, text: String) {
        let trimmed = text.trim();
        if trimmed.starts_with('/') {
            self.handle_command(trimmed);
            return;
        }

        match self.controller.submit(trimmed) {
            Submission::Dispatched(request) => self.spawn_request(request),
            Submission::Queued { position } => {
                self.set_status(&format!("Queued ({} waiting)", position));
            }
            Submission::Ignored => {}
        }
        self.after_transcript_change();
    }

    fn handle_command(&mut self, command: &str) {
        match command {
            "/quit" | "/exit" => {
                self.should_quit = true;
            }
            "/clear" => {
                self.controller.clear();
                self.selected_suggestion = 0;
                self.set_status("Chat cleared");
                self.after_transcript_change();
            }
            _ => {
                self.set_error(&format!("Unknown command: {}", command));
            }
        }
    }

    // === UI helpers ===

    fn after_transcript_change(&mut self) {
        self.scroll_state.invalidate_cache();
        let total_height = self.total_height();
        self.scroll_state.maybe_auto_scroll(total_height);
    }

    fn total_height(&mut self) -> usize {
        let width = self.message_area_width;
        self.scroll_state
            .calculate_total_height(self.controller.transcript().messages(), width)
    }

    fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = false;
    }

    fn set_error(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = true;
    }
}
