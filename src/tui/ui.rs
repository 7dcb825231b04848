// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Main UI rendering for the chat TUI

use ratatui::prelude::*;

use super::app::{ChatApp, ChatMode};
use super::widgets::InputArea;

mod layout;
mod view;

use layout::calculate_layout;
use view::{render_chat_area, render_input_area, render_title_bar};

/// Main draw function for the chat TUI
pub fn draw(frame: &mut Frame, app: &mut ChatApp) {
    let area = frame.area();

    let layout = calculate_layout(area);

    // Update scroll state with current viewport height
    app.scroll_state.update_viewport_height(layout.chat.height);

    render_title_bar(frame, app, layout.title_bar);
    render_chat_area(frame, app, layout.chat);
    render_input_area(frame, app, layout.input);

    // Position cursor
    if app.mode == ChatMode::Input {
        let cursor_pos = InputArea::new(&app.input).cursor_position(layout.input);
        frame.set_cursor_position(cursor_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::client::BackendClient;
    use crate::chat::ChatController;
    use crate::config::Settings;
    use crate::tui::events::{create_event_channel, ChatEvent};
    use ratatui::backend::TestBackend;

    fn test_app() -> ChatApp {
        let (tx, rx) = create_event_channel();
        let controller =
            ChatController::new(BackendClient::new("http://127.0.0.1:9").unwrap());
        ChatApp::new(controller, tx, rx, Settings::default())
    }

    #[test]
    fn test_draw_empty_transcript() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[tokio::test]
    async fn test_draw_with_messages() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.submit_query("life?");
        app.handle_event(ChatEvent::AnswerReceived {
            seq: 0,
            response: serde_json::from_value(serde_json::json!({
                "answer": "42",
                "confidence": 0.92,
                "suggestions": [["tell me more", "Sure.", 0.8]]
            }))
            .unwrap(),
        });

        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[tokio::test]
    async fn test_draw_in_suggest_mode() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.submit_query("q");
        app.handle_event(ChatEvent::AnswerReceived {
            seq: 0,
            response: serde_json::from_value(serde_json::json!({
                "answer": "Did you mean:",
                "suggestions": [["one"], ["two"]]
            }))
            .unwrap(),
        });
        app.mode = ChatMode::Suggest;
        app.selected_suggestion = 1;

        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }

    #[tokio::test]
    async fn test_draw_small_terminal() {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.submit_query("hello");

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        // Should not panic
    }

    #[tokio::test]
    async fn test_draw_while_processing() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.submit_query("first");
        app.submit_query("second"); // queued

        terminal.draw(|f| draw(f, &mut app)).unwrap();
    }
}
