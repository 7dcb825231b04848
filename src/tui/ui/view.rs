// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::super::app::{ChatApp, ChatMode};
use super::super::widgets::message::render_messages;
use super::super::widgets::StatusBar;

pub(super) fn render_title_bar(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let client = app.controller.client();
    let bar = StatusBar::new("askline", client.base_url())
        .status(app.status_message.as_deref(), app.status_is_error)
        .processing(app.controller.is_processing());

    frame.render_widget(bar, area);
}

pub(super) fn render_chat_area(frame: &mut Frame, app: &mut ChatApp, area: Rect) {
    let block = Block::default().borders(Borders::NONE);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Update scroll state with current dimensions.
    app.scroll_state.update_viewport_height(inner.height);
    app.message_area_width = inner.width;
    let total_height = app
        .scroll_state
        .calculate_total_height(app.controller.transcript().messages(), inner.width);

    let latest_selection = if app.mode == ChatMode::Suggest {
        Some(app.selected_suggestion)
    } else {
        None
    };

    let show_confidence = app.settings.appearance.show_confidence;
    let scroll_offset = app.scroll_state.scroll_offset;
    let buf = frame.buffer_mut();
    render_messages(
        app.controller.transcript().messages(),
        inner,
        buf,
        scroll_offset,
        show_confidence,
        latest_selection,
    );

    // If no messages, show welcome text.
    if app.controller.transcript().is_empty() {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "askline",
                Style::default().fg(Color::Cyan).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Ask a question to get started.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Keyboard shortcuts:",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  Enter  - Send question",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  Tab    - Pick a follow-up suggestion",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  Esc    - Switch to scroll mode",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  Ctrl+C - Quit",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);

        let welcome_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + area.height / 3,
            width: area.width / 2,
            height: 10.min(area.height),
        };

        frame.render_widget(welcome, welcome_area);
    } else {
        render_scroll_indicator(frame, app, area, total_height);
    }
}

/// Render a scroll indicator showing current position.
fn render_scroll_indicator(frame: &mut Frame, app: &mut ChatApp, area: Rect, total_height: usize) {
    if let Some((current_line, _viewport_end, total_lines)) =
        app.scroll_state.scroll_indicator(total_height)
    {
        if total_lines > app.scroll_state.viewport_height as usize {
            let indicator_text = if app.scroll_state.is_at_top() {
                "⬆ Top".to_string()
            } else if app.scroll_state.is_at_bottom(total_height) {
                "⬇ Bottom".to_string()
            } else {
                format!("↕ {}/{}", current_line, total_lines)
            };

            let indicator = Paragraph::new(indicator_text)
                .style(Style::default().fg(Color::DarkGray).bg(Color::Black))
                .alignment(Alignment::Right);

            // Position indicator in bottom-right corner.
            let indicator_area = Rect {
                x: area.x + area.width.saturating_sub(15),
                y: area.y + area.height.saturating_sub(1),
                width: 15.min(area.width),
                height: 1.min(area.height),
            };

            frame.render_widget(indicator, indicator_area);
        }
    }
}

pub(super) fn render_input_area(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let focused = app.mode == ChatMode::Input;

    let hints: &[(&str, &str)] = match app.mode {
        ChatMode::Input => &[
            ("Enter", "Send"),
            ("Tab", "Suggestions"),
            ("Esc", "Scroll"),
            ("Ctrl+C", "Quit"),
        ],
        ChatMode::Normal => &[
            ("j/k", "Scroll"),
            ("g/G", "Top/Bottom"),
            ("i", "Input"),
            ("q", "Quit"),
        ],
        ChatMode::Suggest => &[
            ("j/k", "Select"),
            ("Enter", "Ask"),
            ("Esc", "Back"),
        ],
    };

    let processing = app.controller.is_processing();
    let queued = app.controller.queued_count();
    let buf = frame.buffer_mut();
    super::super::widgets::input_area::render_input_with_hints(
        &app.input, area, buf, focused, processing, queued, hints,
    );
}
