// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Input area widget for the chat TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::state::InputState;

/// Widget for rendering the input area
pub struct InputArea<'a> {
    input: &'a InputState,
    focused: bool,
    placeholder: Option<&'a str>,
    processing: bool,
    processing_title: Option<String>,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: true,
            placeholder: None,
            processing: false,
            processing_title: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Set processing mode with a title suffix (e.g., " Processing (2 queued) ")
    pub fn processing(mut self, is_processing: bool, title: &str) -> Self {
        self.processing = is_processing;
        if is_processing {
            self.processing_title = Some(title.to_string());
        }
        self
    }

    /// Calculate cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // Account for border (1) and prompt "> " (2)
        let cursor_chars = self.input.buffer[..self.input.cursor].chars().count();
        let x = area.x + 1 + 2 + cursor_chars as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(1)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.processing {
            // Yellow border while a request is in flight
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow).bold(),
            )
        } else if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if let Some(ref title) = self.processing_title {
            block = block.title(title.as_str()).title_style(title_style);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // Render prompt
        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        // Render input text or placeholder
        let text_x = inner.x + 2;
        let text_width = inner.width.saturating_sub(2) as usize;

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_string(
                    text_x,
                    inner.y,
                    placeholder,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let display_line: String = self.input.text().chars().take(text_width).collect();
            buf.set_string(
                text_x,
                inner.y,
                &display_line,
                Style::default().fg(Color::White),
            );
        }

        // Render cursor if focused
        if self.focused {
            let (cursor_x, cursor_y) = self.cursor_position(area);
            if cursor_x < area.x + area.width && cursor_y < area.y + area.height {
                if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}

/// Render input area with a help hint line below
pub fn render_input_with_hints(
    input: &InputState,
    area: Rect,
    buf: &mut Buffer,
    focused: bool,
    processing: bool,
    queued: usize,
    hints: &[(&str, &str)], // (key, description) pairs
) {
    if area.height < 2 {
        return;
    }

    // Split area: input area (main) + hints line (1 line)
    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };

    let hints_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    let title = if queued > 0 {
        format!(" Processing ({} queued) ", queued)
    } else {
        " Processing ".to_string()
    };

    InputArea::new(input)
        .focused(focused)
        .placeholder("Ask a question...")
        .processing(processing, &title)
        .render(input_area, buf);

    // Render hints
    let mut x = hints_area.x + 1;
    for (key, desc) in hints {
        if x + (key.len() + desc.len() + 4) as u16 > hints_area.x + hints_area.width {
            break;
        }

        buf.set_string(x, hints_area.y, key, Style::default().fg(Color::Yellow));
        x += key.len() as u16;
        buf.set_string(x, hints_area.y, " ", Style::default());
        x += 1;
        buf.set_string(x, hints_area.y, desc, Style::default().fg(Color::DarkGray));
        x += desc.len() as u16;
        buf.set_string(x, hints_area.y, " │ ", Style::default().fg(Color::DarkGray));
        x += 3;
    }
}
