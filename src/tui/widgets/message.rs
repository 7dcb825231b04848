// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Message rendering widget

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::chat::transcript::{truncate_string, Message, Sender};

/// Widget for rendering a single message
pub struct MessageWidget<'a> {
    message: &'a Message,
    width: u16,
    show_confidence: bool,
    /// Set for the newest bot message only; its suggestions are activatable.
    /// The inner value is the highlighted suggestion index, if any.
    suggestion_selection: Option<Option<usize>>,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a Message, width: u16) -> Self {
        Self {
            message,
            width,
            show_confidence: false,
            suggestion_selection: None,
        }
    }

    pub fn show_confidence(mut self, show: bool) -> Self {
        self.show_confidence = show;
        self
    }

    /// Mark this message's suggestions as activatable, highlighting `selected`.
    pub fn suggestions_active(mut self, selected: Option<usize>) -> Self {
        self.suggestion_selection = Some(selected);
        self
    }

    /// Calculate the height needed to render this message with text wrapping
    pub fn height(&self) -> u16 {
        calculate_message_height(self.message, self.width)
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        let (sender_style, sender_label) = match self.message.sender {
            Sender::User => (Style::default().fg(Color::Cyan).bold(), Sender::User.label()),
            Sender::Bot => (Style::default().fg(Color::White).bold(), Sender::Bot.label()),
        };

        let mut header_line = vec![Span::styled(format!("  {}", sender_label), sender_style)];

        if self.show_confidence {
            if let Some(confidence) = self.message.confidence {
                header_line.push(Span::styled(
                    format!("  {:.0}%", confidence * 100.0),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        let header = Line::from(header_line);
        buf.set_line(area.x, area.y, &header, area.width);

        // Render content
        let content_lines = wrapped_line_count(&self.message.text, area.width.saturating_sub(4));
        let content_area = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: (content_lines as u16).min(area.height.saturating_sub(2)),
        };

        let content_style = match self.message.sender {
            Sender::User => Style::default().fg(Color::Cyan),
            Sender::Bot => Style::default().fg(Color::White),
        };

        let content = Paragraph::new(self.message.text.as_str())
            .style(content_style)
            .wrap(Wrap { trim: false });

        content.render(content_area, buf);

        // Render follow-up suggestions below the content
        let mut suggestion_y = area.y + 1 + content_lines as u16;
        for (i, suggestion) in self.message.suggestions.iter().enumerate() {
            if suggestion_y >= area.y + area.height {
                break;
            }

            let activatable = self.suggestion_selection.is_some();
            let selected = self.suggestion_selection == Some(Some(i));

            let bullet_style = if activatable {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if activatable {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let max_len = (area.width as usize).saturating_sub(8);
            let label = truncate_string(&suggestion.label, max_len);
            let row = Line::from(vec![
                Span::styled("    · ", bullet_style),
                Span::styled(label, label_style),
            ]);
            buf.set_line(area.x, suggestion_y, &row, area.width);
            suggestion_y += 1;
        }
    }
}

/// Render a list of messages, skipping `scroll_offset` lines from the top.
///
/// `latest_selection` highlights a suggestion on the newest message, which is
/// the only one whose suggestions are activatable.
pub fn render_messages(
    messages: &[Message],
    area: Rect,
    buf: &mut Buffer,
    scroll_offset: usize,
    show_confidence: bool,
    latest_selection: Option<usize>,
) {
    if messages.is_empty() {
        return;
    }

    let mut current_y = area.y;
    let mut lines_skipped = 0;
    let viewport_end = area.y + area.height;
    let last_index = messages.len() - 1;

    for (i, message) in messages.iter().enumerate() {
        if current_y >= viewport_end {
            break;
        }

        let msg_height = calculate_message_height(message, area.width);

        // Skip messages entirely above the viewport
        if lines_skipped + msg_height as usize <= scroll_offset {
            lines_skipped += msg_height as usize;
            continue;
        }

        let lines_to_skip = scroll_offset.saturating_sub(lines_skipped);
        lines_skipped += msg_height as usize;

        let visible_height = msg_height.saturating_sub(lines_to_skip as u16);
        let remaining = viewport_end.saturating_sub(current_y);
        let render_height = visible_height.min(remaining);
        if render_height == 0 {
            continue;
        }

        let msg_area = Rect {
            x: area.x,
            y: current_y,
            width: area.width,
            height: render_height,
        };

        let mut widget = MessageWidget::new(message, area.width).show_confidence(show_confidence);
        if i == last_index && !message.suggestions.is_empty() {
            widget = widget.suggestions_active(latest_selection);
        }
        widget.render(msg_area, buf);
        current_y += render_height;
    }
}

fn wrapped_line_count(text: &str, content_width: u16) -> usize {
    let content_width = content_width.max(1) as usize;
    if text.is_empty() {
        return 1;
    }
    text.lines()
        .map(|line| {
            if line.is_empty() {
                1
            } else {
                ((line.chars().count() - 1) / content_width) + 1
            }
        })
        .sum::<usize>()
        .max(1)
}

/// Calculate message height with text wrapping consideration
fn calculate_message_height(message: &Message, width: u16) -> u16 {
    let content_height = wrapped_line_count(&message.text, width.saturating_sub(4));

    // Header (1) + content + one row per suggestion + spacing (1)
    (1 + content_height + message.suggestions.len() + 1) as u16
}
