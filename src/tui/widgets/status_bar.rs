// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Status bar widget for the chat TUI

use ratatui::prelude::*;

use crate::chat::transcript::truncate_string;

/// Widget for rendering the title/status bar
pub struct StatusBar<'a> {
    title: &'a str,
    backend_url: &'a str,
    status_message: Option<&'a str>,
    status_is_error: bool,
    is_processing: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, backend_url: &'a str) -> Self {
        Self {
            title,
            backend_url,
            status_message: None,
            status_is_error: false,
            is_processing: false,
        }
    }

    pub fn status(mut self, message: Option<&'a str>, is_error: bool) -> Self {
        self.status_message = message;
        self.status_is_error = is_error;
        self
    }

    pub fn processing(mut self, is_processing: bool) -> Self {
        self.is_processing = is_processing;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Clear the line with dark background
        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let mut x = area.x + 1;

        // Title
        let title_style = Style::default().fg(Color::White).bold().bg(Color::DarkGray);
        buf.set_string(x, area.y, self.title, title_style);
        x += self.title.len() as u16 + 1;

        // Separator
        buf.set_string(
            x,
            area.y,
            "─",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
        x += 2;

        // Backend URL
        let url = truncate_string(self.backend_url, 40);
        buf.set_string(
            x,
            area.y,
            &url,
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        );
        x += url.len() as u16 + 2;

        // Right-aligned: status message or processing indicator
        if self.is_processing {
            let indicator = "● Processing...";
            let indicator_x = (area.x + area.width).saturating_sub(indicator.chars().count() as u16 + 1);
            if indicator_x > x {
                buf.set_string(
                    indicator_x,
                    area.y,
                    indicator,
                    Style::default().fg(Color::Green).bg(Color::DarkGray),
                );
            }
        } else if let Some(status) = self.status_message {
            let status_style = if self.status_is_error {
                Style::default().fg(Color::Red).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow).bg(Color::DarkGray)
            };

            let status_truncated = truncate_string(status, 30);

            let status_x =
                (area.x + area.width).saturating_sub(status_truncated.chars().count() as u16 + 1);
            if status_x > x {
                buf.set_string(status_x, area.y, &status_truncated, status_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_new() {
        let bar = StatusBar::new("askline", "http://localhost:5000");
        assert_eq!(bar.title, "askline");
        assert_eq!(bar.backend_url, "http://localhost:5000");
        assert!(bar.status_message.is_none());
        assert!(!bar.status_is_error);
        assert!(!bar.is_processing);
    }

    #[test]
    fn test_status_bar_status_builder() {
        let bar = StatusBar::new("askline", "http://localhost:5000")
            .status(Some("Chat cleared"), false);
        assert_eq!(bar.status_message, Some("Chat cleared"));
        assert!(!bar.status_is_error);
    }

    #[test]
    fn test_status_bar_processing_builder() {
        let bar = StatusBar::new("askline", "http://localhost:5000").processing(true);
        assert!(bar.is_processing);
    }

    #[test]
    fn test_status_bar_render() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let bar = StatusBar::new("askline", "http://localhost:5000").processing(true);
                f.render_widget(bar, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_status_bar_render_with_status() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let bar = StatusBar::new("askline", "http://localhost:5000")
                    .status(Some("request failed"), true);
                f.render_widget(bar, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_status_bar_render_narrow() {
        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let bar = StatusBar::new("askline", "http://localhost:5000")
                    .status(Some("some status"), false);
                f.render_widget(bar, f.area());
            })
            .unwrap();
        // Should not panic
    }

    #[test]
    fn test_status_bar_render_zero_height() {
        let bar = StatusBar::new("askline", "http://localhost:5000");
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 0));
        bar.render(Rect::new(0, 0, 80, 0), &mut buf);
        // Should not panic
    }
}
