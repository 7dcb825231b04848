// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

use ratatui::prelude::*;

/// Layout regions.
#[derive(Clone, Copy, Debug)]
pub(super) struct Layout {
    pub(super) title_bar: Rect,
    pub(super) chat: Rect,
    pub(super) input: Rect,
}

pub(super) fn calculate_layout(area: Rect) -> Layout {
    // Title bar: 1 line
    // Input area: 3 lines box + 1 line hints
    // Chat: remaining space
    let title_height = 1;
    let input_height = 4;

    let chat_height = area
        .height
        .saturating_sub(title_height)
        .saturating_sub(input_height);

    Layout {
        title_bar: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: title_height,
        },
        chat: Rect {
            x: area.x,
            y: area.y + title_height,
            width: area.width,
            height: chat_height,
        },
        input: Rect {
            x: area.x,
            y: area.y + title_height + chat_height,
            width: area.width,
            height: input_height.min(area.height.saturating_sub(title_height)),
        },
    }
}
