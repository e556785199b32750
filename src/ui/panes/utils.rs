//! Shared helpers for pane rendering
//!
//! Everything here is `pub(super)` except `format_bytes`, which the app's
//! render tests also use.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, ListItem},
};

/// Bordered block with the focus-aware border colour every pane uses
pub(super) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll_offset` to the content and return the rows that fit in `area`
pub(super) fn visible_items<'a>(
    all_items: Vec<ListItem<'a>>,
    area: Rect,
    scroll_offset: &mut usize,
) -> Vec<ListItem<'a>> {
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect()
}

/// Format indices as `{0, 2, 5}`
pub(super) fn format_indices(indices: &[usize]) -> String {
    let inner: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("{{{}}}", inner.join(", "))
}

/// Human-readable byte count: `512 B`, `3.4 KB`
pub(crate) fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
