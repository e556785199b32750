//! Narration pane rendering

use super::utils::{pane_block, visible_items};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration of every step seen so far; the newest line is emphasized
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[&str],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Narration ", is_focused);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let newest = lines.len() - 1;
    let all_items: Vec<ListItem> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == newest {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(format!("{:>3}. {}", i + 1, line)).style(style)
        })
        .collect();

    let visible = visible_items(all_items, area, scroll_offset);
    frame.render_widget(List::new(visible).block(block), area);
}
