//! Call stack pane rendering
//!
//! Shows the recorded frames of a recursive trace, outermost first. The
//! innermost (currently executing) frame is emphasized and frames that have
//! computed their value show it on a return line underneath.

use super::utils::{pane_block, visible_items};
use crate::trace::CallFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the call stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    frames: &[CallFrame],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Call Stack ", is_focused);
    let mut all_items = Vec::new();

    if frames.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let top = frames.len() - 1;
        for (depth, call) in frames.iter().enumerate() {
            let name_style = if depth == top {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.function)
            };

            all_items.push(ListItem::new(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("Frame {} ", depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("factorial({})", call.argument), name_style),
                Span::styled(
                    format!("  #{}", call.id),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])));

            if let Some(result) = call.result {
                all_items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        "     ↖ return ",
                        Style::default()
                            .fg(DEFAULT_THEME.resolved)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(result.to_string(), Style::default().fg(DEFAULT_THEME.resolved)),
                ])));
            }
        }
    }

    let visible = visible_items(all_items, area, scroll_offset);
    frame.render_widget(List::new(visible).block(block), area);
}
