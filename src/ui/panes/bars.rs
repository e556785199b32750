//! Sequence pane: one horizontal bar per value
//!
//! Colours follow the step: compared/highlighted values in yellow, values
//! involved in a swap in red, resolved values in green. In challenge mode
//! the indices the viewer has selected carry a marker.

use super::utils::{pane_block, visible_items};
use crate::challenge::Challenge;
use crate::trace::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the sequence pane
pub struct BarsRenderData<'a> {
    pub step: &'a Step,
    pub challenge: Option<&'a Challenge>,
}

fn bar_style(step: &Step, index: usize) -> Style {
    let swapping = matches!(step.kind, StepKind::AboutToSwap | StepKind::Swapped);
    let color = if step.highlighted.contains(&index) && swapping {
        DEFAULT_THEME.swapping
    } else if step.highlighted.contains(&index) {
        DEFAULT_THEME.compared
    } else if step.resolved.contains(&index) {
        DEFAULT_THEME.resolved
    } else {
        DEFAULT_THEME.bar
    };
    Style::default().fg(color)
}

/// Render the sequence pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    data: BarsRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Sequence ", is_focused);
    let values = &data.step.sequence;

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let max_abs = values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(1).max(1);
    let value_width = values.iter().map(|v| v.to_string().len()).max().unwrap_or(1);
    let index_width = (values.len() - 1).to_string().len();
    // borders (2) + marker (2) + index + " │ " (3) + " " + value
    let content_width = area.width.saturating_sub(2) as usize;
    let bar_room = content_width
        .saturating_sub(2 + index_width + 3 + 1 + value_width)
        .max(1) as u64;

    let all_items: Vec<ListItem> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let style = bar_style(data.step, i);
            let len = (u128::from(value.unsigned_abs()) * u128::from(bar_room)
                / u128::from(max_abs)) as usize;
            let glyph = if value < 0 { "░" } else { "█" };
            let selected = data.challenge.is_some_and(|c| c.is_selected(i));
            let marker = if selected {
                Span::styled(
                    "◆ ",
                    Style::default()
                        .fg(DEFAULT_THEME.guess)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };

            ListItem::new(Line::from(vec![
                marker,
                Span::styled(
                    format!("{:>width$}", i, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(glyph.repeat(len), style),
                Span::styled(format!(" {}", value), style.add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();

    let visible = visible_items(all_items, area, scroll_offset);
    frame.render_widget(List::new(visible).block(block), area);
}
