//! Status bar rendering with keybindings and state indicators

use super::utils::format_bytes;
use crate::playback::Mode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub current_step: usize,
    pub total_steps: usize,
    pub at_start: bool,
    /// Approximate memory held by the trace
    pub trace_bytes: usize,
    pub mode: Mode,
    pub tick_ms: u64,
    pub challenge: bool,
    /// Prompt and buffer while a text field is being edited
    pub editing: Option<(&'a str, &'a str)>,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let step_text = format!(" Step {}/{} ", data.current_step + 1, data.total_steps);

    let message = match data.editing {
        Some((prompt, buffer)) => format!(" {}: {}▏", prompt, buffer),
        None => format!(" {} ", data.message),
    };

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if data.is_error {
                    DEFAULT_THEME.error
                } else if data.editing.is_some() {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            message,
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" a ", key_style),
        Span::styled(" algo ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" i/t/r ", key_style),
        Span::styled(" input ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" c ", key_style),
        Span::styled(" quiz ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {}ms ", data.tick_ms), desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" {} ", format_bytes(data.trace_bytes)), desc_style),
        Span::styled("│", sep_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    if data.challenge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" ? QUIZ ", DEFAULT_THEME.guess));
    }

    // Show status indicators based on position and state
    let indicator = match data.mode {
        Mode::Playing => Some(badge(" ▶ PLAYING ", DEFAULT_THEME.secondary)),
        Mode::Paused => Some(badge(" ⏸ PAUSED ", DEFAULT_THEME.primary)),
        Mode::Finished => Some(badge(" END ", DEFAULT_THEME.error)),
        Mode::Idle if data.at_start => Some(badge(" START ", DEFAULT_THEME.success)),
        Mode::Idle => None,
    };
    if let Some(indicator) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator);
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
