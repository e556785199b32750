//! Details pane: algorithm, request and the current step's index sets
//!
//! In challenge mode the current guess and the running score are listed
//! below the step details.

use super::utils::{format_indices, pane_block};
use crate::challenge::{Challenge, Verdict};
use crate::producer::Algorithm;
use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the details pane
pub struct DetailsRenderData<'a> {
    pub algorithm: Algorithm,
    pub input: &'a str,
    pub target: Option<&'a str>,
    pub step: &'a Step,
    pub challenge: Option<&'a Challenge>,
}

fn field<'a>(name: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<10}", name),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

pub fn render_details_pane(frame: &mut Frame, area: Rect, data: DetailsRenderData, is_focused: bool) {
    let block = pane_block(" Details ", is_focused);

    let mut lines = vec![
        Line::from(Span::styled(
            data.algorithm.label(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        field("input", data.input.to_string()),
    ];
    if let Some(target) = data.target {
        lines.push(field("target", target.to_string()));
    }
    let kind = if data.step.kind.is_terminal() {
        format!("{:?} (final)", data.step.kind)
    } else {
        format!("{:?}", data.step.kind)
    };
    lines.push(field("step", kind));
    lines.push(field(
        "compared",
        data.step
            .compared
            .as_deref()
            .map(format_indices)
            .unwrap_or_else(|| "-".to_string()),
    ));
    lines.push(field(
        "highlight",
        format_indices(&data.step.highlighted_sorted()),
    ));
    lines.push(field("resolved", format_indices(&data.step.resolved_sorted())));

    if let Some(challenge) = data.challenge {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Challenge: predict the next comparison",
            Style::default()
                .fg(DEFAULT_THEME.guess)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(field("guess", format_indices(&challenge.guess_sorted())));
        let accuracy = challenge
            .accuracy()
            .map(|a| format!(" ({}%)", a))
            .unwrap_or_default();
        lines.push(field(
            "score",
            format!(
                "{} correct, {} wrong{}",
                challenge.correct(),
                challenge.incorrect(),
                accuracy
            ),
        ));
        if let Some(verdict) = challenge.last_verdict() {
            let (text, color) = match verdict {
                Verdict::Correct => ("correct!".to_string(), DEFAULT_THEME.success),
                Verdict::Incorrect { expected } => (
                    format!("wrong, it was {}", format_indices(expected)),
                    DEFAULT_THEME.error,
                ),
                Verdict::NothingToPredict => {
                    ("nothing to predict".to_string(), DEFAULT_THEME.comment)
                }
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", "last"), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(text, Style::default().fg(color)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
