//! Winner panel rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::export::ExportState;
use crate::ui::theme::{
    ACCENT, ACCENT_PINK, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK,
    TROPHY_BLUE,
};

use super::state::SelectionState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the winner panel: idle hint, shuffle flicker, or the winner card.
pub fn render_winner_panel(
    frame: &mut Frame,
    area: Rect,
    selection: &SelectionState,
    export: &ExportState,
    has_participants: bool,
) {
    let block = Block::default()
        .title(" Winner ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = match selection {
        SelectionState::Idle => idle_lines(has_participants),
        SelectionState::Shuffling { displayed, .. } => shuffling_lines(displayed.as_deref()),
        SelectionState::Resolved(record) => {
            let mut lines = vec![
                Line::from(Span::styled("🏆", Style::default().fg(TROPHY_BLUE))),
                Line::from(""),
                Line::from(Span::styled(
                    "Congratulations!",
                    Style::default().fg(HEADER_TEXT),
                )),
                Line::from(Span::styled(
                    record.name.clone(),
                    Style::default()
                        .fg(ACCENT_PINK)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Winner of the Giveaway",
                    Style::default().fg(MUTED_TEXT),
                )),
                Line::from(Span::styled(
                    record.display_date(),
                    Style::default().fg(MUTED_TEXT),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Ctrl+R: Pick Again │ Ctrl+E: Download Winner Card │ Ctrl+Y: Copy",
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                )),
            ];
            if let Some(status) = export_status_line(export) {
                lines.push(Line::from(""));
                lines.push(status);
            }
            lines
        }
    };

    // Vertically center the content.
    let top_padding = (inner.height as usize).saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::from(""); top_padding];
    padded.append(&mut lines);

    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn idle_lines(has_participants: bool) -> Vec<Line<'static>> {
    if has_participants {
        vec![Line::from(Span::styled(
            "Press Ctrl+P to pick a winner",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        vec![Line::from(Span::styled(
            "Add some participants first!",
            Style::default().fg(STATUS_ERROR),
        ))]
    }
}

fn shuffling_lines(displayed: Option<&str>) -> Vec<Line<'static>> {
    let name = displayed.unwrap_or("…").to_string();
    vec![
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Selecting winner...",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

fn export_status_line(export: &ExportState) -> Option<Line<'static>> {
    match export {
        ExportState::Idle => None,
        ExportState::InProgress { animation_tick, .. } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            Some(Line::from(vec![
                Span::styled(format!("{spinner} "), Style::default().fg(STATUS_OK)),
                Span::styled("Generating...", Style::default().fg(HEADER_TEXT)),
            ]))
        }
        ExportState::Saved { path } => Some(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(STATUS_OK)),
            Span::styled(
                format!("Saved {}", path.display()),
                Style::default().fg(HEADER_TEXT),
            ),
        ])),
        ExportState::Failed { error } => Some(Line::from(vec![
            Span::styled("Export failed: ", Style::default().fg(STATUS_ERROR)),
            Span::styled(error.clone(), Style::default().fg(HEADER_TEXT)),
        ])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn idle_hint_depends_on_participants() {
        let empty = idle_lines(false);
        assert_eq!(empty[0].to_string(), "Add some participants first!");
        let ready = idle_lines(true);
        assert_eq!(ready[0].to_string(), "Press Ctrl+P to pick a winner");
    }

    #[test]
    fn shuffling_shows_flicker_name() {
        let lines = shuffling_lines(Some("Tanbir"));
        assert_eq!(lines[0].to_string(), "Tanbir");
    }

    #[test]
    fn export_status_only_when_active() {
        assert!(export_status_line(&ExportState::Idle).is_none());
        let saved = export_status_line(&ExportState::Saved {
            path: PathBuf::from("winner-uzi.png"),
        })
        .unwrap();
        assert_eq!(saved.to_string(), "✓ Saved winner-uzi.png");
        let spinning = export_status_line(&ExportState::InProgress {
            job: 1,
            animation_tick: 11,
        }).unwrap();
        assert_eq!(spinning.to_string(), "⠙ Generating...");
    }
}
