use crate::ui::app::{App, EntryMode};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    body_regions, layout_regions, scroll_offset, BULK_ENTRY_HEIGHT, SINGLE_ENTRY_HEIGHT,
};
use crate::ui::selection::render_winner_panel;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const INPUT_CURSOR: &str = "▏";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.registry().count()), header);
    frame.render_widget(Clear, body);

    let entry_height = match app.entry_mode() {
        EntryMode::Single => SINGLE_ENTRY_HEIGHT,
        EntryMode::Bulk => BULK_ENTRY_HEIGHT,
    };
    let regions = body_regions(body, entry_height);

    draw_entry(frame, regions.entry, app);
    draw_participants(frame, regions.participants, app);
    render_winner_panel(
        frame,
        regions.winner,
        app.selection(),
        app.export_state(),
        !app.registry().is_empty(),
    );

    let shuffling = app.selection().is_shuffling();
    frame.render_widget(Footer::new().widget(footer, shuffling), footer);
}

fn draw_entry(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(MUTED_TEXT))
        }
    };
    let mode = app.entry_mode();
    let title = Line::from(vec![
        Span::raw(" "),
        tab(" Add Single Name ", mode == EntryMode::Single),
        Span::raw(" "),
        tab(" Add Multiple Names ", mode == EntryMode::Bulk),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let text_style = Style::default().fg(HEADER_TEXT);
    let cursor_style = Style::default().fg(ACCENT);
    let lines: Vec<Line> = match mode {
        EntryMode::Single if app.single_input().is_empty() => vec![Line::from(vec![
            Span::styled(INPUT_CURSOR, cursor_style),
            Span::styled("Enter a name", Style::default().fg(MUTED_TEXT)),
        ])],
        EntryMode::Single => vec![Line::from(vec![
            Span::styled(app.single_input().to_string(), text_style),
            Span::styled(INPUT_CURSOR, cursor_style),
        ])],
        EntryMode::Bulk => {
            let inner_height = area.height.saturating_sub(2) as usize;
            let mut lines: Vec<Line> = app
                .bulk_input()
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), text_style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled(INPUT_CURSOR, cursor_style));
            }
            if app.bulk_input().is_empty() {
                lines.push(Line::from(Span::styled(
                    "One name per line, Ctrl+S to add all",
                    Style::default().fg(MUTED_TEXT),
                )));
            }
            // Keep the line being typed in view.
            let skip = lines.len().saturating_sub(inner_height);
            lines.split_off(skip)
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_participants(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let names = app.registry().names();
    let mut title = vec![Span::styled(
        format!(" Participants ({}) ", names.len()),
        Style::default().fg(HEADER_TEXT),
    )];
    if let Some(notice) = app.notice() {
        title.push(Span::styled(
            format!("{notice} "),
            Style::default().fg(STATUS_OK),
        ));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    if names.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No participants added yet. Add some names to get started!",
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(app.cursor(), height);
    let number_width = names.len().to_string().len();

    let lines: Vec<Line> = names
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(idx, name)| {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {:>width$}. ", idx + 1, width = number_width),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(name.clone(), Style::default().fg(HEADER_TEXT)),
            ]);
            if idx == app.cursor() {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
