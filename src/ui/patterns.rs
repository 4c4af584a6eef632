use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::{Pattern, PATTERN_FAMILIES};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let heading = app.open_pattern().map_or("Design Patterns", |pattern| pattern.name);
    let title = Paragraph::new(Line::from(Span::styled(
        heading,
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let controls = match app.open_pattern() {
        Some(pattern) => {
            render_detail(frame, chunks[1], pattern);
            "esc back"
        }
        None => {
            render_catalogue(frame, chunks[1], app.pattern_cursor());
            "j/k select  ·  enter open"
        }
    };

    let controls = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn render_catalogue(frame: &mut Frame, area: Rect, cursor: usize) {
    let mut lines: Vec<Line> = Vec::new();
    let mut index = 0;
    let mut cursor_line = 0;

    for family in &PATTERN_FAMILIES {
        lines.push(Line::from(Span::styled(
            format!("{} patterns", family.name),
            Style::default().fg(Color::Yellow).bold(),
        )));
        for pattern in family.patterns {
            let selected = index == cursor;
            if selected {
                cursor_line = lines.len();
            }
            let (marker, name_style) = if selected {
                ("> ", Style::default().fg(Color::Cyan).bold())
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            let more = if pattern.detail.is_some() { "" } else { "  (overview only)" };

            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<24}", marker, pattern.name), name_style),
                Span::styled(pattern.description, Style::default().fg(Color::Gray)),
                Span::styled(more, Style::default().fg(Color::DarkGray)),
            ]));
            index += 1;
        }
        lines.push(Line::from(""));
    }

    let scroll = cursor_line.saturating_sub(area.height.saturating_sub(1) as usize);
    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_detail(frame: &mut Frame, area: Rect, pattern: &Pattern) {
    let Some(detail) = &pattern.detail else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(pattern.description, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(Span::styled("Intent", Style::default().fg(Color::Yellow).bold())),
        Line::from(detail.intent.fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled("Problem", Style::default().fg(Color::Yellow).bold())),
        Line::from(detail.problem.fg(Color::Gray)),
    ];

    if !detail.solution.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Solution",
            Style::default().fg(Color::Yellow).bold(),
        )));
        for step in detail.solution {
            lines.push(Line::from(vec!["  • ".fg(Color::Cyan), (*step).fg(Color::Gray)]));
        }
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
