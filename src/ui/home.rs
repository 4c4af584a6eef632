use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::content::{HOME_FEATURES, HOME_HEADLINE, HOME_PITCH, HOME_SUBHEADLINE};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            HOME_HEADLINE,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            HOME_SUBHEADLINE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(HOME_PITCH.fg(Color::DarkGray)),
        Line::from(""),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(header, chunks[0]);

    let mut lines: Vec<Line> = Vec::with_capacity(HOME_FEATURES.len() * 3 + 2);
    lines.push(Line::from(Span::styled(
        "Why Learn With Us?",
        Style::default().fg(Color::Yellow).bold(),
    )));
    lines.push(Line::from(""));
    for feature in &HOME_FEATURES {
        lines.push(Line::from(Span::styled(
            feature.title,
            Style::default().fg(Color::White).bold(),
        )));
        lines.push(Line::from(Span::styled(
            feature.summary,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);

    let controls = Paragraph::new("2 learn  ·  3 patterns  ·  4 refactoring  ·  5 quiz  ·  6 chat")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}
