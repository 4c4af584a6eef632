use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::View;

pub fn render(frame: &mut Frame, area: Rect, active: View) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .split(area);

    let logo = Paragraph::new(vec![
        Line::from(Span::styled(
            "SYSTEM DESIGN",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("• GURU •".fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray)
            .padding(Padding::top(1)),
    );
    frame.render_widget(logo, chunks[0]);

    let items: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let is_active = *view == active;
            let style = if is_active {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_active { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(view.label(), style),
            ])
        })
        .collect();

    let nav = Paragraph::new(items).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(nav, chunks[1]);

    let footer = Paragraph::new("tab switch  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
        .block(Block::default().borders(Borders::TOP).border_style(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}
