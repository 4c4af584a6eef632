use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{ChatMessage, Role};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI Learning Assistant",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Ask questions about System Design".fg(Color::DarkGray)),
    ])
    .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray));
    frame.render_widget(header, chunks[0]);

    render_transcript(frame, chunks[1], app.chat().transcript(), app.reply_pending());
    render_input(frame, chunks[2], app.chat_input());

    let controls = Paragraph::new("enter send  ·  esc clear  ·  ctrl+l new chat  ·  ctrl+c quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_transcript(frame: &mut Frame, area: Rect, transcript: &[ChatMessage], typing: bool) {
    let mut lines: Vec<Line> = Vec::with_capacity(transcript.len() * 2 + 1);
    for message in transcript {
        let (who, style, alignment) = match message.role {
            Role::User => ("you", Style::default().fg(Color::Cyan), Alignment::Right),
            Role::Assistant => ("assistant", Style::default().fg(Color::White), Alignment::Left),
        };
        lines.push(
            Line::from(vec![
                Span::styled(format!("{}: ", who), Style::default().fg(Color::DarkGray)),
                Span::styled(message.content.as_str(), style),
            ])
            .alignment(alignment),
        );
        lines.push(Line::from(""));
    }
    if typing {
        lines.push(Line::from("assistant is typing...".fg(Color::DarkGray)));
    }

    // Keep the newest messages in view.
    let height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(height) as u16;

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let content = if input.is_empty() {
        Line::from("Ask a question about System Design...".fg(Color::DarkGray))
    } else {
        Line::from(vec![Span::raw(input), Span::styled("_", Style::default().fg(Color::Cyan))])
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
