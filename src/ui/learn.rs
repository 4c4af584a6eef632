use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::{Lesson, LESSONS};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Interactive Learning",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cursor = app.lesson_cursor();
    let lines: Vec<Line> = LESSONS
        .iter()
        .enumerate()
        .map(|(index, lesson)| {
            let is_selected = index == cursor;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(lesson.title, style),
                Span::styled(
                    format!("  {} · {}", lesson.level, lesson.duration),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    if let Some(lesson) = LESSONS.get(cursor) {
        render_lesson_detail(frame, chunks[2], lesson);
    }

    let controls = Paragraph::new("j/k select lesson")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}

fn render_lesson_detail(frame: &mut Frame, area: Rect, lesson: &Lesson) {
    let content = vec![
        Line::from(Span::styled(lesson.description, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Watch: ", Style::default().fg(Color::DarkGray)),
            Span::styled(lesson.video_url(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", lesson.title))
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
