use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, NUM_OPTIONS};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);

    let Some(question) = app.current_question() else {
        let empty = Paragraph::new("No questions loaded.")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(empty, chunks[1]);
        return;
    };

    render_question_text(frame, chunks[1], &question.prompt);
    render_options(frame, chunks[2], question, app);
    render_controls(frame, chunks[3], app.accepts_answers());
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let content = vec![
        Line::from(Span::styled(
            "Test Your Knowledge",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Question {} of {}",
                app.session().current_question_number(),
                app.total_questions()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

/// Before an answer the cursor is highlighted; afterwards the correct
/// option turns green and a wrong pick turns red.
fn render_options(frame: &mut Frame, area: Rect, question: &Question, app: &App) {
    let feedback = app.session().selected_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = match feedback {
            Some(_) if question.is_correct(index) => ("+", Style::default().fg(Color::Green).bold()),
            Some(selected) if selected == index => ("x", Style::default().fg(Color::Red).bold()),
            Some(_) => (" ", Style::default().fg(Color::DarkGray)),
            None if index == app.selected_option() => (">", Style::default().fg(Color::Cyan).bold()),
            None => (" ", Style::default().fg(Color::Gray)),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, accepting: bool) {
    let text = if accepting {
        "j/k navigate  ·  enter or a-d answer  ·  r restart"
    } else {
        "checking answer..."
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
