use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::content::{
    Impact, AFTER_REFACTORING, BEFORE_REFACTORING, CODE_SMELLS, GOLDEN_RULE, REFACTORING_INTRO,
    REFACTORING_STEPS, TECHNIQUES, WHEN_TO_REFACTOR,
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Refactoring",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let widget = Paragraph::new(page())
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: false })
        .scroll((app.refactoring_scroll() as u16, 0));
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k scroll")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

/// Number of lines the page body holds before wrapping.
pub fn line_count() -> usize {
    page().len()
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Yellow).bold()))
}

fn impact_color(impact: Impact) -> Color {
    match impact {
        Impact::High => Color::Red,
        Impact::Medium => Color::Yellow,
        Impact::Low => Color::Green,
    }
}

fn page() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("What is Refactoring?"),
        Line::from(REFACTORING_INTRO.fg(Color::Gray)),
        Line::from(""),
        heading("Before"),
    ];
    for item in BEFORE_REFACTORING {
        lines.push(Line::from(vec!["  ✗ ".fg(Color::Red), item.fg(Color::Gray)]));
    }
    lines.push(heading("After"));
    for item in AFTER_REFACTORING {
        lines.push(Line::from(vec!["  ✓ ".fg(Color::Green), item.fg(Color::Gray)]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Common Code Smells"));
    for smell in &CODE_SMELLS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<22}", smell.name), Style::default().fg(Color::White)),
            Span::styled(
                format!("{:<15}", smell.impact.label()),
                Style::default().fg(impact_color(smell.impact)),
            ),
            Span::styled(smell.description, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("Refactoring Techniques"));
    for technique in &TECHNIQUES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<22}", technique.name), Style::default().fg(Color::White)),
            Span::styled(technique.description, Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {:<22}e.g. {}", "", technique.example),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(heading("The Refactoring Process"));
    for (step, (name, hint)) in REFACTORING_STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. {:<14}", step + 1, name), Style::default().fg(Color::White)),
            Span::styled(*hint, Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  Golden Rule: ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(GOLDEN_RULE, Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(""));

    lines.push(heading("When Should You Refactor?"));
    for item in &WHEN_TO_REFACTOR {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", item.title), Style::default().fg(Color::White)),
            Span::styled(item.summary, Style::default().fg(Color::Gray)),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_every_smell_and_technique() {
        let text: Vec<String> = page().iter().map(|line| line.to_string()).collect();
        for smell in &CODE_SMELLS {
            assert!(text.iter().any(|l| l.contains(smell.name) && l.contains(smell.impact.label())));
        }
        for technique in &TECHNIQUES {
            assert!(text.iter().any(|l| l.contains(technique.example)));
        }
        assert_eq!(line_count(), text.len());
    }
}
