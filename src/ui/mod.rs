mod chat;
mod home;
mod learn;
mod patterns;
mod quiz;
mod refactoring;
mod result;
mod sidebar;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::View;

pub(crate) use refactoring::line_count as refactoring_line_count;

const SIDEBAR_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [nav, main] = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
        .areas(area);

    sidebar::render(frame, nav, app.view);

    match app.view {
        View::Home => home::render(frame, main),
        View::Learn => learn::render(frame, main, app),
        View::Patterns => patterns::render(frame, main, app),
        View::Refactoring => refactoring::render(frame, main, app),
        View::Quiz if app.session().is_completed() => result::render(frame, main, app),
        View::Quiz => quiz::render(frame, main, app),
        View::Chat => chat::render(frame, main, app),
    }
}
