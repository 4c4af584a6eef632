use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sd_academy::clock::Clock;
use sd_academy::quiz::Grade;
use sd_academy::{builtin_questions, handle_input, App, Config, Role, View};

fn app() -> App {
    let config = Config {
        start_view: View::Quiz,
        ..Config::default()
    };
    App::new(builtin_questions(), &config).with_clock(Clock::manual(), 42)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn wait(app: &mut App, millis: u64) {
    app.clock_mut().advance(Duration::from_millis(millis));
    app.tick();
}

#[test]
fn test_quiz_scores_two_of_three() {
    let mut app = app();

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.session().score(), 1);
    assert!(app.session().is_awaiting_advance());

    wait(&mut app, 1000);
    assert_eq!(app.session().current_index(), 1);

    press(&mut app, KeyCode::Char('a'));
    wait(&mut app, 1000);
    press(&mut app, KeyCode::Char('a'));
    wait(&mut app, 1000);

    assert!(app.session().is_completed());
    assert_eq!(app.session().score(), 2);
    assert_eq!(app.grade(), Grade::GoodJob);
}

#[test]
fn test_answers_ignored_until_advance() {
    let mut app = app();

    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().score(), 1);
    assert_eq!(app.pending_followups(), 1);

    wait(&mut app, 999);
    assert_eq!(app.session().current_index(), 0);

    wait(&mut app, 1);
    assert_eq!(app.session().current_index(), 1);
    assert_eq!(app.session().selected_answer(), None);
}

#[test]
fn test_cursor_submit() {
    let mut app = app();

    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_option(), 1);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session().score(), 1);

    // Cursor is frozen while feedback is shown.
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_option(), 1);

    wait(&mut app, 1000);
    assert_eq!(app.selected_option(), 0);
}

#[test]
fn test_restart_drops_pending_advance() {
    let mut app = app();

    press(&mut app, KeyCode::Char('b'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.pending_followups(), 0);

    wait(&mut app, 5000);
    assert_eq!(app.session().current_index(), 0);
    assert_eq!(app.session().score(), 0);
    assert!(app.accepts_answers());
}

#[test]
fn test_perfect_run_and_try_again() {
    let mut app = app();

    for key in ['b', 'b', 'a'] {
        press(&mut app, KeyCode::Char(key));
        wait(&mut app, 1000);
    }
    assert_eq!(app.grade(), Grade::Perfect);

    press(&mut app, KeyCode::Char('r'));
    assert!(!app.session().is_completed());
    assert_eq!(app.session().score(), 0);
    assert_eq!(app.session().current_index(), 0);
}

#[test]
fn test_navigation() {
    let mut app = app();
    assert_eq!(app.view, View::Quiz);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view, View::Chat);

    // Digits are typed into the chat input rather than switching pages.
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.view, View::Chat);
    assert_eq!(app.chat_input(), "1");

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.view, View::Quiz);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.view, View::Learn);

    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_refactoring_page_reachable_and_scrolls() {
    let mut app = app();

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.view, View::Refactoring);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.view, View::Refactoring);

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.refactoring_scroll(), 0);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.refactoring_scroll(), 2);

    for _ in 0..500 {
        press(&mut app, KeyCode::Char('j'));
    }
    let bottom = app.refactoring_scroll();
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.refactoring_scroll(), bottom);
    assert!(bottom > 2);

    // Leaving and coming back keeps the reading position.
    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.view, View::Quiz);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.refactoring_scroll(), bottom);
}

#[test]
fn test_open_and_close_pattern_detail() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view, View::Patterns);
    assert_eq!(app.pattern_cursor(), 0);

    press(&mut app, KeyCode::Enter);
    let factory = app.open_pattern().unwrap();
    assert_eq!(factory.name, "Factory Method");
    assert!(factory.detail.as_ref().unwrap().intent.contains("superclass"));

    // The cursor is frozen while a pattern is open.
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.pattern_cursor(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(app.open_pattern().is_none());

    for _ in 0..5 {
        press(&mut app, KeyCode::Char('j'));
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.open_pattern().map(|p| p.name), Some("Adapter"));
    press(&mut app, KeyCode::Backspace);

    // Behavioral patterns only have the catalogue line.
    for _ in 0..100 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.pattern_cursor(), 16);
    press(&mut app, KeyCode::Enter);
    assert!(app.open_pattern().is_none());
}

#[test]
fn test_chat_reply_arrives_after_delay() {
    let mut app = app();
    app.navigate(View::Chat);

    type_text(&mut app, "What is sharding?");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.chat_input(), "");
    assert!(app.reply_pending());
    assert_eq!(app.chat().transcript().len(), 2);

    wait(&mut app, 499);
    assert_eq!(app.chat().transcript().len(), 2);

    wait(&mut app, 1);
    let transcript = app.chat().transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, Role::User);
    assert_eq!(transcript[2].role, Role::Assistant);
    assert!(!app.reply_pending());
}

#[test]
fn test_blank_chat_message_is_not_sent() {
    let mut app = app();
    app.navigate(View::Chat);

    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.chat().transcript().len(), 1);
    assert_eq!(app.pending_followups(), 0);
}

#[test]
fn test_new_chat_drops_pending_reply() {
    let mut app = app();
    app.navigate(View::Chat);

    type_text(&mut app, "hello");
    press(&mut app, KeyCode::Enter);
    handle_input(
        &mut app,
        KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
    );

    wait(&mut app, 1000);
    assert_eq!(app.chat().transcript().len(), 1);
}
