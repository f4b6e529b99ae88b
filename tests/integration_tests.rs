//! End-to-end tests for the questionnaire flow
//!
//! Drives the App through complete sessions with simulated key presses
//! (no terminal required) and exercises the rules-file path the way the
//! binary uses it.

use crossterm::event::{KeyCode, KeyEvent};
use tempfile::tempdir;

use wayfarer::app::{App, AppMode};
use wayfarer::logic::resolver::resolve;
use wayfarer::rules::RuleTable;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

/// Walk one full session: second option for terrain (Beach), first for
/// activity (Adventure), first for budget (Low).
fn complete_beach_adventure_low(app: &mut App) {
    press(app, KeyCode::Down);
    press(app, KeyCode::Enter); // Beach
    press(app, KeyCode::Enter); // Adventure
    press(app, KeyCode::Enter); // Low
}

#[test]
fn test_full_session_reaches_result() {
    let mut app = App::new(RuleTable::default());
    assert_eq!(app.state().mode, AppMode::Question);

    complete_beach_adventure_low(&mut app);

    assert_eq!(app.state().mode, AppMode::Result);
    assert!(app.state().collector.is_complete());

    let text = app.state().recommendation.as_deref().unwrap();
    assert!(!text.is_empty());
}

#[test]
fn test_session_result_matches_direct_resolution() {
    let table = RuleTable::default();
    let mut app = App::new(table.clone());
    complete_beach_adventure_low(&mut app);

    let via_ui = app.state().recommendation.clone().unwrap();
    let direct = resolve(app.state().collector.choices(), &table).unwrap();
    assert_eq!(via_ui, direct);
}

#[test]
fn test_restart_then_same_answers_yield_identical_text() {
    let mut app = App::new(RuleTable::default());

    complete_beach_adventure_low(&mut app);
    let first = app.state().recommendation.clone().unwrap();

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().mode, AppMode::Question);
    assert_eq!(app.state().collector.step(), 1);
    assert!(app.state().recommendation.is_none());

    complete_beach_adventure_low(&mut app);
    let second = app.state().recommendation.clone().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_different_paths_give_different_recommendations() {
    let mut beach_app = App::new(RuleTable::default());
    complete_beach_adventure_low(&mut beach_app);

    // Mountains / Relaxation / High
    let mut mountain_app = App::new(RuleTable::default());
    press(&mut mountain_app, KeyCode::Enter); // Mountains
    press(&mut mountain_app, KeyCode::Down);
    press(&mut mountain_app, KeyCode::Enter); // Relaxation
    press(&mut mountain_app, KeyCode::Down);
    press(&mut mountain_app, KeyCode::Down);
    press(&mut mountain_app, KeyCode::Enter); // High

    let beach = beach_app.state().recommendation.clone().unwrap();
    let mountains = mountain_app.state().recommendation.clone().unwrap();
    assert_ne!(beach, mountains);
}

#[test]
fn test_restart_mid_session_returns_to_first_question() {
    let mut app = App::new(RuleTable::default());
    press(&mut app, KeyCode::Enter); // answer question 1
    assert_eq!(app.state().collector.step(), 2);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().collector.step(), 1);
    assert_eq!(app.state().mode, AppMode::Question);
}

#[test]
fn test_custom_rules_file_drives_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");

    let mut table = RuleTable::default();
    for rule in &mut table.rules {
        rule.text = format!("CUSTOM: {}", rule.text);
    }
    table.save_to_file(&path).unwrap();

    // Same load path the binary uses for --rules
    let loaded = RuleTable::load_from_file(&path).unwrap();
    loaded.validate().unwrap();

    let mut app = App::new(loaded);
    complete_beach_adventure_low(&mut app);

    let text = app.state().recommendation.clone().unwrap();
    assert!(text.starts_with("CUSTOM: "));
}
