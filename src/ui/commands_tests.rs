#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;
use crate::interpret::InterpreterConfig;
use crate::store::LedgerStore;

fn setup() -> (TempDir, App, Session) {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("transactions.csv"));
    let session = Session::open(store, InterpreterConfig::default(), dec!(0)).unwrap();
    (dir, App::new("₹"), session)
}

#[test]
fn test_every_command_has_a_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), ":{name} has no description");
    }
}

#[test]
fn test_quit_stops_app() {
    let (_dir, mut app, mut session) = setup();
    handle_command("quit", &mut app, &mut session);
    assert!(!app.running);
}

#[test]
fn test_help_opens_overlay() {
    let (_dir, mut app, mut session) = setup();
    handle_command("h", &mut app, &mut session);
    assert!(app.show_help);
}

#[test]
fn test_unknown_command_suggests_closest() {
    let (_dir, mut app, mut session) = setup();
    handle_command("exprot", &mut app, &mut session);
    assert_eq!(
        app.status_message,
        "Unknown command: :exprot. Did you mean :export?"
    );
}

#[test]
fn test_find_closest_prefers_full_names() {
    assert_eq!(find_closest("incom"), "income");
    assert_eq!(find_closest("raport"), "report");
}

#[test]
fn test_income_sets_ledger_income() {
    let (_dir, mut app, mut session) = setup();
    handle_command("income 50000", &mut app, &mut session);
    assert_eq!(session.ledger().income, dec!(50000));
    assert_eq!(app.summary.income, dec!(50000));
    assert_eq!(app.status_message, "Saved monthly income: ₹50000.00");
}

#[test]
fn test_income_rejects_negative() {
    let (_dir, mut app, mut session) = setup();
    handle_command("income -5", &mut app, &mut session);
    assert_eq!(session.ledger().income, dec!(0));
    assert!(app.status_message.contains("must not be negative"));
}

#[test]
fn test_income_rejects_garbage() {
    let (_dir, mut app, mut session) = setup();
    handle_command("income lots", &mut app, &mut session);
    assert_eq!(app.status_message, "Invalid amount: lots");
}

#[test]
fn test_add_title_cases_multi_word_category() {
    let (_dir, mut app, mut session) = setup();
    handle_command("add eating out 250.50", &mut app, &mut session);

    let records = session.ledger().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "Eating Out");
    assert_eq!(records[0].amount, dec!(250.50));
    assert_eq!(app.expenses.len(), 1);
    assert_eq!(app.status_message, "Added ₹250.50 to Eating Out");
}

#[test]
fn test_add_without_amount_shows_usage() {
    let (_dir, mut app, mut session) = setup();
    handle_command("add Food", &mut app, &mut session);
    assert!(session.ledger().is_empty());
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_add_negative_amount_is_rejected() {
    let (_dir, mut app, mut session) = setup();
    handle_command("add Food -3", &mut app, &mut session);
    assert!(session.ledger().is_empty());
    assert!(app.status_message.contains("must not be negative"));
}

#[test]
fn test_ask_logs_both_sides_and_switches_to_chat() {
    let (_dir, mut app, mut session) = setup();
    handle_command("ask I spent 500 on groceries", &mut app, &mut session);

    assert_eq!(app.screen, Screen::Chat);
    assert_eq!(app.chat_log.len(), 2);
    assert_eq!(app.chat_log[0].speaker, Speaker::User);
    assert_eq!(app.chat_log[1].text, "Added ₹500.00 to Groceries expenses.");
    assert_eq!(app.summary.total_expense, dec!(500));
}

#[test]
fn test_clear_empties_chat_log() {
    let (_dir, mut app, mut session) = setup();
    handle_command("ask hello there", &mut app, &mut session);
    assert!(!app.chat_log.is_empty());
    handle_command("clear", &mut app, &mut session);
    assert!(app.chat_log.is_empty());
}

#[test]
fn test_export_writes_csv() {
    let (dir, mut app, mut session) = setup();
    handle_command("add Food 10", &mut app, &mut session);
    let out = dir.path().join("out.csv");
    handle_command(&format!("export {}", out.display()), &mut app, &mut session);

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents, "category,amount\nFood,10\n");
    assert!(app.status_message.starts_with("Exported 1 expenses"));
}

#[test]
fn test_report_writes_pdf() {
    let (dir, mut app, mut session) = setup();
    let out = dir.path().join("report.pdf");
    handle_command(&format!("report {}", out.display()), &mut app, &mut session);

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_failed_export_reports_error_in_status() {
    let (dir, mut app, mut session) = setup();
    let out = dir.path().join("missing").join("out.csv");
    handle_command(&format!("export {}", out.display()), &mut app, &mut session);
    assert!(app.running);
    assert!(app.status_message.starts_with("Error: Failed to create export file"));
}

#[test]
fn test_screen_commands_switch_screens() {
    let (_dir, mut app, mut session) = setup();
    handle_command("expenses", &mut app, &mut session);
    assert_eq!(app.screen, Screen::Expenses);
    handle_command("c", &mut app, &mut session);
    assert_eq!(app.screen, Screen::Chat);
    handle_command("dashboard", &mut app, &mut session);
    assert_eq!(app.screen, Screen::Dashboard);
}
