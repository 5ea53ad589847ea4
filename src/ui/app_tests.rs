#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn ledger() -> Ledger {
    Ledger::with_records(
        dec!(2000),
        vec![
            ExpenseRecord::new("Food", dec!(500)),
            ExpenseRecord::new("Rent", dec!(1200)),
            ExpenseRecord::new("Food", dec!(100)),
        ],
    )
}

#[test]
fn test_new_app_starts_on_dashboard() {
    let app = App::new("₹");
    assert!(app.running);
    assert_eq!(app.screen, Screen::Dashboard);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.expenses.is_empty());
}

#[test]
fn test_refresh_rebuilds_dashboard() {
    let mut app = App::new("₹");
    app.refresh(&ledger());

    assert_eq!(app.summary.income, dec!(2000));
    assert_eq!(app.summary.total_expense, dec!(1800));
    assert_eq!(app.summary.savings, dec!(200));
    assert_eq!(app.category_totals.len(), 2);
    assert_eq!(app.category_totals[0].category, "Food");
    assert_eq!(app.category_totals[0].amount, dec!(600));
    assert_eq!(app.category_shares.len(), 2);
    assert_eq!(app.expenses.len(), 3);
}

#[test]
fn test_refresh_clamps_cursor_after_shrink() {
    let mut app = App::new("₹");
    app.refresh(&ledger());
    app.expense_index = 2;
    app.expense_scroll = 2;

    app.refresh(&Ledger::with_records(
        dec!(0),
        vec![ExpenseRecord::new("Food", dec!(1))],
    ));
    assert_eq!(app.expense_index, 0);
    assert_eq!(app.expense_scroll, 0);
}

#[test]
fn test_push_chat_keeps_order() {
    let mut app = App::new("₹");
    app.push_chat(Speaker::User, "hi");
    app.push_chat(Speaker::Assistant, "I'm not sure I understood that.");
    assert_eq!(app.chat_log.len(), 2);
    assert_eq!(app.chat_log[0].speaker, Speaker::User);
    assert_eq!(app.chat_log[1].text, "I'm not sure I understood that.");
}
