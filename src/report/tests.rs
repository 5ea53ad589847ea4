#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{ExpenseRecord, Ledger};

fn sample_ledger() -> Ledger {
    Ledger::with_records(
        dec!(5000),
        vec![
            ExpenseRecord::new("Food", dec!(500)),
            ExpenseRecord::new("Rent", dec!(1200.5)),
        ],
    )
}

// ── layout ────────────────────────────────────────────────────

#[test]
fn test_build_summary() {
    let report = Report::build(&sample_ledger(), "₹", "2024-01-31");
    assert_eq!(report.title, TITLE);
    assert_eq!(report.subtitle, "Generated 2024-01-31");
    assert_eq!(
        report.summary,
        vec![
            ("Total Income".to_string(), "₹5000.00".to_string()),
            ("Total Expenses".to_string(), "₹1700.50".to_string()),
            ("Estimated Savings".to_string(), "₹3299.50".to_string()),
        ]
    );
}

#[test]
fn test_build_table_in_ledger_order() {
    let report = Report::build(&sample_ledger(), "₹", "2024-01-31");
    match report.body {
        ReportBody::Table { header, rows } => {
            assert_eq!(header, ["Category".to_string(), "Amount (₹)".to_string()]);
            assert_eq!(
                rows,
                vec![
                    ["Food".to_string(), "500.00".to_string()],
                    ["Rent".to_string(), "1200.50".to_string()],
                ]
            );
        }
        ReportBody::Placeholder(_) => panic!("expected a table"),
    }
}

#[test]
fn test_build_empty_uses_placeholder() {
    let report = Report::build(&Ledger::default(), "₹", "2024-01-31");
    assert_eq!(report.body, ReportBody::Placeholder(EMPTY_PLACEHOLDER.to_string()));
}

#[test]
fn test_build_savings_clamped() {
    let ledger = Ledger::with_records(
        Decimal::ZERO,
        vec![ExpenseRecord::new("Rent", dec!(100))],
    );
    let report = Report::build(&ledger, "$", "2024-01-31");
    assert_eq!(report.summary[2].1, "$0.00");
}

// ── paginate ──────────────────────────────────────────────────

#[test]
fn test_paginate_empty_has_one_page() {
    assert_eq!(paginate(0, 20, 30), vec![0..0]);
}

#[test]
fn test_paginate_fits_first_page() {
    assert_eq!(paginate(20, 20, 30), vec![0..20]);
}

#[test]
fn test_paginate_spills() {
    assert_eq!(paginate(75, 20, 30), vec![0..20, 20..50, 50..75]);
}

#[test]
fn test_paginate_covers_every_row_once() {
    for rows in [1, 19, 20, 21, 49, 50, 51, 200] {
        let pages = paginate(rows, 20, 30);
        let flat: Vec<usize> = pages.iter().cloned().flatten().collect();
        assert_eq!(flat, (0..rows).collect::<Vec<_>>());
        assert!(pages.iter().all(|p| !p.is_empty()));
    }
}

#[test]
fn test_paginate_zero_capacity_still_progresses() {
    assert_eq!(paginate(2, 0, 0), vec![0..1, 1..2]);
}

// ── pdf ───────────────────────────────────────────────────────

#[test]
fn test_render_pdf_header() {
    let bytes = pdf::render(&Report::build(&sample_ledger(), "₹", "2024-01-31")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_pdf_many_pages() {
    let records = (0..120)
        .map(|i| ExpenseRecord::new(format!("Item{i}"), Decimal::from(i)))
        .collect();
    let ledger = Ledger::with_records(dec!(100), records);
    let bytes = pdf::render(&Report::build(&ledger, "₹", "2024-01-31")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_render_pdf_empty() {
    let bytes = pdf::render(&Report::build(&Ledger::default(), "₹", "2024-01-31")).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pdf_text_transliterates() {
    assert_eq!(pdf::pdf_text("Amount (₹)"), "Amount (Rs.)");
    assert_eq!(pdf::pdf_text("Café"), "Caf?");
    assert_eq!(pdf::pdf_text("日本"), "??");
}
