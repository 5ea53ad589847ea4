//! The downloadable monthly report: a title, a three-line summary and the
//! expense listing, laid out independently of the output format.

pub(crate) mod pdf;

use std::ops::Range;

use crate::aggregate::Summary;
use crate::models::Ledger;
use crate::ui::util::format_money;

pub(crate) const TITLE: &str = "Monthly Finance Report";
pub(crate) const EMPTY_PLACEHOLDER: &str = "No expenses recorded.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportBody {
    Table {
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) title: String,
    pub(crate) subtitle: String,
    /// (label, formatted value)
    pub(crate) summary: Vec<(String, String)>,
    pub(crate) body: ReportBody,
}

impl Report {
    pub(crate) fn build(ledger: &Ledger, currency_symbol: &str, generated_on: &str) -> Self {
        let s = Summary::of(ledger);
        let summary = vec![
            ("Total Income".to_string(), format_money(currency_symbol, s.income)),
            ("Total Expenses".to_string(), format_money(currency_symbol, s.total_expense)),
            ("Estimated Savings".to_string(), format_money(currency_symbol, s.savings)),
        ];

        let body = if ledger.is_empty() {
            ReportBody::Placeholder(EMPTY_PLACEHOLDER.to_string())
        } else {
            ReportBody::Table {
                header: ["Category".to_string(), format!("Amount ({currency_symbol})")],
                rows: ledger
                    .records()
                    .iter()
                    .map(|r| [r.category.clone(), format!("{:.2}", r.amount)])
                    .collect(),
            }
        };

        Self {
            title: TITLE.to_string(),
            subtitle: format!("Generated {generated_on}"),
            summary,
            body,
        }
    }
}

/// Split `rows` table rows into per-page ranges. The first page holds fewer
/// rows because the title and summary sit above the table. There is always at
/// least one page.
pub(crate) fn paginate(rows: usize, first_page: usize, per_page: usize) -> Vec<Range<usize>> {
    let first_page = first_page.max(1);
    let per_page = per_page.max(1);

    let mut pages = vec![0..rows.min(first_page)];
    let mut start = pages[0].end;
    while start < rows {
        let end = (start + per_page).min(rows);
        pages.push(start..end);
        start = end;
    }
    pages
}

#[cfg(test)]
mod tests;
