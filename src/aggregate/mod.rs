//! Derived numbers over a [`Ledger`]. Everything here is recomputed on every
//! call; nothing is cached.

use rust_decimal::Decimal;

use crate::models::Ledger;

/// Summed spend for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}

/// The three dashboard metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) income: Decimal,
    pub(crate) total_expense: Decimal,
    /// Clamped at zero.
    pub(crate) savings: Decimal,
}

impl Summary {
    pub(crate) fn of(ledger: &Ledger) -> Self {
        let total_expense = total_expense(ledger);
        Self {
            income: ledger.income,
            total_expense,
            savings: savings(ledger.income, total_expense),
        }
    }
}

/// Exact sum of every record, or `None` when it does not fit in a `Decimal`.
pub(crate) fn checked_total(ledger: &Ledger) -> Option<Decimal> {
    ledger
        .records()
        .iter()
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.amount))
}

/// Saturates at `Decimal::MAX` for a ledger file that was edited past it.
pub(crate) fn total_expense(ledger: &Ledger) -> Decimal {
    checked_total(ledger).unwrap_or(Decimal::MAX)
}

/// Whether `amount` can be appended with the total still representable.
pub(crate) fn can_record(ledger: &Ledger, amount: Decimal) -> bool {
    checked_total(ledger)
        .and_then(|total| total.checked_add(amount))
        .is_some()
}

/// Savings for display: never below zero.
pub(crate) fn savings(income: Decimal, total_expense: Decimal) -> Decimal {
    balance(income, total_expense).max(Decimal::ZERO)
}

/// Income minus spend, unclamped. The assistant reports this one.
pub(crate) fn balance(income: Decimal, total_expense: Decimal) -> Decimal {
    income.saturating_sub(total_expense)
}

/// Per-category sums in the order each label first appears. Labels are
/// compared exactly; normalization happens when records are created.
pub(crate) fn by_category(ledger: &Ledger) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for record in ledger.records() {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(total) => total.amount = total.amount.saturating_add(record.amount),
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                amount: record.amount,
            }),
        }
    }
    totals
}

/// The category with the largest sum. Ties go to the label seen first.
/// `None` when there is nothing recorded.
pub(crate) fn biggest_category(ledger: &Ledger) -> Option<CategoryTotal> {
    by_category(ledger)
        .into_iter()
        .fold(None, |best: Option<CategoryTotal>, t| match best {
            Some(b) if b.amount >= t.amount => Some(b),
            _ => Some(t),
        })
}

/// Share of total spend per category, as a percentage. Empty when the total
/// is zero.
pub(crate) fn category_shares(ledger: &Ledger) -> Vec<(String, Decimal)> {
    let total = total_expense(ledger);
    if total.is_zero() {
        return Vec::new();
    }
    by_category(ledger)
        .into_iter()
        .map(|t| {
            let share = t
                .amount
                .checked_div(total)
                .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO);
            (t.category, share)
        })
        .collect()
}
