use rust_decimal::Decimal;

use super::ExpenseRecord;

/// Expense records in append order plus the monthly income figure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub income: Decimal,
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn with_records(income: Decimal, records: Vec<ExpenseRecord>) -> Self {
        Self { income, records }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
