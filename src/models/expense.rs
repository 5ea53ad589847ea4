use rust_decimal::Decimal;

/// A single categorized spend. There is no id: two identical records are
/// two separate expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub category: String,
    pub amount: Decimal,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

impl std::fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.2}", self.category, self.amount)
    }
}
