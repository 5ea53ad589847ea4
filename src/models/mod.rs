mod expense;
mod ledger;

pub use expense::ExpenseRecord;
pub use ledger::Ledger;
