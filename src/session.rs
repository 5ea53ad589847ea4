use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

use crate::aggregate;
use crate::interpret::{parse::title_case, Interpreter, InterpreterConfig};
use crate::models::{ExpenseRecord, Ledger};
use crate::report::{pdf, Report};
use crate::store::{self, LedgerStore};

/// Rejected form-style input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),
    #[error("Income must not be negative, got {0}")]
    NegativeIncome(Decimal),
    #[error("Amount {0} is too large to record")]
    TooLarge(Decimal),
}

/// One user's working state: the ledger, where it is stored, and the
/// assistant that reads and extends it.
pub(crate) struct Session {
    ledger: Ledger,
    store: LedgerStore,
    interpreter: Interpreter,
    currency_symbol: String,
}

impl Session {
    pub(crate) fn open(store: LedgerStore, config: InterpreterConfig, income: Decimal) -> Result<Self> {
        if income.is_sign_negative() {
            return Err(InputError::NegativeIncome(income).into());
        }
        let records = store.load()?;
        Ok(Self {
            ledger: Ledger::with_records(income, records),
            store,
            currency_symbol: config.currency_symbol.clone(),
            interpreter: Interpreter::new(config),
        })
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub(crate) fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Run one line of chat. A recorded expense is on disk before this
    /// returns; if the write fails the in-memory ledger is left as it was.
    pub(crate) fn ask(&mut self, text: &str) -> Result<String> {
        let reply = self.interpreter.respond(self.ledger.clone(), text);
        log::debug!("{} reply: {}", reply.intent, reply.message);
        if let Some(record) = &reply.recorded {
            self.store.save(reply.ledger.records())?;
            log::info!("recorded {record} from chat");
        }
        self.ledger = reply.ledger;
        Ok(reply.message)
    }

    /// The form path: category is title-cased, amount must be non-negative.
    pub(crate) fn add_expense(&mut self, category: &str, amount: Decimal) -> Result<ExpenseRecord> {
        let category = category.trim();
        if category.is_empty() {
            return Err(InputError::EmptyCategory.into());
        }
        if amount.is_sign_negative() {
            return Err(InputError::NegativeAmount(amount).into());
        }
        if !aggregate::can_record(&self.ledger, amount) {
            return Err(InputError::TooLarge(amount).into());
        }

        let record = ExpenseRecord::new(title_case(category), amount);
        let mut next = self.ledger.clone();
        next.push(record.clone());
        self.store.save(next.records())?;
        self.ledger = next;
        log::info!("recorded {record}");
        Ok(record)
    }

    pub(crate) fn set_income(&mut self, income: Decimal) -> Result<(), InputError> {
        if income.is_sign_negative() {
            return Err(InputError::NegativeIncome(income));
        }
        self.ledger.income = income;
        log::info!("monthly income set to {income}");
        Ok(())
    }

    pub(crate) fn export_csv(&self, path: &Path) -> Result<usize> {
        store::export_csv(self.ledger.records(), path)
    }

    pub(crate) fn export_report(&self, path: &Path) -> Result<()> {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let report = Report::build(&self.ledger, &self.currency_symbol, &today);
        let bytes = pdf::render(&report)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("wrote PDF report to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
