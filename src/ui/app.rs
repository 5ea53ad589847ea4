use rust_decimal::Decimal;

use crate::aggregate::{self, CategoryTotal, Summary};
use crate::models::{ExpenseRecord, Ledger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Chat,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Chat]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Chat => write!(f, "Chat"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Chat,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Chat => write!(f, "CHAT"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChatLine {
    pub(crate) speaker: Speaker,
    pub(crate) text: String,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) chat_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency_symbol: String,

    // Dashboard, rebuilt from the ledger after every change
    pub(crate) summary: Summary,
    pub(crate) category_totals: Vec<CategoryTotal>,
    pub(crate) category_shares: Vec<(String, Decimal)>,

    // Expenses
    pub(crate) expenses: Vec<ExpenseRecord>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Chat
    pub(crate) chat_log: Vec<ChatLine>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            chat_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency_symbol: currency_symbol.into(),

            summary: Summary::default(),
            category_totals: Vec::new(),
            category_shares: Vec::new(),

            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,

            chat_log: Vec::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh(&mut self, ledger: &Ledger) {
        self.summary = Summary::of(ledger);
        self.category_totals = aggregate::by_category(ledger);
        self.category_shares = aggregate::category_shares(ledger);
        self.expenses = ledger.records().to_vec();
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    /// Table rows that fit on the expenses screen (borders and header excluded).
    pub(crate) fn expense_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn push_chat(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.chat_log.push(ChatLine {
            speaker,
            text: text.into(),
        });
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
