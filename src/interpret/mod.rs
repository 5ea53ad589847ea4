//! The chat assistant: one line of text in, one reply out.
//!
//! Matching is keyword checks plus [`fuzzy::partial_ratio`] against a few
//! fixed phrases. Rules are tried in priority order and the first hit wins:
//!
//! 1. record an expense: mentions "spend"/"spent", unless it carries no
//!    amount and reads like the "how much did i spend" question
//! 2. total spent: close to "how much did i spend"
//! 3. biggest category: close to "biggest expense"
//! 4. savings: close to "savings"
//! 5. tax estimate: mentions "tax"
//! 6. anything else is not understood

pub(crate) mod fuzzy;
pub(crate) mod parse;

use rust_decimal::Decimal;

use crate::aggregate;
use crate::models::{ExpenseRecord, Ledger};
use crate::ui::util::format_money;
use parse::ParseError;

const SPEND_KEYWORDS: [&str; 2] = ["spend", "spent"];
const TAX_KEYWORD: &str = "tax";

const TOTAL_PHRASE: &str = "how much did i spend";
const BIGGEST_PHRASE: &str = "biggest expense";
const SAVINGS_PHRASE: &str = "savings";

pub(crate) const NOT_UNDERSTOOD: &str = "I'm not sure I understood that.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    RecordExpense,
    QueryTotal,
    QueryBiggest,
    QuerySavings,
    EstimateTax,
    Unknown,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordExpense => write!(f, "record-expense"),
            Self::QueryTotal => write!(f, "query-total"),
            Self::QueryBiggest => write!(f, "query-biggest"),
            Self::QuerySavings => write!(f, "query-savings"),
            Self::EstimateTax => write!(f, "estimate-tax"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InterpreterConfig {
    /// A phrase matches when its partial ratio is strictly above this.
    pub(crate) fuzzy_threshold: f64,
    pub(crate) tax_rate_percent: Decimal,
    pub(crate) currency_symbol: String,
    /// Words never taken as an expense category.
    pub(crate) filler_words: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 70.0,
            tax_rate_percent: Decimal::from(5),
            currency_symbol: "₹".into(),
            filler_words: default_filler_words(),
        }
    }
}

pub(crate) fn default_filler_words() -> Vec<String> {
    [
        "i", "we", "me", "my", "spend", "spent", "spending", "on", "for", "the", "a",
        "an", "at", "in", "of", "to", "and", "just", "have", "has", "had", "did", "some",
        "about", "around", "worth", "with", "from", "today", "yesterday", "rs", "inr",
        "rupees", "rupee", "dollars", "bucks",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

/// The outcome of one line of chat. `ledger` is the state to carry forward;
/// `recorded` is set when a record was appended to it.
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    pub(crate) intent: Intent,
    pub(crate) message: String,
    pub(crate) ledger: Ledger,
    pub(crate) recorded: Option<ExpenseRecord>,
}

pub(crate) struct Interpreter {
    config: InterpreterConfig,
}

impl Interpreter {
    pub(crate) fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    fn matches(&self, text: &str, phrase: &str) -> bool {
        fuzzy::partial_ratio(text, phrase) > self.config.fuzzy_threshold
    }

    /// Classify already-lowercased text.
    pub(crate) fn classify(&self, text: &str) -> Intent {
        let mentions_spending = SPEND_KEYWORDS.iter().any(|k| text.contains(k));
        let asks_total = self.matches(text, TOTAL_PHRASE);

        if mentions_spending && (parse::find_amount_token(text).is_some() || !asks_total) {
            Intent::RecordExpense
        } else if asks_total {
            Intent::QueryTotal
        } else if self.matches(text, BIGGEST_PHRASE) {
            Intent::QueryBiggest
        } else if self.matches(text, SAVINGS_PHRASE) {
            Intent::QuerySavings
        } else if text.contains(TAX_KEYWORD) {
            Intent::EstimateTax
        } else {
            Intent::Unknown
        }
    }

    pub(crate) fn respond(&self, mut ledger: Ledger, input: &str) -> Reply {
        let text = input.to_lowercase();
        let intent = self.classify(&text);
        log::debug!("classified {input:?} as {intent}");

        let mut recorded = None;
        let message = match intent {
            Intent::RecordExpense => match self.parse_expense(&text) {
                Ok(record) if !aggregate::can_record(&ledger, record.amount) => {
                    log::warn!("refusing {record}: total spend would overflow");
                    too_large(&record.amount.to_string())
                }
                Ok(record) => {
                    let message = format!(
                        "Added {} to {} expenses.",
                        self.money(record.amount),
                        record.category
                    );
                    ledger.push(record.clone());
                    recorded = Some(record);
                    message
                }
                Err(ParseError::NoAmount) => "Please specify a valid amount.".to_string(),
                Err(ParseError::Malformed(token)) => too_large(&token),
            },
            Intent::QueryTotal => {
                let total = aggregate::total_expense(&ledger);
                format!("You've spent {} so far this month.", self.money(total))
            }
            Intent::QueryBiggest => match aggregate::biggest_category(&ledger) {
                Some(top) => format!(
                    "Your biggest expense category is {} ({}).",
                    top.category,
                    self.money(top.amount)
                ),
                None => "You haven't added any expenses yet.".to_string(),
            },
            Intent::QuerySavings => {
                let total = aggregate::total_expense(&ledger);
                let balance = aggregate::balance(ledger.income, total);
                format!("Your estimated savings this month: {}", self.money(balance))
            }
            Intent::EstimateTax => self.estimate_tax(&text),
            Intent::Unknown => NOT_UNDERSTOOD.to_string(),
        };

        Reply {
            intent,
            message,
            ledger,
            recorded,
        }
    }

    /// Amount and category of a spoken expense.
    pub(crate) fn parse_expense(&self, text: &str) -> Result<ExpenseRecord, ParseError> {
        let amount = parse::parse_amount(text).inspect_err(|e| {
            log::warn!("could not record expense from {text:?}: {e}");
        })?;
        let category = parse::parse_category(text, &self.config.filler_words);
        Ok(ExpenseRecord::new(category, amount))
    }

    fn estimate_tax(&self, text: &str) -> String {
        match parse::parse_amount(text) {
            Ok(salary) => {
                let rate = self.config.tax_rate_percent;
                let tax = salary
                    .checked_mul(rate)
                    .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED));
                match tax {
                    Some(tax) => format!(
                        "Estimated tax on {} is {} ({}% rate).",
                        self.money(salary),
                        self.money(tax),
                        rate.normalize()
                    ),
                    None => {
                        log::warn!("tax on {salary} at {rate}% overflows");
                        format!(
                            "'{salary}' is too large to estimate tax on. \
                             Please include a smaller income amount."
                        )
                    }
                }
            }
            Err(e) => {
                log::warn!("could not estimate tax from {text:?}: {e}");
                "Please include your income amount to estimate tax.".to_string()
            }
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format_money(&self.config.currency_symbol, amount)
    }
}

fn too_large(amount: &str) -> String {
    format!("'{amount}' is too large to record. Please specify a valid amount.")
}
