use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Digits with at most one decimal point: `500`, `12.5`, `5.`, `.5`.
/// `None` only if the pattern fails to compile, which is logged once.
static AMOUNT_TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)$")
        .inspect_err(|e| log::error!("amount pattern failed to compile: {e}"))
        .ok()
});

pub(crate) const DEFAULT_CATEGORY: &str = "Miscellaneous";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("no amount found")]
    NoAmount,
    #[error("'{0}' is not a usable amount")]
    Malformed(String),
}

pub(crate) fn is_amount_token(token: &str) -> bool {
    AMOUNT_TOKEN
        .as_ref()
        .is_some_and(|re| re.is_match(token))
}

/// The first amount-shaped token, as written.
pub(crate) fn find_amount_token(text: &str) -> Option<&str> {
    text.split_whitespace().find(|t| is_amount_token(t))
}

/// Read the first amount-shaped token in `text` as a decimal.
pub(crate) fn parse_amount(text: &str) -> Result<Decimal, ParseError> {
    let token = find_amount_token(text).ok_or(ParseError::NoAmount)?;
    let normalized = if let Some(rest) = token.strip_suffix('.') {
        rest.to_string()
    } else if token.starts_with('.') {
        format!("0{token}")
    } else {
        token.to_string()
    };
    Decimal::from_str(&normalized).map_err(|_| ParseError::Malformed(token.to_string()))
}

/// First purely alphabetic token that is not a filler word, capitalized.
/// Surrounding punctuation is ignored.
pub(crate) fn parse_category(text: &str, filler_words: &[String]) -> String {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .find(|t| !filler_words.iter().any(|w| w.eq_ignore_ascii_case(t)))
        .map(capitalize)
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// First letter upper case, the rest lower case.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize every run of letters: `food & dining` -> `Food & Dining`.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
