#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use std::path::Path;

use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.display.currency_symbol, "₹");
    assert_eq!(config.assistant.fuzzy_threshold, 70.0);
    assert_eq!(config.assistant.tax_rate_percent, dec!(5));
    assert_eq!(config.income.monthly, Decimal::ZERO);
    assert_eq!(config.logging.level, "info");
    assert!(config.assistant.filler_words.iter().any(|w| w == "spent"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_yaml_is_default() {
    let config = Config::from_yaml("  \n").unwrap();
    assert_eq!(config.assistant.fuzzy_threshold, 70.0);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let yaml = "
display:
  currency_symbol: \"$\"
assistant:
  tax_rate_percent: 7.5
income:
  monthly: 4200
";
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.assistant.tax_rate_percent, dec!(7.5));
    assert_eq!(config.assistant.fuzzy_threshold, 70.0);
    assert_eq!(config.income.monthly, dec!(4200));

    let interp = config.interpreter();
    assert_eq!(interp.currency_symbol, "$");
    assert_eq!(interp.tax_rate_percent, dec!(7.5));
}

#[test]
fn test_threshold_out_of_range() {
    let err = Config::from_yaml("assistant:\n  fuzzy_threshold: 140\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "assistant.fuzzy_threshold"));
}

#[test]
fn test_negative_income_rejected() {
    let err = Config::from_yaml("income:\n  monthly: -1\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "income.monthly"));
}

#[test]
fn test_bad_yaml() {
    let err = Config::from_yaml("assistant: [unclosed").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidYaml { .. }));
}

#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("nope.yaml")).unwrap();
    assert!(config.data.ledger_file.is_none());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "data:\n  ledger_file: /tmp/ledger.csv").unwrap();
    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(
        config.ledger_path(Path::new("/ignored")),
        Path::new("/tmp/ledger.csv")
    );
}

#[test]
fn test_ledger_path_default() {
    let config = Config::default();
    assert_eq!(
        config.ledger_path(Path::new("/data")),
        Path::new("/data/transactions.csv")
    );
}
