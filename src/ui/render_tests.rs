#![allow(clippy::unwrap_used)]

use super::*;
use crate::interpret::{Intent, Interpreter, InterpreterConfig};

fn help_text() -> Vec<String> {
    help_lines().iter().map(|l| l.to_string()).collect()
}

#[test]
fn test_help_lists_each_command_once_by_long_name() {
    let text = help_text();
    for name in ["quit", "help", "dashboard", "expenses", "chat", "income", "add", "ask"] {
        assert!(
            text.iter().any(|l| l.trim_start().starts_with(&format!(":{name} "))),
            ":{name} missing from help"
        );
    }
    for alias in [":q ", ":h ", ":d ", ":e ", ":c "] {
        assert!(!text.iter().any(|l| l.trim_start().starts_with(alias)));
    }
    let quits = text.iter().filter(|l| l.contains("Quit FinChat")).count();
    assert_eq!(quits, 1);
}

#[test]
fn test_help_chat_examples_reach_their_intent() {
    let interpreter = Interpreter::new(InterpreterConfig::default());
    let (_, examples) = KEY_HELP
        .iter()
        .find(|(section, _)| *section == "Try asking")
        .unwrap();
    let expected = [
        Intent::RecordExpense,
        Intent::QueryTotal,
        Intent::QueryBiggest,
        Intent::QuerySavings,
        Intent::EstimateTax,
    ];
    assert_eq!(examples.len(), expected.len());
    for ((phrase, _), intent) in examples.iter().zip(expected) {
        assert_eq!(interpreter.classify(phrase), intent, "{phrase}");
    }
}
