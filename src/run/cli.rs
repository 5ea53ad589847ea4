use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::aggregate::{self, Summary};
use crate::session::Session;
use crate::ui::util::{format_money, format_percent};

/// Dispatch one subcommand. `args[0]` is the command name.
pub(crate) fn as_cli(args: &[String], session: &mut Session) -> Result<()> {
    let rest = &args[1..];
    match args[0].as_str() {
        "ask" => cli_ask(rest, session),
        "add" => cli_add(rest, session),
        "summary" | "s" => cli_summary(session),
        "export" => cli_export(rest, session),
        "report" => cli_report(rest, session),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finchat {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinChat - chat with your monthly expenses");
    println!();
    println!("Usage: finchat [--config <path>] [--income <amount>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  ask <text...>                 Ask the assistant, e.g. ask I spent 500 on groceries");
    println!("  add <category> <amount>       Record an expense");
    println!("  summary                       Print income, expenses, savings and categories");
    println!("  export [path]                 Export expenses to CSV (default ~/finance_report.csv)");
    println!("  report [path]                 Write a PDF report (default ~/finance_report.pdf)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_ask(args: &[String], session: &mut Session) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: finchat ask <text...>");
    }
    let reply = session.ask(&args.join(" "))?;
    println!("{reply}");
    Ok(())
}

fn cli_add(args: &[String], session: &mut Session) -> Result<()> {
    let Some((amount, category)) = args.split_last().filter(|(_, c)| !c.is_empty()) else {
        anyhow::bail!("Usage: finchat add <category> <amount>");
    };
    let amount =
        Decimal::from_str(amount).with_context(|| format!("Invalid amount: {amount}"))?;
    let record = session.add_expense(&category.join(" "), amount)?;
    println!(
        "Added {} to {}",
        format_money(session.currency_symbol(), record.amount),
        record.category
    );
    Ok(())
}

fn cli_summary(session: &Session) -> Result<()> {
    let ledger = session.ledger();
    let symbol = session.currency_symbol();
    let summary = Summary::of(ledger);

    println!("FinChat summary");
    println!("{}", "─".repeat(40));
    println!("  Income:     {}", format_money(symbol, summary.income));
    println!("  Expenses:   {}", format_money(symbol, summary.total_expense));
    println!("  Savings:    {}", format_money(symbol, summary.savings));
    println!("  Records:    {}", ledger.len());
    println!("  Ledger:     {}", session.store_path().display());

    if ledger.is_empty() {
        println!();
        println!("No expenses yet! Add some to view your summary.");
        return Ok(());
    }

    println!();
    println!("Spending by Category:");
    let shares = aggregate::category_shares(ledger);
    for (total, (_, share)) in aggregate::by_category(ledger).iter().zip(&shares) {
        println!(
            "  {:<24} {:>14} {:>7}",
            total.category,
            format_money(symbol, total.amount),
            format_percent(*share)
        );
    }

    Ok(())
}

fn cli_export(args: &[String], session: &Session) -> Result<()> {
    let output_path = args
        .first()
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| default_export_path("csv"));

    let count = session.export_csv(Path::new(&output_path))?;
    if count == 0 {
        println!("No expenses yet; wrote an empty file to {output_path}");
    } else {
        println!("Exported {count} expenses to {output_path}");
    }
    Ok(())
}

fn cli_report(args: &[String], session: &Session) -> Result<()> {
    let output_path = args
        .first()
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| default_export_path("pdf"));

    session.export_report(Path::new(&output_path))?;
    println!("Report written to {output_path}");
    Ok(())
}

/// `~/finance_report.<ext>`
pub(crate) fn default_export_path(ext: &str) -> String {
    shellexpand(&format!("~/finance_report.{ext}"))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
