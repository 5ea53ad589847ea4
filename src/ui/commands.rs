use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::app::{App, Screen, Speaker};
use super::util::format_money;
use crate::interpret::fuzzy;
use crate::run::{default_export_path, shellexpand};
use crate::session::Session;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Session) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinChat", cmd_quit, r);
    register_command!("quit", "Quit FinChat", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("c", "Go to Chat", cmd_chat, r);
    register_command!("chat", "Go to Chat", cmd_chat, r);
    register_command!(
        "income",
        "Set monthly income (e.g. :income 50000)",
        cmd_income,
        r
    );
    register_command!(
        "add",
        "Add an expense (e.g. :add Food 250)",
        cmd_add,
        r
    );
    register_command!(
        "ask",
        "Ask the assistant (e.g. :ask how much did i spend)",
        cmd_ask,
        r
    );
    register_command!(
        "export",
        "Export expenses to CSV (e.g. :export ~/finance_report.csv)",
        cmd_export,
        r
    );
    register_command!(
        "report",
        "Write a PDF report (e.g. :report ~/finance_report.pdf)",
        cmd_report,
        r
    );
    register_command!("clear", "Clear the chat log", cmd_clear, r);

    r
});

/// Run one `:` command. Failures land in the status bar; the session keeps
/// going.
pub(crate) fn handle_command(input: &str, app: &mut App, session: &mut Session) {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        if let Err(e) = (cmd.run)(args, app, session) {
            log::error!(":{cmd_name} failed: {e:#}");
            app.set_status(format!("Error: {e:#}"));
        }
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }
}

fn find_closest(input: &str) -> String {
    let mut names: Vec<&str> = COMMANDS
        .keys()
        .copied()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .collect();
    names.sort_unstable();
    names
        .into_iter()
        .fold(None, |best: Option<(&str, f64)>, name| {
            let score = fuzzy::ratio(input, name);
            match best {
                Some((_, top)) if top >= score => best,
                _ => Some((name, score)),
            }
        })
        .map_or("help", |(name, _)| name)
        .to_string()
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_chat(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.screen = Screen::Chat;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount>. Example: :income 50000");
        return Ok(());
    }
    let amount = match Decimal::from_str(args) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {args}"));
            return Ok(());
        }
    };
    if let Err(e) = session.set_income(amount) {
        app.set_status(e.to_string());
        return Ok(());
    }
    app.refresh(session.ledger());
    app.set_status(format!(
        "Saved monthly income: {}",
        format_money(session.currency_symbol(), amount)
    ));
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    // The last token is the amount, everything before it the category
    let Some((category, amount_str)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :add <category> <amount>. Example: :add Food 250");
        return Ok(());
    };

    let amount = match Decimal::from_str(amount_str.trim()) {
        Ok(a) => a,
        Err(_) => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    match session.add_expense(category, amount) {
        Ok(record) => {
            app.refresh(session.ledger());
            app.set_status(format!(
                "Added {} to {}",
                format_money(session.currency_symbol(), record.amount),
                record.category
            ));
        }
        Err(e) if e.is::<crate::session::InputError>() => app.set_status(e.to_string()),
        Err(e) => return Err(e),
    }
    Ok(())
}

fn cmd_ask(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :ask <question>. Example: :ask what is my biggest expense");
        return Ok(());
    }
    ask(args, app, session)?;
    app.screen = Screen::Chat;
    Ok(())
}

/// Send one chat line through the session and log both sides.
pub(crate) fn ask(text: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    app.push_chat(Speaker::User, text);
    let reply = session.ask(text)?;
    app.push_chat(Speaker::Assistant, reply);
    app.refresh(session.ledger());
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path("csv")
    } else {
        shellexpand(args)
    };

    let count = session.export_csv(Path::new(&path))?;
    if count == 0 {
        app.set_status(format!("No expenses yet; wrote an empty file to {path}"));
    } else {
        app.set_status(format!("Exported {count} expenses to {path}"));
    }
    Ok(())
}

fn cmd_report(args: &str, app: &mut App, session: &mut Session) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path("pdf")
    } else {
        shellexpand(args)
    };

    session.export_report(Path::new(&path))?;
    app.set_status(format!("Report written to {path}"));
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _session: &mut Session) -> anyhow::Result<()> {
    app.chat_log.clear();
    app.set_status("Chat cleared");
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
