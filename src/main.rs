mod aggregate;
mod config;
mod interpret;
mod models;
mod report;
mod run;
mod session;
mod store;
mod ui;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::Config;
use session::Session;
use store::LedgerStore;

/// Flags accepted ahead of the subcommand.
#[derive(Debug, Default, PartialEq)]
struct GlobalArgs {
    config: Option<PathBuf>,
    income: Option<Decimal>,
    command: Vec<String>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_global_args(&args)?;

    let proj_dirs = directories::ProjectDirs::from("com", "finchat", "FinChat")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| proj_dirs.config_dir().join("config.yaml"));
    let config = Config::load_or_default(&config_path)?;

    init_logging(data_dir, &config.logging.level)?;
    log::info!("config: {}", config_path.display());

    let store = LedgerStore::new(config.ledger_path(data_dir));
    let income = args.income.unwrap_or(config.income.monthly);
    let mut session = Session::open(store, config.interpreter(), income)?;

    if args.command.is_empty() {
        run::as_tui(&mut session)
    } else {
        run::as_cli(&args.command, &mut session)
    }
}

fn parse_global_args(args: &[String]) -> Result<GlobalArgs> {
    let mut parsed = GlobalArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
                parsed.config = Some(PathBuf::from(run::shellexpand(path)));
            }
            "--income" => {
                let amount = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--income needs an amount"))?;
                let amount = Decimal::from_str(amount)
                    .with_context(|| format!("Invalid income: {amount}"))?;
                parsed.income = Some(amount);
            }
            _ => {
                parsed.command.push(arg.clone());
                parsed.command.extend(iter.by_ref().cloned());
            }
        }
    }
    Ok(parsed)
}

/// Logs go to a file so they never draw over the TUI. `RUST_LOG` overrides
/// the configured level.
fn init_logging(data_dir: &Path, level: &str) -> Result<()> {
    let path = data_dir.join("finchat.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logging")?;
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
