//! The ledger's backing file: a two-column CSV (`category,amount`) that is
//! read once at startup and rewritten in full after every append.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::ExpenseRecord;

const HEADER: [&str; 2] = ["category", "amount"];

pub(crate) struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty ledger.
    pub(crate) fn load(&self) -> Result<Vec<ExpenseRecord>> {
        if !self.path.exists() {
            log::info!("no ledger at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("Failed to open ledger: {}", self.path.display()))?;
        let records = read_csv(file)
            .with_context(|| format!("Failed to read ledger: {}", self.path.display()))?;
        log::info!(
            "loaded {} expense records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Replace the file with `records`. The new contents go to a temp file in
    /// the same directory which is then renamed over the old one, so the
    /// ledger on disk is always either the old or the new version.
    pub(crate) fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        write_csv(records, tmp.as_file_mut())?;
        tmp.as_file()
            .sync_all()
            .context("Failed to flush ledger to disk")?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to replace ledger: {}", self.path.display()))?;

        log::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

pub(crate) fn write_csv<W: Write>(records: &[ExpenseRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        let amount = record.amount.to_string();
        wtr.write_record([record.category.as_str(), amount.as_str()])?;
    }
    wtr.flush().context("Failed to write CSV")?;
    Ok(())
}

pub(crate) fn read_csv<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV is missing the '{name}' column"))
    };
    let category_col = column("category")?;
    let amount_col = column("amount")?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("Failed to read CSV row {}", i + 2))?;
        let category = row.get(category_col).unwrap_or_default().to_string();
        let amount_str = row.get(amount_col).unwrap_or_default();
        let amount = Decimal::from_str(amount_str)
            .with_context(|| format!("Invalid amount '{amount_str}' on row {}", i + 2))?;
        records.push(ExpenseRecord::new(category, amount));
    }
    Ok(records)
}

/// Write `records` to `path` for download. Returns the number written.
pub(crate) fn export_csv(records: &[ExpenseRecord], path: &Path) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(records, file)?;
    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(records.len())
}

#[cfg(test)]
mod tests;
