#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

fn sample() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Food", dec!(500)),
        ExpenseRecord::new("Rent", dec!(1200.50)),
        ExpenseRecord::new("Food & Dining, Out", dec!(0.75)),
        ExpenseRecord::new("Food", dec!(500)),
    ]
}

// ── CSV format ────────────────────────────────────────────────

#[test]
fn test_write_csv_layout() {
    let mut out = Vec::new();
    write_csv(&[ExpenseRecord::new("Food", dec!(12.50))], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "category,amount\nFood,12.50\n");
}

#[test]
fn test_csv_round_trip_preserves_order() {
    let mut out = Vec::new();
    write_csv(&sample(), &mut out).unwrap();
    let back = read_csv(out.as_slice()).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn test_read_csv_float_amounts() {
    let data = "category,amount\nGroceries,500.0\nRent,1200\n";
    let records = read_csv(data.as_bytes()).unwrap();
    assert_eq!(records[0].amount, dec!(500));
    assert_eq!(records[1].category, "Rent");
}

#[test]
fn test_read_csv_reordered_columns() {
    let data = "amount,category\n3.5,Coffee\n";
    let records = read_csv(data.as_bytes()).unwrap();
    assert_eq!(records, vec![ExpenseRecord::new("Coffee", dec!(3.5))]);
}

#[test]
fn test_read_csv_header_only() {
    assert!(read_csv("category,amount\n".as_bytes()).unwrap().is_empty());
}

#[test]
fn test_read_csv_bad_amount() {
    let err = read_csv("category,amount\nFood,lots\n".as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("lots"));
}

#[test]
fn test_read_csv_missing_column() {
    let err = read_csv("name,value\nFood,1\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("category"));
}

// ── LedgerStore ───────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transactions.csv"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transactions.csv"));
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn test_save_overwrites_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::new(dir.path().join("transactions.csv"));
    store.save(&sample()).unwrap();
    store.save(&[ExpenseRecord::new("Only", dec!(1))]).unwrap();
    assert_eq!(store.load().unwrap(), vec![ExpenseRecord::new("Only", dec!(1))]);
}

#[test]
fn test_save_creates_parent_dirs_and_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("transactions.csv");
    let store = LedgerStore::new(&path);
    store.save(&sample()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("transactions.csv")]);
}

#[test]
fn test_failed_save_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.csv");
    let store = LedgerStore::new(&path);
    store.save(&sample()).unwrap();

    // A directory squatting on the target makes the final rename fail
    let blocked = LedgerStore::new(dir.path());
    assert!(blocked.save(&sample()).is_err());

    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn test_export_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finance_report.csv");
    assert_eq!(export_csv(&sample(), &path).unwrap(), 4);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("category,amount\n"));
    assert!(text.contains("\"Food & Dining, Out\",0.75"));
}
