// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_tracker::models::{NewTransaction, PaymentType, TransactionKind};
use budget_tracker::store::Store;
use budget_tracker::{cli, commands::exporter};
use chrono::NaiveDate;
use tempfile::tempdir;

fn seeded() -> Store {
    let store = Store::open_in_memory().unwrap();
    let cat = store.add_category("Groceries").unwrap();
    let pt = store
        .add_payment_type(&PaymentType {
            id: 0,
            name: "Debit".into(),
            bank: None,
            issuer: None,
            issue_date: None,
            expiration_date: None,
        })
        .unwrap();
    let place = store.add_place("Corner Shop").unwrap();
    store
        .add_transaction(&NewTransaction {
            amount: "12.34".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            category_id: cat,
            payment_type_id: pt,
            comment: Some("Weekly run".into()),
            place_id: Some(place),
            beneficiary_id: None,
            kind: TransactionKind::Expense,
        })
        .unwrap();
    store
}

fn export(store: &Store, out: &str, format: &str) {
    let matches = cli::build_cli().get_matches_from([
        "budget-tracker",
        "export",
        "transactions",
        "--out",
        out,
        "--format",
        format,
    ]);
    let (_, export_m) = matches.subcommand().unwrap();
    exporter::handle(store, export_m).unwrap();
}

#[test]
fn export_transactions_to_csv() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    export(&store, &out_str, "csv");

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.get(1), Some("date"));
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(&r[1], "2025-01-02");
    assert_eq!(&r[2], "expense");
    assert_eq!(&r[3], "12.34");
    assert_eq!(&r[4], "Groceries");
    assert_eq!(&r[6], "Corner Shop");
    assert_eq!(&r[7], "");
    assert_eq!(&r[8], "Weekly run");
}

#[test]
fn export_transactions_to_json() {
    let store = seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    export(&store, &out_str, "json");

    let text = std::fs::read_to_string(&out_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category_name"], "Groceries");
    assert_eq!(items[0]["kind"], "expense");
    assert_eq!(items[0]["amount"], "12.34");
}
