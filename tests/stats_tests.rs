// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_tracker::models::{NewTransaction, PaymentType, TransactionKind};
use budget_tracker::store::Store;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Store {
    let store = Store::open_in_memory().unwrap();
    let food = store.add_category("Food").unwrap();
    let salary = store.add_category("Salary").unwrap();
    let cash = store
        .add_payment_type(&PaymentType {
            id: 0,
            name: "Cash".into(),
            bank: None,
            issuer: None,
            issue_date: None,
            expiration_date: None,
        })
        .unwrap();
    let grocer = store.add_beneficiary("Grocer").unwrap();
    let baker = store.add_beneficiary("Baker").unwrap();
    let employer = store.add_beneficiary("Employer").unwrap();

    let rows = [
        ("100.00", "2025-04-01", salary, Some(employer), TransactionKind::Income),
        ("50.00", "2025-04-15", salary, Some(employer), TransactionKind::Income),
        ("30.25", "2025-05-02", food, Some(grocer), TransactionKind::Expense),
        ("9.50", "2025-05-03", food, Some(baker), TransactionKind::Expense),
        ("12.00", "2025-05-04", food, Some(grocer), TransactionKind::Expense),
        ("1.00", "2025-05-05", food, None, TransactionKind::Expense),
    ];
    for (amount, date, category_id, beneficiary_id, kind) in rows {
        store
            .add_transaction(&NewTransaction {
                amount: dec(amount),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                category_id,
                payment_type_id: cash,
                comment: None,
                place_id: None,
                beneficiary_id,
                kind,
            })
            .unwrap();
    }
    store
}

#[test]
fn totals_and_count() {
    let store = setup();
    assert_eq!(store.get_total_income().unwrap(), dec("150.00"));
    assert_eq!(store.get_total_expense().unwrap(), dec("52.75"));
    assert_eq!(store.get_total_transactions().unwrap(), 6);
}

#[test]
fn max_amount_compares_numerically() {
    let store = setup();
    // "9.50" sorts above "100.00" as text
    assert_eq!(store.get_max_transaction_amount().unwrap(), Some(dec("100.00")));
}

#[test]
fn most_used_category_and_top_beneficiaries() {
    let store = setup();
    assert_eq!(store.get_most_used_category().unwrap().as_deref(), Some("Food"));
    // Employer and Grocer both appear twice; ties resolve by name
    assert_eq!(store.get_top_beneficiary().unwrap().as_deref(), Some("Employer"));
    assert_eq!(
        store.get_top_beneficiary_by_category("Food").unwrap().as_deref(),
        Some("Grocer")
    );
    assert_eq!(store.get_top_beneficiary_by_category("Travel").unwrap(), None);
}

#[test]
fn suggestion_trims_and_ignores_blank() {
    let store = setup();
    assert_eq!(
        store.suggest_beneficiary_for_category("  Salary ").unwrap().as_deref(),
        Some("Employer")
    );
    assert_eq!(store.suggest_beneficiary_for_category("   ").unwrap(), None);
}

#[test]
fn empty_ledger_statistics() {
    let store = Store::open_in_memory().unwrap();
    let s = store.statistics().unwrap();
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.total_transactions, 0);
    assert_eq!(s.max_transaction_amount, None);
    assert_eq!(s.most_used_category, None);
    assert_eq!(s.top_beneficiary, None);
}

#[test]
fn statistics_bundle_matches_individual_queries() {
    let store = setup();
    let s = store.statistics().unwrap();
    assert_eq!(s.total_income, store.get_total_income().unwrap());
    assert_eq!(s.total_transactions, 6);
    assert_eq!(s.most_used_category.as_deref(), Some("Food"));
}

#[test]
fn totals_are_exact_beyond_cents_and_f64() {
    let store = setup();
    let salary = store.get_category_id_by_name("Salary").unwrap();
    let cash = store.get_payment_type_id_by_name("Cash").unwrap();
    for amount in ["1.005", "20000000000000000.01"] {
        store
            .add_transaction(&NewTransaction {
                amount: dec(amount),
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                category_id: salary,
                payment_type_id: cash,
                comment: None,
                place_id: None,
                beneficiary_id: None,
                kind: TransactionKind::Income,
            })
            .unwrap();
    }

    let income = store
        .get_transactions_by_type(TransactionKind::Income)
        .unwrap();
    let expected = dec("20000000000000151.015");
    assert_eq!(store.get_total_income().unwrap(), expected);
    assert_eq!(budget_tracker::analytics::total_amount(&income), expected);
    assert_eq!(
        store.get_max_transaction_amount().unwrap(),
        Some(dec("20000000000000000.01"))
    );
}
