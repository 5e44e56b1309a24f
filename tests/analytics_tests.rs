// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budget_tracker::analytics::{
    filter_by_date_range, filter_by_kind, group_by_category, group_by_payment_type,
    monthly_income_vs_expense, percentage_of_total, total_amount,
};
use budget_tracker::models::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> Option<NaiveDate> {
    Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
}

fn tx(id: i64, amount: &str, on: &str, category: &str, payment: &str, kind: TransactionKind) -> Transaction {
    Transaction {
        id,
        amount: dec(amount),
        date: on.into(),
        category_id: 1,
        category_name: category.into(),
        payment_type_id: 1,
        payment_type: payment.into(),
        comment: None,
        place_id: None,
        place_name: None,
        beneficiary_id: None,
        beneficiary_name: None,
        kind,
    }
}

fn sample() -> Vec<Transaction> {
    use TransactionKind::*;
    vec![
        tx(1, "10.00", "2025-03-31", "Food", "Cash", Expense),
        tx(2, "20.00", "2025-04-01", "Food", "Visa", Expense),
        tx(3, "5.50", "2025-04-10", "Transport", "Cash", Expense),
        tx(4, "100.00", "2025-04-30", "Salary", "Bank", Income),
        tx(5, "7.25", "2025-05-01", "food", "Visa", Expense),
        tx(6, "3.00", "not-a-date", "Food", "Cash", Expense),
    ]
}

fn ids(txs: &[Transaction]) -> Vec<i64> {
    txs.iter().map(|t| t.id).collect()
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let txs = sample();
    let got = filter_by_date_range(&txs, date("2025-04-01"), date("2025-04-30"));
    assert_eq!(ids(&got), [2, 3, 4]);
    for t in &got {
        let d = t.parsed_date().unwrap();
        assert!(d >= date("2025-04-01").unwrap() && d <= date("2025-04-30").unwrap());
    }
}

#[test]
fn open_bounds() {
    let txs = sample();
    assert_eq!(ids(&filter_by_date_range(&txs, date("2025-04-30"), None)), [4, 5]);
    assert_eq!(ids(&filter_by_date_range(&txs, None, date("2025-03-31"))), [1]);
}

#[test]
fn unbounded_filter_returns_input() {
    let txs = sample();
    assert_eq!(filter_by_date_range(&txs, None, None), txs);
}

#[test]
fn unparseable_dates_are_dropped_when_bounded() {
    let txs = sample();
    let got = filter_by_date_range(&txs, date("2000-01-01"), None);
    assert!(!ids(&got).contains(&6));
    assert_eq!(got.len(), 5);
}

#[test]
fn date_filter_is_idempotent() {
    let txs = sample();
    let once = filter_by_date_range(&txs, date("2025-04-01"), date("2025-05-01"));
    let twice = filter_by_date_range(&once, date("2025-04-01"), date("2025-05-01"));
    assert_eq!(once, twice);
}

#[test]
fn non_padded_dates_still_parse() {
    let txs = vec![tx(9, "1", "2025-4-7", "Food", "Cash", TransactionKind::Expense)];
    let got = filter_by_date_range(&txs, date("2025-04-07"), date("2025-04-07"));
    assert_eq!(ids(&got), [9]);
}

#[test]
fn group_sums_preserve_total() {
    let txs = sample();
    let by_cat = group_by_category(&txs);
    let sum: Decimal = by_cat.values().copied().sum();
    assert_eq!(sum, total_amount(&txs));
    // keys are exact strings
    assert_eq!(by_cat["Food"], dec("33.00"));
    assert_eq!(by_cat["food"], dec("7.25"));

    let by_pt = group_by_payment_type(&txs);
    assert_eq!(by_pt.values().copied().sum::<Decimal>(), total_amount(&txs));
    assert_eq!(by_pt["Cash"], dec("18.50"));
}

#[test]
fn percentages_add_up_to_one_hundred() {
    let mut groups = BTreeMap::new();
    groups.insert("a".to_string(), dec("1"));
    groups.insert("b".to_string(), dec("1"));
    groups.insert("c".to_string(), dec("2"));
    let pct = percentage_of_total(&groups);
    assert_eq!(pct["a"], dec("25"));
    assert_eq!(pct["c"], dec("50"));

    let mut thirds = BTreeMap::new();
    for k in ["x", "y", "z"] {
        thirds.insert(k.to_string(), dec("1"));
    }
    let sum: Decimal = percentage_of_total(&thirds).values().copied().sum();
    assert_eq!(sum.round_dp(2), dec("100"));
}

#[test]
fn zero_total_gives_zero_percentages() {
    let mut groups = BTreeMap::new();
    groups.insert("a".to_string(), Decimal::ZERO);
    let pct = percentage_of_total(&groups);
    assert_eq!(pct["a"], Decimal::ZERO);
    assert!(percentage_of_total(&BTreeMap::new()).is_empty());
}

#[test]
fn monthly_series_align_and_default_to_zero() {
    use TransactionKind::*;
    let txs = vec![
        tx(1, "100", "2025-04-03", "Salary", "Bank", Income),
        tx(2, "50", "2025-04-20", "Bonus", "Bank", Income),
        tx(3, "30", "2025-05-02", "Food", "Cash", Expense),
    ];
    let s = monthly_income_vs_expense(&txs);

    let expect = |pairs: &[(&str, &str)]| -> BTreeMap<String, Decimal> {
        pairs.iter().map(|(k, v)| (k.to_string(), dec(v))).collect()
    };
    assert_eq!(s.income, expect(&[("2025-04", "150"), ("2025-05", "0")]));
    assert_eq!(s.expense, expect(&[("2025-04", "0"), ("2025-05", "30")]));
    assert_eq!(s.months().cloned().collect::<Vec<_>>(), ["2025-04", "2025-05"]);
}

#[test]
fn monthly_series_skip_bad_dates() {
    let s = monthly_income_vs_expense(&sample());
    assert_eq!(s.income.len(), s.expense.len());
    assert_eq!(
        s.months().cloned().collect::<Vec<_>>(),
        ["2025-03", "2025-04", "2025-05"]
    );
    assert_eq!(s.expense["2025-04"], dec("25.50"));
}

#[test]
fn kind_filter() {
    let txs = sample();
    assert_eq!(ids(&filter_by_kind(&txs, TransactionKind::Income)), [4]);
    assert_eq!(filter_by_kind(&txs, TransactionKind::Expense).len(), 5);
}

#[test]
fn overflowing_amounts_are_skipped_instead_of_panicking() {
    use TransactionKind::*;
    let huge = "70000000000000000000000000000";
    let txs = vec![
        tx(1, huge, "2025-04-01", "Food", "Cash", Expense),
        tx(2, huge, "2025-04-02", "Food", "Cash", Expense),
    ];
    let by_cat = group_by_category(&txs);
    assert_eq!(by_cat["Food"], dec(huge));
    assert_eq!(total_amount(&txs), dec(huge));
    assert_eq!(monthly_income_vs_expense(&txs).expense["2025-04"], dec(huge));

    // both groups fit, their total does not
    let mut split = BTreeMap::new();
    split.insert("a".to_string(), dec(huge));
    split.insert("b".to_string(), dec(huge));
    let pct = percentage_of_total(&split);
    assert_eq!(pct["a"], Decimal::ZERO);
}

#[test]
fn percentage_of_a_very_large_single_group() {
    let mut groups = BTreeMap::new();
    groups.insert("all".to_string(), dec("1000000000000000000000000000"));
    let pct = percentage_of_total(&groups);
    assert_eq!(pct["all"], dec("100"));
}
