// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure filtering and aggregation over transactions already loaded from the
//! store. Nothing here touches the database or keeps state between calls.

use crate::models::{Transaction, TransactionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Keep transactions dated within `[start, end]`; a `None` bound is open.
///
/// With both bounds open the input is returned unchanged. Otherwise a
/// transaction whose date does not parse is dropped and logged.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Transaction> {
    if start.is_none() && end.is_none() {
        return transactions.to_vec();
    }
    transactions
        .iter()
        .filter(|t| match t.parsed_date() {
            Some(d) => start.is_none_or(|s| d >= s) && end.is_none_or(|e| d <= e),
            None => {
                tracing::warn!(
                    "excluding transaction {} with unparseable date '{}'",
                    t.id,
                    t.date
                );
                false
            }
        })
        .cloned()
        .collect()
}

pub fn filter_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .cloned()
        .collect()
}

/// Add `t.amount` to `acc`. A sum that would overflow `Decimal` leaves `acc`
/// untouched and logs the skipped transaction.
fn accumulate(acc: &mut Decimal, t: &Transaction) {
    match acc.checked_add(t.amount) {
        Some(sum) => *acc = sum,
        None => tracing::warn!(
            "skipping transaction {}: adding amount {} overflows the running total",
            t.id,
            t.amount
        ),
    }
}

/// Sum of every amount. Transactions that would overflow the sum are skipped
/// and logged.
pub fn total_amount(transactions: &[Transaction]) -> Decimal {
    let mut total = Decimal::ZERO;
    for t in transactions {
        accumulate(&mut total, t);
    }
    total
}

fn group_by<F>(transactions: &[Transaction], key: F) -> BTreeMap<String, Decimal>
where
    F: Fn(&Transaction) -> &str,
{
    let mut out: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions {
        accumulate(out.entry(key(t).to_string()).or_insert(Decimal::ZERO), t);
    }
    out
}

/// Sum of amounts per category name. Names are matched exactly.
pub fn group_by_category(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    group_by(transactions, |t| t.category_name.as_str())
}

/// Sum of amounts per payment type name. Names are matched exactly.
pub fn group_by_payment_type(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    group_by(transactions, |t| t.payment_type.as_str())
}

/// Each group's share of the grand total, in percent.
///
/// A zero total yields `0` for every key instead of dividing by zero. So does
/// a grand total too large for `Decimal`, which is logged.
pub fn percentage_of_total(groups: &BTreeMap<String, Decimal>) -> BTreeMap<String, Decimal> {
    let total = groups
        .values()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(*v))
        .unwrap_or_else(|| {
            tracing::warn!("group total overflows; reporting zero percentages");
            Decimal::ZERO
        });
    groups
        .iter()
        .map(|(k, v)| (k.clone(), share(*v, total)))
        .collect()
}

/// `part` as a percentage of `total`. Scales before dividing when that fits,
/// otherwise divides first.
fn share(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    let hundred = Decimal::ONE_HUNDRED;
    part.checked_mul(hundred)
        .and_then(|p| p.checked_div(total))
        .or_else(|| part.checked_div(total).and_then(|r| r.checked_mul(hundred)))
        .unwrap_or_else(|| {
            tracing::warn!("share of {part} in {total} is out of range; reporting zero");
            Decimal::ZERO
        })
}

/// Income and expense per `YYYY-MM`, aligned over the same months.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub income: BTreeMap<String, Decimal>,
    pub expense: BTreeMap<String, Decimal>,
}

impl MonthlySeries {
    pub fn months(&self) -> impl Iterator<Item = &String> {
        self.income.keys()
    }
}

/// Bucket transactions by calendar month and split them by kind.
///
/// Both series cover the union of months seen in either; a month with no
/// transactions of one kind holds zero in that series. Undated rows are
/// skipped and logged.
pub fn monthly_income_vs_expense(transactions: &[Transaction]) -> MonthlySeries {
    let mut series = MonthlySeries::default();
    for t in transactions {
        let Some(date) = t.parsed_date() else {
            tracing::warn!(
                "skipping transaction {} with unparseable date '{}' in monthly series",
                t.id,
                t.date
            );
            continue;
        };
        let month = date.format("%Y-%m").to_string();
        let (hit, other) = match t.kind {
            TransactionKind::Income => (&mut series.income, &mut series.expense),
            TransactionKind::Expense => (&mut series.expense, &mut series.income),
        };
        accumulate(hit.entry(month.clone()).or_insert(Decimal::ZERO), t);
        other.entry(month).or_insert(Decimal::ZERO);
    }
    series
}
