// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    filter_by_date_range, group_by_category, group_by_payment_type, monthly_income_vs_expense,
    percentage_of_total, MonthlySeries,
};
use crate::commands::transactions::{date_bounds, filter_from_args};
use crate::models::Transaction;
use crate::store::Store;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => {
            let data = share_report(store, sub, group_by_category)?;
            print_shares(sub, "Category", &data)?;
        }
        Some(("by-payment-type", sub)) => {
            let data = share_report(store, sub, group_by_payment_type)?;
            print_shares(sub, "Payment type", &data)?;
        }
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ShareRow {
    pub name: String,
    pub total: Decimal,
    pub percent: Decimal,
}

/// Load the matching transactions, narrow them in memory by date, then
/// group with `group` and attach each group's share. Largest total first.
pub fn share_report<F>(store: &Store, sub: &clap::ArgMatches, group: F) -> Result<Vec<ShareRow>>
where
    F: Fn(&[Transaction]) -> BTreeMap<String, Decimal>,
{
    let filter = filter_from_args(sub)?;
    let loaded = match filter.kind {
        Some(kind) => store.get_transactions_by_type(kind)?,
        None => store.get_all_transactions()?,
    };
    let txs = filter_by_date_range(&loaded, filter.start, filter.end);
    let sums = group(&txs);
    let pcts = percentage_of_total(&sums);
    let mut rows: Vec<ShareRow> = sums
        .into_iter()
        .map(|(name, total)| {
            let percent = pcts.get(&name).copied().unwrap_or(Decimal::ZERO);
            ShareRow {
                name,
                total,
                percent,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    Ok(rows)
}

fn print_shares(sub: &clap::ArgMatches, label: &str, data: &[ShareRow]) -> Result<()> {
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.name.clone(), fmt_money(&r.total), fmt_percent(&r.percent)])
            .collect();
        println!("{}", pretty_table(&[label, "Total", "Share"], rows));
    }
    Ok(())
}

pub fn monthly_report(store: &Store, sub: &clap::ArgMatches) -> Result<MonthlySeries> {
    let (start, end) = date_bounds(sub)?;
    let all = store.get_all_transactions()?;
    let txs = filter_by_date_range(&all, start, end);
    Ok(monthly_income_vs_expense(&txs))
}

fn monthly(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let series = monthly_report(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        let rows = series
            .months()
            .map(|m| {
                let inc = series.income.get(m).copied().unwrap_or(Decimal::ZERO);
                let exp = series.expense.get(m).copied().unwrap_or(Decimal::ZERO);
                vec![
                    m.clone(),
                    fmt_money(&inc),
                    fmt_money(&exp),
                    fmt_money(&(inc - exp)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Net"], rows)
        );
    }
    Ok(())
}
