// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction, TransactionKind};
use crate::store::{Store, TransactionFilter};
use crate::utils::{
    ensure_not_future, ensure_range, fmt_money, maybe_print_json, non_blank, parse_amount,
    parse_date, parse_kind, pretty_table, required, today,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Validate the form fields and resolve names to ids. Places and
/// beneficiaries are created on first use.
pub fn build_transaction(store: &Store, sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let date = parse_date(required(sub, "date")?)?;
    ensure_not_future(date, today())?;
    let amount = parse_amount(required(sub, "amount")?)?;

    let category = required(sub, "category")?;
    let category_id = store
        .get_category_id_by_name(category)
        .with_context(|| format!("Category '{}' not found", category))?;
    let payment_type = required(sub, "payment-type")?;
    let payment_type_id = store
        .get_payment_type_id_by_name(payment_type)
        .with_context(|| format!("Payment type '{}' not found", payment_type))?;

    let place_id = match non_blank(sub.get_one::<String>("place")) {
        Some(name) => Some(
            store
                .add_place(&name)
                .with_context(|| format!("Could not record place '{}'", name))?,
        ),
        None => None,
    };
    let beneficiary_id = match non_blank(sub.get_one::<String>("beneficiary")) {
        Some(name) => Some(
            store
                .add_beneficiary(&name)
                .with_context(|| format!("Could not record beneficiary '{}'", name))?,
        ),
        None => None,
    };

    let kind = if sub.get_flag("income") {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    Ok(NewTransaction {
        amount,
        date,
        category_id,
        payment_type_id,
        comment: non_blank(sub.get_one::<String>("comment")),
        place_id,
        beneficiary_id,
        kind,
    })
}

/// Places and beneficiaries created while resolving the form are rolled back
/// with the write if it fails.
fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let db_tx = store.connection().unchecked_transaction()?;
    let tx = build_transaction(store, sub)?;
    let id = store
        .add_transaction(&tx)
        .context("Failed to add transaction")?;
    db_tx.commit()?;
    println!(
        "Recorded {} {} on {} (id {})",
        tx.kind.label(),
        fmt_money(&tx.amount),
        tx.date,
        id
    );
    Ok(())
}

fn edit(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .context("Missing transaction id")?;
    let db_tx = store.connection().unchecked_transaction()?;
    let tx = build_transaction(store, sub)?;
    store
        .update_transaction(id, &tx)
        .with_context(|| format!("Failed to update transaction {}", id))?;
    db_tx.commit()?;
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .context("Missing transaction id")?;
    store
        .delete_transaction(id)
        .with_context(|| format!("Failed to delete transaction {}", id))?;
    println!("Deleted transaction {}", id);
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .context("Missing transaction id")?;
    let tx = store
        .get_transaction(id)
        .with_context(|| format!("Transaction {} not found", id))?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tx)? {
        println!("{}", render(std::slice::from_ref(&tx)));
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", render(&data));
    }
    Ok(())
}

/// Read the `--type/--from/--to` options shared by listings and reports.
pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| parse_kind(s))
        .transpose()?;
    let (start, end) = date_bounds(sub)?;
    Ok(TransactionFilter { kind, start, end })
}

/// `--from/--to`, both optional and inclusive.
pub fn date_bounds(sub: &clap::ArgMatches) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    let start = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let end = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    if let Some(e) = end {
        ensure_not_future(e, today())?;
    }
    ensure_range(start, end)?;
    Ok((start, end))
}

/// Newest first; `--limit` keeps the most recent rows.
pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let filter = filter_from_args(sub)?;
    let mut data = store.get_transactions_filtered(&filter)?;
    data.reverse();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

fn render(data: &[Transaction]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.date.clone(),
                t.kind.label().to_string(),
                fmt_money(&t.amount),
                t.category_name.clone(),
                t.payment_type.clone(),
                t.place_name.clone().unwrap_or_default(),
                t.beneficiary_name.clone().unwrap_or_default(),
                t.comment.clone().unwrap_or_default(),
            ]
        })
        .collect();
    pretty_table(
        &[
            "ID",
            "Date",
            "Type",
            "Amount",
            "Category",
            "Payment",
            "Place",
            "Beneficiary",
            "Comment",
        ],
        rows,
    )
}
