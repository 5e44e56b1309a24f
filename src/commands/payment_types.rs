// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::PaymentType;
use crate::store::Store;
use crate::utils::{maybe_print_json, non_blank, parse_date, pretty_table, required};
use anyhow::{Context, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let pt = from_args(sub, 0, required(sub, "name")?)?;
            let id = store
                .add_payment_type(&pt)
                .with_context(|| format!("Failed to save payment type '{}'", pt.name))?;
            println!("Added payment type '{}' (id {})", pt.name, id);
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => {
            let name = required(sub, "name")?;
            let id = store
                .get_payment_type_id_by_name(name)
                .with_context(|| format!("Payment type '{}' not found", name))?;
            let new_name = sub.get_one::<String>("rename").unwrap_or(name);
            let pt = from_args(sub, id, new_name)?;
            store
                .update_payment_type(&pt)
                .with_context(|| format!("Failed to save payment type '{}'", name))?;
            println!("Updated payment type '{}'", pt.name);
        }
        Some(("rm", sub)) => {
            let name = required(sub, "name")?;
            let id = store
                .get_payment_type_id_by_name(name)
                .with_context(|| format!("Payment type '{}' not found", name))?;
            store.delete_payment_type(id).with_context(|| {
                format!("Failed to remove payment type '{}' (is it still in use?)", name)
            })?;
            println!("Removed payment type '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

/// Dates are checked for format only; an expiry before the issue date is
/// accepted.
fn from_args(sub: &clap::ArgMatches, id: i64, name: &str) -> Result<PaymentType> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Name is required");
    }
    let date_opt = |key: &str| -> Result<Option<String>> {
        non_blank(sub.get_one::<String>(key))
            .map(|s| parse_date(&s).map(|d| d.to_string()))
            .transpose()
    };
    Ok(PaymentType {
        id,
        name: name.to_string(),
        bank: non_blank(sub.get_one::<String>("bank")),
        issuer: non_blank(sub.get_one::<String>("issuer")),
        issue_date: date_opt("issued")?,
        expiration_date: date_opt("expires")?,
    })
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let data = store.get_all_payment_type_objects()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|p| {
                vec![
                    p.name,
                    p.bank.unwrap_or_default(),
                    p.issuer.unwrap_or_default(),
                    p.issue_date.unwrap_or_default(),
                    p.expiration_date.unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Name", "Bank", "Issuer", "Issued", "Expires"], rows)
        );
    }
    Ok(())
}
