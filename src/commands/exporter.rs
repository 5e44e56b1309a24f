// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::required;
use anyhow::{Context, Result, bail};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = required(sub, "out")?;
    let rows = store.get_all_transactions()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Cannot write {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "amount",
                "category",
                "payment_type",
                "place",
                "beneficiary",
                "comment",
            ])?;
            for t in rows {
                wtr.write_record([
                    t.id.to_string(),
                    t.date,
                    t.kind.label().to_string(),
                    t.amount.to_string(),
                    t.category_name,
                    t.payment_type,
                    t.place_name.unwrap_or_default(),
                    t.beneficiary_name.unwrap_or_default(),
                    t.comment.unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Cannot write {}", out))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
