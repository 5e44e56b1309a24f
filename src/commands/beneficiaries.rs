// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table, required};
use anyhow::{Context, Result};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            let id = store
                .add_beneficiary(name)
                .with_context(|| format!("Failed to add beneficiary '{}'", name))?;
            println!("Beneficiary '{}' has id {}", name.trim(), id);
        }
        Some(("list", sub)) => {
            let data = store.get_all_beneficiaries()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data.into_iter().map(|n| vec![n]).collect();
                println!("{}", pretty_table(&["Beneficiary"], rows));
            }
        }
        Some(("suggest", sub)) => {
            let category = required(sub, "category")?;
            match store.suggest_beneficiary_for_category(category)? {
                Some(name) => println!("{}", name),
                None => println!("No beneficiary recorded for '{}' yet", category),
            }
        }
        _ => {}
    }
    Ok(())
}
