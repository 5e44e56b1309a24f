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
            store
                .add_category(name)
                .with_context(|| format!("Failed to add category '{}'", name))?;
            println!("Added category '{}'", name.trim());
        }
        Some(("list", sub)) => {
            let data = store.get_category_objects()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data.into_iter().map(|c| vec![c.name]).collect();
                println!("{}", pretty_table(&["Category"], rows));
            }
        }
        Some(("rm", sub)) => {
            let name = required(sub, "name")?;
            store.delete_category(name).with_context(|| {
                format!("Failed to remove category '{}' (is it still in use?)", name)
            })?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
