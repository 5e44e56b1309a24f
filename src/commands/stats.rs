// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let s = store.statistics()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let dash = || "-".to_string();
    let rows = vec![
        vec!["Total income".into(), fmt_money(&s.total_income)],
        vec!["Total expense".into(), fmt_money(&s.total_expense)],
        vec!["Transactions".into(), s.total_transactions.to_string()],
        vec![
            "Largest transaction".into(),
            s.max_transaction_amount
                .as_ref()
                .map(fmt_money)
                .unwrap_or_else(dash),
        ],
        vec![
            "Top category".into(),
            s.most_used_category.unwrap_or_else(dash),
        ],
        vec![
            "Top beneficiary".into(),
            s.top_beneficiary.unwrap_or_else(dash),
        ],
    ];
    println!("{}", pretty_table(&["Statistic", "Value"], rows));
    Ok(())
}
