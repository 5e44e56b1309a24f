// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::models::TransactionKind;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// A transaction amount: a decimal strictly greater than zero.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        bail!("Amount must be greater than zero, got {}", d);
    }
    Ok(d)
}

pub fn parse_kind(s: &str) -> Result<TransactionKind> {
    match s.trim().to_lowercase().as_str() {
        "expense" | "0" => Ok(TransactionKind::Expense),
        "income" | "1" => Ok(TransactionKind::Income),
        other => Err(anyhow!("Unknown type '{}' (use income|expense)", other)),
    }
}

/// Transactions record past events; reject dates after `today`.
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date > today {
        bail!("Date {} is in the future", date);
    }
    Ok(())
}

pub fn ensure_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            bail!("Start date {} is after end date {}", s, e);
        }
    }
    Ok(())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Value of a required clap argument.
pub fn required<'a>(sub: &'a clap::ArgMatches, id: &str) -> Result<&'a String> {
    sub.get_one::<String>(id)
        .ok_or_else(|| anyhow!("Missing required argument '{}'", id))
}

/// Non-blank text, trimmed.
pub fn non_blank(s: Option<&String>) -> Option<String> {
    s.map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.2}%", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
