// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Single-value aggregates over the ledger. Counts and rankings run in
//! SQLite; money sums are taken over exact `Decimal`s in Rust.

use super::Store;
use crate::error::{StoreError, StoreResult};
use crate::models::TransactionKind;
use rusqlite::{params, OptionalExtension};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_transactions: i64,
    pub max_transaction_amount: Option<Decimal>,
    pub most_used_category: Option<String>,
    pub top_beneficiary: Option<String>,
}

fn parse_amount(s: &str) -> StoreResult<Decimal> {
    s.trim().parse::<Decimal>().map_err(|e| {
        tracing::warn!("invalid stored amount '{s}': {e}");
        StoreError::InvalidData(format!("amount '{s}': {e}"))
    })
}

impl Store {
    /// Exact sum of every stored amount of `kind`. Amounts that do not parse
    /// are skipped, as they are in listings.
    fn total_for(&self, kind: TransactionKind) -> StoreResult<Decimal> {
        let mut stmt = self
            .conn
            .prepare("SELECT amount FROM transactions WHERE type_id = ?1")?;
        let rows = stmt.query_map(params![kind.type_id()], |r| r.get::<_, String>(0))?;
        let mut total = Decimal::ZERO;
        for row in rows {
            let Ok(amount) = parse_amount(&row?) else {
                continue;
            };
            total = total.checked_add(amount).ok_or_else(|| {
                tracing::warn!("{} total overflows at amount {amount}", kind.label());
                StoreError::InvalidData(format!("{} total overflows", kind.label()))
            })?;
        }
        Ok(total)
    }

    pub fn get_total_income(&self) -> StoreResult<Decimal> {
        self.total_for(TransactionKind::Income)
    }

    pub fn get_total_expense(&self) -> StoreResult<Decimal> {
        self.total_for(TransactionKind::Expense)
    }

    pub fn get_total_transactions(&self) -> StoreResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))?;
        Ok(n)
    }

    /// Largest single amount of either kind; `None` on an empty ledger.
    pub fn get_max_transaction_amount(&self) -> StoreResult<Option<Decimal>> {
        // amount is TEXT and may exceed f64 precision, so compare in Rust.
        let mut stmt = self.conn.prepare("SELECT amount FROM transactions")?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut max: Option<Decimal> = None;
        for row in rows {
            let Ok(amount) = parse_amount(&row?) else {
                continue;
            };
            if max.is_none_or(|m| amount > m) {
                max = Some(amount);
            }
        }
        Ok(max)
    }

    /// Category with the most transactions. Ties go to the alphabetically
    /// first name.
    pub fn get_most_used_category(&self) -> StoreResult<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT c.name FROM transactions t
                 JOIN categories c ON t.category_id = c.id
                 GROUP BY c.id ORDER BY COUNT(*) DESC, c.name LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(name)
    }

    pub fn get_top_beneficiary(&self) -> StoreResult<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT b.name FROM transactions t
                 JOIN beneficiaries b ON t.beneficiary_id = b.id
                 GROUP BY b.id ORDER BY COUNT(*) DESC, b.name LIMIT 1",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(name)
    }

    pub fn get_top_beneficiary_by_category(&self, category: &str) -> StoreResult<Option<String>> {
        let name = self
            .conn
            .query_row(
                "SELECT b.name FROM transactions t
                 JOIN beneficiaries b ON t.beneficiary_id = b.id
                 JOIN categories c ON t.category_id = c.id
                 WHERE c.name = ?1
                 GROUP BY b.id ORDER BY COUNT(*) DESC, b.name LIMIT 1",
                params![category],
                |r| r.get(0),
            )
            .optional()?;
        Ok(name)
    }

    /// Pre-fill hint for the beneficiary field once a category is chosen.
    pub fn suggest_beneficiary_for_category(&self, category: &str) -> StoreResult<Option<String>> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(None);
        }
        self.get_top_beneficiary_by_category(category)
    }

    pub fn statistics(&self) -> StoreResult<Statistics> {
        Ok(Statistics {
            total_income: self.get_total_income()?,
            total_expense: self.get_total_expense()?,
            total_transactions: self.get_total_transactions()?,
            max_transaction_amount: self.get_max_transaction_amount()?,
            most_used_category: self.get_most_used_category()?,
            top_beneficiary: self.get_top_beneficiary()?,
        })
    }
}
