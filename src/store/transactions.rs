// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{blank_to_none, expect_affected, Store};
use crate::analytics::filter_by_date_range;
use crate::error::{StoreError, StoreResult};
use crate::models::{NewTransaction, Transaction, TransactionKind};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Row};
use rust_decimal::Decimal;

const SELECT_TRANSACTIONS: &str = "SELECT t.id, t.amount, t.date, t.category_id, c.name,
        t.payment_type_id, p.name, t.comment, t.place_id, pl.name,
        t.beneficiary_id, b.name, t.type_id
     FROM transactions t
     JOIN categories c ON t.category_id = c.id
     JOIN payment_types p ON t.payment_type_id = p.id
     LEFT JOIN places pl ON t.place_id = pl.id
     LEFT JOIN beneficiaries b ON t.beneficiary_id = b.id";

/// Store-side narrowing for transaction listings. Unset fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

struct RawTransaction {
    id: i64,
    amount: String,
    date: String,
    category_id: i64,
    category_name: String,
    payment_type_id: i64,
    payment_type: String,
    comment: Option<String>,
    place_id: Option<i64>,
    place_name: Option<String>,
    beneficiary_id: Option<i64>,
    beneficiary_name: Option<String>,
    type_id: i64,
}

fn map_row(r: &Row<'_>) -> rusqlite::Result<RawTransaction> {
    Ok(RawTransaction {
        id: r.get(0)?,
        amount: r.get(1)?,
        date: r.get(2)?,
        category_id: r.get(3)?,
        category_name: r.get(4)?,
        payment_type_id: r.get(5)?,
        payment_type: r.get(6)?,
        comment: r.get(7)?,
        place_id: r.get(8)?,
        place_name: r.get(9)?,
        beneficiary_id: r.get(10)?,
        beneficiary_name: r.get(11)?,
        type_id: r.get(12)?,
    })
}

impl RawTransaction {
    /// `None` when the stored amount or discriminator cannot be decoded.
    fn decode(self) -> Option<Transaction> {
        let amount = match self.amount.trim().parse::<Decimal>() {
            Ok(a) => a,
            Err(e) => {
                tracing::warn!(
                    "skipping transaction {}: invalid amount '{}': {e}",
                    self.id,
                    self.amount
                );
                return None;
            }
        };
        let Some(kind) = TransactionKind::from_type_id(self.type_id) else {
            tracing::warn!(
                "skipping transaction {}: unknown type_id {}",
                self.id,
                self.type_id
            );
            return None;
        };
        Some(Transaction {
            id: self.id,
            amount,
            date: self.date,
            category_id: self.category_id,
            category_name: self.category_name,
            payment_type_id: self.payment_type_id,
            payment_type: self.payment_type,
            comment: self.comment,
            place_id: self.place_id,
            place_name: self.place_name,
            beneficiary_id: self.beneficiary_id,
            beneficiary_name: self.beneficiary_name,
            kind,
        })
    }
}

impl Store {
    /// Insert a transaction and return its new id.
    ///
    /// Fails with a constraint violation if the category, payment type,
    /// place or beneficiary id does not exist.
    pub fn add_transaction(&self, tx: &NewTransaction) -> StoreResult<i64> {
        let id = self.conn.query_row(
            "INSERT INTO transactions(amount, date, category_id, payment_type_id, comment,
                                      place_id, beneficiary_id, type_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING id",
            params![
                tx.amount.to_string(),
                tx.date.to_string(),
                tx.category_id,
                tx.payment_type_id,
                blank_to_none(tx.comment.as_deref()),
                tx.place_id,
                tx.beneficiary_id,
                tx.kind.type_id()
            ],
            |r| r.get(0),
        )?;
        tracing::debug!("inserted transaction {id}");
        Ok(id)
    }

    /// Replace every field except the id.
    pub fn update_transaction(&self, id: i64, tx: &NewTransaction) -> StoreResult<()> {
        let n = self.conn.execute(
            "UPDATE transactions
             SET amount = ?1, date = ?2, category_id = ?3, payment_type_id = ?4, comment = ?5,
                 place_id = ?6, beneficiary_id = ?7, type_id = ?8
             WHERE id = ?9",
            params![
                tx.amount.to_string(),
                tx.date.to_string(),
                tx.category_id,
                tx.payment_type_id,
                blank_to_none(tx.comment.as_deref()),
                tx.place_id,
                tx.beneficiary_id,
                tx.kind.type_id(),
                id
            ],
        )?;
        expect_affected(n)
    }

    pub fn delete_transaction(&self, id: i64) -> StoreResult<()> {
        let n = self
            .conn
            .execute("DELETE FROM transactions WHERE id = ?1", params![id])?;
        expect_affected(n)
    }

    pub fn get_transaction(&self, id: i64) -> StoreResult<Transaction> {
        let sql = format!("{SELECT_TRANSACTIONS} WHERE t.id = ?1");
        let raw = self.conn.query_row(&sql, params![id], map_row)?;
        raw.decode().ok_or_else(|| {
            tracing::warn!("transaction {id} exists but cannot be decoded");
            StoreError::InvalidData(format!("transaction {id} cannot be decoded"))
        })
    }

    pub fn get_all_transactions(&self) -> StoreResult<Vec<Transaction>> {
        self.get_transactions_filtered(&TransactionFilter::default())
    }

    pub fn get_transactions_by_type(&self, kind: TransactionKind) -> StoreResult<Vec<Transaction>> {
        self.get_transactions_filtered(&TransactionFilter {
            kind: Some(kind),
            ..Default::default()
        })
    }

    /// Transactions ordered by date then id. Date bounds are inclusive.
    ///
    /// The kind is narrowed in SQL. Dates are compared after parsing, through
    /// [`filter_by_date_range`], so listings and reports agree on rows whose
    /// stored date is not zero-padded.
    pub fn get_transactions_filtered(
        &self,
        filter: &TransactionFilter,
    ) -> StoreResult<Vec<Transaction>> {
        let mut sql = format!("{SELECT_TRANSACTIONS} WHERE 1=1");
        let mut values: Vec<Value> = Vec::new();

        if let Some(kind) = filter.kind {
            sql.push_str(" AND t.type_id = ?");
            values.push(Value::Integer(kind.type_id()));
        }
        sql.push_str(" ORDER BY t.date, t.id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(values), map_row)?;
        let mut out = Vec::new();
        for row in rows {
            if let Some(tx) = row?.decode() {
                out.push(tx);
            }
        }
        Ok(filter_by_date_range(&out, filter.start, filter.end))
    }
}
