// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{blank_to_none, expect_affected, Store};
use crate::error::StoreResult;
use crate::models::PaymentType;
use rusqlite::{params, Row};

fn map_payment_type(r: &Row<'_>) -> rusqlite::Result<PaymentType> {
    Ok(PaymentType {
        id: r.get(0)?,
        name: r.get(1)?,
        bank: r.get(2)?,
        issuer: r.get(3)?,
        issue_date: r.get(4)?,
        expiration_date: r.get(5)?,
    })
}

impl Store {
    /// Names only, for pickers.
    pub fn get_all_payment_types(&self) -> StoreResult<Vec<String>> {
        self.names("payment_types")
    }

    pub fn get_all_payment_type_objects(&self) -> StoreResult<Vec<PaymentType>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, bank, issuer, issue_date, expiration_date
             FROM payment_types ORDER BY name",
        )?;
        let rows = stmt.query_map([], map_payment_type)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn get_payment_type(&self, id: i64) -> StoreResult<PaymentType> {
        let pt = self.conn.query_row(
            "SELECT id, name, bank, issuer, issue_date, expiration_date
             FROM payment_types WHERE id = ?1",
            params![id],
            map_payment_type,
        )?;
        Ok(pt)
    }

    pub fn get_payment_type_id_by_name(&self, name: &str) -> StoreResult<i64> {
        self.id_by_name("payment_types", name)
    }

    /// Insert a payment type; `pt.id` is ignored. Returns the new id.
    ///
    /// Issue and expiration dates are descriptive only; their order is not
    /// checked.
    pub fn add_payment_type(&self, pt: &PaymentType) -> StoreResult<i64> {
        let id = self.conn.query_row(
            "INSERT INTO payment_types(name, bank, issuer, issue_date, expiration_date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id",
            params![
                pt.name.trim(),
                blank_to_none(pt.bank.as_deref()),
                blank_to_none(pt.issuer.as_deref()),
                blank_to_none(pt.issue_date.as_deref()),
                blank_to_none(pt.expiration_date.as_deref())
            ],
            |r| r.get(0),
        )?;
        Ok(id)
    }

    pub fn update_payment_type(&self, pt: &PaymentType) -> StoreResult<()> {
        let n = self.conn.execute(
            "UPDATE payment_types
             SET name = ?1, bank = ?2, issuer = ?3, issue_date = ?4, expiration_date = ?5
             WHERE id = ?6",
            params![
                pt.name.trim(),
                blank_to_none(pt.bank.as_deref()),
                blank_to_none(pt.issuer.as_deref()),
                blank_to_none(pt.issue_date.as_deref()),
                blank_to_none(pt.expiration_date.as_deref()),
                pt.id
            ],
        )?;
        expect_affected(n)
    }

    /// Blocked while any transaction still references the payment type.
    pub fn delete_payment_type(&self, id: i64) -> StoreResult<()> {
        let n = self
            .conn
            .execute("DELETE FROM payment_types WHERE id = ?1", params![id])?;
        expect_affected(n)
    }
}
