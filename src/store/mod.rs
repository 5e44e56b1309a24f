// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Data access: the only code that talks SQL.
//!
//! Every statement binds user input as parameters. Operations return a
//! [`StoreResult`] and log the underlying failure through `tracing` before
//! handing it back.

mod lookups;
mod payment_types;
mod stats;
mod transactions;

pub use stats::Statistics;
pub use transactions::TransactionFilter;

use crate::error::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// Owns the database connection and exposes typed CRUD and aggregate
/// operations over it.
///
/// Not `Sync`; callers sharing a store across threads must serialise access.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Wrap a connection whose schema has already been bootstrapped.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(crate::db::open_or_init(path)?))
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::init_schema(&conn)?;
        Ok(Self::new(conn))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// `SELECT id FROM <table> WHERE name = ?`. `table` is always one of our
    /// own table names, never user input.
    fn id_by_name(&self, table: &str, name: &str) -> StoreResult<i64> {
        let sql = format!("SELECT id FROM {table} WHERE name = ?1");
        let id: Option<i64> = self
            .conn
            .query_row(&sql, params![name.trim()], |r| r.get(0))
            .optional()?;
        id.ok_or_else(|| {
            tracing::debug!("no row in {table} named '{name}'");
            StoreError::NotFound
        })
    }

    fn names(&self, table: &str) -> StoreResult<Vec<String>> {
        let sql = format!("SELECT name FROM {table} ORDER BY name");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Insert `name` or return the id of the row that already has it, in one
    /// statement.
    fn upsert_name(&self, table: &str, name: &str) -> StoreResult<i64> {
        let sql = format!(
            "INSERT INTO {table}(name) VALUES (?1)
             ON CONFLICT(name) DO UPDATE SET name = excluded.name
             RETURNING id"
        );
        let id = self
            .conn
            .query_row(&sql, params![name.trim()], |r| r.get(0))?;
        Ok(id)
    }
}

/// Blank optional text is stored as NULL.
pub(crate) fn blank_to_none(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Treat "0 rows affected" as a missing record.
pub(crate) fn expect_affected(n: usize) -> StoreResult<()> {
    if n == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}
