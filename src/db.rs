// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "BudgetTracker", "budget-tracker"));

pub const DB_FILE_NAME: &str = "budget-tracker.sqlite";

/// Default database location inside the platform data directory.
pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(DB_FILE_NAME))
}

/// Resolve the database path: an explicit override (flag or env var) wins over
/// the platform default.
pub fn resolve_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            Ok(p.to_path_buf())
        }
        None => db_path(),
    }
}

pub fn open_or_init(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn).context("Failed to bootstrap schema")?;
    tracing::debug!("opened database at {}", path.display());
    Ok(conn)
}

/// Create every table if missing and enable foreign key enforcement.
///
/// Safe to run on every start.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE CHECK(length(trim(name)) > 0)
    );

    CREATE TABLE IF NOT EXISTS payment_types(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE CHECK(length(trim(name)) > 0),
        bank TEXT,
        issuer TEXT,
        issue_date TEXT,
        expiration_date TEXT
    );

    CREATE TABLE IF NOT EXISTS places(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE CHECK(length(trim(name)) > 0)
    );

    CREATE TABLE IF NOT EXISTS beneficiaries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE CHECK(length(trim(name)) > 0)
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        category_id INTEGER NOT NULL,
        payment_type_id INTEGER NOT NULL,
        comment TEXT,
        place_id INTEGER,
        beneficiary_id INTEGER,
        type_id INTEGER NOT NULL DEFAULT 0 CHECK(type_id IN (0, 1)),
        FOREIGN KEY(category_id) REFERENCES categories(id),
        FOREIGN KEY(payment_type_id) REFERENCES payment_types(id),
        FOREIGN KEY(place_id) REFERENCES places(id),
        FOREIGN KEY(beneficiary_id) REFERENCES beneficiaries(id)
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_type ON transactions(type_id);
    "#,
    )
}
