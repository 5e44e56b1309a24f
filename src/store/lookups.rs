// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{expect_affected, Store};
use crate::error::StoreResult;
use crate::models::Category;
use rusqlite::params;

impl Store {
    pub fn get_all_categories(&self) -> StoreResult<Vec<String>> {
        self.names("categories")
    }

    pub fn get_category_objects(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |r| {
            Ok(Category {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    pub fn get_category_id_by_name(&self, name: &str) -> StoreResult<i64> {
        self.id_by_name("categories", name)
    }

    /// Fails with a constraint violation if the name is taken or blank.
    pub fn add_category(&self, name: &str) -> StoreResult<i64> {
        let id = self.conn.query_row(
            "INSERT INTO categories(name) VALUES (?1) RETURNING id",
            params![name.trim()],
            |r| r.get(0),
        )?;
        Ok(id)
    }

    /// Blocked while any transaction still references the category.
    pub fn delete_category(&self, name: &str) -> StoreResult<()> {
        let n = self
            .conn
            .execute("DELETE FROM categories WHERE name = ?1", params![name.trim()])?;
        expect_affected(n)
    }

    pub fn get_all_places(&self) -> StoreResult<Vec<String>> {
        self.names("places")
    }

    pub fn get_place_id_by_name(&self, name: &str) -> StoreResult<i64> {
        self.id_by_name("places", name)
    }

    /// Id of the place called `name`, creating it on first use.
    pub fn add_place(&self, name: &str) -> StoreResult<i64> {
        self.upsert_name("places", name)
    }

    pub fn get_all_beneficiaries(&self) -> StoreResult<Vec<String>> {
        self.names("beneficiaries")
    }

    pub fn get_beneficiary_id_by_name(&self, name: &str) -> StoreResult<i64> {
        self.id_by_name("beneficiaries", name)
    }

    /// Id of the beneficiary called `name`, creating it on first use.
    pub fn add_beneficiary(&self, name: &str) -> StoreResult<i64> {
        self.upsert_name("beneficiaries", name)
    }
}
