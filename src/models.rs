// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense (`type_id = 0`) or income (`type_id = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn type_id(self) -> i64 {
        match self {
            TransactionKind::Expense => 0,
            TransactionKind::Income => 1,
        }
    }

    pub fn from_type_id(id: i64) -> Option<Self> {
        match id {
            0 => Some(TransactionKind::Expense),
            1 => Some(TransactionKind::Income),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentType {
    pub id: i64,
    pub name: String,
    pub bank: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// A transaction as read back from the store, with lookup names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub date: String, // YYYY-MM-DD as stored
    pub category_id: i64,
    pub category_name: String,
    pub payment_type_id: i64,
    pub payment_type: String,
    pub comment: Option<String>,
    pub place_id: Option<i64>,
    pub place_name: Option<String>,
    pub beneficiary_id: Option<i64>,
    pub beneficiary_name: Option<String>,
    pub kind: TransactionKind,
}

impl Transaction {
    /// The stored date, if it parses as a calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

/// Field values for an insert or a full-row update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category_id: i64,
    pub payment_type_id: i64,
    pub comment: Option<String>,
    pub place_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub kind: TransactionKind,
}
