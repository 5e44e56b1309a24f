// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod beneficiaries;
pub mod categories;
pub mod exporter;
pub mod payment_types;
pub mod places;
pub mod reports;
pub mod stats;
pub mod transactions;
