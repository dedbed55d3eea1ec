// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for raw balances.
//!
//! This module provides the value types the crate is built around:
//! - Raw balances and their comparison and byte-order tags
//! - Display units and their scale factors

pub mod balance;
pub mod unit;

// Note: Public types are re-exported from lib.rs, not here
