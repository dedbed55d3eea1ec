// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for xrb-balance integration tests
//!
//! Provides proptest strategies and a string-only reference formatter that
//! shares no code with the crate's `BigDecimal` path.

#![allow(dead_code)]

use proptest::prelude::*;
use xrb_balance::{Balance, Unit};

/// Any balance, with extra weight on the edges of the 128-bit range
pub fn arb_balance() -> impl Strategy<Value = Balance> {
    prop_oneof![
        3 => any::<u128>().prop_map(Balance::from),
        1 => (0u128..1_000_000).prop_map(Balance::from),
        1 => (0u128..1_000_000).prop_map(|offset| Balance::from(u128::MAX - offset)),
        1 => (any::<u64>(), any::<u64>()).prop_map(|(hi, lo)| Balance::from_parts(hi, lo)),
    ]
}

/// Any unit in the table
pub fn arb_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

/// Reference rendering of `raw / 10^exponent` truncated to `precision`
/// fractional digits, done with plain string manipulation.
pub fn reference_unit_string(raw: u128, exponent: u32, precision: u32) -> String {
    let exponent = exponent as usize;
    let digits = format!("{raw:0>width$}", width = exponent + 1);
    let (integer, fraction) = digits.split_at(digits.len() - exponent);

    let kept = &fraction[..fraction.len().min(precision as usize)];
    let kept = kept.trim_end_matches('0');

    if kept.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{kept}")
    }
}

/// Install a test-writer subscriber so log output lands in the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("xrb_balance=trace")
        .with_test_writer()
        .try_init();
}
