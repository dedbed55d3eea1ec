// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact decimal parsing into raw balances
//!
//! Parsing never rounds: an input either maps to a whole number of raw that
//! fits in 128 bits, or it is rejected with the reason why.

use std::str::FromStr;

use alloy_primitives::U128;
use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, Zero};
use tracing::{debug, trace};

use crate::config::constants::{BALANCE_SIZE, MAX_RAW_DIGITS};
use crate::errors::BalanceError;
use crate::tracing::spans;
use crate::types::balance::Balance;
use crate::types::unit::Unit;

impl Balance {
    /// Parse a decimal amount expressed in the named unit
    ///
    /// Accepts ordinary decimal notation: an optional sign, digits, an
    /// optional fraction and an optional `e`/`E` exponent. Any spelling of
    /// zero (`"0"`, `"0.000"`, `"-0"`) yields [`Balance::ZERO`] without
    /// looking at `unit`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// - `InvalidDecimal` if `input` is not a decimal number
    /// - `NegativeAmount` if `input` is below zero
    /// - `UnknownUnit` if `unit` is not in the unit table
    /// - `PrecisionLoss` if `input` is not a whole number of raw
    /// - `BalanceOverflow` if the raw amount exceeds 2^128 - 1
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::{Balance, BalanceError};
    ///
    /// let balance = Balance::parse("1.5", "xrb").unwrap();
    /// assert_eq!(balance.as_u128(), 1_500_000_000_000_000_000_000_000);
    ///
    /// assert_eq!(
    ///     Balance::parse("1", "notaunit"),
    ///     Err(BalanceError::unknown_unit("notaunit"))
    /// );
    /// assert_eq!(Balance::parse("0", "notaunit"), Ok(Balance::ZERO));
    /// ```
    pub fn parse(input: &str, unit: &str) -> Result<Balance, BalanceError> {
        let span = spans::parse_balance(input, unit);
        let _guard = span.enter();

        match read_amount(input)? {
            Some(decimal) => to_raw(input, &decimal, unit.parse()?),
            None => Ok(Balance::ZERO),
        }
    }

    /// Parse a decimal amount expressed in `unit`
    ///
    /// Same as [`parse`](Self::parse) with the unit already resolved.
    pub fn parse_in(input: &str, unit: Unit) -> Result<Balance, BalanceError> {
        let span = spans::parse_balance(input, unit.name());
        let _guard = span.enter();

        match read_amount(input)? {
            Some(decimal) => to_raw(input, &decimal, unit),
            None => Ok(Balance::ZERO),
        }
    }
}

impl FromStr for Balance {
    type Err = BalanceError;

    /// Parse a decimal amount in the default unit (`Mxrb`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Balance::parse_in(s, Unit::DEFAULT)
    }
}

/// Read a positive decimal amount, or `None` for any spelling of zero
fn read_amount(input: &str) -> Result<Option<BigDecimal>, BalanceError> {
    if !is_plain_decimal(input) {
        debug!(input, reason = "unexpected character", "Rejected balance input");
        return Err(BalanceError::invalid_decimal(input));
    }

    let decimal = BigDecimal::from_str(input).map_err(|e| {
        debug!(input, error = %e, "Rejected balance input");
        BalanceError::invalid_decimal(input)
    })?;

    if decimal.is_zero() {
        return Ok(None);
    }

    if decimal.sign() == Sign::Minus {
        debug!(input, "Rejected negative balance input");
        return Err(BalanceError::negative_amount(input));
    }

    Ok(Some(decimal.normalized()))
}

/// Convert a normalized positive amount in `unit` to raw
fn to_raw(input: &str, decimal: &BigDecimal, unit: Unit) -> Result<Balance, BalanceError> {
    // With trailing zeros stripped, the amount is c * 10^-scale and c has no
    // factor of ten, so it is a whole number of raw iff scale <= exponent.
    let (_, scale) = decimal.as_bigint_and_exponent();
    let fractional_digits = i128::from(scale) - i128::from(unit.exponent());
    if fractional_digits > 0 {
        debug!(input, %unit, fractional_digits, "Rejected sub-raw balance input");
        return Err(BalanceError::precision_loss(input, unit));
    }

    // Reject huge magnitudes before multiplying so exponents like 1e1000000000
    // never materialize a power of ten.
    if min_raw_digits(decimal, unit) > i128::from(MAX_RAW_DIGITS) {
        debug!(input, %unit, "Rejected balance input above 128 bits");
        return Err(BalanceError::BalanceOverflow);
    }

    let scaled = decimal * unit.scale();
    let (raw, _) = scaled.with_scale(0).into_bigint_and_exponent();
    let (_, bytes) = raw.to_bytes_be();
    if bytes.len() > BALANCE_SIZE {
        debug!(input, %unit, bytes = bytes.len(), "Rejected balance input above 128 bits");
        return Err(BalanceError::BalanceOverflow);
    }

    let mut buffer = [0u8; BALANCE_SIZE];
    buffer[BALANCE_SIZE - bytes.len()..].copy_from_slice(&bytes);
    let balance = Balance::new(U128::from_be_bytes(buffer));

    trace!(%balance, "Parsed balance");
    Ok(balance)
}

/// Only sign, digit, point and exponent characters
///
/// `BigDecimal` also accepts `_` digit separators, which are not part of
/// ordinary notation.
fn is_plain_decimal(input: &str) -> bool {
    !input.is_empty()
        && input
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// Lower bound on the number of digits of the raw integer
///
/// A nonzero decimal with `digits` coefficient digits and scale `s` is at
/// least 10^(digits - 1 - s), so in raw it has at least
/// `digits - s + exponent` digits.
fn min_raw_digits(decimal: &BigDecimal, unit: Unit) -> i128 {
    let (_, scale) = decimal.as_bigint_and_exponent();
    i128::from(decimal.digits()) - i128::from(scale) + i128::from(unit.exponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_mxrb() {
        let balance = Balance::parse("1", "Mxrb").unwrap();
        assert_eq!(balance.as_u128(), 10u128.pow(30));
    }

    #[test]
    fn test_parse_fractional_xrb() {
        let balance = Balance::parse("1.5", "xrb").unwrap();
        assert_eq!(balance.as_u128(), 1_500_000_000_000_000_000_000_000);
    }

    #[test]
    fn test_parse_every_unit() {
        for unit in Unit::ALL {
            let balance = Balance::parse_in("1", unit).unwrap();
            assert_eq!(balance.as_u128(), 10u128.pow(unit.exponent()), "unit {unit}");
        }
    }

    #[test]
    fn test_zero_is_canonical() {
        for input in ["0", "0.0", "-0", "0.000", "+0", "0e10", "-0.0"] {
            for unit in Unit::ALL {
                assert_eq!(Balance::parse_in(input, unit), Ok(Balance::ZERO), "{input} {unit}");
            }
        }
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(Balance::parse("15e-1", "xrb"), Balance::parse("1.5", "xrb"));
        assert_eq!(Balance::parse("1E3", "raw").unwrap().as_u128(), 1000);
        assert_eq!(Balance::parse("2e-24", "xrb").unwrap().as_u128(), 2);
    }

    #[test]
    fn test_trailing_zeros_do_not_lose_precision() {
        let balance = Balance::parse("1.000000000000000000000000000000", "Mxrb").unwrap();
        assert_eq!(balance, Balance::parse("1", "Mxrb").unwrap());
    }

    #[test]
    fn test_smallest_fraction_of_each_unit() {
        // One raw, spelled in every unit
        for unit in Unit::ALL {
            let input = format!("1e-{}", unit.exponent());
            assert_eq!(Balance::parse_in(&input, unit).unwrap().as_u128(), 1, "unit {unit}");
        }
    }

    #[test]
    fn test_invalid_decimal() {
        for input in ["", "abc", "1.2.3", "1,5", " 1", "1 ", "1_000", "0x10", "--1", "1e"] {
            assert_eq!(
                Balance::parse(input, "raw"),
                Err(BalanceError::invalid_decimal(input)),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            Balance::parse("1", "notaunit"),
            Err(BalanceError::unknown_unit("notaunit"))
        );
        assert_eq!(
            Balance::parse("1", "XRB"),
            Err(BalanceError::unknown_unit("XRB"))
        );
    }

    #[test]
    fn test_amount_is_checked_before_unit() {
        assert_eq!(Balance::parse("0", "notaunit"), Ok(Balance::ZERO));
        assert_eq!(Balance::parse("-0.0", "XRB"), Ok(Balance::ZERO));
        assert_eq!(
            Balance::parse("abc", "notaunit"),
            Err(BalanceError::invalid_decimal("abc"))
        );
        assert_eq!(
            Balance::parse("-1", "notaunit"),
            Err(BalanceError::negative_amount("-1"))
        );
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(
            Balance::parse("-1", "raw"),
            Err(BalanceError::negative_amount("-1"))
        );
        assert_eq!(
            Balance::parse("-0.5", "Mxrb"),
            Err(BalanceError::negative_amount("-0.5"))
        );
    }

    #[test]
    fn test_precision_loss() {
        assert_eq!(
            Balance::parse("0.5", "raw"),
            Err(BalanceError::precision_loss("0.5", Unit::Raw))
        );
        assert_eq!(
            Balance::parse("1.0000000000000000000000000000001", "Mxrb"),
            Err(BalanceError::precision_loss(
                "1.0000000000000000000000000000001",
                Unit::MegaXrb
            ))
        );
        assert!(matches!(
            Balance::parse("1e-1000000", "Gxrb"),
            Err(BalanceError::PrecisionLoss { .. })
        ));
    }

    #[test]
    fn test_precision_loss_is_reported_before_overflow() {
        let input = "10000000000000000000000000000000000000000.5";
        assert_eq!(
            Balance::parse(input, "raw"),
            Err(BalanceError::precision_loss(input, Unit::Raw))
        );
        assert_eq!(
            Balance::parse("1.5e-33", "Gxrb"),
            Err(BalanceError::precision_loss("1.5e-33", Unit::GigaXrb))
        );
        assert_eq!(Balance::parse("1e1000000000", "raw"), Err(BalanceError::BalanceOverflow));
    }

    #[test]
    fn test_max_balance() {
        let max = u128::MAX.to_string();
        assert_eq!(Balance::parse(&max, "raw"), Ok(Balance::MAX));
    }

    #[test]
    fn test_overflow() {
        // 2^128
        let above_max = "340282366920938463463374607431768211456";
        assert_eq!(Balance::parse(above_max, "raw"), Err(BalanceError::BalanceOverflow));
        assert_eq!(Balance::parse("1000000", "Gxrb"), Err(BalanceError::BalanceOverflow));
        assert_eq!(Balance::parse("1e1000000000", "raw"), Err(BalanceError::BalanceOverflow));
    }

    #[test]
    fn test_largest_gxrb_amount() {
        // 340282 Gxrb fits, 340283 Gxrb does not (2^128 ~ 3.4028e38)
        assert!(Balance::parse("340282", "Gxrb").is_ok());
        assert_eq!(Balance::parse("340283", "Gxrb"), Err(BalanceError::BalanceOverflow));
    }

    #[test]
    fn test_from_str_uses_mxrb() {
        let balance: Balance = "2".parse().unwrap();
        assert_eq!(balance, Balance::parse("2", "Mxrb").unwrap());
    }

    #[test]
    fn test_min_raw_digits_bound() {
        let decimal = BigDecimal::from_str("123.45").unwrap();
        // 123.45 raw has 3 integer digits; the bound may not exceed that.
        assert!(min_raw_digits(&decimal, Unit::Raw) <= 4);
        // 123.45 xrb is 1.2345e26 raw: 27 digits
        assert!(min_raw_digits(&decimal, Unit::Xrb) <= 28);
        assert!(min_raw_digits(&decimal, Unit::Xrb) >= 27);
    }
}
