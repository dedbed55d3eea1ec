// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal formatting of raw balances
//!
//! The raw amount is divided by the unit's scale, rounded to
//! [`MAX_PRECISION`] fractional digits, then truncated (never rounded) to the
//! requested precision. Output is plain notation without trailing zeros.

use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::constants::MAX_PRECISION;
use crate::config::FormatConfig;
use crate::errors::BalanceError;
use crate::tracing::spans;
use crate::types::balance::Balance;
use crate::types::unit::Unit;

impl Balance {
    /// Render the balance in the named unit with at most `precision`
    /// fractional digits
    ///
    /// Extra digits are truncated, not rounded.
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if `unit` is not in the unit table.
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::Balance;
    ///
    /// let balance = Balance::parse("1.999", "Mxrb").unwrap();
    /// assert_eq!(balance.unit_string("Mxrb", 2).unwrap(), "1.99");
    /// assert_eq!(balance.unit_string("Gxrb", 33).unwrap(), "0.001999");
    /// assert!(balance.unit_string("notaunit", 0).is_err());
    /// ```
    pub fn unit_string(&self, unit: &str, precision: u32) -> Result<String, BalanceError> {
        let unit: Unit = unit.parse()?;
        Ok(self.format_in(unit, precision))
    }

    /// Render the balance in `unit` with at most `precision` fractional digits
    ///
    /// Same as [`unit_string`](Self::unit_string) with the unit already
    /// resolved.
    pub fn format_in(&self, unit: Unit, precision: u32) -> String {
        let span = spans::format_balance(unit, precision);
        let _guard = span.enter();

        let raw = BigDecimal::new(self.to_bigint(), 0);
        let quotient = (raw / unit.scale())
            .with_scale_round(i64::from(MAX_PRECISION), RoundingMode::HalfUp);

        let truncated = if precision < MAX_PRECISION {
            quotient.with_scale(i64::from(precision))
        } else {
            quotient
        };

        truncated.normalized().to_plain_string()
    }

    /// Render the balance with the unit and precision of `config`
    pub fn display_with(&self, config: &FormatConfig) -> String {
        self.format_in(config.unit, config.precision)
    }
}

impl std::fmt::Display for Balance {
    /// `Mxrb` with the maximum precision of 33 fractional digits
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_in(Unit::DEFAULT, MAX_PRECISION))
    }
}
