// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display units and their power-of-ten scale factors
//!
//! A unit maps raw (the indivisible base unit) to a human-facing
//! denomination. The table is fixed: there is no way to register a unit at
//! runtime.

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::BalanceError;

/// A named denomination of raw
///
/// | Unit      | Name   | Raw per unit |
/// |-----------|--------|--------------|
/// | `Raw`     | `raw`  | 10^0         |
/// | `MicroXrb`| `uxrb` | 10^18        |
/// | `MilliXrb`| `mxrb` | 10^21        |
/// | `Xrb`     | `xrb`  | 10^24        |
/// | `KiloXrb` | `kxrb` | 10^27        |
/// | `MegaXrb` | `Mxrb` | 10^30        |
/// | `GigaXrb` | `Gxrb` | 10^33        |
///
/// Names are case-sensitive.
///
/// # Examples
///
/// ```
/// use xrb_balance::Unit;
///
/// let unit: Unit = "Mxrb".parse().unwrap();
/// assert_eq!(unit, Unit::MegaXrb);
/// assert_eq!(unit.exponent(), 30);
///
/// assert!("MXRB".parse::<Unit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// The indivisible base unit
    #[serde(rename = "raw")]
    Raw,
    /// 10^18 raw
    #[serde(rename = "uxrb")]
    MicroXrb,
    /// 10^21 raw
    #[serde(rename = "mxrb")]
    MilliXrb,
    /// 10^24 raw
    #[serde(rename = "xrb")]
    Xrb,
    /// 10^27 raw
    #[serde(rename = "kxrb")]
    KiloXrb,
    /// 10^30 raw
    #[serde(rename = "Mxrb")]
    MegaXrb,
    /// 10^33 raw
    #[serde(rename = "Gxrb")]
    GigaXrb,
}

static SCALES: LazyLock<[BigDecimal; 7]> = LazyLock::new(|| {
    Unit::ALL.map(|unit| BigDecimal::new(BigInt::from(1u32), -i64::from(unit.exponent())))
});

impl Unit {
    /// Every unit, smallest first
    pub const ALL: [Unit; 7] = [
        Unit::Raw,
        Unit::MicroXrb,
        Unit::MilliXrb,
        Unit::Xrb,
        Unit::KiloXrb,
        Unit::MegaXrb,
        Unit::GigaXrb,
    ];

    /// Unit used by `Display` and the text codec
    pub const DEFAULT: Unit = Unit::MegaXrb;

    /// Power of ten this unit is worth in raw
    pub const fn exponent(self) -> u32 {
        match self {
            Unit::Raw => 0,
            Unit::MicroXrb => 18,
            Unit::MilliXrb => 21,
            Unit::Xrb => 24,
            Unit::KiloXrb => 27,
            Unit::MegaXrb => 30,
            Unit::GigaXrb => 33,
        }
    }

    /// Canonical (case-sensitive) name
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Raw => "raw",
            Unit::MicroXrb => "uxrb",
            Unit::MilliXrb => "mxrb",
            Unit::Xrb => "xrb",
            Unit::KiloXrb => "kxrb",
            Unit::MegaXrb => "Mxrb",
            Unit::GigaXrb => "Gxrb",
        }
    }

    /// Scale factor as an exact decimal: raw per one of this unit
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use xrb_balance::Unit;
    ///
    /// assert_eq!(Unit::Raw.scale(), &BigDecimal::from(1u32));
    /// assert_eq!(Unit::MicroXrb.scale(), &BigDecimal::from(1_000_000_000_000_000_000u64));
    /// ```
    pub fn scale(self) -> &'static BigDecimal {
        &SCALES[self as usize]
    }
}

impl FromStr for Unit {
    type Err = BalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| BalanceError::unknown_unit(s))
    }
}

impl TryFrom<&str> for Unit {
    type Error = BalanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!("mxrb".parse::<Unit>().unwrap(), Unit::MilliXrb);
        assert_eq!("Mxrb".parse::<Unit>().unwrap(), Unit::MegaXrb);
        assert_eq!(
            "MXRB".parse::<Unit>(),
            Err(BalanceError::unknown_unit("MXRB"))
        );
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert_eq!(
            Unit::try_from("notaunit"),
            Err(BalanceError::unknown_unit("notaunit"))
        );
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn test_scales_are_powers_of_ten() {
        for unit in Unit::ALL {
            let expected = BigDecimal::from(BigInt::from(10u32).pow(unit.exponent()));
            assert_eq!(unit.scale(), &expected, "scale of {unit}");
        }
    }

    #[test]
    fn test_units_are_ordered_by_magnitude() {
        for pair in Unit::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].exponent() < pair[1].exponent());
            assert!(pair[0].scale() < pair[1].scale());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::GigaXrb.to_string(), "Gxrb");
        assert_eq!(format!("{}", Unit::MicroXrb), "uxrb");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Unit::MegaXrb).unwrap();
        assert_eq!(json, "\"Mxrb\"");
        let unit: Unit = serde_json::from_str("\"kxrb\"").unwrap();
        assert_eq!(unit, Unit::KiloXrb);
        assert!(serde_json::from_str::<Unit>("\"KXRB\"").is_err());
    }
}
