//! Error types for balance parsing, formatting and (de)serialization.
//!
//! Every fallible entry point of the crate returns [`BalanceError`]. The
//! variants map one-to-one onto the failure modes a caller can act on:
//! malformed input, an unknown unit, an amount that cannot be represented in
//! raw, or a binary buffer of the wrong size.

use crate::config::constants::BALANCE_SIZE;

/// Errors that can occur when building a [`Balance`](crate::Balance) from
/// external input or when converting it to another unit.
///
/// # Examples
///
/// ```rust
/// use xrb_balance::{Balance, BalanceError};
///
/// match Balance::parse("0.0000000000000000000000000000001", "Mxrb") {
///     Ok(balance) => println!("parsed {balance}"),
///     Err(BalanceError::PrecisionLoss { input, unit }) => {
///         eprintln!("{input} has sub-raw precision in {unit}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    /// The input is not a decimal number in ordinary notation.
    #[error("Invalid decimal: {input:?}")]
    InvalidDecimal {
        /// The rejected input
        input: String,
    },

    /// The unit name is not in the unit table.
    ///
    /// Unit names are case-sensitive: `Mxrb` and `mxrb` are different units.
    #[error("Unknown unit: {unit:?}")]
    UnknownUnit {
        /// The rejected unit name
        unit: String,
    },

    /// The amount has a fractional part once scaled to raw.
    ///
    /// Raw is indivisible, so such an input can only be accepted by dropping
    /// digits. The parser refuses instead.
    #[error("Precision loss: {input} {unit} is not a whole number of raw")]
    PrecisionLoss {
        /// The rejected input
        input: String,
        /// Unit the input was expressed in
        unit: String,
    },

    /// The amount is negative.
    #[error("Negative amount: {input}")]
    NegativeAmount {
        /// The rejected input
        input: String,
    },

    /// The amount does not fit in 128 bits.
    #[error("Balance overflow: amount exceeds {size} bytes", size = BALANCE_SIZE)]
    BalanceOverflow,

    /// A checked subtraction went below zero.
    #[error("Balance underflow: result is below zero")]
    BalanceUnderflow,

    /// A binary balance was not exactly [`BALANCE_SIZE`] bytes long.
    #[error("Bad balance size: expected {expected} bytes, got {len}", expected = BALANCE_SIZE)]
    BadBalanceSize {
        /// Length of the rejected buffer
        len: usize,
    },
}

impl BalanceError {
    /// Create an `InvalidDecimal` error for the given input.
    pub fn invalid_decimal(input: impl Into<String>) -> Self {
        BalanceError::InvalidDecimal {
            input: input.into(),
        }
    }

    /// Create an `UnknownUnit` error for the given unit name.
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        BalanceError::UnknownUnit { unit: unit.into() }
    }

    /// Create a `PrecisionLoss` error for an input expressed in `unit`.
    pub fn precision_loss(input: impl Into<String>, unit: impl std::fmt::Display) -> Self {
        BalanceError::PrecisionLoss {
            input: input.into(),
            unit: unit.to_string(),
        }
    }

    /// Create a `NegativeAmount` error for the given input.
    pub fn negative_amount(input: impl Into<String>) -> Self {
        BalanceError::NegativeAmount {
            input: input.into(),
        }
    }

    /// Create a `BadBalanceSize` error for a buffer of `len` bytes.
    pub fn bad_balance_size(len: usize) -> Self {
        BalanceError::BadBalanceSize { len }
    }
}
