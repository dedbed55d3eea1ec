//! Fixed sizes and limits of the balance representation
//!
//! This module centralizes the magic numbers shared by the parser, the
//! formatter and the binary codec.

/// Size of a balance in bytes (128 bits)
pub const BALANCE_SIZE: usize = 16;

/// Maximum number of fractional digits produced by the formatter
///
/// The largest unit (`Gxrb`) is 10^33 raw, so 33 fractional digits are enough
/// to show a single raw in any unit.
pub const MAX_PRECISION: u32 = 33;

/// Number of decimal digits in 2^128 - 1
///
/// Any integer with more digits than this cannot be a balance.
pub const MAX_RAW_DIGITS: u64 = 39;
