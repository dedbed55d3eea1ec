// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width raw balances with exact decimal conversion.
//!
//! A [`Balance`] is a 128-bit unsigned amount of raw, the smallest
//! indivisible currency unit. It converts to and from decimal text in any
//! [`Unit`] from `raw` (10^0) to `Gxrb` (10^33) without ever rounding on the
//! way in, and it serializes to a fixed 16-byte binary form.
//!
//! ```
//! use xrb_balance::{Balance, BalanceComp, ByteOrder};
//!
//! let amount = Balance::parse("1.5", "xrb").unwrap();
//! assert_eq!(amount.unit_string("raw", 0).unwrap(), "1500000000000000000000000");
//! assert_eq!(amount.unit_string("Mxrb", 33).unwrap(), "0.0000015");
//!
//! let fee = Balance::parse("0.25", "xrb").unwrap();
//! assert_eq!(amount.compare(&fee), BalanceComp::Bigger);
//! assert_eq!((amount - fee).unit_string("xrb", 2).unwrap(), "1.25");
//!
//! let bytes = amount.bytes(ByteOrder::BigEndian);
//! assert_eq!(bytes.len(), 16);
//! ```

mod codec;
pub mod config;
mod errors;
mod format;
mod parse;
mod tracing;
mod types;

pub use config::constants::{BALANCE_SIZE, MAX_PRECISION};
pub use config::{FormatConfig, FormatConfigBuilder};
pub use errors::BalanceError;
pub use types::balance::{Balance, BalanceComp, ByteOrder};
pub use types::unit::Unit;
