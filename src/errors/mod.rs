//! Error types for the xrb-balance library.
//!
//! All public fallible APIs return [`BalanceError`]. Failures that would
//! indicate a broken invariant (an impossible comparison result, an
//! unsupported byte order) are ruled out by closed enums and have no variant
//! here.
//!
//! # Examples
//!
//! ```rust
//! use xrb_balance::{Balance, BalanceError};
//!
//! fn parse_user_amount(text: &str) -> Result<Balance, BalanceError> {
//!     let amount = Balance::parse(text, "xrb")?;
//!     Ok(amount)
//! }
//!
//! assert!(parse_user_amount("1.5").is_ok());
//! assert_eq!(
//!     parse_user_amount("-1"),
//!     Err(BalanceError::negative_amount("-1"))
//! );
//! ```

mod balance;

pub use balance::BalanceError;
