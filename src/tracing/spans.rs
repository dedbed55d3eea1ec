//! Span creation helpers for balance conversions.
//!
//! Telemetry is kept out of the conversion code: each instrumented operation
//! has a matching span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T, BalanceError> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Conversion logic here
//! }
//! ```

use tracing::Span;

use crate::types::unit::Unit;

/// Create span for parsing decimal text into a balance.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn parse_balance(input: &str, unit: &str) -> Span {
    tracing::trace_span!("xrb_balance.parse_balance", input = input, unit = unit)
}

/// Create span for formatting a balance as decimal text.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn format_balance(unit: Unit, precision: u32) -> Span {
    tracing::trace_span!(
        "xrb_balance.format_balance",
        unit = %unit,
        precision = precision,
    )
}

/// Create span for decoding a binary balance.
///
/// Parent: caller's span
/// Children: None
#[inline]
pub(crate) fn unmarshal_binary(len: usize) -> Span {
    tracing::trace_span!("xrb_balance.unmarshal_binary", len = len)
}
