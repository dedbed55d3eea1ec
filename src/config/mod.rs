//! Display configuration for balances
//!
//! A [`FormatConfig`] selects the unit and the number of fractional digits a
//! balance is rendered with. The default matches [`Balance`](crate::Balance)'s
//! `Display` impl: `Mxrb` with the maximum precision of 33 digits.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use xrb_balance::{Balance, FormatConfig};
//!
//! let balance = Balance::parse("1.25", "Mxrb").unwrap();
//! assert_eq!(balance.display_with(&FormatConfig::default()), "1.25");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use xrb_balance::{Balance, FormatConfigBuilder, Unit};
//!
//! let config = FormatConfigBuilder::new()
//!     .unit(Unit::Xrb)
//!     .precision(2)
//!     .build();
//!
//! let balance = Balance::parse("1.23456", "xrb").unwrap();
//! assert_eq!(balance.display_with(&config), "1.23");
//! ```

use serde::{Deserialize, Serialize};

use crate::types::unit::Unit;

pub mod constants;

use constants::MAX_PRECISION;

/// Configuration for rendering balances as decimal strings
///
/// Use [`FormatConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Unit the raw amount is scaled to
    /// Default: `Mxrb`
    pub unit: Unit,

    /// Number of fractional digits kept; extra digits are truncated
    /// Default: 33
    pub precision: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            unit: Unit::DEFAULT,
            precision: MAX_PRECISION,
        }
    }
}

impl FormatConfig {
    /// Render in raw with no fractional digits
    ///
    /// # Example
    ///
    /// ```rust
    /// use xrb_balance::{Balance, FormatConfig};
    ///
    /// let balance = Balance::parse("1", "Mxrb").unwrap();
    /// assert_eq!(
    ///     balance.display_with(&FormatConfig::raw()),
    ///     "1000000000000000000000000000000"
    /// );
    /// ```
    pub fn raw() -> Self {
        Self {
            unit: Unit::Raw,
            precision: 0,
        }
    }

    /// Render in `xrb` with the given number of fractional digits
    pub fn xrb(precision: u32) -> Self {
        Self {
            unit: Unit::Xrb,
            precision: precision.min(MAX_PRECISION),
        }
    }
}

/// Builder for [`FormatConfig`]
///
/// Starts from [`FormatConfig::default`].
///
/// # Example
///
/// ```rust
/// use xrb_balance::{FormatConfigBuilder, Unit};
///
/// let config = FormatConfigBuilder::new()
///     .unit(Unit::KiloXrb)
///     .precision(6)
///     .build();
/// assert_eq!(config.unit, Unit::KiloXrb);
/// assert_eq!(config.precision, 6);
/// ```
#[derive(Debug, Default)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display unit
    pub fn unit(mut self, unit: Unit) -> Self {
        self.config.unit = unit;
        self
    }

    /// Set the number of fractional digits
    ///
    /// Values above 33 are clamped, since no unit needs more digits to show
    /// a single raw.
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision.min(MAX_PRECISION);
        self
    }

    /// Build the configuration
    pub fn build(self) -> FormatConfig {
        self.config
    }
}
