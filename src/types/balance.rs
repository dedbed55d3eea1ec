// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw balance type
//!
//! [`Balance`] is a 128-bit unsigned count of raw. Decimal parsing,
//! formatting and (de)serialization are implemented next to this module, in
//! the crate's `parse`, `format` and `codec` modules.

use alloy_primitives::U128;
use bigdecimal::num_bigint::BigInt;
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use crate::config::constants::BALANCE_SIZE;
use crate::errors::BalanceError;

/// An amount of raw, the smallest indivisible currency unit
///
/// The value is always in `[0, 2^128 - 1]` and carries no unit: units only
/// exist when converting to or from decimal text.
///
/// # Examples
///
/// ```
/// use xrb_balance::{Balance, BalanceComp};
///
/// let one = Balance::parse("1", "Mxrb").unwrap();
/// let half = Balance::parse("0.5", "Mxrb").unwrap();
///
/// assert_eq!(half + half, one);
/// assert_eq!(one.compare(&half), BalanceComp::Bigger);
/// assert_eq!(one.unit_string("raw", 0).unwrap(), "1000000000000000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Balance(U128);

/// Result of comparing two balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceComp {
    /// Both balances hold the same raw amount
    Equal,
    /// The left balance is larger
    Bigger,
    /// The left balance is smaller
    Smaller,
}

impl From<Ordering> for BalanceComp {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Equal => BalanceComp::Equal,
            Ordering::Greater => BalanceComp::Bigger,
            Ordering::Less => BalanceComp::Smaller,
        }
    }
}

/// Byte layout of [`Balance::bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (the natural layout)
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl Balance {
    /// Zero raw
    pub const ZERO: Self = Self(U128::ZERO);

    /// Largest representable balance, 2^128 - 1 raw
    pub const MAX: Self = Self(U128::MAX);

    /// Create a balance from a raw amount
    pub const fn new(raw: U128) -> Self {
        Self(raw)
    }

    /// Create a balance from its high and low 64-bit halves
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::Balance;
    ///
    /// let balance = Balance::from_parts(1, 2);
    /// assert_eq!(balance.as_u128(), (1u128 << 64) | 2);
    /// ```
    pub const fn from_parts(hi: u64, lo: u64) -> Self {
        Self(U128::from_limbs([lo, hi]))
    }

    /// Get the inner U128 value (in raw)
    pub const fn as_uint(&self) -> U128 {
        self.0
    }

    /// Get the raw amount as a native integer
    pub fn as_u128(&self) -> u128 {
        self.0.to::<u128>()
    }

    /// Check if the balance is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The 16-byte representation in the requested byte order
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::{Balance, ByteOrder};
    ///
    /// let balance = Balance::from(0x0102u128);
    /// assert_eq!(balance.bytes(ByteOrder::BigEndian)[14..], [0x01, 0x02]);
    /// assert_eq!(balance.bytes(ByteOrder::LittleEndian)[..2], [0x02, 0x01]);
    /// ```
    pub fn bytes(&self, order: ByteOrder) -> [u8; BALANCE_SIZE] {
        let mut bytes = self.0.to_be_bytes::<BALANCE_SIZE>();
        if order == ByteOrder::LittleEndian {
            bytes.reverse();
        }
        bytes
    }

    /// The raw amount as an arbitrary-precision integer
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.as_u128())
    }

    /// Whether both balances hold the same raw amount
    pub fn equal(&self, other: &Balance) -> bool {
        self.0 == other.0
    }

    /// Three-way comparison of the raw amounts
    pub fn compare(&self, other: &Balance) -> BalanceComp {
        self.0.cmp(&other.0).into()
    }

    /// Sum of two balances, wrapping modulo 2^128
    ///
    /// This is what the `+` operator does. Use
    /// [`checked_add`](Self::checked_add) to detect overflow instead.
    pub fn wrapping_add(&self, other: &Balance) -> Balance {
        Self(self.0.wrapping_add(other.0))
    }

    /// Difference of two balances, wrapping modulo 2^128
    ///
    /// This is what the `-` operator does. Use
    /// [`checked_sub`](Self::checked_sub) to detect underflow instead.
    pub fn wrapping_sub(&self, other: &Balance) -> Balance {
        Self(self.0.wrapping_sub(other.0))
    }

    /// Sum of two balances, failing with `BalanceOverflow` past 2^128 - 1
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::{Balance, BalanceError};
    ///
    /// let one = Balance::from(1u128);
    /// assert_eq!(Balance::MAX.checked_add(&one), Err(BalanceError::BalanceOverflow));
    /// ```
    pub fn checked_add(&self, other: &Balance) -> Result<Balance, BalanceError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(BalanceError::BalanceOverflow)
    }

    /// Difference of two balances, failing with `BalanceUnderflow` below zero
    pub fn checked_sub(&self, other: &Balance) -> Result<Balance, BalanceError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(BalanceError::BalanceUnderflow)
    }
}

impl From<u128> for Balance {
    fn from(value: u128) -> Self {
        Self(U128::from(value))
    }
}

impl From<U128> for Balance {
    fn from(value: U128) -> Self {
        Self(value)
    }
}

impl From<Balance> for U128 {
    fn from(value: Balance) -> Self {
        value.0
    }
}

impl Add for Balance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(&rhs)
    }
}

impl Sub for Balance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(&rhs)
    }
}
