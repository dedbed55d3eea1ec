// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Binary and text (de)serialization of balances
//!
//! # Binary
//!
//! A balance is stored as exactly [`BALANCE_SIZE`] bytes, little-endian.
//! [`Balance::marshal_binary`] and [`Balance::unmarshal_binary`] use the same
//! byte order, so one always inverts the other. Use
//! [`Balance::bytes`] with [`ByteOrder::BigEndian`] when the most
//! significant byte has to come first.
//!
//! # Text
//!
//! The text form is the `Display` form: `Mxrb` with up to 33 fractional
//! digits, which is enough to represent every raw amount exactly. `serde`
//! uses the text form for human-readable formats, so JSON balances are
//! strings, and a bare JSON integer up to `u64::MAX` is also read as `Mxrb`.
//! Compact formats such as bincode store the raw amount as a `u128`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::config::constants::BALANCE_SIZE;
use crate::errors::BalanceError;
use crate::tracing::spans;
use crate::types::balance::{Balance, ByteOrder};
use crate::types::unit::Unit;

impl Balance {
    /// Little-endian binary form
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::Balance;
    ///
    /// let balance = Balance::from(1u128);
    /// let bytes = balance.marshal_binary();
    /// assert_eq!(bytes[0], 1);
    /// assert_eq!(Balance::unmarshal_binary(&bytes).unwrap(), balance);
    /// ```
    pub fn marshal_binary(&self) -> [u8; BALANCE_SIZE] {
        self.bytes(ByteOrder::LittleEndian)
    }

    /// Decode the little-endian binary form
    ///
    /// # Errors
    ///
    /// Returns `BadBalanceSize` unless `data` is exactly 16 bytes long.
    pub fn unmarshal_binary(data: &[u8]) -> Result<Balance, BalanceError> {
        let span = spans::unmarshal_binary(data.len());
        let _guard = span.enter();

        let bytes: [u8; BALANCE_SIZE] = data.try_into().map_err(|_| {
            debug!(len = data.len(), "Rejected binary balance");
            BalanceError::bad_balance_size(data.len())
        })?;

        Ok(Balance::from(u128::from_le_bytes(bytes)))
    }

    /// Text form: `Mxrb` with maximum precision
    pub fn marshal_text(&self) -> String {
        self.to_string()
    }

    /// Decode the text form (`Mxrb`)
    ///
    /// # Examples
    ///
    /// ```
    /// use xrb_balance::Balance;
    ///
    /// let balance = Balance::parse("3.25", "xrb").unwrap();
    /// let text = balance.marshal_text();
    /// assert_eq!(text, "0.00000325");
    /// assert_eq!(Balance::unmarshal_text(&text).unwrap(), balance);
    /// ```
    pub fn unmarshal_text(text: &str) -> Result<Balance, BalanceError> {
        Balance::parse_in(text, Unit::DEFAULT)
    }
}

impl TryFrom<&[u8]> for Balance {
    type Error = BalanceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Balance::unmarshal_binary(value)
    }
}

impl Serialize for Balance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.marshal_text())
        } else {
            // Compact formats carry the raw amount as a native integer
            self.as_u128().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BalanceVisitor;

        impl Visitor<'_> for BalanceVisitor {
            type Value = Balance;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a decimal Mxrb amount as a string or unsigned integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Balance::unmarshal_text(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Balance::unmarshal_text(&value.to_string()).map_err(de::Error::custom)
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Balance::unmarshal_text(&value.to_string()).map_err(de::Error::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(BalanceVisitor)
        } else {
            u128::deserialize(deserializer).map(Balance::from)
        }
    }
}
