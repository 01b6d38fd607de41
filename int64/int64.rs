/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Signed 64-bit integers held as their exact 8-byte big-endian two's-complement pattern.
//!
//! An [`Int64`] either owns its 8 bytes or is a view into a larger caller region, so a field embedded in
//! a binary message can be decoded and re-encoded in place. Conversion to `f64` is exact only up to
//! ±2^53; [`Int64::approximation_error`] reports when it is not. The hex and byte forms are always exact.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use bytes::{util::HexBytesFormatter, ByteWindow};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub mod convert;
pub mod error;
pub mod parse;
mod sign;

pub use crate::error::Int64Error;

pub(crate) const LENGTH: usize = 8;

#[derive(Clone)]
pub struct Int64<'bytes> {
    bytes: ByteWindow<'bytes, LENGTH>,
}

impl Int64<'_> {
    /// Largest magnitude an `f64` holds with integer precision: 2^53.
    pub const MAX_INT: f64 = 9007199254740992.0;
    pub const MIN_INT: f64 = -Self::MAX_INT;
    pub const LENGTH: usize = LENGTH;
}

impl<'bytes> Int64<'bytes> {
    pub fn is_negative(&self) -> bool {
        self.bytes[0] & 0x80 != 0
    }

    /// Two's-complement negation in place, wrapping: the minimum value negates to itself.
    /// Applying it twice restores the original bytes.
    pub fn negate(&mut self) {
        bytes::util::negate_in_place(&mut self.bytes);
    }

    /// The 8 bytes as stored, without copying.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_borrowed(&self) -> bool {
        self.bytes.is_borrowed()
    }

    pub fn offset(&self) -> usize {
        self.bytes.offset()
    }

    /// The whole region this value is a view into, or `None` when the bytes are owned.
    pub fn region(&self) -> Option<&[u8]> {
        self.bytes.region()
    }

    /// Writes to the region are visible through this value.
    pub fn region_mut(&mut self) -> Option<&mut [u8]> {
        self.bytes.region_mut()
    }

    pub fn to_owned_value(&self) -> Int64<'static> {
        Int64 { bytes: self.bytes.to_owned_window() }
    }

    pub fn into_owned(self) -> Int64<'static> {
        Int64 { bytes: self.bytes.into_owned() }
    }
}

impl Default for Int64<'static> {
    fn default() -> Self {
        Self { bytes: ByteWindow::zeros() }
    }
}

impl fmt::Display for Int64<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", HexBytesFormatter::borrowed(&self.bytes))
    }
}

impl fmt::LowerHex for Int64<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexBytesFormatter::borrowed(&self.bytes), f)
    }
}

impl fmt::UpperHex for Int64<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexBytesFormatter::borrowed(&self.bytes).with_uppercase(true), f)
    }
}

impl fmt::Debug for Int64<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int64").field("value", &self.to_i64()).field("bytes", &self.bytes).finish()
    }
}

impl PartialEq for Int64<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Int64<'_> {}

impl Hash for Int64<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state)
    }
}

/// Orders by signed value, not by bit pattern.
impl PartialOrd for Int64<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int64<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_i64().cmp(&other.to_i64())
    }
}

impl Serialize for Int64<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Int64<'static> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex_str(&hex).map_err(de::Error::custom)
    }
}
