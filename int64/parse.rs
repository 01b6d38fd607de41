/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use bytes::ByteWindow;
use tracing::trace;

use crate::{error::Int64Error, Int64, LENGTH};

const WORD_RANGE: f64 = 4294967296.0; // 2^32
const INT64_RANGE: f64 = WORD_RANGE * WORD_RANGE;
const WORD_HEX_DIGITS: usize = 8;

impl Int64<'static> {
    pub fn from_words(hi: u32, lo: u32) -> Self {
        let mut value = Self::default();
        value.set_words(hi, lo);
        value
    }

    pub fn from_i64(number: i64) -> Self {
        let mut value = Self::default();
        value.set_i64(number);
        value
    }

    pub fn from_f64(number: f64) -> Result<Self, Int64Error> {
        let mut value = Self::default();
        value.set_f64(number)?;
        Ok(value)
    }

    pub fn from_hex_str(hex: &str) -> Result<Self, Int64Error> {
        let mut value = Self::default();
        value.set_hex_str(hex)?;
        Ok(value)
    }
}

impl<'bytes> Int64<'bytes> {
    /// Views the 8 bytes at `region[offset..offset + 8]` in place. Whatever pattern is there is taken as-is.
    pub fn from_region(region: &'bytes mut [u8], offset: usize) -> Result<Self, Int64Error> {
        let bytes = ByteWindow::borrowed(region, offset).map_err(|typed_source| {
            trace!("Rejected byte region for an Int64 view: {typed_source}");
            Int64Error::Region { typed_source }
        })?;
        Ok(Self { bytes })
    }

    pub fn from_region_start(region: &'bytes mut [u8]) -> Result<Self, Int64Error> {
        Self::from_region(region, 0)
    }

    /// Writes the raw bits of `hi` and `lo` as the high and low halves, without any sign correction.
    pub fn set_words(&mut self, hi: u32, lo: u32) {
        let mut encoded = [0; LENGTH];
        encoded[..4].copy_from_slice(&hi.to_be_bytes());
        encoded[4..].copy_from_slice(&lo.to_be_bytes());
        self.bytes.write(&encoded);
    }

    pub fn set_i64(&mut self, number: i64) {
        let magnitude = number.unsigned_abs();
        self.set_words((magnitude >> 32) as u32, magnitude as u32);
        if number < 0 {
            self.negate();
        }
    }

    /// Encodes the integer part of `number`; any fraction is truncated toward zero.
    ///
    /// Magnitudes in `[2^63, 2^64)` are accepted and wrap into the two's-complement pattern of the same
    /// low 64 bits. On error the current bytes are left untouched.
    pub fn set_f64(&mut self, number: f64) -> Result<(), Int64Error> {
        if number.is_nan() {
            trace!("Rejected NaN as an Int64");
            return Err(Int64Error::NotANumber {});
        }
        let negate = number < 0.0;
        let magnitude = number.abs().trunc();
        if magnitude >= INT64_RANGE {
            trace!("Rejected {number} as outside the Int64 range");
            return Err(Int64Error::OutOfRange { value: number });
        }
        let hi = (magnitude / WORD_RANGE).floor() as u32;
        let lo = (magnitude % WORD_RANGE) as u32;
        self.set_words(hi, lo);
        if negate {
            self.negate();
        }
        Ok(())
    }

    /// Parses big-endian hex digits with an optional `0x`/`0X` prefix.
    ///
    /// The last 8 digits form the low word and everything before them the high word. Fewer than 16 digits
    /// leave the high-order digits zero, so an empty digit run is 0; a high part longer than 8 digits keeps only its low 32 bits.
    /// On error the current bytes are left untouched.
    pub fn set_hex_str(&mut self, hex: &str) -> Result<(), Int64Error> {
        let (prefix_length, digits) = match hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
            Some(digits) => (2, digits),
            None => (0, hex),
        };
        let nibbles = digits
            .char_indices()
            .map(|(index, character)| {
                character.to_digit(16).ok_or_else(|| {
                    trace!("Rejected non-hex character '{character}' in '{hex}'");
                    Int64Error::InvalidHexDigit { input: hex.to_owned(), character, position: prefix_length + index }
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        let (hi_nibbles, lo_nibbles) = nibbles.split_at(nibbles.len().saturating_sub(WORD_HEX_DIGITS));
        self.set_words(fold_word(hi_nibbles), fold_word(lo_nibbles));
        Ok(())
    }
}

fn fold_word(nibbles: &[u32]) -> u32 {
    nibbles.iter().fold(0u32, |word, nibble| word.wrapping_shl(4) | nibble)
}

impl FromStr for Int64<'static> {
    type Err = Int64Error;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(hex)
    }
}

impl TryFrom<f64> for Int64<'static> {
    type Error = Int64Error;

    fn try_from(number: f64) -> Result<Self, Self::Error> {
        Self::from_f64(number)
    }
}

impl From<i64> for Int64<'static> {
    fn from(number: i64) -> Self {
        Self::from_i64(number)
    }
}
