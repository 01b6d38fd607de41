/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bytes::util::HexBytesFormatter;
use options::HexFormatOptions;
use tracing::trace;

use crate::{error::Int64Error, sign::NegatedScope, Int64, LENGTH};

const MAX_ACCURATE_MAGNITUDE: u64 = 1 << 53;

impl<'bytes> Int64<'bytes> {
    /// The nearest `f64` to the encoded value, accumulated from the least significant byte up.
    ///
    /// Exact while the magnitude is at most [`Int64::MAX_INT`]; beyond that the result is approximate and
    /// [`Int64::approximation_error`] is non-zero. A negative value is negated in place for the duration of
    /// the read and restored before returning, which is why this takes `&mut self`.
    pub fn to_f64(&mut self) -> f64 {
        let number = if self.is_negative() {
            let magnitude = NegatedScope::enter(&mut self.bytes);
            -accumulate_f64(&magnitude)
        } else {
            accumulate_f64(&self.bytes)
        };
        if number.abs() > Self::MAX_INT {
            trace!("Int64 {self} converted to the approximate number {number}");
        }
        number
    }

    /// The exact absolute value; `2^63` for the minimum value.
    pub fn magnitude(&mut self) -> u64 {
        if self.is_negative() {
            let magnitude = NegatedScope::enter(&mut self.bytes);
            accumulate_u64(&magnitude)
        } else {
            accumulate_u64(&self.bytes)
        }
    }

    /// `ceil(|value| / 2^53) - 1`, floored at 0: zero exactly when [`Int64::to_f64`] is exact, and growing
    /// with the factor by which the magnitude exceeds [`Int64::MAX_INT`].
    pub fn approximation_error(&mut self) -> u64 {
        self.magnitude().div_ceil(MAX_ACCURATE_MAGNITUDE).saturating_sub(1)
    }

    pub fn is_accurate(&mut self) -> bool {
        self.approximation_error() == 0
    }

    pub fn to_i64(&self) -> i64 {
        i64::from_be_bytes(self.bytes.to_array())
    }

    pub fn hi_word(&self) -> u32 {
        (self.to_i64() as u64 >> 32) as u32
    }

    pub fn lo_word(&self) -> u32 {
        self.to_i64() as u32
    }

    /// An independent copy of the 8 bytes, detached from any region.
    pub fn to_bytes(&self) -> [u8; LENGTH] {
        self.bytes.to_array()
    }

    /// Copies the 8 bytes to `target[offset..offset + 8]`; neither the rest of `target` nor this value's
    /// own backing is touched.
    pub fn copy_into(&self, target: &mut [u8], offset: usize) -> Result<(), Int64Error> {
        self.bytes.copy_into(target, offset).map_err(|typed_source| Int64Error::Region { typed_source })
    }

    /// The 16 lowercase hex digits of the bit pattern, without prefix.
    pub fn to_hex_string(&self) -> String {
        self.to_hex_string_with(&HexFormatOptions::unprefixed())
    }

    pub fn to_hex_string_with(&self, options: &HexFormatOptions) -> String {
        let formatter = HexBytesFormatter::borrowed(&self.bytes)
            .with_separator(&options.separator)
            .with_uppercase(options.uppercase);
        if options.prefix {
            format!("{formatter:#}")
        } else {
            formatter.to_string()
        }
    }

    /// Two lowercase hex digits per octet, joined with `separator`.
    pub fn to_octet_string(&self, separator: &str) -> String {
        HexBytesFormatter::borrowed(&self.bytes).with_separator(separator).to_string()
    }
}

fn accumulate_f64(bytes: &[u8]) -> f64 {
    let mut number = 0.0;
    let mut weight = 1.0;
    for byte in bytes.iter().rev() {
        number += *byte as f64 * weight;
        weight *= 256.0;
    }
    number
}

fn accumulate_u64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |magnitude, byte| magnitude << 8 | *byte as u64)
}

impl From<&Int64<'_>> for i64 {
    fn from(value: &Int64<'_>) -> Self {
        value.to_i64()
    }
}
