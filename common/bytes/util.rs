/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{borrow::Cow, fmt};

use error::coded_error;
use itertools::Itertools;

///
/// Performs an in-place big-endian two's-complement negation.
/// Each byte is complemented and a carry of one ripples up from the least significant byte.
/// Wraps on overflow: the minimum value (0x80 followed by zeros) negates to itself.
///
pub fn negate_in_place(bytes: &mut [u8]) {
    let mut carry = 1u8;
    for byte in bytes.iter_mut().rev() {
        let (val, overflow) = (*byte ^ 0xff).overflowing_add(carry);
        *byte = val;
        carry = overflow as u8;
    }
}

pub struct HexBytesFormatter<'a> {
    bytes: Cow<'a, [u8]>,
    separator: &'a str,
    uppercase: bool,
}

impl<'a> HexBytesFormatter<'a> {
    pub fn borrowed(bytes: &'a [u8]) -> Self {
        Self { bytes: Cow::Borrowed(bytes), separator: "", uppercase: false }
    }

    pub fn owned(bytes: Vec<u8>) -> HexBytesFormatter<'static> {
        HexBytesFormatter { bytes: Cow::Owned(bytes), separator: "", uppercase: false }
    }

    pub fn with_separator(self, separator: &'a str) -> Self {
        Self { separator, ..self }
    }

    pub fn with_uppercase(self, uppercase: bool) -> Self {
        Self { uppercase, ..self }
    }
}

/// Two hex digits per octet, most significant first. The alternate flag (`{:#}`) adds a `0x` prefix.
impl fmt::Display for HexBytesFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let uppercase = self.uppercase;
        let octets = self.bytes.iter().format_with(self.separator, |byte, write| {
            if uppercase {
                write(&format_args!("{byte:02X}"))
            } else {
                write(&format_args!("{byte:02x}"))
            }
        });
        write!(f, "{octets}")
    }
}

impl fmt::Debug for HexBytesFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#}")
    }
}

coded_error! {
    pub BytesError(component = "Bytes", prefix = "BYT") {
        RegionTooShort(
            1,
            "Region of {region_length} bytes cannot hold a {window_length}-byte window at offset {offset}.",
            region_length: usize,
            offset: usize,
            window_length: usize
        ),
        InvalidLength(2, "Expected exactly {expected} bytes but found {actual}.", expected: usize, actual: usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_small_values() {
        let mut one = [0, 0, 0, 0, 0, 0, 0, 1];
        negate_in_place(&mut one);
        assert_eq!(one, [0xff; 8]);

        let mut zero = [0u8; 8];
        negate_in_place(&mut zero);
        assert_eq!(zero, [0u8; 8]);
    }

    #[test]
    fn negate_carries_across_bytes() {
        let mut bytes = [0, 0, 0, 0, 0, 0, 1, 0];
        negate_in_place(&mut bytes);
        assert_eq!(bytes, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00]);
        assert_eq!(i64::from_be_bytes(bytes), -256);
    }

    #[test]
    fn negate_minimum_wraps_to_itself() {
        let minimum = i64::MIN.to_be_bytes();
        let mut bytes = minimum;
        negate_in_place(&mut bytes);
        assert_eq!(bytes, minimum);
    }

    #[test]
    fn negate_twice_restores_pattern() {
        let patterns = [
            [0x0f, 0xf1, 0x23, 0x45, 0x00, 0x65, 0x43, 0x21],
            [0x80, 0, 0, 0, 0, 0, 0, 1],
            [0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
            [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x10, 0x00],
        ];
        for pattern in patterns {
            let mut bytes = pattern;
            negate_in_place(&mut bytes);
            assert_eq!(i64::from_be_bytes(bytes), i64::from_be_bytes(pattern).wrapping_neg());
            negate_in_place(&mut bytes);
            assert_eq!(bytes, pattern);
        }
    }

    #[test]
    fn hex_formatting() {
        let bytes = [0x0f, 0xf1, 0x23, 0x45, 0x00, 0x65, 0x43, 0xab];
        assert_eq!(HexBytesFormatter::borrowed(&bytes).to_string(), "0ff12345006543ab");
        assert_eq!(format!("{:#}", HexBytesFormatter::borrowed(&bytes)), "0x0ff12345006543ab");
        assert_eq!(
            HexBytesFormatter::owned(bytes.to_vec()).with_separator(":").with_uppercase(true).to_string(),
            "0F:F1:23:45:00:65:43:AB"
        );
        assert_eq!(HexBytesFormatter::borrowed(&[]).to_string(), "");
    }
}
