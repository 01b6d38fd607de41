/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use bytes::util::BytesError;
use error::coded_error;

coded_error! {
    pub Int64Error(component = "Int64", prefix = "INT") {
        OutOfRange(1, "Number {value} is outside the Int64 range: its magnitude must be below 2^64.", value: f64),
        NotANumber(2, "NaN cannot be encoded as an Int64."),
        InvalidHexDigit(
            3,
            "Invalid hexadecimal digit '{character}' at position {position} of '{input}'.",
            input: String,
            character: char,
            position: usize
        ),
        Region(4, "Cannot place an Int64 in the given byte region.", ( typed_source : BytesError )),
    }
}
