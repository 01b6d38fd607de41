/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub const DEFAULT_HEX_PREFIX: bool = true;
pub const DEFAULT_HEX_UPPERCASE: bool = false;
pub const DEFAULT_OCTET_SEPARATOR: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexFormatOptions {
    pub prefix: bool,
    pub uppercase: bool,
    pub separator: String,
}

impl HexFormatOptions {
    /// Bare digits, as produced by `{:x}`.
    pub fn unprefixed() -> Self {
        Self { prefix: false, ..Self::default() }
    }
}

impl Default for HexFormatOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_HEX_PREFIX,
            uppercase: DEFAULT_HEX_UPPERCASE,
            separator: DEFAULT_OCTET_SEPARATOR.to_owned(),
        }
    }
}
