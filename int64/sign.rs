/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::Deref;

use bytes::{util::negate_in_place, ByteWindow};

use crate::LENGTH;

/// Holds a window in its two's-complement negated form for as long as the scope is alive.
///
/// Dropping the scope applies the negation a second time, which restores the original pattern
/// bit-for-bit, also when the code inside the scope unwinds.
pub(crate) struct NegatedScope<'scope, 'bytes> {
    window: &'scope mut ByteWindow<'bytes, LENGTH>,
}

impl<'scope, 'bytes> NegatedScope<'scope, 'bytes> {
    pub(crate) fn enter(window: &'scope mut ByteWindow<'bytes, LENGTH>) -> Self {
        negate_in_place(&mut **window);
        Self { window }
    }
}

impl Deref for NegatedScope<'_, '_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &**self.window
    }
}

impl Drop for NegatedScope<'_, '_> {
    fn drop(&mut self) {
        negate_in_place(&mut **self.window);
    }
}
