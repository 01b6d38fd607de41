/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::util::{BytesError, HexBytesFormatter};

/// A fixed-width run of bytes that is either owned inline, or a view into a larger caller region.
///
/// A `Borrowed` window never copies: reads and writes go straight to `region[offset..offset + LENGTH]`,
/// so changes are visible to the region's owner once the window is released, and changes made through
/// [`ByteWindow::region_mut`] are visible through the window immediately.
pub enum ByteWindow<'bytes, const LENGTH: usize> {
    Owned([u8; LENGTH]),
    Borrowed { region: &'bytes mut [u8], offset: usize },
}

impl<const LENGTH: usize> ByteWindow<'static, LENGTH> {
    pub const fn zeros() -> Self {
        Self::Owned([0; LENGTH])
    }

    pub const fn owned(bytes: [u8; LENGTH]) -> Self {
        Self::Owned(bytes)
    }
}

impl<'bytes, const LENGTH: usize> ByteWindow<'bytes, LENGTH> {
    /// Fails unless the region holds at least `offset + LENGTH` bytes.
    pub fn borrowed(region: &'bytes mut [u8], offset: usize) -> Result<Self, BytesError> {
        match offset.checked_add(LENGTH) {
            Some(end) if end <= region.len() => Ok(Self::Borrowed { region, offset }),
            _ => Err(BytesError::RegionTooShort { region_length: region.len(), offset, window_length: LENGTH }),
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Self::Borrowed { .. })
    }

    /// Position of the window inside its region; always 0 when owned.
    pub fn offset(&self) -> usize {
        match self {
            Self::Owned(_) => 0,
            Self::Borrowed { offset, .. } => *offset,
        }
    }

    pub fn region(&self) -> Option<&[u8]> {
        match self {
            Self::Owned(_) => None,
            Self::Borrowed { region, .. } => Some(&**region),
        }
    }

    pub fn region_mut(&mut self) -> Option<&mut [u8]> {
        match self {
            Self::Owned(_) => None,
            Self::Borrowed { region, .. } => Some(&mut **region),
        }
    }

    pub fn to_array(&self) -> [u8; LENGTH] {
        let mut bytes = [0; LENGTH];
        bytes.copy_from_slice(self);
        bytes
    }

    /// Overwrites the whole window in one copy.
    pub fn write(&mut self, bytes: &[u8; LENGTH]) {
        self.copy_from_slice(bytes);
    }

    /// Copies the window into `target[offset..offset + LENGTH]`, leaving the rest of `target` and the
    /// window's own backing untouched.
    pub fn copy_into(&self, target: &mut [u8], offset: usize) -> Result<(), BytesError> {
        match offset.checked_add(LENGTH) {
            Some(end) if end <= target.len() => {
                target[offset..end].copy_from_slice(self);
                Ok(())
            }
            _ => Err(BytesError::RegionTooShort { region_length: target.len(), offset, window_length: LENGTH }),
        }
    }

    pub fn to_owned_window(&self) -> ByteWindow<'static, LENGTH> {
        ByteWindow::Owned(self.to_array())
    }

    pub fn into_owned(self) -> ByteWindow<'static, LENGTH> {
        match self {
            Self::Owned(bytes) => ByteWindow::Owned(bytes),
            borrowed => borrowed.to_owned_window(),
        }
    }
}

impl<const LENGTH: usize> Default for ByteWindow<'static, LENGTH> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const LENGTH: usize> TryFrom<&[u8]> for ByteWindow<'static, LENGTH> {
    type Error = BytesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; LENGTH] =
            bytes.try_into().map_err(|_| BytesError::InvalidLength { expected: LENGTH, actual: bytes.len() })?;
        Ok(Self::Owned(array))
    }
}

impl<const LENGTH: usize> Clone for ByteWindow<'_, LENGTH> {
    fn clone(&self) -> Self {
        Self::Owned(self.to_array())
    }
}

impl<const LENGTH: usize> Deref for ByteWindow<'_, LENGTH> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed { region, offset } => &region[*offset..][..LENGTH],
        }
    }
}

impl<const LENGTH: usize> DerefMut for ByteWindow<'_, LENGTH> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed { region, offset } => &mut region[*offset..][..LENGTH],
        }
    }
}

impl<const LENGTH: usize> AsRef<[u8]> for ByteWindow<'_, LENGTH> {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl<const LENGTH: usize> fmt::Debug for ByteWindow<'_, LENGTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(_) => f.debug_tuple("Owned").field(&HexBytesFormatter::borrowed(self)).finish(),
            Self::Borrowed { offset, .. } => f
                .debug_struct("Borrowed")
                .field("offset", offset)
                .field("window", &HexBytesFormatter::borrowed(self))
                .finish(),
        }
    }
}

impl<const LENGTH: usize> PartialEq for ByteWindow<'_, LENGTH> {
    fn eq(&self, other: &Self) -> bool {
        (**self).eq(&**other)
    }
}

impl<const LENGTH: usize> Eq for ByteWindow<'_, LENGTH> {}

impl<const LENGTH: usize> Hash for ByteWindow<'_, LENGTH> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl<const LENGTH: usize> Serialize for ByteWindow<'_, LENGTH> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self)
    }
}

impl<'de, const LENGTH: usize> Deserialize<'de> for ByteWindow<'static, LENGTH> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::try_from(bytes.as_slice()).map_err(|_| de::Error::invalid_length(bytes.len(), &"an exact-width byte window"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_window_bounds() {
        let mut region = [0u8; 16];
        assert!(ByteWindow::<8>::borrowed(&mut region, 8).is_ok());
        assert!(matches!(
            ByteWindow::<8>::borrowed(&mut region, 9),
            Err(BytesError::RegionTooShort { region_length: 16, offset: 9, window_length: 8 })
        ));
        assert!(ByteWindow::<8>::borrowed(&mut region, usize::MAX).is_err());
        assert!(ByteWindow::<8>::borrowed(&mut [0u8; 7], 0).is_err());
    }

    #[test]
    fn borrowed_window_writes_through() {
        let mut region = [0xaau8; 12];
        {
            let mut window = ByteWindow::<4>::borrowed(&mut region, 3).unwrap();
            window.write(&[1, 2, 3, 4]);
            assert_eq!(window.to_array(), [1, 2, 3, 4]);

            window.region_mut().unwrap()[4] = 9;
            assert_eq!(&*window, &[1, 9, 3, 4]);
        }
        assert_eq!(region, [0xaa, 0xaa, 0xaa, 1, 9, 3, 4, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa]);
    }

    #[test]
    fn copy_into_target_region() {
        let window = ByteWindow::owned([1, 2, 3, 4]);
        let mut target = [0u8; 6];
        window.copy_into(&mut target, 1).unwrap();
        assert_eq!(target, [0, 1, 2, 3, 4, 0]);
        assert!(window.copy_into(&mut target, 3).is_err());
        assert_eq!(target, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn clone_detaches_from_region() {
        let mut region = [5u8; 8];
        let window = ByteWindow::<4>::borrowed(&mut region, 2).unwrap();
        let copy = window.clone();
        assert!(!copy.is_borrowed());
        assert_eq!(copy, window);
        assert_eq!(window.into_owned(), ByteWindow::owned([5; 4]));
    }

    #[test]
    fn serde_as_raw_bytes() {
        let window = ByteWindow::owned([0, 1, 254, 255]);
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, "[0,1,254,255]");
        let decoded: ByteWindow<'static, 4> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, window);
        assert!(serde_json::from_str::<ByteWindow<'static, 4>>("[1,2,3]").is_err());
    }
}
