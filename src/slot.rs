//! Slot representation and the base hash

/// State of one position in the slot array.
///
/// Every `i64` is a legal key: emptiness and deletion live in the tag, not in reserved
/// key values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<V> {
    /// Never occupied since the table was created, cleared or last resized
    Empty,
    /// Held an entry that was removed; probe chains continue through it
    Tombstone,
    /// A live entry
    Occupied {
        /// The stored key
        key: i64,
        /// The stored value, `()` for sets
        value: V,
    },
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<V> Slot<V> {
    /// Returns true for a live entry
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }

    /// Returns true for a tombstone
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    /// Returns the key of a live entry
    #[must_use]
    pub fn key(&self) -> Option<i64> {
        match self {
            Self::Occupied { key, .. } => Some(*key),
            Self::Empty | Self::Tombstone => None,
        }
    }
}

/// Home index of `key` in a table of `capacity` slots: `key mod capacity`, taken in
/// `[0, capacity)` for negative keys as well.
///
/// `capacity` must be non-zero.
#[must_use]
pub(crate) fn base_hash(key: i64, capacity: usize) -> usize {
    let modulus = i128::try_from(capacity).unwrap_or(i128::MAX).max(1);
    let index = i128::from(key).rem_euclid(modulus);
    usize::try_from(index).unwrap_or_default()
}

/// Next index in a linear probe sequence, wrapping to 0 at `capacity`
#[must_use]
pub(crate) fn next_index(index: usize, capacity: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= capacity { 0 } else { next }
}
