//! Utility functions and traits for `ProbingTable`

use crate::{ProbingSet, ProbingTable, error::Result};

/// Extension trait for tables that provides snapshot and bulk-insert helpers
pub trait TableExtensions<V> {
    /// Returns the live keys as a Vec, in slot order
    fn keys(&self) -> Vec<i64>;

    /// Returns the live values as a Vec, in slot order
    fn values(&self) -> Vec<V>;

    /// Inserts every pair, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `insert`; earlier pairs stay inserted.
    fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (i64, V)>;
}

impl<V> TableExtensions<V> for ProbingTable<V>
where
    V: Clone,
{
    fn keys(&self) -> Vec<i64> {
        self.iter().map(|(k, _)| k).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = (i64, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value)?;
        }
        Ok(())
    }
}

/// Creates a `ProbingTable` with `capacity` initial slots from an iterator of key-value pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Returns [`crate::TableError::InvalidCapacity`] if `capacity` is 0, or the first insert
/// error.
pub fn from_pairs<V, I>(capacity: usize, iter: I) -> Result<ProbingTable<V>>
where
    I: IntoIterator<Item = (i64, V)>,
{
    let mut table = ProbingTable::new(capacity)?;
    for (key, value) in iter {
        table.insert(key, value)?;
    }
    Ok(table)
}

/// Creates a `ProbingSet` with `capacity` initial slots from an iterator of keys.
///
/// # Errors
///
/// Returns [`crate::TableError::InvalidCapacity`] if `capacity` is 0, or the first insert
/// error.
pub fn from_keys<I>(capacity: usize, iter: I) -> Result<ProbingSet>
where
    I: IntoIterator<Item = i64>,
{
    from_pairs(capacity, iter.into_iter().map(|key| (key, ())))
}
