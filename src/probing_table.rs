use std::mem;

use crate::{
    config::TableConfig,
    error::{Result, TableError},
    slot::{Slot, base_hash, next_index},
};

/// Capacity used by `Default`
const DEFAULT_CAPACITY: usize = 16;

/// Outcome of walking a probe sequence on behalf of an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is live at this index
    Found(usize),
    /// The key is absent; this is the first tombstone or empty slot in its chain
    Vacant(usize),
    /// A full cycle saw only live entries with other keys
    Exhausted,
}

/// An open-addressing hash table over `i64` keys.
///
/// Collisions are resolved with linear probing from `key mod capacity`. Removal leaves a
/// tombstone so that entries which probed past the removed one stay reachable, and the
/// table grows (dropping all tombstones) before an insert would reach the configured
/// load factor threshold.
///
/// With `V = ()` the table is a set, see [`ProbingSet`].
///
/// Note: This implementation is not thread-safe; callers serialize access.
#[derive(Debug, Clone)]
pub struct ProbingTable<V> {
    /// The slot array, its length is the capacity
    slots: Vec<Slot<V>>,
    /// Number of occupied slots
    len: usize,
    /// Number of tombstone slots
    tombstones: usize,
    /// Resize policy
    config: TableConfig,
}

/// A set of `i64` keys
pub type ProbingSet = ProbingTable<()>;

impl<V> Default for ProbingTable<V> {
    fn default() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, TableConfig::default())
    }
}

/// Allocates `capacity` empty slots
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    std::iter::repeat_with(Slot::default).take(capacity).collect()
}

impl<V> ProbingTable<V> {
    /// Creates a table with `initial_capacity` slots and the default resize policy.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `initial_capacity` is 0.
    pub fn new(initial_capacity: usize) -> Result<Self> {
        Self::with_config(initial_capacity, TableConfig::default())
    }

    /// Creates a table with `initial_capacity` slots and the given resize policy.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidCapacity`] if `initial_capacity` is 0 and
    /// [`TableError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(initial_capacity: usize, config: TableConfig) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(TableError::invalid_capacity(initial_capacity));
        }
        config.validate()?;
        Ok(Self::from_parts(initial_capacity, config))
    }

    /// Builds a table from already checked parameters
    fn from_parts(capacity: usize, config: TableConfig) -> Self {
        Self { slots: empty_slots(capacity), len: 0, tombstones: 0, config }
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Updating an existing key never changes `len` and never resizes.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CapacityExhausted`] if no slot could be found for a new key.
    pub fn insert(&mut self, key: i64, value: V) -> Result<Option<V>> {
        let vacant = match self.probe_for_insert(key) {
            Probe::Found(index) => return Ok(self.replace_value(index, value)),
            Probe::Vacant(index) => Some(index),
            Probe::Exhausted => None,
        };

        let entries = self.len.saturating_add(1);
        let reuses_tombstone =
            matches!(vacant.and_then(|index| self.slots.get(index)), Some(Slot::Tombstone));
        let target = if self.config.is_over_threshold(entries, self.capacity()) {
            self.grow_for(entries);
            self.first_empty(key)
        } else if !reuses_tombstone &&
            self.config.is_over_threshold(entries.saturating_add(self.tombstones), self.capacity())
        {
            self.purge_tombstones();
            self.first_empty(key)
        } else {
            vacant
        };

        let Some(index) = target else {
            log::warn!(
                "no slot for key {} after a full probe cycle over {} slots",
                key,
                self.capacity()
            );
            return Err(TableError::capacity_exhausted(self.capacity()));
        };

        self.place(index, key, value);
        Ok(None)
    }

    /// Returns a reference to the value for `key`
    #[must_use]
    pub fn get(&self, key: i64) -> Option<&V> {
        match self.slots.get(self.find(key)?) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value for `key`
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let index = self.find(key)?;
        match self.slots.get_mut(index) {
            Some(Slot::Occupied { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Returns true if `key` is live in the table
    #[must_use]
    pub fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// The slot becomes a tombstone; an absent key leaves the table untouched.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let index = self.find(key)?;
        let slot = self.slots.get_mut(index)?;
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len = self.len.saturating_sub(1);
                self.tombstones = self.tombstones.saturating_add(1);
                log::trace!("key {key} tombstoned at slot {index}");
                Some(value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Removes `key`, returning whether anything was removed
    pub fn delete(&mut self, key: i64) -> bool {
        self.remove(key).is_some()
    }

    /// Returns the number of live entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of tombstones left by removals since the last rehash
    #[must_use]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the current ratio of live entries to slots
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the resize policy
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Resets every slot to empty, keeping the capacity
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.len = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over the live entries, in slot order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.slots.iter() }
    }

    /// Raw view of the slot array, for debugging and tests
    #[must_use]
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    /// Number of slots a lookup of `key` inspects before it stops
    #[must_use]
    pub fn probe_length(&self, key: i64) -> usize {
        self.locate(key).1
    }

    /// Index of the live slot holding `key`
    fn find(&self, key: i64) -> Option<usize> {
        self.locate(key).0
    }

    /// Walks the probe sequence of `key` the way a lookup does.
    ///
    /// Returns the index of the matching slot, if any, and the number of slots inspected.
    /// The walk stops on a match or an empty slot and goes through tombstones.
    fn locate(&self, key: i64) -> (Option<usize>, usize) {
        let capacity = self.capacity();
        let mut index = base_hash(key, capacity);

        for probes in 1..=capacity {
            match self.slots.get(index) {
                None | Some(Slot::Empty) => return (None, probes),
                Some(Slot::Occupied { key: stored, .. }) if *stored == key => {
                    return (Some(index), probes);
                }
                Some(Slot::Occupied { .. } | Slot::Tombstone) => {}
            }
            index = next_index(index, capacity);
        }

        (None, capacity)
    }

    /// Walks the probe sequence of `key` looking for a duplicate or a reusable slot.
    ///
    /// The first tombstone is remembered but the walk continues past it, since the key may
    /// be live further along the chain.
    fn probe_for_insert(&self, key: i64) -> Probe {
        let capacity = self.capacity();
        let mut index = base_hash(key, capacity);
        let mut first_tombstone = None;

        for _ in 0..capacity {
            match self.slots.get(index) {
                None | Some(Slot::Empty) => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Some(Slot::Tombstone) => {
                    first_tombstone.get_or_insert(index);
                }
                Some(Slot::Occupied { key: stored, .. }) if *stored == key => {
                    return Probe::Found(index);
                }
                Some(Slot::Occupied { .. }) => {}
            }
            index = next_index(index, capacity);
        }

        first_tombstone.map_or(Probe::Exhausted, Probe::Vacant)
    }

    /// First empty slot in the probe sequence of `key`, without any duplicate check
    fn first_empty(&self, key: i64) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = base_hash(key, capacity);

        for _ in 0..capacity {
            if matches!(self.slots.get(index), Some(Slot::Empty)) {
                return Some(index);
            }
            index = next_index(index, capacity);
        }

        None
    }

    /// Swaps in a new value for the live entry at `index`
    fn replace_value(&mut self, index: usize, value: V) -> Option<V> {
        match self.slots.get_mut(index) {
            Some(Slot::Occupied { key, value: current }) => {
                log::trace!("key {key} updated in place at slot {index}");
                Some(mem::replace(current, value))
            }
            _ => None,
        }
    }

    /// Writes a new entry into an empty or tombstone slot
    fn place(&mut self, index: usize, key: i64, value: V) {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.is_tombstone() {
                self.tombstones = self.tombstones.saturating_sub(1);
                log::trace!("key {key} reuses tombstone at slot {index}");
            }
            *slot = Slot::Occupied { key, value };
            self.len = self.len.saturating_add(1);
        }
    }

    /// Grows until `entries` live entries stay below the load factor threshold
    fn grow_for(&mut self, entries: usize) {
        while self.config.is_over_threshold(entries, self.capacity()) {
            let new_capacity = self.config.grown_capacity(self.capacity());
            self.resize(new_capacity);
        }
    }

    /// Grows the slot array to `new_capacity`
    fn resize(&mut self, new_capacity: usize) {
        log::debug!(
            "resizing table from {} to {} slots ({} live, {} tombstones dropped)",
            self.capacity(),
            new_capacity,
            self.len,
            self.tombstones
        );
        self.rehash(new_capacity);
    }

    /// Rebuilds the slot array at the same capacity.
    ///
    /// Runs when live entries plus tombstones would reach the load factor threshold, so
    /// that probe chains always end at an empty slot.
    fn purge_tombstones(&mut self) {
        log::debug!(
            "purging {} tombstones at {} slots ({} live)",
            self.tombstones,
            self.capacity(),
            self.len
        );
        self.rehash(self.capacity());
    }

    /// Rehashes every live entry into a fresh array of `new_capacity` slots.
    ///
    /// Tombstones are not carried over.
    fn rehash(&mut self, new_capacity: usize) {
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                let target = self.first_empty(key).and_then(|index| self.slots.get_mut(index));
                if let Some(target) = target {
                    *target = Slot::Occupied { key, value };
                }
            }
        }
    }
}

impl ProbingTable<()> {
    /// Adds `key` to the set, returning true if it was not already present.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CapacityExhausted`] if no slot could be found for a new key.
    pub fn add(&mut self, key: i64) -> Result<bool> {
        Ok(self.insert(key, ())?.is_none())
    }
}

/// Iterator over the live entries of a table
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots
    slots: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((*key, value)),
            Slot::Empty | Slot::Tombstone => None,
        })
    }
}

impl<'a, V> IntoIterator for &'a ProbingTable<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    /// Keys used by the set walkthrough, including a duplicate 48
    const WALKTHROUGH_KEYS: [i64; 14] = [13, 24, 43, 46, 48, 48, 1, 2, 3, 4, 5, 9, 19, 25];

    #[test]
    fn test_new_rejects_zero_capacity() {
        assert_eq!(
            ProbingTable::<i64>::new(0).unwrap_err(),
            TableError::InvalidCapacity { capacity: 0 }
        );
        assert!(ProbingSet::new(1).is_ok());
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let config = TableConfig::default().with_load_factor_threshold(1.0);
        assert!(matches!(
            ProbingTable::<i64>::with_config(8, config),
            Err(TableError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = ProbingTable::new(10).unwrap();
        assert_eq!(map.insert(12, 1000).unwrap(), None);
        assert_eq!(map.insert(23, 230).unwrap(), None);
        assert_eq!(map.insert(18, 500).unwrap(), None);

        assert_eq!(map.get(12), Some(&1000));
        assert_eq!(map.get(23), Some(&230));
        assert_eq!(map.get(18), Some(&500));
        assert_eq!(map.get(99), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_update() {
        let mut map = ProbingTable::new(10).unwrap();
        assert_eq!(map.insert(7, 1).unwrap(), None);
        assert_eq!(map.insert(7, 10).unwrap(), Some(1));
        assert_eq!(map.get(7), Some(&10));
        assert_eq!(map.len(), 1);
        assert_eq!(map.slots().iter().filter(|slot| slot.key() == Some(7)).count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = ProbingTable::new(10).unwrap();
        map.insert(12, 1000).unwrap();
        map.insert(23, 230).unwrap();

        assert_eq!(map.remove(23), Some(230));
        assert_eq!(map.get(23), None);
        assert!(!map.contains(23));
        assert_eq!(map.get(12), Some(&1000));
        assert_eq!(map.remove(23), None);
        assert!(!map.delete(23));
        assert_eq!(map.len(), 1);
        assert_eq!(map.tombstones(), 1);
    }

    #[test]
    fn test_remove_absent_key_leaves_table_untouched() {
        let mut set = ProbingSet::new(8).unwrap();
        set.add(1).unwrap();
        let before = set.slots().to_vec();

        assert!(!set.delete(9));
        assert!(!set.delete(2));
        assert_eq!(set.slots(), before.as_slice());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_walkthrough() {
        let mut set = ProbingSet::new(10).unwrap();
        let mut distinct = 0;

        for key in WALKTHROUGH_KEYS {
            if set.add(key).unwrap() {
                distinct += 1;
            }
            // the 8th distinct key is the one that would reach 0.75 of 10 slots
            let expected_capacity = if distinct < 8 { 10 } else { 20 };
            assert_eq!(set.capacity(), expected_capacity, "after adding {key}");
        }

        assert_eq!(distinct, 13);
        assert_eq!(set.len(), 13);
        assert!(set.contains(43));
        assert!(!set.contains(79));
        assert!(set.contains(46));

        assert!(set.delete(46));
        assert!(!set.contains(46));
        assert_eq!(set.len(), 12);

        assert!(!set.add(25).unwrap());
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn test_tombstone_keeps_chain_intact() {
        let mut set = ProbingSet::new(10).unwrap();
        // all three start probing at slot 3
        set.add(3).unwrap();
        set.add(13).unwrap();
        set.add(23).unwrap();
        assert_eq!(set.slots()[5], Slot::Occupied { key: 23, value: () });

        assert!(set.delete(13));
        assert_eq!(set.slots()[4], Slot::Tombstone);
        assert!(set.contains(3));
        assert!(set.contains(23));
        assert!(!set.contains(13));
    }

    #[test]
    fn test_duplicate_past_tombstone_is_updated_not_reinserted() {
        let mut map = ProbingTable::new(10).unwrap();
        map.insert(3, 'a').unwrap();
        map.insert(13, 'b').unwrap();
        map.insert(23, 'c').unwrap();
        map.remove(13);

        assert_eq!(map.insert(23, 'z').unwrap(), Some('c'));
        assert_eq!(map.len(), 2);
        assert_eq!(map.tombstones(), 1);
        assert_eq!(map.slots().iter().filter(|slot| slot.key() == Some(23)).count(), 1);
        assert_eq!(map.get(23), Some(&'z'));
    }

    #[test]
    fn test_reinsert_reuses_first_tombstone() {
        let mut set = ProbingSet::new(10).unwrap();
        for key in [3, 13, 23, 33] {
            set.add(key).unwrap();
        }
        set.delete(13);
        set.delete(23);
        assert_eq!(set.tombstones(), 2);

        assert!(set.add(43).unwrap());
        assert_eq!(set.slots()[4], Slot::Occupied { key: 43, value: () });
        assert_eq!(set.slots()[5], Slot::Tombstone);
        assert_eq!(set.tombstones(), 1);
        assert!(set.contains(33));
    }

    #[test]
    fn test_tombstones_purged_before_last_empty_slot() {
        let config = TableConfig::default().with_load_factor_threshold(0.99);
        let mut set = ProbingSet::with_config(4, config).unwrap();
        for key in [0, 1, 2] {
            set.add(key).unwrap();
        }
        set.delete(0);
        set.add(3).unwrap();

        // 3 live entries plus a tombstone would have filled all 4 slots
        assert_eq!(set.capacity(), 4);
        assert_eq!(set.tombstones(), 0);
        assert_eq!(set.slots()[0], Slot::Empty);
        assert!(!set.contains(4));
        assert_eq!(set.probe_length(4), 1);

        set.delete(1);
        assert!(set.add(8).unwrap());
        assert_eq!(set.slots()[0], Slot::Occupied { key: 8, value: () });
        assert_eq!(set.capacity(), 4);
        assert_eq!(set.tombstones(), 0);
        assert!(set.contains(2));
        assert!(set.contains(3));
        assert!(!set.contains(1));
    }

    #[test]
    fn test_churn_keeps_empty_slots() {
        let mut set = ProbingSet::new(8).unwrap();
        for key in [0, 1, 2] {
            set.add(key).unwrap();
        }

        for key in 3..200 {
            assert!(set.add(key).unwrap());
            assert!(set.delete(key));

            assert_eq!(set.capacity(), 8);
            assert!(set.len() + set.tombstones() < 6, "after churning {key}");
            assert!(set.slots().iter().any(|slot| matches!(slot, Slot::Empty)));
            assert!(set.probe_length(-1) < set.capacity());
        }

        assert_eq!(set.len(), 3);
        for key in [0, 1, 2] {
            assert!(set.contains(key));
        }
    }

    #[test]
    fn test_rehash_drops_tombstones() {
        let mut set = ProbingSet::new(4).unwrap();
        set.add(1).unwrap();
        set.add(2).unwrap();
        set.delete(1);
        assert_eq!(set.tombstones(), 1);

        // same-capacity rehash: the new entry would make live + tombstones reach 0.75
        set.add(7).unwrap();
        assert_eq!(set.capacity(), 4);
        assert_eq!(set.tombstones(), 0);
        assert_eq!(set.len(), 2);

        set.add(6).unwrap();
        assert_eq!(set.capacity(), 8);
        assert_eq!(set.tombstones(), 0);
        assert!(set.slots().iter().all(|slot| !slot.is_tombstone()));
        assert_eq!(set.len(), 3);
        for key in [2, 6, 7] {
            assert!(set.contains(key));
        }
        assert!(!set.contains(1));
    }

    #[test]
    fn test_update_never_resizes() {
        let mut map = ProbingTable::new(4).unwrap();
        map.insert(0, 0).unwrap();
        map.insert(1, 0).unwrap();
        map.insert(2, 0).unwrap();
        assert_eq!(map.capacity(), 8);

        let mut map = ProbingTable::new(4).unwrap();
        map.insert(0, 0).unwrap();
        map.insert(1, 0).unwrap();
        for value in 1..10 {
            map.insert(1, value).unwrap();
        }
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.get(1), Some(&9));
    }

    #[test]
    fn test_extreme_and_negative_keys() {
        let mut map = ProbingTable::new(3).unwrap();
        let keys = [i64::MIN, i64::MIN + 1, i64::MAX, -1, 0, -7];
        for (value, key) in keys.into_iter().enumerate() {
            map.insert(key, value).unwrap();
        }

        for (value, key) in keys.into_iter().enumerate() {
            assert_eq!(map.get(key), Some(&value));
        }
        assert!(map.delete(i64::MIN));
        assert!(!map.contains(i64::MIN));
        assert!(map.contains(i64::MIN + 1));
    }

    #[test]
    fn test_custom_growth_factor() {
        let config = TableConfig::default().with_load_factor_threshold(0.5).with_growth_factor(1.5);
        let mut set = ProbingSet::with_config(4, config).unwrap();
        set.add(10).unwrap();
        assert_eq!(set.capacity(), 4);
        set.add(11).unwrap();
        assert_eq!(set.capacity(), 6);
        set.add(12).unwrap();
        assert_eq!(set.capacity(), 9);
        assert!(set.load_factor() < 0.5);
    }

    #[test]
    fn test_get_mut() {
        let mut map = ProbingTable::new(8).unwrap();
        map.insert(1, 1).unwrap();

        if let Some(value) = map.get_mut(1) {
            *value += 10;
        }

        assert_eq!(map.get(1), Some(&11));
        assert_eq!(map.get_mut(2), None);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut set = ProbingSet::default();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 16);

        set.add(1).unwrap();
        set.add(2).unwrap();
        assert_eq!(set.len(), 2);

        set.delete(1);
        set.delete(2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter() {
        let mut map = ProbingTable::new(8).unwrap();
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();
        map.insert(3, 3).unwrap();
        map.remove(2);

        let mut entries: Vec<_> = map.iter().map(|(key, &value)| (key, value)).collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![(1, 1), (3, 3)]);
        assert_eq!((&map).into_iter().count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut map = ProbingTable::new(4).unwrap();
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();
        map.remove(1);

        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.tombstones(), 0);
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.get(2), None);
    }

    #[test]
    fn test_probe_length() {
        let mut set = ProbingSet::new(10).unwrap();
        set.add(3).unwrap();
        set.add(13).unwrap();
        set.add(23).unwrap();

        assert_eq!(set.probe_length(3), 1);
        assert_eq!(set.probe_length(23), 3);
        // 3, 13, 23 and then the empty slot 6
        assert_eq!(set.probe_length(33), 4);
        assert_eq!(set.probe_length(0), 1);
    }

    /// One step of a randomized workload
    #[derive(Debug, Clone)]
    enum Op {
        /// Insert or update
        Insert(i64, u32),
        /// Remove
        Remove(i64),
    }

    /// Keys from a narrow range so that collisions, updates and removals of live keys are common
    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-40i64..40, any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
            (-40i64..40).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn proptest_matches_std_hash_map(
            capacity in 1usize..32,
            ops in prop::collection::vec(op_strategy(), 0..300)
        ) {
            let mut table = ProbingTable::new(capacity).unwrap();
            let mut model = HashMap::new();

            for op in ops {
                match op {
                    Op::Insert(key, value) => {
                        prop_assert_eq!(table.insert(key, value).unwrap(), model.insert(key, value));
                    }
                    Op::Remove(key) => {
                        prop_assert_eq!(table.remove(key), model.remove(&key));
                    }
                }
                prop_assert_eq!(table.len(), model.len());
            }

            for key in -40i64..40 {
                prop_assert_eq!(table.get(key), model.get(&key));
            }
            let occupied = table.slots().iter().filter(|slot| slot.is_occupied()).count();
            let tombstones = table.slots().iter().filter(|slot| slot.is_tombstone()).count();
            prop_assert_eq!(occupied, table.len());
            prop_assert_eq!(tombstones, table.tombstones());
        }

        #[test]
        fn proptest_load_factor_stays_below_threshold(
            capacity in 1usize..64,
            keys in prop::collection::vec(any::<i64>(), 0..500)
        ) {
            let mut set = ProbingSet::new(capacity).unwrap();
            for key in keys {
                set.add(key).unwrap();
                prop_assert!(set.load_factor() < 0.75);
            }
        }

        #[test]
        fn proptest_resize_preserves_membership(
            keys in prop::collection::hash_set(any::<i64>(), 1..200),
            others in prop::collection::vec(any::<i64>(), 1..50)
        ) {
            let mut set = ProbingSet::new(1).unwrap();
            let mut resizes = 0;
            for &key in &keys {
                let before: Vec<bool> = others.iter().map(|&other| set.contains(other)).collect();
                let capacity = set.capacity();
                set.add(key).unwrap();

                if set.capacity() != capacity {
                    resizes += 1;
                    for (&other, &was_present) in others.iter().zip(&before) {
                        if other != key {
                            prop_assert_eq!(set.contains(other), was_present);
                        }
                    }
                }
            }

            prop_assert!(resizes > 0);
            prop_assert_eq!(set.len(), keys.len());
            for &key in &keys {
                prop_assert!(set.contains(key));
            }
            for &other in &others {
                prop_assert_eq!(set.contains(other), keys.contains(&other));
            }
        }
    }
}
