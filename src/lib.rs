//! # Probing Table
//!
//! An open-addressing hash table over `i64` keys, usable as a set or as a map.
//!
//! - Collisions are resolved by linear probing from `key mod capacity`.
//! - Removed entries leave a tombstone, so probe chains that ran through them stay intact.
//! - The table grows (by default doubling, dropping tombstones) before an insert would
//!   bring the load factor to the threshold (0.75 by default).
//! - Every `i64` is a valid key; slot state is kept in an explicit tag.
//!
//! ## Map Usage
//!
//! ```rust
//! use probing_table::ProbingTable;
//!
//! let mut map = ProbingTable::new(10).unwrap();
//!
//! // Insert values
//! map.insert(12, 1000).unwrap();
//! map.insert(23, 230).unwrap();
//!
//! // Retrieve values
//! assert_eq!(map.get(23), Some(&230));
//!
//! // Update values
//! assert_eq!(map.insert(23, 231).unwrap(), Some(230));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert!(map.delete(23));
//! assert_eq!(map.get(23), None);
//! ```
//!
//! ## Set Usage
//!
//! ```rust
//! use probing_table::ProbingSet;
//!
//! let mut set = ProbingSet::new(10).unwrap();
//! for key in [13, 24, 43, 46, 48, 48, 1, 2, 3] {
//!     set.add(key).unwrap();
//! }
//!
//! // the duplicate 48 is not counted, and the 8th distinct key grew the table
//! assert_eq!(set.len(), 8);
//! assert_eq!(set.capacity(), 20);
//! assert!(set.contains(43));
//! assert!(!set.contains(79));
//! ```
//!
//! Resizes and tombstone activity are reported through the `log` facade at `debug` and
//! `trace` level.

/// Resize policy configuration
mod config;
/// Error type and result alias
mod error;
/// The table itself
mod probing_table;
/// Slot tagging and the base hash
mod slot;
/// Utility functions and traits for tables
mod utils;

pub use config::{DEFAULT_GROWTH_FACTOR, DEFAULT_LOAD_FACTOR_THRESHOLD, TableConfig};
pub use error::{Result, TableError};
pub use probing_table::{Iter, ProbingSet, ProbingTable};
pub use slot::Slot;
pub use utils::{TableExtensions, from_keys, from_pairs};
