//! Error handling for `ProbingTable` operations
//!
//! Absence of a key is never an error: lookups return `Option` and deletes return `bool`.
//! The variants here cover construction with bad parameters and the saturated-table
//! condition the load-factor policy is meant to rule out.

use thiserror::Error;

/// Errors reported by table construction and insertion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// The table was asked to start with zero slots
    #[error("invalid capacity: {capacity} (must be greater than 0)")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// A full probe cycle found neither the key nor a reusable slot
    #[error("capacity exhausted: no empty or tombstone slot among {capacity} slots")]
    CapacityExhausted {
        /// Number of slots that were probed
        capacity: usize,
    },

    /// Load factor threshold or growth factor out of range
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration
        message: String,
    },
}

impl TableError {
    /// Create an invalid capacity error
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a capacity exhausted error
    #[must_use]
    pub fn capacity_exhausted(capacity: usize) -> Self {
        Self::CapacityExhausted { capacity }
    }

    /// Create a configuration error
    #[must_use]
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    /// Short category name, for log lines
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCapacity { .. } => "capacity",
            Self::CapacityExhausted { .. } => "exhausted",
            Self::InvalidConfig { .. } => "config",
        }
    }
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
