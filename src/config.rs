//! Resize policy for `ProbingTable`

use crate::error::{Result, TableError};

/// Default ratio of live entries to slots at which the table grows
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Default multiplier applied to the capacity on each resize
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Resize policy of a table.
///
/// The amortized O(1) insert and the post-resize load bound hold for any threshold
/// below 1 and any growth factor above 1, so both are configurable.
///
/// ```rust
/// use probing_table::{ProbingTable, TableConfig};
///
/// let config = TableConfig::default()
///     .with_load_factor_threshold(0.5)
///     .with_growth_factor(1.5);
/// let table = ProbingTable::<u32>::with_config(8, config).unwrap();
/// assert_eq!(table.config().growth_factor(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Growth happens before an insert would bring `len / capacity` to this value
    load_factor_threshold: f64,
    /// New capacity is `ceil(capacity * growth_factor)`
    growth_factor: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    /// Sets the load factor threshold, expected in `(0, 1)`
    #[must_use]
    pub fn with_load_factor_threshold(mut self, threshold: f64) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    /// Sets the growth factor, expected to be greater than 1
    #[must_use]
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Returns the load factor threshold
    #[must_use]
    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Returns the growth factor
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Checks both parameters are in range.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the threshold is not inside `(0, 1)` or the
    /// growth factor is not a finite value greater than 1.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.load_factor_threshold;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(TableError::invalid_config(format!(
                "load factor threshold must be in (0, 1), got {threshold}"
            )));
        }
        let growth = self.growth_factor;
        if !growth.is_finite() || growth <= 1.0 {
            return Err(TableError::invalid_config(format!(
                "growth factor must be a finite value greater than 1, got {growth}"
            )));
        }
        Ok(())
    }

    /// Capacity after one growth step, always strictly larger than `capacity`
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub(crate) fn grown_capacity(&self, capacity: usize) -> usize {
        // float to int casts saturate
        let grown = (capacity as f64 * self.growth_factor).ceil() as usize;
        grown.max(capacity.saturating_add(1))
    }

    /// Whether holding `entries` live entries in `capacity` slots reaches the threshold
    #[allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]
    pub(crate) fn is_over_threshold(&self, entries: usize, capacity: usize) -> bool {
        entries as f64 / capacity as f64 >= self.load_factor_threshold
    }
}
