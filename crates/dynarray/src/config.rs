//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Controls the starting slot count and how aggressively the backing
/// storage grows. Validated when an array is built from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 10. Zero is allowed; the first append then allocates a
    /// single slot before the growth factor takes over.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when an append finds every slot
    /// occupied.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default number of slots for a fresh array.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity and the default
    /// growth factor.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Replace the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check that the parameters describe a usable growth policy.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidConfig {
                reason: format!(
                    "growth_factor must be at least 2, got {}",
                    self.growth_factor
                ),
            });
        }
        Ok(())
    }

    /// Capacity that follows `capacity` after one growth event.
    pub fn grown_capacity(&self, capacity: usize) -> usize {
        if capacity == 0 {
            1
        } else {
            capacity.saturating_mul(self.growth_factor)
        }
    }

    /// Capacity of an array built from this config after `appends`
    /// appends: the smallest `initial_capacity * growth_factor^k` that
    /// holds every element.
    pub fn capacity_for(&self, appends: usize) -> usize {
        let mut capacity = self.initial_capacity;
        while capacity < appends {
            capacity = self.grown_capacity(capacity);
        }
        capacity
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ArrayConfig::default();
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn growth_factor_below_two_rejected() {
        let config = ArrayConfig::new(4).with_growth_factor(1);
        assert!(matches!(
            config.validate(),
            Err(ArrayError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn capacity_for_steps_by_factor() {
        let config = ArrayConfig::new(10);
        assert_eq!(config.capacity_for(0), 10);
        assert_eq!(config.capacity_for(10), 10);
        assert_eq!(config.capacity_for(11), 20);
        assert_eq!(config.capacity_for(41), 80);

        let triple = ArrayConfig::new(2).with_growth_factor(3);
        assert_eq!(triple.capacity_for(7), 18);
    }

    #[test]
    fn zero_capacity_grows_to_one_first() {
        let config = ArrayConfig::new(0);
        assert_eq!(config.grown_capacity(0), 1);
        assert_eq!(config.capacity_for(1), 1);
        assert_eq!(config.capacity_for(3), 4);
    }
}
