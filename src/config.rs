//! Simulation configuration.
//!
//! Cell geometry and the per-rule generation cadence are constants of a run,
//! not values derived from the grid.

use std::time::Duration;

use crate::domain::RuleKind;
use crate::error::{SimError, SimResult};

/// Static configuration for a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Side length of one cell in pixels.
    pub cell_size: u32,
    /// Pixel offset of the first row and column from the surface origin.
    pub cell_offset: u32,
    /// Delay between Conway generations.
    pub conway_interval: Duration,
    /// Delay between elementary rule generations.
    pub rule30_interval: Duration,
    /// Chance that a cell is filled when the grid is randomized.
    pub fill_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            cell_offset: 1,
            conway_interval: Duration::from_millis(100),
            rule30_interval: Duration::from_millis(50),
            fill_probability: 0.5,
        }
    }
}

impl SimConfig {
    /// Faster Conway cadence used by the enhanced build of the simulator.
    pub fn enhanced() -> Self {
        Self {
            conway_interval: Duration::from_millis(75),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.cell_size == 0 {
            return Err(SimError::InvalidConfig("cell_size must be positive"));
        }
        if self.cell_size.checked_add(1).is_none() {
            return Err(SimError::InvalidConfig("cell_size leaves no room for the cell gap"));
        }
        if self.conway_interval.is_zero() || self.rule30_interval.is_zero() {
            return Err(SimError::InvalidConfig("generation intervals must be positive"));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(SimError::InvalidConfig(
                "fill_probability must lie within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Delay between generations for the given rule
    pub const fn interval(&self, rule: RuleKind) -> Duration {
        match rule {
            RuleKind::Conway => self.conway_interval,
            RuleKind::ElementaryRule30 => self.rule30_interval,
        }
    }

    /// Distance in pixels between the origins of adjacent cells.
    pub const fn cell_stride(&self) -> u32 {
        self.cell_size.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::enhanced().validate().is_ok());
    }

    #[test]
    fn test_enhanced_only_speeds_up_conway() {
        let enhanced = SimConfig::enhanced();
        assert_eq!(enhanced.conway_interval, Duration::from_millis(75));
        assert_eq!(enhanced.rule30_interval, SimConfig::default().rule30_interval);
    }

    #[test]
    fn test_rejects_cell_size_without_stride() {
        let config = SimConfig { cell_size: u32::MAX, ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
        assert_eq!(config.cell_stride(), u32::MAX);

        let widest = SimConfig { cell_size: u32::MAX - 1, ..SimConfig::default() };
        assert!(widest.validate().is_ok());
        assert_eq!(widest.cell_stride(), u32::MAX);
    }

    #[test]
    fn test_interval_per_rule() {
        let config = SimConfig::default();
        assert_eq!(config.interval(RuleKind::Conway), Duration::from_millis(100));
        assert_eq!(config.interval(RuleKind::ElementaryRule30), Duration::from_millis(50));
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_cells = SimConfig { cell_size: 0, ..SimConfig::default() };
        assert!(matches!(zero_cells.validate(), Err(SimError::InvalidConfig(_))));

        let bad_probability = SimConfig { fill_probability: 1.5, ..SimConfig::default() };
        assert!(bad_probability.validate().is_err());

        let no_delay = SimConfig {
            rule30_interval: Duration::ZERO,
            ..SimConfig::default()
        };
        assert!(no_delay.validate().is_err());
    }
}
