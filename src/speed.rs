use std::time::Duration;

use crate::config::ConfigError;

/// Lowest accepted speed level.
pub const MIN_SPEED_LEVEL: u8 = 1;

/// Highest accepted speed level.
pub const MAX_SPEED_LEVEL: u8 = 9;

/// Validated difficulty level in `1..=9`.
///
/// The level maps to a tick interval of `100 - level * 10` milliseconds, so
/// level 1 ticks every 90ms and level 9 every 10ms. Out-of-range levels are
/// rejected, never clamped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Creates a speed level, rejecting values outside `1..=9`.
    pub fn new(level: u8) -> Result<Self, ConfigError> {
        if !(MIN_SPEED_LEVEL..=MAX_SPEED_LEVEL).contains(&level) {
            return Err(ConfigError::SpeedOutOfRange(level));
        }
        Ok(Self(level))
    }

    /// Returns the raw level value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the simulation tick interval for this level.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(100 - u64::from(self.0) * 10)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::ConfigError;

    use super::{SpeedLevel, MAX_SPEED_LEVEL, MIN_SPEED_LEVEL};

    #[test]
    fn interval_follows_level_formula() {
        for level in MIN_SPEED_LEVEL..=MAX_SPEED_LEVEL {
            let speed = SpeedLevel::new(level).expect("levels 1..=9 are valid");
            assert_eq!(
                speed.tick_interval(),
                Duration::from_millis(100 - u64::from(level) * 10)
            );
        }
    }

    #[test]
    fn interval_is_strictly_decreasing_in_level() {
        let mut previous = SpeedLevel::new(1).unwrap().tick_interval();
        for level in 2..=MAX_SPEED_LEVEL {
            let interval = SpeedLevel::new(level).unwrap().tick_interval();
            assert!(interval < previous, "level {level} should tick faster");
            previous = interval;
        }
    }

    #[test]
    fn fastest_level_keeps_a_positive_interval() {
        let interval = SpeedLevel::new(MAX_SPEED_LEVEL).unwrap().tick_interval();
        assert_eq!(interval, Duration::from_millis(10));
    }

    #[test]
    fn out_of_range_levels_are_rejected_not_clamped() {
        assert_eq!(SpeedLevel::new(0), Err(ConfigError::SpeedOutOfRange(0)));
        assert_eq!(SpeedLevel::new(10), Err(ConfigError::SpeedOutOfRange(10)));
        assert_eq!(SpeedLevel::new(255), Err(ConfigError::SpeedOutOfRange(255)));
    }
}
