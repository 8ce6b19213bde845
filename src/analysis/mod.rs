//! Off-axis analysis options and the angle sweep driver

mod sweep;

use serde::{Deserialize, Serialize};

use crate::error::{PlyError, PlyResult};

pub use sweep::{angle_sweep, apparent_constants, AngleSample};

/// Lowest angle a sweep may start at, in degrees
pub const MIN_SWEEP_ANGLE: i32 = -360;
/// Highest (exclusive) angle a sweep may end at, in degrees
pub const MAX_SWEEP_ANGLE: i32 = 360;

/// Range of orientations to sweep, in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// First angle (inclusive)
    pub start: i32,
    /// Last angle (exclusive)
    pub end: i32,
    /// Angle increment
    pub step: i32,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            start: -90,
            end: 90,
            step: 1,
        }
    }
}

impl SweepOptions {
    /// Full half-turn, -90 to 89 degrees
    pub fn half_turn() -> Self {
        Self::default()
    }

    /// Set the angle range, `end` exclusive
    pub fn range(mut self, start: i32, end: i32) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the angle increment
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn validate(&self) -> PlyResult<()> {
        if self.step <= 0 {
            return Err(PlyError::invalid(
                "sweep.step",
                format!("step must be positive, got {}", self.step),
            ));
        }
        if self.start < MIN_SWEEP_ANGLE {
            return Err(PlyError::invalid(
                "sweep.start",
                format!("start must be at least {}, got {}", MIN_SWEEP_ANGLE, self.start),
            ));
        }
        if self.end > MAX_SWEEP_ANGLE {
            return Err(PlyError::invalid(
                "sweep.end",
                format!("end must be at most {}, got {}", MAX_SWEEP_ANGLE, self.end),
            ));
        }
        if self.start >= self.end {
            return Err(PlyError::invalid(
                "sweep.end",
                format!("empty range {}..{}", self.start, self.end),
            ));
        }
        Ok(())
    }

    /// Angles visited by the sweep, in order
    pub fn angles(&self) -> impl Iterator<Item = i32> {
        (self.start..self.end).step_by(self.step.max(1) as usize)
    }

    pub fn len(&self) -> usize {
        self.angles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_has_180_angles() {
        let options = SweepOptions::default();
        assert_eq!(options.len(), 180);
        assert_eq!(options.angles().next(), Some(-90));
        assert_eq!(options.angles().last(), Some(89));
    }

    #[test]
    fn test_stepped_range() {
        let options = SweepOptions::default().range(0, 90).with_step(15);
        assert_eq!(options.angles().collect::<Vec<_>>(), vec![0, 15, 30, 45, 60, 75]);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(SweepOptions::default().with_step(0).validate().is_err());
        assert!(SweepOptions::default().range(10, 10).validate().is_err());
        assert!(SweepOptions::default().validate().is_ok());
    }

    #[test]
    fn test_range_is_bounded() {
        let full_turn = SweepOptions::default().range(MIN_SWEEP_ANGLE, MAX_SWEEP_ANGLE);
        assert!(full_turn.validate().is_ok());
        assert_eq!(full_turn.len(), 720);

        let huge = SweepOptions::default().range(i32::MIN, i32::MAX);
        assert!(matches!(
            huge.validate(),
            Err(PlyError::InvalidInput { ref field, .. }) if field == "sweep.start"
        ));

        let past_end = SweepOptions::default().range(0, 361);
        assert!(matches!(
            past_end.validate(),
            Err(PlyError::InvalidInput { ref field, .. }) if field == "sweep.end"
        ));
    }
}
