use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Real-world pitch dimensions in centimeters.
///
/// Defaults describe a standard 40 m x 20 m futsal court.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchMeasurements {
    pub width: i32,
    pub length: i32,
    pub centre_circle_radius: i32,
    pub penalty_spot_distance: i32,
    pub penalty_arc_radius: i32,
    pub goal_width: i32,
}

impl Default for PitchMeasurements {
    fn default() -> Self {
        Self {
            width: 2000,
            length: 4000,
            centre_circle_radius: 300,
            penalty_spot_distance: 600,
            penalty_arc_radius: 600,
            goal_width: 300,
        }
    }
}

impl PitchMeasurements {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("width", self.width),
            ("length", self.length),
            ("centre_circle_radius", self.centre_circle_radius),
            ("penalty_spot_distance", self.penalty_spot_distance),
            ("penalty_arc_radius", self.penalty_arc_radius),
            ("goal_width", self.goal_width),
        ] {
            if value <= 0 {
                return Err(ConfigurationError::NonPositiveDimension { name, value });
            }
        }

        // spot < length / 2, compared without losing the odd centimeter
        if 2 * i64::from(self.penalty_spot_distance) >= i64::from(self.length) {
            return Err(ConfigurationError::PenaltySpotBeyondMidline {
                penalty_spot_distance: self.penalty_spot_distance,
                length: self.length,
            });
        }

        if self.goal_width >= self.width {
            return Err(ConfigurationError::GoalWiderThanPitch {
                goal_width: self.goal_width,
                width: self.width,
            });
        }

        Ok(())
    }

    pub fn half_length(&self) -> f64 {
        f64::from(self.length) / 2.0
    }

    pub fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }
}
