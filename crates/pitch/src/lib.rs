//! Futsal pitch geometry in real-world centimeters.
//!
//! Coordinates have their origin at the bottom left corner, `x` runs along the
//! length of the pitch and `y` along its width.

mod error;
mod landmarks;
mod measurements;

use nalgebra::{point, Point2};

pub use error::ConfigurationError;
pub use landmarks::{Color, Edge, Landmark, LandmarkId};
pub use measurements::PitchMeasurements;

const EDGES: [Edge; 5] = [
    Edge::new(LandmarkId::CornerLeftBottom, LandmarkId::CornerLeftTop),
    Edge::new(LandmarkId::CornerLeftTop, LandmarkId::CornerRightTop),
    Edge::new(LandmarkId::CornerRightTop, LandmarkId::CornerRightBottom),
    Edge::new(LandmarkId::CornerRightBottom, LandmarkId::CornerLeftBottom),
    Edge::new(LandmarkId::CenterBottom, LandmarkId::CenterTop),
];

/// Validated, immutable pitch measurements and the landmark graph derived from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pitch {
    measurements: PitchMeasurements,
}

impl Pitch {
    pub fn new(measurements: PitchMeasurements) -> Result<Self, ConfigurationError> {
        measurements.validate()?;
        Ok(Self { measurements })
    }

    pub fn measurements(&self) -> &PitchMeasurements {
        &self.measurements
    }

    pub fn vertex(&self, id: LandmarkId) -> Point2<f64> {
        let length = f64::from(self.measurements.length);
        let width = f64::from(self.measurements.width);
        let half_length = self.measurements.half_length();
        let half_width = self.measurements.half_width();
        let penalty_spot_distance = f64::from(self.measurements.penalty_spot_distance);

        match id {
            LandmarkId::CornerLeftBottom => point![0.0, 0.0],
            LandmarkId::CornerLeftTop => point![0.0, width],
            LandmarkId::CornerRightTop => point![length, width],
            LandmarkId::CornerRightBottom => point![length, 0.0],
            LandmarkId::CenterBottom => point![half_length, 0.0],
            LandmarkId::CenterTop => point![half_length, width],
            LandmarkId::CenterCircle => point![half_length, half_width],
            LandmarkId::PenaltyLeft => point![penalty_spot_distance, half_width],
            LandmarkId::PenaltyRight => point![length - penalty_spot_distance, half_width],
        }
    }

    /// Landmark positions in canonical index order.
    pub fn vertices(&self) -> Vec<Point2<f64>> {
        LandmarkId::ALL.iter().map(|&id| self.vertex(id)).collect()
    }

    pub fn edges(&self) -> &'static [Edge] {
        &EDGES
    }

    pub fn landmarks(&self) -> Vec<Landmark> {
        LandmarkId::ALL
            .iter()
            .map(|&id| Landmark {
                id,
                label: id.label().to_string(),
                position: self.vertex(id),
                color: Color::WHITE,
            })
            .collect()
    }

    pub fn penalty_spots(&self) -> [Point2<f64>; 2] {
        [
            self.vertex(LandmarkId::PenaltyLeft),
            self.vertex(LandmarkId::PenaltyRight),
        ]
    }

    /// Goal mouth segments on the left and right goal lines, each centered on the half width.
    pub fn goal_mouths(&self) -> [(Point2<f64>, Point2<f64>); 2] {
        let half_goal = f64::from(self.measurements.goal_width) / 2.0;
        let half_width = self.measurements.half_width();
        [0.0, f64::from(self.measurements.length)].map(|x| {
            (
                point![x, half_width - half_goal],
                point![x, half_width + half_goal],
            )
        })
    }
}
