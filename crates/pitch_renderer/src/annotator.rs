use nalgebra::Point2;
use pitch::Color;
use serde::{Deserialize, Serialize};

use crate::{
    projection::Projection,
    surface::{Stroke, Surface},
};

/// Marks tracked real-world positions (players, ball) on top of a rendered pitch.
///
/// Positions are drawn wherever they project to, inside the pitch or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionAnnotator {
    pub fill: Color,
    pub outline: Color,
    pub radius: i32,
    pub thickness: u32,
}

impl Default for PositionAnnotator {
    fn default() -> Self {
        Self {
            fill: Color([255, 0, 0]),
            outline: Color([0, 0, 0]),
            radius: 10,
            thickness: 2,
        }
    }
}

impl PositionAnnotator {
    pub fn annotate(
        &self,
        surface: &mut impl Surface,
        projection: &Projection,
        positions: &[Point2<f64>],
    ) {
        for &position in positions {
            let centre = projection.project(position);
            surface.draw_circle(centre, self.radius, Stroke::new(1, self.fill), true);
            surface.draw_circle(
                centre,
                self.radius,
                Stroke::new(self.thickness, self.outline),
                false,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use crate::{
        projection::ProjectionConfig,
        surface::{DrawCall, RecordingSurface},
    };

    use super::*;

    #[test]
    fn positions_get_disc_and_outline() {
        let projection = Projection::new(ProjectionConfig::default()).unwrap();
        let annotator = PositionAnnotator::default();
        let mut surface = RecordingSurface::default();

        annotator.annotate(&mut surface, &projection, &[point![2000.0, 1000.0]]);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Circle {
                    centre: point![550, 300],
                    radius: 10,
                    stroke: Stroke::new(1, Color([255, 0, 0])),
                    filled: true,
                },
                DrawCall::Circle {
                    centre: point![550, 300],
                    radius: 10,
                    stroke: Stroke::new(2, Color([0, 0, 0])),
                    filled: false,
                },
            ]
        );
    }

    #[test]
    fn positions_outside_the_pitch_are_still_drawn() {
        let projection = Projection::new(ProjectionConfig::default()).unwrap();
        let mut surface = RecordingSurface::default();

        PositionAnnotator::default().annotate(
            &mut surface,
            &projection,
            &[point![-400.0, 2200.0]],
        );

        assert_eq!(surface.calls.len(), 2);
        assert!(matches!(
            surface.calls[0],
            DrawCall::Circle { centre, .. } if centre == point![-50, 600]
        ));
    }
}
