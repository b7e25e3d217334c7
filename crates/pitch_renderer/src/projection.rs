use nalgebra::{vector, Point2, Vector2};
use pitch::PitchMeasurements;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("scale must be a positive number of pixels per centimeter, got {scale}")]
    NonPositiveScale { scale: f64 },
    #[error("offset must be finite, got ({x}, {y})")]
    NonFiniteOffset { x: f64, y: f64 },
    #[error("a {width}x{height} pixel canvas cannot be allocated")]
    CanvasTooLarge { width: u64, height: u64 },
}

/// Unvalidated projection parameters as they come from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Pixels per centimeter
    pub scale: f64,
    /// Pixel offset added after scaling
    pub offset: Vector2<f64>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            scale: 0.25,
            offset: vector![50.0, 50.0],
        }
    }
}

/// Affine map from pitch centimeters to surface pixels.
///
/// Every coordinate and length leaving this type is truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    scale: f64,
    offset: Vector2<f64>,
}

impl Projection {
    pub fn new(config: ProjectionConfig) -> Result<Self, ProjectionError> {
        let ProjectionConfig { scale, offset } = config;
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ProjectionError::NonPositiveScale { scale });
        }
        if !(offset.x.is_finite() && offset.y.is_finite()) {
            return Err(ProjectionError::NonFiniteOffset {
                x: offset.x,
                y: offset.y,
            });
        }
        Ok(Self { scale, offset })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }

    pub fn project(&self, point: Point2<f64>) -> Point2<i32> {
        let projected = point.coords * self.scale + self.offset;
        Point2::from(projected.map(|coordinate| coordinate.trunc() as i32))
    }

    /// Scales a length such as a radius. The offset never applies here.
    pub fn project_length(&self, length: f64) -> i32 {
        (length * self.scale).trunc() as i32
    }

    /// Image size that holds the whole pitch with the offset as margin on every side.
    ///
    /// Fails with [`ProjectionError::CanvasTooLarge`] when the size does not fit an RGB image.
    pub fn canvas_size(
        &self,
        measurements: &PitchMeasurements,
    ) -> Result<(u32, u32), ProjectionError> {
        let margin = self
            .offset
            .map(|coordinate| coordinate.trunc().max(0.0) as u64);
        let length = self.project_length(f64::from(measurements.length)).max(0) as u64;
        let width = self.project_length(f64::from(measurements.width)).max(0) as u64;
        let canvas_width = length.saturating_add(margin.x.saturating_mul(2));
        let canvas_height = width.saturating_add(margin.y.saturating_mul(2));

        let too_large = || ProjectionError::CanvasTooLarge {
            width: canvas_width,
            height: canvas_height,
        };
        // three bytes per RGB pixel must stay addressable
        canvas_width
            .checked_mul(canvas_height)
            .and_then(|pixels| pixels.checked_mul(3))
            .and_then(|bytes| usize::try_from(bytes).ok())
            .ok_or_else(too_large)?;
        Ok((
            u32::try_from(canvas_width).map_err(|_| too_large())?,
            u32::try_from(canvas_height).map_err(|_| too_large())?,
        ))
    }
}

impl TryFrom<ProjectionConfig> for Projection {
    type Error = ProjectionError;

    fn try_from(config: ProjectionConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::point;

    use super::*;

    fn reference_projection() -> Projection {
        Projection::new(ProjectionConfig::default()).unwrap()
    }

    #[test]
    fn projects_reference_corners() {
        let projection = reference_projection();
        assert_eq!(projection.project(point![0.0, 0.0]), point![50, 50]);
        assert_eq!(projection.project(point![4000.0, 2000.0]), point![1050, 550]);
        assert_eq!(projection.project(point![600.0, 1000.0]), point![200, 300]);
        assert_eq!(projection.project(point![3400.0, 1000.0]), point![900, 300]);
    }

    #[test]
    fn truncates_toward_zero() {
        let projection = Projection::new(ProjectionConfig {
            scale: 0.3,
            offset: vector![10.5, -20.0],
        })
        .unwrap();
        // 333 * 0.3 + 10.5 = 110.4 and 50 * 0.3 - 20 = -5.0
        assert_eq!(projection.project(point![333.0, 50.0]), point![110, -5]);
        // 1 * 0.3 - 20 = -19.7 truncates up to -19
        assert_eq!(projection.project(point![0.0, 1.0]).y, -19);
        // 1 * 0.3 + 10.5 = 10.8 truncates down to 10
        assert_eq!(projection.project(point![1.0, 0.0]).x, 10);
    }

    #[test]
    fn matches_formula_for_arbitrary_configs() {
        for (scale, offset_x, offset_y) in [(0.25, 50.0, 50.0), (1.7, -3.0, 12.25), (0.01, 0.0, 0.0)]
        {
            let projection = Projection::new(ProjectionConfig {
                scale,
                offset: vector![offset_x, offset_y],
            })
            .unwrap();
            for (x, y) in [(0.0, 0.0), (123.0, 456.0), (4000.0, 2000.0), (1999.5, 999.5)] {
                let expected = point![
                    (x * scale + offset_x).trunc() as i32,
                    (y * scale + offset_y).trunc() as i32
                ];
                assert_eq!(projection.project(point![x, y]), expected);
            }
        }
    }

    #[test]
    fn keeps_validated_parameters() {
        let projection = Projection::try_from(ProjectionConfig {
            scale: 0.125,
            offset: vector![7.5, 0.0],
        })
        .unwrap();
        assert_relative_eq!(projection.scale(), 0.125);
        assert_relative_eq!(projection.offset(), vector![7.5, 0.0]);
    }

    #[test]
    fn lengths_ignore_offset() {
        let projection = reference_projection();
        assert_eq!(projection.project_length(300.0), 75);
        assert_eq!(projection.project_length(601.0), 150);
    }

    #[test]
    fn rejects_non_positive_scale() {
        for scale in [0.0, -0.25, f64::NAN, f64::INFINITY] {
            let result = Projection::new(ProjectionConfig {
                scale,
                ..Default::default()
            });
            assert!(matches!(
                result,
                Err(ProjectionError::NonPositiveScale { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_finite_offset() {
        let result = Projection::new(ProjectionConfig {
            offset: vector![f64::NAN, 0.0],
            ..Default::default()
        });
        assert!(matches!(result, Err(ProjectionError::NonFiniteOffset { .. })));
    }

    #[test]
    fn canvas_uses_offset_as_margin() {
        let projection = reference_projection();
        assert_eq!(
            projection.canvas_size(&PitchMeasurements::default()),
            Ok((1100, 600))
        );
    }

    #[test]
    fn negative_offset_adds_no_margin() {
        let projection = Projection::new(ProjectionConfig {
            offset: vector![-50.0, 10.0],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            projection.canvas_size(&PitchMeasurements::default()),
            Ok((1000, 520))
        );
    }

    #[test]
    fn oversized_canvas_is_an_error() {
        let measurements = PitchMeasurements::default();

        let projection = Projection::new(ProjectionConfig {
            offset: vector![3.0e9, 0.0],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            projection.canvas_size(&measurements),
            Err(ProjectionError::CanvasTooLarge {
                width: 6_000_001_000,
                height: 500,
            })
        );

        let projection = Projection::new(ProjectionConfig {
            offset: vector![1.0e300, 1.0e300],
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            projection.canvas_size(&measurements),
            Err(ProjectionError::CanvasTooLarge { .. })
        ));

        let projection = Projection::new(ProjectionConfig {
            scale: 1.0e6,
            offset: vector![1.0e9, 0.0],
        })
        .unwrap();
        assert!(matches!(
            projection.canvas_size(&measurements),
            Err(ProjectionError::CanvasTooLarge { .. })
        ));
    }
}
