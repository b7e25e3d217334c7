use nalgebra::Point2;
use pitch::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub thickness: u32,
}

impl Stroke {
    pub fn new(thickness: u32, color: Color) -> Self {
        Self { color, thickness }
    }
}

/// Angular extent of an arc in degrees.
///
/// 0° points along +x and angles grow clockwise on screen (pixel y points down).
/// The arc runs from `start` to `end` in increasing angle, wrapping through 360°,
/// so `(270, 90)` passes through 0° and `(90, 270)` passes through 180°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArcSweep {
    pub start: i32,
    pub end: i32,
}

impl ArcSweep {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn extent(&self) -> i32 {
        (self.end - self.start).rem_euclid(360)
    }
}

/// Primitive drawing operations of a 2D target, all in pixel coordinates.
pub trait Surface {
    fn draw_line(&mut self, start: Point2<i32>, end: Point2<i32>, stroke: Stroke);

    /// Draws a circle outline, or a disc of `stroke.color` when `filled`.
    fn draw_circle(&mut self, centre: Point2<i32>, radius: i32, stroke: Stroke, filled: bool);

    fn draw_arc(&mut self, centre: Point2<i32>, radius: i32, sweep: ArcSweep, stroke: Stroke);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCall {
    Line {
        start: Point2<i32>,
        end: Point2<i32>,
        stroke: Stroke,
    },
    Circle {
        centre: Point2<i32>,
        radius: i32,
        stroke: Stroke,
        filled: bool,
    },
    Arc {
        centre: Point2<i32>,
        radius: i32,
        sweep: ArcSweep,
        stroke: Stroke,
    },
}

/// Surface that keeps the issued draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = (Point2<i32>, Point2<i32>)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
    }

    pub fn arcs(&self) -> impl Iterator<Item = (Point2<i32>, i32, ArcSweep)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Arc {
                centre,
                radius,
                sweep,
                ..
            } => Some((*centre, *radius, *sweep)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, start: Point2<i32>, end: Point2<i32>, stroke: Stroke) {
        self.calls.push(DrawCall::Line { start, end, stroke });
    }

    fn draw_circle(&mut self, centre: Point2<i32>, radius: i32, stroke: Stroke, filled: bool) {
        self.calls.push(DrawCall::Circle {
            centre,
            radius,
            stroke,
            filled,
        });
    }

    fn draw_arc(&mut self, centre: Point2<i32>, radius: i32, sweep: ArcSweep, stroke: Stroke) {
        self.calls.push(DrawCall::Arc {
            centre,
            radius,
            sweep,
            stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_wraps_through_zero() {
        assert_eq!(ArcSweep::new(270, 90).extent(), 180);
        assert_eq!(ArcSweep::new(90, 270).extent(), 180);
        assert_eq!(ArcSweep::new(350, 10).extent(), 20);
        assert_eq!(ArcSweep::new(45, 45).extent(), 0);
    }
}
