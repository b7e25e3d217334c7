use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{
        draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_polygon_mut,
    },
    point::Point,
};
use itertools::Itertools;
use nalgebra::{point, Point2, Vector2};
use pitch::Color;

use crate::surface::{ArcSweep, Stroke, Surface};

/// Raster surface over an RGB image.
pub struct ImageSurface {
    image: RgbImage,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background.0)),
        }
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Image rectangle grown by `margin` pixels on every side.
    fn bounds(&self, margin: f64) -> (Point2<f64>, Point2<f64>) {
        let (width, height) = self.image.dimensions();
        (
            point![-margin, -margin],
            point![f64::from(width) - 1.0 + margin, f64::from(height) - 1.0 + margin],
        )
    }

    /// Whether imageproc can walk the circle without its `i32` coordinates overflowing and
    /// without stepping through far more octant pixels than the image holds.
    fn fits_rasterizer(&self, centre: Point2<f64>, outer_radius: f64) -> bool {
        let (width, height) = self.image.dimensions();
        let limit = f64::from(i32::MAX / 2);
        centre.x.abs() + outer_radius < limit
            && centre.y.abs() + outer_radius < limit
            && outer_radius <= 2.0 * (f64::from(width) + f64::from(height))
    }
}

impl Surface for ImageSurface {
    fn draw_line(&mut self, start: Point2<i32>, end: Point2<i32>, stroke: Stroke) {
        let (minimum, maximum) = self.bounds(f64::from(stroke.thickness) + 1.0);
        let Some((start, end)) =
            clip_segment(start.cast::<f64>(), end.cast::<f64>(), minimum, maximum)
        else {
            return;
        };
        let start = start.map(|coordinate| coordinate.round() as i32);
        let end = end.map(|coordinate| coordinate.round() as i32);

        let color = Rgb(stroke.color.0);
        if stroke.thickness <= 1 {
            draw_line_segment_mut(
                &mut self.image,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
        } else {
            draw_thick_segment(&mut self.image, start, end, stroke.thickness, color);
        }
    }

    fn draw_circle(&mut self, centre: Point2<i32>, radius: i32, stroke: Stroke, filled: bool) {
        let color = Rgb(stroke.color.0);
        let thickness = if filled { 1 } else { stroke.thickness };
        let margin = f64::from(thickness) + 1.0;
        let (minimum, maximum) = self.bounds(margin);
        let centre_f64 = centre.cast::<f64>();
        let radius_f64 = f64::from(radius.max(0));
        let inner = if filled { 0.0 } else { radius_f64 - margin };
        if !ring_touches_rectangle(centre_f64, inner, radius_f64 + margin, minimum, maximum) {
            return;
        }

        if !self.fits_rasterizer(centre_f64, radius_f64 + margin) {
            if filled {
                fill_disc_per_pixel(&mut self.image, centre_f64, radius_f64, color);
            } else {
                let outline = arc_points(centre, radius, 0, 360);
                for (start, end) in outline.into_iter().tuple_windows() {
                    self.draw_line(start, end, stroke);
                }
            }
            return;
        }

        if filled {
            draw_filled_circle_mut(&mut self.image, (centre.x, centre.y), radius, color);
            return;
        }
        for ring_radius in ring_radii(radius, stroke.thickness) {
            draw_hollow_circle_mut(&mut self.image, (centre.x, centre.y), ring_radius, color);
        }
    }

    fn draw_arc(&mut self, centre: Point2<i32>, radius: i32, sweep: ArcSweep, stroke: Stroke) {
        let samples = arc_points(centre, radius, sweep.start, sweep.extent());
        for (start, end) in samples.into_iter().tuple_windows() {
            self.draw_line(start, end, stroke);
        }
    }
}

/// Radii of the concentric one pixel rings that make up an outline of the given thickness.
fn ring_radii(radius: i32, thickness: u32) -> impl Iterator<Item = i32> {
    let thickness = thickness.max(1) as i32;
    let inner = radius.saturating_sub((thickness - 1) / 2).max(0);
    let outer = radius.saturating_add(thickness / 2);
    inner..=outer
}

/// Liang-Barsky clipping of a segment against an axis aligned rectangle.
///
/// Endpoints inside the rectangle are returned unchanged.
fn clip_segment(
    start: Point2<f64>,
    end: Point2<f64>,
    minimum: Point2<f64>,
    maximum: Point2<f64>,
) -> Option<(Point2<f64>, Point2<f64>)> {
    let direction = end - start;
    let mut entering = 0.0_f64;
    let mut leaving = 1.0_f64;
    for (delta, distance) in [
        (-direction.x, start.x - minimum.x),
        (direction.x, maximum.x - start.x),
        (-direction.y, start.y - minimum.y),
        (direction.y, maximum.y - start.y),
    ] {
        if delta == 0.0 {
            if distance < 0.0 {
                return None;
            }
            continue;
        }
        let ratio = distance / delta;
        if delta < 0.0 {
            entering = entering.max(ratio);
        } else {
            leaving = leaving.min(ratio);
        }
        if entering > leaving {
            return None;
        }
    }

    let clipped_start = if entering > 0.0 {
        start + direction * entering
    } else {
        start
    };
    let clipped_end = if leaving < 1.0 {
        start + direction * leaving
    } else {
        end
    };
    Some((clipped_start, clipped_end))
}

fn ring_touches_rectangle(
    centre: Point2<f64>,
    inner_radius: f64,
    outer_radius: f64,
    minimum: Point2<f64>,
    maximum: Point2<f64>,
) -> bool {
    let nearest = Vector2::new(
        (minimum.x - centre.x).max(centre.x - maximum.x).max(0.0),
        (minimum.y - centre.y).max(centre.y - maximum.y).max(0.0),
    );
    let farthest = Vector2::new(
        (centre.x - minimum.x).abs().max((centre.x - maximum.x).abs()),
        (centre.y - minimum.y).abs().max((centre.y - maximum.y).abs()),
    );
    nearest.norm() <= outer_radius && farthest.norm() >= inner_radius
}

fn fill_disc_per_pixel(image: &mut RgbImage, centre: Point2<f64>, radius: f64, color: Rgb<u8>) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        if (point![f64::from(x), f64::from(y)] - centre).norm() <= radius {
            *pixel = color;
        }
    }
}

fn draw_thick_segment(
    image: &mut RgbImage,
    start: Point2<i32>,
    end: Point2<i32>,
    thickness: u32,
    color: Rgb<u8>,
) {
    let half_thickness = thickness as f32 / 2.0;
    let direction = (end - start).cast::<f32>();
    let length = direction.norm();
    if length < f32::EPSILON {
        draw_filled_circle_mut(image, (start.x, start.y), half_thickness as i32, color);
        return;
    }

    let normal = Vector2::new(-direction.y, direction.x) / length * half_thickness;
    let start = start.cast::<f32>();
    let end = end.cast::<f32>();
    let corners = [start + normal, end + normal, end - normal, start - normal]
        .map(|corner| Point::new(corner.x.round() as i32, corner.y.round() as i32));
    draw_polygon_mut(image, &corners, color);
}

/// Polyline approximating an arc with one sample per degree, from `start` clockwise over `extent` degrees.
///
/// Samples are rounded to the nearest pixel and saturate at the `i32` range; the centre and
/// radius are already projected.
fn arc_points(centre: Point2<i32>, radius: i32, start: i32, extent: i32) -> Vec<Point2<i32>> {
    let centre = centre.cast::<f64>();
    let radius = f64::from(radius);
    (0..=extent)
        .map(|step| f64::from(start + step).to_radians())
        .map(|angle| {
            point![
                (centre.x + angle.cos() * radius).round() as i32,
                (centre.y + angle.sin() * radius).round() as i32
            ]
        })
        .dedup()
        .collect()
}
