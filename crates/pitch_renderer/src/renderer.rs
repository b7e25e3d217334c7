use log::debug;
use nalgebra::Point2;
use pitch::{LandmarkId, Pitch};

use crate::{
    image_surface::ImageSurface,
    projection::{Projection, ProjectionConfig, ProjectionError},
    style::RenderStyle,
    surface::{ArcSweep, Surface},
};

/// Draws the static line work of a [`Pitch`] through a validated projection.
///
/// The renderer keeps no pitch state, so one instance can draw any number of pitches
/// onto any number of surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchRenderer {
    projection: Projection,
    style: RenderStyle,
}

impl PitchRenderer {
    pub fn new(config: ProjectionConfig, style: RenderStyle) -> Result<Self, ProjectionError> {
        Ok(Self {
            projection: Projection::new(config)?,
            style,
        })
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Allocates an image sized to the pitch plus margins, filled with the background color.
    pub fn allocate_surface(&self, pitch: &Pitch) -> Result<ImageSurface, ProjectionError> {
        let (width, height) = self.projection.canvas_size(pitch.measurements())?;
        Ok(ImageSurface::new(
            width,
            height,
            self.style.background_color,
        ))
    }

    pub fn draw_boundary(&self, surface: &mut impl Surface, pitch: &Pitch) {
        let stroke = self.style.line_stroke();
        let vertices = pitch.vertices();
        debug!("drawing {} boundary edges", pitch.edges().len());
        for edge in pitch.edges() {
            let (start, end) = edge.indices();
            surface.draw_line(
                self.projection.project(vertices[start]),
                self.projection.project(vertices[end]),
                stroke,
            );
        }
    }

    pub fn draw_centre_circle(&self, surface: &mut impl Surface, pitch: &Pitch) {
        let centre = self
            .projection
            .project(pitch.vertex(LandmarkId::CenterCircle));
        let radius = self
            .projection
            .project_length(f64::from(pitch.measurements().centre_circle_radius));
        debug!(
            "drawing centre circle at ({}, {}) with radius {radius} px",
            centre.x, centre.y
        );
        surface.draw_circle(centre, radius, self.style.line_stroke(), false);
    }

    pub fn draw_penalty_features(&self, surface: &mut impl Surface, pitch: &Pitch) {
        let stroke = self.style.line_stroke();
        let half_length = pitch.measurements().half_length();
        let arc_radius = self
            .projection
            .project_length(f64::from(pitch.measurements().penalty_arc_radius));
        debug!("drawing penalty spots and arcs with radius {arc_radius} px");

        for spot in pitch.penalty_spots() {
            let centre = self.projection.project(spot);
            surface.draw_circle(centre, self.style.penalty_spot_radius, stroke, true);
            surface.draw_arc(
                centre,
                arc_radius,
                penalty_arc_sweep(spot, half_length),
                stroke,
            );
        }
    }

    pub fn draw_goal_mouths(&self, surface: &mut impl Surface, pitch: &Pitch) {
        let stroke = self.style.line_stroke();
        debug!(
            "drawing goal mouths {} cm wide",
            pitch.measurements().goal_width
        );
        for (start, end) in pitch.goal_mouths() {
            surface.draw_line(
                self.projection.project(start),
                self.projection.project(end),
                stroke,
            );
        }
    }

    pub fn render(&self, surface: &mut impl Surface, pitch: &Pitch) {
        debug!(
            "rendering pitch {}x{} cm at scale {} with offset ({}, {})",
            pitch.measurements().length,
            pitch.measurements().width,
            self.projection.scale(),
            self.projection.offset().x,
            self.projection.offset().y,
        );
        self.draw_boundary(surface, pitch);
        self.draw_centre_circle(surface, pitch);
        self.draw_penalty_features(surface, pitch);
        self.draw_goal_mouths(surface, pitch);
    }
}

/// Renders `pitch` with the default style, failing before any drawing if `config` is invalid.
pub fn render(
    surface: &mut impl Surface,
    pitch: &Pitch,
    config: ProjectionConfig,
) -> Result<(), ProjectionError> {
    PitchRenderer::new(config, RenderStyle::default())?.render(surface, pitch);
    Ok(())
}

/// Penalty arcs bulge away from their own goal line, towards the centre of the pitch.
pub fn penalty_arc_sweep(spot: Point2<f64>, half_length: f64) -> ArcSweep {
    if spot.x < half_length {
        ArcSweep::new(270, 90)
    } else {
        ArcSweep::new(90, 270)
    }
}
