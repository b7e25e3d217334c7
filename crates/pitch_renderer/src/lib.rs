//! Projects a [`pitch::Pitch`] into pixel space and draws its line work onto a [`Surface`].

mod annotator;
mod image_surface;
mod projection;
mod renderer;
mod style;
mod surface;

pub use annotator::PositionAnnotator;
pub use image_surface::ImageSurface;
pub use projection::{Projection, ProjectionConfig, ProjectionError};
pub use renderer::{penalty_arc_sweep, render, PitchRenderer};
pub use style::RenderStyle;
pub use surface::{ArcSweep, DrawCall, RecordingSurface, Stroke, Surface};
