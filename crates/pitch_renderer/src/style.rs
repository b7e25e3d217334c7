use pitch::Color;
use serde::{Deserialize, Serialize};

use crate::surface::Stroke;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub line_color: Color,
    pub line_thickness: u32,
    /// Penalty spot marker radius in pixels, independent of the projection scale
    pub penalty_spot_radius: i32,
    pub background_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_color: Color::WHITE,
            line_thickness: 2,
            penalty_spot_radius: 4,
            background_color: Color([34, 139, 34]),
        }
    }
}

impl RenderStyle {
    pub fn line_stroke(&self) -> Stroke {
        Stroke::new(self.line_thickness, self.line_color)
    }
}
