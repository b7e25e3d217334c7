use std::{fs::read_to_string, path::Path};

use color_eyre::{eyre::WrapErr, Result};
use nalgebra::Point2;
use pitch::PitchMeasurements;
use pitch_renderer::{PositionAnnotator, ProjectionConfig, RenderStyle};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub measurements: PitchMeasurements,
    pub projection: ProjectionConfig,
    pub style: RenderStyle,
    pub annotator: PositionAnnotator,
}

impl Configuration {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)
            .wrap_err_with(|| format!("failed to read configuration {}", path.display()))?;
        if is_json(path) {
            serde_json::from_str(&contents).wrap_err("failed to parse JSON configuration")
        } else {
            toml::from_str(&contents).wrap_err("failed to parse TOML configuration")
        }
    }
}

/// Reads a JSON array of `[x, y]` positions in centimeters.
pub fn load_positions(path: &Path) -> Result<Vec<Point2<f64>>> {
    let contents = read_to_string(path)
        .wrap_err_with(|| format!("failed to read positions {}", path.display()))?;
    serde_json::from_str(&contents).wrap_err("failed to parse positions")
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use nalgebra::{point, vector};
    use pitch::Color;

    use super::*;

    #[test]
    fn empty_configuration_uses_futsal_defaults() {
        let configuration: Configuration = toml::from_str("").unwrap();
        assert_eq!(configuration, Configuration::default());
        assert_eq!(configuration.measurements.length, 4000);
        assert_eq!(configuration.projection.scale, 0.25);
    }

    #[test]
    fn sections_override_individual_fields() {
        let configuration: Configuration = toml::from_str(
            r#"
            [measurements]
            length = 3800

            [projection]
            scale = 0.5
            offset = [20, 10]

            [style]
            line_thickness = 3
            background_color = [0, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(configuration.measurements.length, 3800);
        assert_eq!(configuration.measurements.width, 2000);
        assert_eq!(configuration.projection.offset, vector![20.0, 10.0]);
        assert_eq!(configuration.style.line_thickness, 3);
        assert_eq!(configuration.style.background_color, Color([0, 0, 0]));
        assert_eq!(configuration.style.penalty_spot_radius, 4);
    }

    #[test]
    fn json_configuration_is_accepted() {
        let configuration: Configuration =
            serde_json::from_str(r#"{ "projection": { "scale": 1.0 } }"#).unwrap();
        assert_eq!(configuration.projection.scale, 1.0);
        assert_eq!(configuration.projection.offset, vector![50.0, 50.0]);
    }

    #[test]
    fn positions_are_pairs_of_centimeters() {
        let positions: Vec<Point2<f64>> =
            serde_json::from_str("[[600.0, 1000.0], [3400, 1000]]").unwrap();
        assert_eq!(
            positions,
            vec![point![600.0, 1000.0], point![3400.0, 1000.0]]
        );
    }

    #[test]
    fn extension_selects_format() {
        assert!(is_json(Path::new("pitch.json")));
        assert!(is_json(Path::new("pitch.JSON")));
        assert!(!is_json(Path::new("pitch.toml")));
        assert!(!is_json(Path::new("pitch")));
    }
}
