use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Opaque reference to a surface appearance (material, texture, colour).
///
/// The generator only carries it through to every shelf it builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceRef(pub String);

/// Dimensional and randomization bounds governing a shelf unit.
///
/// Lengths are in inches and angles in degrees. Keys follow the camelCase
/// names of a JSON style sheet; missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Thickness of a shelf board.
    pub thickness: f64,
    /// Minimum depth a shelf protrudes from the wall.
    pub min_depth: f64,
    /// Maximum depth a shelf protrudes from the wall.
    pub max_depth: f64,
    /// Step between sampled depths.
    pub depth_increment: f64,
    /// Minimum tip-to-tip shelf length.
    pub min_shelf_length: f64,
    /// Maximum tip-to-tip shelf length.
    pub max_shelf_length: f64,
    /// Step between sampled shelf lengths.
    pub shelf_length_increment: f64,
    /// Minimum angle between neighbouring shelves of a node.
    pub min_angle: f64,
    /// Maximum angle between neighbouring shelves of a node.
    pub max_angle: f64,
    /// Step between sampled angles.
    pub angle_increment: f64,
    /// Lowest expected number of shelves meeting in a node.
    pub min_shelves_per_node: u32,
    /// Highest expected number of shelves meeting in a node.
    pub max_shelves_per_node: u32,
    /// Share of shelves meant to lie parallel to the ground.
    pub flat_shelf_ratio: f64,
    /// Surface applied to every shelf.
    #[serde(rename = "material")]
    pub surface: Option<SurfaceRef>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            thickness: 0.25,
            min_depth: 3.0,
            max_depth: 8.0,
            depth_increment: 0.25,
            min_shelf_length: 10.0,
            max_shelf_length: 20.0,
            shelf_length_increment: 0.125,
            min_angle: 30.0,
            max_angle: 100.0,
            angle_increment: 5.0,
            min_shelves_per_node: 3,
            max_shelves_per_node: 7,
            flat_shelf_ratio: 0.1,
            surface: None,
        }
    }
}

impl StyleConfig {
    /// Parses a JSON style sheet and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or any error
    /// reported by [`StyleConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self> {
        let style: Self = serde_json::from_str(text).map_err(ConfigError::from)?;
        style.validate()?;
        Ok(style)
    }

    /// Checks every bound of the style.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated bound.
    pub fn validate(&self) -> Result<()> {
        positive("thickness", self.thickness)?;

        ordered("depth", self.min_depth, self.max_depth)?;
        positive("depthIncrement", self.depth_increment)?;
        if self.min_depth < 0.0 {
            return Err(ConfigError::OutOfRange {
                name: "minDepth",
                value: self.min_depth,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        ordered("shelfLength", self.min_shelf_length, self.max_shelf_length)?;
        positive("minShelfLength", self.min_shelf_length)?;
        positive("shelfLengthIncrement", self.shelf_length_increment)?;

        self.validate_angles()?;

        ordered(
            "shelvesPerNode",
            f64::from(self.min_shelves_per_node),
            f64::from(self.max_shelves_per_node),
        )?;
        positive("minShelvesPerNode", f64::from(self.min_shelves_per_node))?;

        if !(0.0..=1.0).contains(&self.flat_shelf_ratio) {
            return Err(ConfigError::OutOfRange {
                name: "flatShelfRatio",
                value: self.flat_shelf_ratio,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(())
    }

    /// Checks only the angle bounds, which is all angle partitioning needs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `minAngle > maxAngle`, the increment is
    /// not positive, or an angle bound lies outside `(0, 360]`.
    pub fn validate_angles(&self) -> Result<()> {
        ordered("angle", self.min_angle, self.max_angle)?;
        positive("angleIncrement", self.angle_increment)?;
        for (name, value) in [("minAngle", self.min_angle), ("maxAngle", self.max_angle)] {
            if value <= 0.0 || value > 360.0 {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    min: 0.0,
                    max: 360.0,
                }
                .into());
            }
        }
        Ok(())
    }
}

fn ordered(name: &'static str, min: f64, max: f64) -> Result<()> {
    // NaN bounds fail this comparison too
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { name, min, max }.into())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    #[test]
    fn default_style_is_valid() {
        StyleConfig::default().validate().unwrap();
    }

    #[test]
    fn inverted_angles_rejected() {
        let style = StyleConfig {
            min_angle: 120.0,
            max_angle: 60.0,
            ..StyleConfig::default()
        };
        let err = style.validate_angles().unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Config(ConfigError::InvertedRange { name: "angle", .. })
        ));
    }

    #[test]
    fn zero_increment_rejected() {
        let style = StyleConfig {
            depth_increment: 0.0,
            ..StyleConfig::default()
        };
        assert!(style.validate().unwrap_err().is_invalid_config());
    }

    #[test]
    fn flat_ratio_bounded() {
        let style = StyleConfig {
            flat_shelf_ratio: 1.5,
            ..StyleConfig::default()
        };
        assert!(style.validate().is_err());
    }

    #[test]
    fn json_uses_style_sheet_keys() {
        let style = StyleConfig::from_json(
            r#"{ "thickness": 0.5, "minAngle": 45, "maxAngle": 90, "material": "oak" }"#,
        )
        .unwrap();
        assert!((style.thickness - 0.5).abs() < f64::EPSILON);
        assert!((style.min_angle - 45.0).abs() < f64::EPSILON);
        assert_eq!(style.surface, Some(SurfaceRef("oak".into())));
        // untouched keys keep their defaults
        assert!((style.max_depth - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = StyleConfig::from_json("{ thickness: ").unwrap_err();
        assert!(matches!(err, ShelfError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn json_with_bad_bounds_rejected() {
        let err = StyleConfig::from_json(r#"{ "minDepth": 9, "maxDepth": 4 }"#).unwrap_err();
        assert!(err.is_invalid_config());
    }
}
