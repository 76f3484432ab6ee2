//! Configuration system
//!
//! Declarative camera setups loaded from TOML or RON files, applied on
//! top of a live [`OrbitCamera`].

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::scene::{OrbitCamera, Spatial};

/// Configuration trait
///
/// File format is chosen by extension: `.toml` or `.ron`.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Declarative description of an orbit camera setup
///
/// Every field is optional; absent fields leave the camera alone.
/// Fields apply in a fixed order: `position`, then `orientation_euler`,
/// then the orbit move (when `azimuth` or `elevation` is given,
/// consuming `distance` as the orbit radius and `target` as the orbit
/// center) or a plain look toward `target`, and finally a distance move
/// when no orbit consumed it.
///
/// ```toml
/// azimuth = 45.0
/// elevation = -20.0
/// distance = 8.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraRigConfig {
    /// Starting position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,

    /// Orientation as per-axis euler angles in radians (x, y, z order)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation_euler: Option<Vec3>,

    /// Point the camera faces after positioning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec3>,

    /// Orbit azimuth around the world Y axis, in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f32>,

    /// Orbit elevation around the world X axis, in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f32>,

    /// Viewing distance; orbit radius when orbiting, otherwise a
    /// distance move along the local negative Z axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

impl CameraRigConfig {
    /// Apply the configured fields to a camera
    pub fn apply(&self, camera: &mut OrbitCamera) {
        if let Some(position) = self.position {
            camera.set_position(position);
        }
        if let Some(angles) = self.orientation_euler {
            camera.set_orientation_euler(angles);
        }

        let orbiting = self.azimuth.is_some() || self.elevation.is_some();
        if orbiting {
            let center = self.target.unwrap_or_else(Vec3::zeros);
            let radius = self.distance.unwrap_or_else(|| camera.distance());
            camera.orbit(
                self.azimuth.unwrap_or(0.0),
                self.elevation.unwrap_or(0.0),
                radius,
                center,
            );
        } else if let Some(target) = self.target {
            camera.look_at(target, Vec3::y());
        }

        // The orbit already consumed distance as its radius
        if !orbiting {
            if let Some(distance) = self.distance {
                camera.set_distance(distance);
            }
        }
    }
}

impl Config for CameraRigConfig {}
