//! # Spatial Engine
//!
//! Spatial nodes and orbit-style cameras built on quaternion math.
//!
//! ## Features
//!
//! - **Quaternion Pose Math**: positions, orientations, and derived axes via nalgebra
//! - **Shared Motion Vocabulary**: one `Spatial` trait drives nodes and cameras alike
//! - **Orbit Camera**: distance-driven viewing with orbit, look-at, and zoom moves
//! - **Declarative Setup**: camera rigs described in TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use spatial_engine::prelude::*;
//!
//! let mut camera = OrbitCamera::new();
//! camera.orbit(45.0, -20.0, 10.0, Vec3::zeros());
//! assert!((camera.distance() - 10.0).abs() < 1e-4);
//!
//! // Zooming in keeps the viewing ray, only the distance changes
//! camera.set_distance(4.0);
//! assert!((camera.distance() - 4.0).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod scene;

pub use config::{CameraRigConfig, Config, ConfigError};
pub use scene::{OrbitCamera, Spatial, SpatialNode};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{CameraRigConfig, Config, ConfigError},
        foundation::math::{Mat4, Quat, Vec3},
        scene::{OrbitCamera, Spatial, SpatialNode},
    };
}
