//! Scene module - Spatial nodes and cameras
//!
//! The types that give a scene its geometry:
//! - `Spatial` trait: the shared vocabulary of pose operations
//! - `SpatialNode`: a free-standing node with position, orientation, scale
//! - `OrbitCamera`: a node specialized for distance-driven viewing

pub mod camera;
pub mod node;

pub use camera::OrbitCamera;
pub use node::{Spatial, SpatialNode};
