//! Orbit camera
//!
//! A camera is a spatial node with one extra degree of freedom worth
//! naming: its distance from the origin along the viewing ray.

use crate::foundation::math::{Quat, Vec3};
use crate::scene::node::{Spatial, SpatialNode};

/// Camera node driven by a scalar viewing distance
///
/// Wraps a [`SpatialNode`] and adds the distance vocabulary of an orbit
/// rig: [`set_distance`](Self::set_distance) re-derives the position
/// from the current orientation, [`distance`](Self::distance) reads it
/// back as the length of the position vector. Every other pose
/// operation arrives through the [`Spatial`] trait and lands on the
/// wrapped node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrbitCamera {
    node: SpatialNode,
}

impl OrbitCamera {
    /// Create a camera at the origin with identity orientation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera already backed off to `distance`
    pub fn from_distance(distance: f32) -> Self {
        let mut camera = Self::default();
        camera.set_distance(distance);
        camera
    }

    /// Borrow the underlying spatial node
    pub fn node(&self) -> &SpatialNode {
        &self.node
    }

    /// Mutably borrow the underlying spatial node
    pub fn node_mut(&mut self) -> &mut SpatialNode {
        &mut self.node
    }

    /// Place the camera `distance` units from the origin along its local
    /// negative Z axis
    ///
    /// Orientation is untouched, so the camera keeps facing the way it
    /// already faced; only the position is re-derived from the current
    /// Z axis. Non-positive distances are ignored and leave the whole
    /// pose unchanged.
    pub fn set_distance(&mut self, distance: f32) {
        if distance > 0.0 {
            let z_axis = self.node.z_axis();
            self.node.set_position(-distance * z_axis);
            log::trace!("Camera distance set to: {}", distance);
        } else {
            log::trace!("Ignoring non-positive camera distance: {}", distance);
        }
    }

    /// Current distance from the origin, the length of the position vector
    pub fn distance(&self) -> f32 {
        self.node.position().magnitude()
    }
}

impl Spatial for OrbitCamera {
    fn position(&self) -> Vec3 {
        self.node.position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.node.set_position(position);
    }

    fn orientation(&self) -> Quat {
        self.node.orientation()
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.node.set_orientation(orientation);
    }
}
