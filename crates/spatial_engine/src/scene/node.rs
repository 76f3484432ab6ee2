//! Spatial node primitives
//!
//! Follows scene-node conventions:
//! - Y-up right-handed coordinates
//! - Orientation stored as a unit quaternion, axes derived on demand
//! - Motion operations expressed once, on the `Spatial` trait

use crate::foundation::math::{utils, Mat3, Mat4, Quat, Vec3};

/// Elevation clamp for orbit moves, in degrees. Keeps the viewing
/// direction from becoming collinear with the Y-up vector.
const ORBIT_ELEVATION_LIMIT: f32 = 89.9;

/// Capability trait for anything with a pose in 3D space
///
/// Implementors supply position and orientation storage; every motion
/// operation is provided on top of those four accessors, so nodes and
/// cameras share one vocabulary of moves.
///
/// Angles follow the conventions of the operations they serve: euler
/// accessors speak radians, the interactive moves (`tilt`, `pan`,
/// `roll`, `orbit`) speak degrees.
pub trait Spatial {
    /// World space position
    fn position(&self) -> Vec3;

    /// Replace the world space position
    fn set_position(&mut self, position: Vec3);

    /// World space orientation quaternion
    fn orientation(&self) -> Quat;

    /// Replace the world space orientation
    fn set_orientation(&mut self, orientation: Quat);

    /// Local X axis (right) expressed in world space
    fn x_axis(&self) -> Vec3 {
        self.orientation() * Vec3::x()
    }

    /// Local Y axis (up) expressed in world space
    fn y_axis(&self) -> Vec3 {
        self.orientation() * Vec3::y()
    }

    /// Local Z axis expressed in world space
    fn z_axis(&self) -> Vec3 {
        self.orientation() * Vec3::z()
    }

    /// Viewing direction, along the local negative Z axis
    fn look_dir(&self) -> Vec3 {
        -self.z_axis()
    }

    /// Up direction, along the local Y axis
    fn up_dir(&self) -> Vec3 {
        self.y_axis()
    }

    /// Orientation as per-axis euler angles in radians (x, y, z order)
    fn orientation_euler(&self) -> Vec3 {
        let (x, y, z) = self.orientation().euler_angles();
        Vec3::new(x, y, z)
    }

    /// Replace the orientation from per-axis euler angles in radians
    fn set_orientation_euler(&mut self, angles: Vec3) {
        self.set_orientation(Quat::from_euler_angles(angles.x, angles.y, angles.z));
    }

    /// Translate by a world space offset
    fn translate(&mut self, offset: Vec3) {
        let position = self.position();
        self.set_position(position + offset);
    }

    /// Translate along the local X axis
    fn truck(&mut self, amount: f32) {
        let axis = self.x_axis();
        self.translate(axis * amount);
    }

    /// Translate along the local Y axis
    fn boom(&mut self, amount: f32) {
        let axis = self.y_axis();
        self.translate(axis * amount);
    }

    /// Translate along the local Z axis
    fn dolly(&mut self, amount: f32) {
        let axis = self.z_axis();
        self.translate(axis * amount);
    }

    /// Rotate around the local X axis by an angle in degrees
    fn tilt(&mut self, degrees: f32) {
        self.rotate(Quat::from_axis_angle(&Vec3::x_axis(), utils::deg_to_rad(degrees)));
    }

    /// Rotate around the local Y axis by an angle in degrees
    fn pan(&mut self, degrees: f32) {
        self.rotate(Quat::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(degrees)));
    }

    /// Rotate around the local Z axis by an angle in degrees
    fn roll(&mut self, degrees: f32) {
        self.rotate(Quat::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(degrees)));
    }

    /// Compose a rotation in the local frame
    ///
    /// Right-multiplication: the rotation's axis is interpreted in the
    /// node's own coordinate frame, which for a canonical-axis rotation
    /// equals rotating about the node's world space X/Y/Z axis.
    fn rotate(&mut self, rotation: Quat) {
        let orientation = self.orientation();
        self.set_orientation(orientation * rotation);
    }

    /// Rotate the position around a pivot point, leaving orientation alone
    fn rotate_around(&mut self, rotation: Quat, pivot: Vec3) {
        let position = self.position();
        self.set_position(rotation * (position - pivot) + pivot);
    }

    /// Reorient so the local +Z axis points at `target`
    ///
    /// Position is unchanged; `up` resolves the roll ambiguity. With the
    /// +Z axis facing the target, a subsequent distance move along -Z
    /// backs the node away along the same viewing ray. A target
    /// coincident with the current position leaves orientation alone.
    fn look_at(&mut self, target: Vec3, up: Vec3) {
        let direction = target - self.position();
        if direction.magnitude() > 1e-6 {
            self.set_orientation(Quat::face_towards(&direction, &up));
        }
    }

    /// Place the node on a sphere around `center` and face the center
    ///
    /// `azimuth` rotates about the world Y axis and `elevation` about the
    /// world X axis, both in degrees; `radius` is the sphere radius.
    /// Elevation is clamped to ±89.9° so the look direction never
    /// degenerates against the Y-up vector.
    fn orbit(&mut self, azimuth: f32, elevation: f32, radius: f32, center: Vec3) {
        let elevation = utils::clamp(elevation, -ORBIT_ELEVATION_LIMIT, ORBIT_ELEVATION_LIMIT);
        let latitude = Quat::from_axis_angle(&Vec3::x_axis(), utils::deg_to_rad(elevation));
        let longitude = Quat::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(azimuth));
        let offset = longitude * (latitude * Vec3::new(0.0, 0.0, radius));
        self.set_position(center + offset);
        self.look_at(center, Vec3::y());
    }

    /// Return to the origin with identity orientation
    fn reset(&mut self) {
        self.set_position(Vec3::zeros());
        self.set_orientation(Quat::identity());
    }
}

/// A free-standing node in 3D space
///
/// Stores position, orientation, and per-axis scale. Motion comes from
/// the [`Spatial`] trait; scale and the TRS matrix conversions live here
/// because they are node concerns, not pose concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialNode {
    position: Vec3,
    orientation: Quat,
    scale: Vec3,
}

impl Default for SpatialNode {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            orientation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl SpatialNode {
    /// Create a node at the origin with identity orientation and unit scale
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node at a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a node from position and orientation
    pub fn from_position_orientation(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
            ..Default::default()
        }
    }

    /// Builder pattern: set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: set orientation
    pub fn with_orientation(mut self, orientation: Quat) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder pattern: set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Per-axis scale factors
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Replace the per-axis scale factors
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Replace the scale with a uniform factor
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::new(scale, scale, scale);
    }

    /// Compose the node's transformation matrix (TRS order)
    pub fn transform_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.orientation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Replace the whole pose from a transformation matrix (decompose TRS)
    pub fn set_transform_matrix(&mut self, matrix: Mat4) {
        // Extract position
        self.position = Vec3::new(matrix.m14, matrix.m24, matrix.m34);

        // Extract scale from the matrix columns
        let scale_x = Vec3::new(matrix.m11, matrix.m21, matrix.m31).magnitude();
        let scale_y = Vec3::new(matrix.m12, matrix.m22, matrix.m32).magnitude();
        let scale_z = Vec3::new(matrix.m13, matrix.m23, matrix.m33).magnitude();
        self.scale = Vec3::new(scale_x, scale_y, scale_z);

        // Extract rotation by removing scale from the rotation columns
        let rotation_matrix = Mat3::new(
            matrix.m11 / scale_x, matrix.m12 / scale_y, matrix.m13 / scale_z,
            matrix.m21 / scale_x, matrix.m22 / scale_y, matrix.m23 / scale_z,
            matrix.m31 / scale_x, matrix.m32 / scale_y, matrix.m33 / scale_z,
        );
        self.orientation = Quat::from_matrix(&rotation_matrix);
    }
}

impl Spatial for SpatialNode {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_node_defaults() {
        let node = SpatialNode::new();

        assert_eq!(node.position(), Vec3::zeros());
        assert_relative_eq!(node.orientation(), Quat::identity(), epsilon = EPSILON);
        assert_eq!(node.scale(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_identity_axes_match_canonical_basis() {
        let node = SpatialNode::new();

        assert_relative_eq!(node.x_axis(), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(node.y_axis(), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(0.0, 0.0, 1.0), epsilon = EPSILON);
        assert_relative_eq!(node.look_dir(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(node.up_dir(), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_axes_follow_orientation() {
        // 90 degrees around Y swings X toward -Z and Z toward +X
        let mut node = SpatialNode::new();
        node.set_orientation(Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0));

        assert_relative_eq!(node.x_axis(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(node.y_axis(), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_axes_stay_orthonormal() {
        let rotations = vec![
            Quat::from_axis_angle(&Vec3::y_axis(), 0.7),
            Quat::from_axis_angle(&Vec3::x_axis(), -1.2),
            Quat::from_axis_angle(&nalgebra::Unit::new_normalize(Vec3::new(1.0, 1.0, 1.0)), 0.5),
            Quat::from_euler_angles(0.3, -0.8, 2.1),
        ];

        for rotation in rotations {
            let node = SpatialNode::new().with_orientation(rotation);
            let (x, y, z) = (node.x_axis(), node.y_axis(), node.z_axis());

            assert_relative_eq!(x.magnitude(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(y.magnitude(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(z.magnitude(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(x.dot(&y), 0.0, epsilon = EPSILON);
            assert_relative_eq!(y.dot(&z), 0.0, epsilon = EPSILON);
            assert_relative_eq!(z.dot(&x), 0.0, epsilon = EPSILON);

            // Right-handed frame: X cross Y must reproduce Z
            assert_relative_eq!(x.cross(&y), z, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_translate_accumulates() {
        let mut node = SpatialNode::from_position(Vec3::new(1.0, 0.0, 0.0));
        node.translate(Vec3::new(0.0, 2.0, -1.0));

        assert_relative_eq!(node.position(), Vec3::new(1.0, 2.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_local_moves_follow_rotated_axes() {
        // Facing +X after a 90 degree pan, so truck slides along -Z
        let mut node = SpatialNode::new();
        node.set_orientation(Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0));

        node.truck(2.0);
        assert_relative_eq!(node.position(), Vec3::new(0.0, 0.0, -2.0), epsilon = EPSILON);

        node.boom(3.0);
        assert_relative_eq!(node.position(), Vec3::new(0.0, 3.0, -2.0), epsilon = EPSILON);

        node.dolly(1.0);
        assert_relative_eq!(node.position(), Vec3::new(1.0, 3.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_tilt_pan_roll_compose_in_local_frame() {
        let mut node = SpatialNode::new();
        node.pan(90.0);
        node.tilt(90.0);

        assert_relative_eq!(node.x_axis(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(node.y_axis(), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(0.0, -1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_matches_quaternion_product() {
        let first = Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0);
        let second = Quat::from_axis_angle(&Vec3::x_axis(), PI / 2.0);

        let mut node = SpatialNode::new();
        node.rotate(first);
        node.rotate(second);

        let expected = first * second;
        let dot = node.orientation().coords.dot(&expected.coords);
        assert!(dot.abs() > 0.999, "rotation composition mismatch: dot product = {}", dot);
    }

    #[test]
    fn test_rotate_around_pivot() {
        let quarter_turn = Quat::from_axis_angle(&Vec3::z_axis(), PI / 2.0);

        let mut node = SpatialNode::from_position(Vec3::new(2.0, 0.0, 0.0));
        node.rotate_around(quarter_turn, Vec3::zeros());
        assert_relative_eq!(node.position(), Vec3::new(0.0, 2.0, 0.0), epsilon = EPSILON);

        let mut node = SpatialNode::from_position(Vec3::new(2.0, 0.0, 0.0));
        node.rotate_around(quarter_turn, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(node.position(), Vec3::new(1.0, 1.0, 0.0), epsilon = EPSILON);

        // Orientation is untouched, only the position swings
        assert_relative_eq!(node.orientation(), Quat::identity(), epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_aims_local_z_at_target() {
        let mut node = SpatialNode::from_position(Vec3::new(0.0, 0.0, 5.0));
        node.look_at(Vec3::zeros(), Vec3::y());

        assert_relative_eq!(node.position(), Vec3::new(0.0, 0.0, 5.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(node.up_dir(), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);

        let mut node = SpatialNode::from_position(Vec3::new(5.0, 0.0, 0.0));
        node.look_at(Vec3::zeros(), Vec3::y());
        assert_relative_eq!(node.z_axis(), Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_coincident_target_leaves_orientation() {
        let orientation = Quat::from_axis_angle(&Vec3::y_axis(), 0.4);
        let mut node = SpatialNode::from_position_orientation(Vec3::new(1.0, 2.0, 3.0), orientation);

        node.look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::y());
        assert_eq!(node.orientation(), orientation);
    }

    #[test]
    fn test_euler_round_trip() {
        let angles = Vec3::new(0.3, 0.5, -0.2);

        let mut node = SpatialNode::new();
        node.set_orientation_euler(angles);

        assert_relative_eq!(node.orientation_euler(), angles, epsilon = EPSILON);
    }

    #[test]
    fn test_transform_matrix_composes_trs() {
        let mut node = SpatialNode::from_position(Vec3::new(1.0, 2.0, 3.0));
        node.set_orientation(Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0));
        node.set_uniform_scale(2.0);

        let matrix = node.transform_matrix();

        // Translation lands in the last column
        assert_relative_eq!(Vec3::new(matrix.m14, matrix.m24, matrix.m34), Vec3::new(1.0, 2.0, 3.0), epsilon = EPSILON);

        // Direction transform applies rotation and scale but not translation
        let transformed = matrix.transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(transformed, Vec3::new(0.0, 0.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_transform_matrix_round_trip() {
        let original = SpatialNode::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_orientation(Quat::from_axis_angle(&nalgebra::Unit::new_normalize(Vec3::new(1.0, 1.0, 1.0)), 0.5))
            .with_scale(Vec3::new(2.0, 1.5, 0.8));

        let mut reconstructed = SpatialNode::new();
        reconstructed.set_transform_matrix(original.transform_matrix());

        assert_relative_eq!(reconstructed.position(), original.position(), epsilon = EPSILON);
        assert_relative_eq!(reconstructed.scale(), original.scale(), epsilon = EPSILON);

        // Quaternions might flip sign but represent the same rotation
        let dot = original.orientation().coords.dot(&reconstructed.orientation().coords);
        assert!(dot.abs() > 0.999, "rotation mismatch after decompose: dot product = {}", dot);
    }

    #[test]
    fn test_reset_keeps_scale() {
        let mut node = SpatialNode::from_position(Vec3::new(4.0, 5.0, 6.0));
        node.pan(45.0);
        node.set_scale(Vec3::new(2.0, 2.0, 2.0));

        node.reset();

        assert_eq!(node.position(), Vec3::zeros());
        assert_relative_eq!(node.orientation(), Quat::identity(), epsilon = EPSILON);
        assert_eq!(node.scale(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_orbit_places_node_and_faces_center() {
        let mut node = SpatialNode::new();

        node.orbit(0.0, 0.0, 5.0, Vec3::zeros());
        assert_relative_eq!(node.position(), Vec3::new(0.0, 0.0, 5.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);

        node.orbit(90.0, 0.0, 5.0, Vec3::zeros());
        assert_relative_eq!(node.position(), Vec3::new(5.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(-1.0, 0.0, 0.0), epsilon = EPSILON);

        // Elevation swings through the X axis rotation, radius is preserved
        node.orbit(0.0, 30.0, 5.0, Vec3::zeros());
        assert_relative_eq!(node.position().magnitude(), 5.0, epsilon = EPSILON);
        assert_relative_eq!(node.position().y, -2.5, epsilon = EPSILON);
    }

    #[test]
    fn test_orbit_respects_offset_center() {
        let center = Vec3::new(10.0, 0.0, 0.0);

        let mut node = SpatialNode::new();
        node.orbit(0.0, 0.0, 3.0, center);

        assert_relative_eq!(node.position(), Vec3::new(10.0, 0.0, 3.0), epsilon = EPSILON);
        assert_relative_eq!((node.position() - center).magnitude(), 3.0, epsilon = EPSILON);
        assert_relative_eq!(node.z_axis(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_orbit_clamps_elevation() {
        let mut clamped = SpatialNode::new();
        clamped.orbit(0.0, 120.0, 5.0, Vec3::zeros());

        let mut limit = SpatialNode::new();
        limit.orbit(0.0, 89.9, 5.0, Vec3::zeros());

        assert_relative_eq!(clamped.position(), limit.position(), epsilon = EPSILON);
    }
}
