//! Pose Roundtrip Demo
//!
//! Walks a spatial node through the motion vocabulary, then builds
//! camera rigs in code, writes them to TOML and RON, loads them back,
//! and applies them to fresh cameras.

use spatial_engine::foundation::logging;
use spatial_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    println!("=== Pose Roundtrip Demo ===");
    println!();

    node_walkthrough();
    rig_roundtrip()?;

    Ok(())
}

/// Walk a node through the motion vocabulary and narrate each pose
fn node_walkthrough() {
    println!("Node motion:");
    let mut node = SpatialNode::new();

    node.translate(Vec3::new(0.0, 1.0, 6.0));
    report("translate (0, 1, 6)", &node);

    node.pan(30.0);
    report("pan 30", &node);

    node.truck(1.5);
    report("truck 1.5", &node);

    node.look_at(Vec3::zeros(), Vec3::y());
    report("look at origin", &node);

    let quarter_turn = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2);
    node.rotate_around(quarter_turn, Vec3::zeros());
    report("quarter turn around origin", &node);

    node.reset();
    report("reset", &node);
    println!();
}

fn report(label: &str, node: &SpatialNode) {
    let position = node.position();
    let look = node.look_dir();
    println!(
        "  {:<26} position ({:5.2}, {:5.2}, {:5.2})  look ({:5.2}, {:5.2}, {:5.2})",
        label,
        position.x, position.y, position.z,
        look.x, look.y, look.z
    );
}

/// Write rigs out, read them back, and apply them to fresh cameras
fn rig_roundtrip() -> Result<(), ConfigError> {
    println!("Rig files:");

    let rig = CameraRigConfig {
        azimuth: Some(45.0),
        elevation: Some(-20.0),
        distance: Some(8.0),
        ..Default::default()
    };

    let dir = std::env::temp_dir();
    for file in ["orbit_rig.toml", "orbit_rig.ron"] {
        let path = dir.join(file);
        let path = path.to_string_lossy();

        rig.save_to_file(&path)?;
        let loaded = CameraRigConfig::load_from_file(&path)?;

        let mut camera = OrbitCamera::new();
        loaded.apply(&mut camera);

        let position = camera.position();
        println!(
            "  {:<16} position ({:5.2}, {:5.2}, {:5.2})  distance {:.2}",
            file,
            position.x, position.y, position.z,
            camera.distance()
        );
    }
    println!();

    Ok(())
}
