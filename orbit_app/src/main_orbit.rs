//! Orbit Camera Demo
//!
//! Drives an orbit camera through a full sweep around the origin:
//! - Azimuth sweep at fixed elevation, reporting pose and distance
//! - Zoom by stepping the viewing distance toward the target
//! - Rejected distance requests leaving the pose untouched
//! - Optional rig file (camera.toml) applied before the sweep

use spatial_engine::foundation::logging;
use spatial_engine::foundation::math::utils;
use spatial_engine::prelude::*;

// Sweep settings
const ORBIT_RADIUS: f32 = 8.0;
const ORBIT_ELEVATION: f32 = -25.0;  // Degrees, negative swings the camera above the horizon
const ORBIT_STEPS: usize = 12;

// Zoom settings
const ZOOM_STEPS: usize = 4;
const ZOOM_TARGET: f32 = 2.0;

const RIG_FILE: &str = "camera.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    println!("=== Orbit Camera Demo ===");
    println!("Sweeping a camera around the origin, then zooming in.");
    println!();

    let mut camera = OrbitCamera::from_distance(ORBIT_RADIUS);

    // An optional rig file overrides the starting pose
    if std::path::Path::new(RIG_FILE).exists() {
        let rig = CameraRigConfig::load_from_file(RIG_FILE)?;
        rig.apply(&mut camera);
        log::info!("Applied rig file {}: distance {:.2}", RIG_FILE, camera.distance());
    }

    sweep(&mut camera);
    zoom(&mut camera);

    // Non-positive distances are ignored and must leave the pose alone
    let before = camera.position();
    camera.set_distance(-1.0);
    camera.set_distance(0.0);
    if camera.position() == before {
        println!("Rejected non-positive distance requests, pose unchanged.");
    } else {
        log::error!("Pose drifted after a rejected distance request");
    }

    Ok(())
}

/// Sweep a full turn of azimuth at fixed elevation and radius
fn sweep(camera: &mut OrbitCamera) {
    println!("Azimuth sweep at {:.1} degrees elevation:", ORBIT_ELEVATION);

    for step in 0..=ORBIT_STEPS {
        let azimuth = step as f32 * 360.0 / ORBIT_STEPS as f32;
        camera.orbit(azimuth, ORBIT_ELEVATION, ORBIT_RADIUS, Vec3::zeros());

        let position = camera.position();
        println!(
            "  azimuth {:>5.1}  position ({:6.2}, {:6.2}, {:6.2})  distance {:.2}",
            azimuth, position.x, position.y, position.z,
            camera.distance()
        );
    }
    println!();
}

/// Step the viewing distance down toward the zoom target
fn zoom(camera: &mut OrbitCamera) {
    let start = camera.distance();
    println!("Zooming from {:.1} to {:.1}:", start, ZOOM_TARGET);

    for step in 1..=ZOOM_STEPS {
        let t = step as f32 / ZOOM_STEPS as f32;
        camera.set_distance(utils::lerp(start, ZOOM_TARGET, t));

        let position = camera.position();
        println!(
            "  distance {:.2}  position ({:6.2}, {:6.2}, {:6.2})",
            camera.distance(),
            position.x, position.y, position.z
        );
    }
    println!();
}
