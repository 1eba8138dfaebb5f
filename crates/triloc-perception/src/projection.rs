//! Polar Projector.
//!
//! Turns a sensor's peak distance into a point in the array's Cartesian
//! frame.  The sensors sit on a circle of radius `mounting_radius` around the
//! origin; [`MountingConfig`] fixes where each one is installed.
//!
//! # Example
//!
//! ```rust
//! use triloc_perception::projection::{Projector, RadialProjector};
//!
//! let p = RadialProjector.project(100.0, 0.0, 600.0);
//! assert!((p.x - 700.0).abs() < 1e-9);
//! assert!(p.y.abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use triloc_types::Point2D;

// ────────────────────────────────────────────────────────────────────────────
// MountingConfig
// ────────────────────────────────────────────────────────────────────────────

/// Number of sensors in the array.
pub const SENSOR_COUNT: usize = 3;

/// Default distance from the origin to each sensor.
pub const DEFAULT_MOUNTING_RADIUS: f64 = 600.0;

/// Physical layout of the sensor array.
///
/// The angles are fixed at 0°, 120° and 240°; only the shared radius varies
/// between installations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountingConfig {
    angles: [f64; SENSOR_COUNT],
    mounting_radius: f64,
}

impl MountingConfig {
    /// Create a layout with the standard angles and the given radius.
    pub fn new(mounting_radius: f64) -> Self {
        Self {
            angles: [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0],
            mounting_radius,
        }
    }

    /// Mounting angles in radians, indexed by sensor position.
    pub fn angles(&self) -> &[f64; SENSOR_COUNT] {
        &self.angles
    }

    pub fn mounting_radius(&self) -> f64 {
        self.mounting_radius
    }
}

impl Default for MountingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNTING_RADIUS)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projector
// ────────────────────────────────────────────────────────────────────────────

/// Geometric model mapping a sensor's peak distance to a Cartesian point.
///
/// The fuser only talks to this trait, so an alternative model can be used
/// without touching fusion or presence classification.
pub trait Projector {
    fn project(&self, peak_distance: f64, mounting_angle: f64, mounting_radius: f64) -> Point2D;
}

/// Places the object on the ray from the origin through the sensor, at
/// `mounting_radius + peak_distance` from the origin.
///
/// The mounting angle doubles as the direction toward the detected object.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadialProjector;

impl Projector for RadialProjector {
    fn project(&self, peak_distance: f64, mounting_angle: f64, mounting_radius: f64) -> Point2D {
        project(peak_distance, mounting_angle, mounting_radius)
    }
}

/// Mounting point plus a radial extension of `peak_distance` along the same
/// angle.
pub fn project(peak_distance: f64, mounting_angle: f64, mounting_radius: f64) -> Point2D {
    let (sin, cos) = mounting_angle.sin_cos();
    let mount = Point2D::new(mounting_radius * cos, mounting_radius * sin);
    mount + Point2D::new(peak_distance * cos, peak_distance * sin)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
