//! Position Fuser.
//!
//! Combines the peaks of the three radially-mounted sensors into a single
//! [`EstimatedPosition`]:
//!
//! 1. extract each sensor's peak with [`find_peak`], in sensor order;
//! 2. reject the whole estimate as soon as one peak intensity is below
//!    `min_intensity_threshold` (remaining sensors are not inspected);
//! 3. project every accepted peak through the [`Projector`];
//! 4. average the projected points component-wise.
//!
//! Summation runs in sensor order before dividing by three, so results are
//! bit-reproducible for identical inputs.
//!
//! # Example
//!
//! ```rust
//! use triloc_perception::fusion::{FusionConfig, PositionFuser};
//! use triloc_types::SensorReading;
//!
//! let fuser = PositionFuser::new(FusionConfig::default());
//! let readings = vec![
//!     SensorReading::new("1", vec![0.0, 100.0], vec![20.0, 80.0]),
//!     SensorReading::new("2", vec![0.0, 100.0], vec![20.0, 90.0]),
//!     SensorReading::new("3", vec![0.0, 100.0], vec![20.0, 85.0]),
//! ];
//!
//! let position = fuser.estimate_position(&readings).unwrap();
//! let p = position.point().unwrap();
//! assert!(p.norm() < 1e-9);
//! ```

use tracing::{debug, warn};
use triloc_types::{EstimatedPosition, Point2D, SensorReading, TrilocError};

use crate::peak::find_peak;
use crate::projection::{MountingConfig, Projector, RadialProjector, SENSOR_COUNT};

/// Default minimum peak intensity for a sensor to be trusted.
pub const DEFAULT_MIN_INTENSITY_THRESHOLD: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// FusionConfig
// ────────────────────────────────────────────────────────────────────────────

/// Immutable parameters of a fusion pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionConfig {
    pub mounting: MountingConfig,
    /// Peaks strictly below this intensity reject the estimate.
    pub min_intensity_threshold: f64,
}

impl FusionConfig {
    pub fn new(mounting_radius: f64, min_intensity_threshold: f64) -> Self {
        Self {
            mounting: MountingConfig::new(mounting_radius),
            min_intensity_threshold,
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            mounting: MountingConfig::default(),
            min_intensity_threshold: DEFAULT_MIN_INTENSITY_THRESHOLD,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PositionFuser
// ────────────────────────────────────────────────────────────────────────────

/// Fuses three sensor readings into one averaged position.
///
/// Holds no state between calls; the same fuser can be reused for any number
/// of estimation passes.
#[derive(Debug, Clone)]
pub struct PositionFuser<P = RadialProjector> {
    config: FusionConfig,
    projector: P,
}

impl PositionFuser<RadialProjector> {
    /// Create a fuser using the default [`RadialProjector`].
    pub fn new(config: FusionConfig) -> Self {
        Self::with_projector(config, RadialProjector)
    }
}

impl<P: Projector> PositionFuser<P> {
    /// Create a fuser with a custom geometric model.
    pub fn with_projector(config: FusionConfig, projector: P) -> Self {
        Self { config, projector }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Estimate the object position from exactly three readings, ordered to
    /// match the mounting angles.
    ///
    /// Returns [`EstimatedPosition::Absent`] naming the first sensor whose
    /// peak intensity is below the threshold; a `warn!` diagnostic is emitted
    /// for that sensor.
    ///
    /// # Errors
    ///
    /// - [`TrilocError::InvalidSensorCount`] unless exactly three readings
    ///   are supplied.
    /// - [`TrilocError::InvalidReading`] when a reading inspected before any
    ///   rejection violates the pairing invariant.
    pub fn estimate_position(
        &self,
        readings: &[SensorReading],
    ) -> Result<EstimatedPosition, TrilocError> {
        if readings.len() != SENSOR_COUNT {
            return Err(TrilocError::InvalidSensorCount {
                expected: SENSOR_COUNT,
                actual: readings.len(),
            });
        }

        let mounting = &self.config.mounting;
        let mut sum = Point2D::origin();

        for (reading, &angle) in readings.iter().zip(mounting.angles()) {
            let peak = find_peak(reading)?;

            if peak.intensity < self.config.min_intensity_threshold {
                warn!(
                    sensor = %reading.id,
                    peak_intensity = peak.intensity,
                    threshold = self.config.min_intensity_threshold,
                    "low peak intensity; object might be absent"
                );
                return Ok(EstimatedPosition::Absent {
                    sensor_id: reading.id.clone(),
                    peak_intensity: peak.intensity,
                });
            }

            let point = self
                .projector
                .project(peak.distance, angle, mounting.mounting_radius());
            debug!(
                sensor = %reading.id,
                peak_distance = peak.distance,
                peak_intensity = peak.intensity,
                x = point.x,
                y = point.y,
                "sensor peak projected"
            );
            sum = sum + point;
        }

        let n = SENSOR_COUNT as f64;
        let fused = Point2D::new(sum.x / n, sum.y / n);
        debug!(x = fused.x, y = fused.y, "fused position");
        Ok(EstimatedPosition::Found(fused))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
