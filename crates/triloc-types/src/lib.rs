use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One sensor's sweep: distance samples paired index-for-index with signal
/// intensity samples.
///
/// Accepts both the long key names and the short `a` / `x` / `y` keys written
/// by the acquisition tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Sensor label, e.g. `"north"` or `"1"`.
    #[serde(alias = "a", deserialize_with = "deserialize_sensor_id")]
    pub id: String,
    /// Measured distances, in the same length units as the mounting radius.
    #[serde(alias = "x")]
    pub distances: Vec<f64>,
    /// Signal intensity at each distance sample.
    #[serde(alias = "y")]
    pub intensities: Vec<f64>,
}

impl SensorReading {
    pub fn new(id: impl Into<String>, distances: Vec<f64>, intensities: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            distances,
            intensities,
        }
    }

    /// Check the pairing invariant: both sequences non-empty and equal in
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`TrilocError::InvalidReading`] naming this sensor when the
    /// invariant does not hold.
    pub fn validate(&self) -> Result<(), TrilocError> {
        if self.distances.is_empty() || self.intensities.is_empty() {
            return Err(TrilocError::invalid_reading(&self.id, "no samples"));
        }
        if self.distances.len() != self.intensities.len() {
            return Err(TrilocError::invalid_reading(
                &self.id,
                format!(
                    "{} distances but {} intensities",
                    self.distances.len(),
                    self.intensities.len()
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSensorId {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

fn deserialize_sensor_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawSensorId::deserialize(deserializer)? {
        RawSensorId::Text(s) => s,
        RawSensorId::Integer(n) => n.to_string(),
        RawSensorId::Float(f) => f.to_string(),
        RawSensorId::Bool(b) => b.to_string(),
    })
}

/// The strongest sample of a single [`SensorReading`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakResult {
    /// Index of the sample within the reading.
    pub index: usize,
    /// Distance at the peak; feeds the projection.
    pub distance: f64,
    /// Peak intensity; only used for thresholding.
    pub intensity: f64,
}

/// A Cartesian point in the sensor array's plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance from the origin, without intermediate overflow.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

/// Outcome of one fusion pass.
///
/// `Absent` carries the sensor that rejected the estimate so callers can tell
/// a low-confidence result apart from a hard [`TrilocError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EstimatedPosition {
    Found(Point2D),
    Absent {
        sensor_id: String,
        peak_intensity: f64,
    },
}

impl EstimatedPosition {
    /// The fused point, or `None` when the estimate was rejected.
    pub fn point(&self) -> Option<Point2D> {
        match self {
            EstimatedPosition::Found(p) => Some(*p),
            EstimatedPosition::Absent { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, EstimatedPosition::Found(_))
    }
}

/// Error type shared by the loader, the fusion pipeline, and the CLI.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrilocError {
    #[error("Invalid reading from sensor {sensor_id}: {reason}")]
    InvalidReading { sensor_id: String, reason: String },

    #[error("Invalid sensor count: expected {expected}, got {actual}")]
    InvalidSensorCount { expected: usize, actual: usize },

    #[error("Failed to read sensor data at {path}: {details}")]
    Io { path: String, details: String },

    #[error("Failed to parse sensor data at {path}: {details}")]
    Parse { path: String, details: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrilocError {
    pub fn invalid_reading(sensor_id: &str, reason: impl Into<String>) -> Self {
        TrilocError::InvalidReading {
            sensor_id: sensor_id.to_string(),
            reason: reason.into(),
        }
    }
}
