//! Run configuration – reads `triloc.toml` and applies `TRILOC_*` overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use triloc_perception::presence::DEFAULT_DETECTION_RADIUS;
use triloc_perception::projection::DEFAULT_MOUNTING_RADIUS;
use triloc_perception::fusion::DEFAULT_MIN_INTENSITY_THRESHOLD;
use triloc_perception::{FusionConfig, PresenceClassifier};
use triloc_types::TrilocError;

/// Settings for one estimation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sensor data files, ordered to match the 0°, 120° and 240° mounts.
    #[serde(default = "default_sensor_files")]
    pub sensor_files: Vec<PathBuf>,

    /// Distance from the array origin to each sensor.
    #[serde(default = "default_mounting_radius")]
    pub mounting_radius: f64,

    /// Peaks below this intensity reject the estimate.
    #[serde(default = "default_min_intensity_threshold")]
    pub min_intensity_threshold: f64,

    /// Radius of the detection circle.
    #[serde(default = "default_detection_radius")]
    pub detection_radius: f64,
}

fn default_sensor_files() -> Vec<PathBuf> {
    ["sensor1.json", "sensor2.json", "sensor3.json"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}
fn default_mounting_radius() -> f64 {
    DEFAULT_MOUNTING_RADIUS
}
fn default_min_intensity_threshold() -> f64 {
    DEFAULT_MIN_INTENSITY_THRESHOLD
}
fn default_detection_radius() -> f64 {
    DEFAULT_DETECTION_RADIUS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sensor_files: default_sensor_files(),
            mounting_radius: default_mounting_radius(),
            min_intensity_threshold: default_min_intensity_threshold(),
            detection_radius: default_detection_radius(),
        }
    }
}

impl Config {
    pub fn fusion_config(&self) -> FusionConfig {
        FusionConfig::new(self.mounting_radius, self.min_intensity_threshold)
    }

    pub fn classifier(&self) -> PresenceClassifier {
        PresenceClassifier::new(self.detection_radius)
    }

    /// Reject settings that would make the verdict meaningless: a NaN or
    /// infinite threshold, or a radius that is not finite and non-negative.
    pub fn validate(&self) -> Result<(), TrilocError> {
        if !self.min_intensity_threshold.is_finite() {
            return Err(TrilocError::Config(format!(
                "min_intensity_threshold must be finite, got {}",
                self.min_intensity_threshold
            )));
        }
        for (name, value) in [
            ("mounting_radius", self.mounting_radius),
            ("detection_radius", self.detection_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TrilocError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Path of the config file: `$TRILOC_CONFIG`, or `triloc.toml` in the
/// working directory.
pub fn config_path() -> PathBuf {
    config_path_from(|key| std::env::var(key).ok())
}

pub(crate) fn config_path_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("TRILOC_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("triloc.toml"))
}

/// Load the config from [`config_path`], apply environment overrides, and
/// validate the result.
///
/// A missing file yields the defaults.
pub fn load() -> Result<Config, TrilocError> {
    load_with(|key| std::env::var(key).ok())
}

pub(crate) fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, TrilocError> {
    let mut cfg = load_from(&config_path_from(&lookup))?.unwrap_or_default();
    apply_overrides(&mut cfg, &lookup);
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config from a specific path.  Returns `None` if the file does not
/// exist.
pub(crate) fn load_from(path: &Path) -> Result<Option<Config>, TrilocError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| {
        TrilocError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let cfg: Config = toml::from_str(&raw).map_err(|e| {
        TrilocError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;
    Ok(Some(cfg))
}

/// Apply `TRILOC_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `TRILOC_SENSOR_DIR` | directory prefixed to every `sensor_files` entry |
/// | `TRILOC_MOUNTING_RADIUS` | `mounting_radius` |
/// | `TRILOC_MIN_INTENSITY` | `min_intensity_threshold` |
/// | `TRILOC_DETECTION_RADIUS` | `detection_radius` |
///
/// Values that do not parse as numbers are ignored; values that parse but
/// are out of range are rejected by [`Config::validate`].
pub(crate) fn apply_overrides(cfg: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup("TRILOC_SENSOR_DIR") {
        let dir = PathBuf::from(dir);
        cfg.sensor_files = cfg.sensor_files.iter().map(|f| dir.join(f)).collect();
    }
    if let Some(v) = lookup("TRILOC_MOUNTING_RADIUS")
        && let Ok(r) = v.trim().parse::<f64>() {
            cfg.mounting_radius = r;
        }
    if let Some(v) = lookup("TRILOC_MIN_INTENSITY")
        && let Ok(t) = v.trim().parse::<f64>() {
            cfg.min_intensity_threshold = t;
        }
    if let Some(v) = lookup("TRILOC_DETECTION_RADIUS")
        && let Ok(r) = v.trim().parse::<f64>() {
            cfg.detection_radius = r;
        }
}
