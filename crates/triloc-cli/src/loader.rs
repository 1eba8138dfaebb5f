//! Sensor data loading – one JSON object per sensor file.

use std::fs;
use std::path::Path;

use tracing::debug;
use triloc_types::{SensorReading, TrilocError};

/// Load one [`SensorReading`] per path, preserving order.
///
/// Every reading is validated as it is loaded so a malformed file fails with
/// its own path in the [`TrilocError::InvalidReading`] reason.
pub fn load_readings<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<SensorReading>, TrilocError> {
    paths.iter().map(|p| load_reading(p.as_ref())).collect()
}

pub fn load_reading(path: &Path) -> Result<SensorReading, TrilocError> {
    let raw = fs::read_to_string(path).map_err(|e| TrilocError::Io {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    let reading: SensorReading = serde_json::from_str(&raw).map_err(|e| TrilocError::Parse {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    reading.validate().map_err(|e| match e {
        TrilocError::InvalidReading { sensor_id, reason } => TrilocError::InvalidReading {
            sensor_id,
            reason: format!("{reason} (in {})", path.display()),
        },
        other => other,
    })?;
    debug!(
        path = %path.display(),
        sensor = %reading.id,
        samples = reading.distances.len(),
        "sensor reading loaded"
    );
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).expect("write");
        path
    }

    #[test]
    fn loads_files_in_order() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let paths = vec![
            write(dir.path(), "s1.json", r#"{"a": 1, "x": [0, 100], "y": [20, 80]}"#),
            write(dir.path(), "s2.json", r#"{"a": 2, "x": [0, 100], "y": [20, 90]}"#),
            write(
                dir.path(),
                "s3.json",
                r#"{"id": "three", "distances": [5.5], "intensities": [60]}"#,
            ),
        ];

        let readings = load_readings(&paths).expect("load");
        let ids: Vec<&str> = readings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "three"]);
        assert_eq!(readings[2].distances, vec![5.5]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let missing = dir.path().join("nope.json");
        match load_reading(&missing) {
            Err(TrilocError::Io { path, .. }) => assert!(path.ends_with("nope.json")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = write(dir.path(), "bad.json", "{ not json");
        assert!(matches!(load_reading(&path), Err(TrilocError::Parse { .. })));
    }

    #[test]
    fn missing_intensities_is_parse_error() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = write(dir.path(), "partial.json", r#"{"a": "1", "x": [1, 2]}"#);
        assert!(matches!(load_reading(&path), Err(TrilocError::Parse { .. })));
    }

    #[test]
    fn mismatched_lengths_report_path_and_sensor() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = write(dir.path(), "short.json", r#"{"a": "east", "x": [1, 2], "y": [3]}"#);
        let err = load_reading(&path).unwrap_err();
        assert!(matches!(err, TrilocError::InvalidReading { .. }));
        let msg = err.to_string();
        assert!(msg.contains("short.json"), "got: {msg}");
        assert!(msg.contains("east"), "got: {msg}");
    }

    #[test]
    fn first_failure_stops_loading() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let good = write(dir.path(), "ok.json", r#"{"a": 1, "x": [0], "y": [90]}"#);
        let missing = dir.path().join("gone.json");
        let result = load_readings(&[good.clone(), missing, good]);
        assert!(matches!(result, Err(TrilocError::Io { .. })));
    }
}
