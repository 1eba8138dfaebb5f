//! `triloc` – estimate an object's position from three radial sensors.
//!
//! 1. Loads `triloc.toml` (optional) and applies `TRILOC_*` overrides.
//! 2. Reads the three sensor files, ordered 0°, 120°, 240°.
//! 3. Fuses the peaks into one position and classifies presence.
//! 4. Prints either the absence notice, or the position followed by the
//!    presence verdict.
//!
//! Any loading or validation error is fatal and exits with status 1.

mod config;
mod loader;
mod report;
mod telemetry;

use colored::Colorize;
use tracing::info;

use triloc_perception::PositionFuser;
use triloc_types::TrilocError;

use crate::config::Config;
use crate::report::Report;

fn main() {
    telemetry::init_tracing();

    let result = config::load().and_then(|cfg| run(&cfg));
    match result {
        Ok(report) => report.print(),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Execute one estimation pass with `cfg`.
fn run(cfg: &Config) -> Result<Report, TrilocError> {
    info!(files = ?cfg.sensor_files, "loading sensor data");
    let readings = loader::load_readings(&cfg.sensor_files)?;

    let fuser = PositionFuser::new(cfg.fusion_config());
    let position = fuser.estimate_position(&readings)?;
    let present = cfg.classifier().is_object_present(&position);
    info!(found = position.is_found(), present, "estimation complete");

    Ok(Report::new(position, present))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use triloc_types::EstimatedPosition;

    fn write_sensors(dir: &Path, sweeps: &[(&str, &str)]) -> Vec<PathBuf> {
        sweeps
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let path = dir.join(format!("sensor{}.json", i + 1));
                let body = format!(r#"{{"a": {}, "x": {x}, "y": {y}}}"#, i + 1);
                fs::write(&path, body).expect("write");
                path
            })
            .collect()
    }

    #[test]
    fn symmetric_peaks_land_inside_circle() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let cfg = Config {
            sensor_files: write_sensors(
                dir.path(),
                &[
                    ("[0, 100, 200]", "[20, 80, 40]"),
                    ("[0, 100, 200]", "[20, 90, 40]"),
                    ("[0, 100, 200]", "[20, 85, 40]"),
                ],
            ),
            ..Config::default()
        };

        let report = run(&cfg).expect("run");
        let p = report.position.point().expect("found");
        assert!(p.norm() < 1e-9, "norm={}", p.norm());
        assert!(report.present);
        assert_eq!(report.lines()[1], "Object is present within the circle.");
    }

    #[test]
    fn lopsided_peaks_fall_outside_small_circle() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let cfg = Config {
            sensor_files: write_sensors(
                dir.path(),
                &[
                    ("[0, 900]", "[10, 95]"),
                    ("[0, 900]", "[60, 10]"),
                    ("[0, 900]", "[60, 10]"),
                ],
            ),
            detection_radius: 250.0,
            ..Config::default()
        };

        // Sensor 1 extends 900 units along +X; the other two stay on their
        // mounts, so the average sits at x = 300.
        let report = run(&cfg).expect("run");
        let p = report.position.point().expect("found");
        assert!((p.x - 300.0).abs() < 1e-9, "x={}", p.x);
        assert!(!report.present);
    }

    #[test]
    fn weak_sensor_reports_absence() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let cfg = Config {
            sensor_files: write_sensors(
                dir.path(),
                &[
                    ("[0, 100]", "[20, 80]"),
                    ("[0, 100]", "[5, 10]"),
                    ("[0, 100]", "[20, 85]"),
                ],
            ),
            ..Config::default()
        };

        let report = run(&cfg).expect("run");
        assert!(matches!(
            &report.position,
            EstimatedPosition::Absent { sensor_id, .. } if sensor_id == "2"
        ));
        assert!(!report.present);
        assert_eq!(report.lines(), vec!["Object might be absent."]);
    }

    #[test]
    fn wrong_number_of_files_is_fatal() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let cfg = Config {
            sensor_files: write_sensors(dir.path(), &[("[0]", "[90]"), ("[0]", "[90]")]),
            ..Config::default()
        };
        assert!(matches!(
            run(&cfg),
            Err(TrilocError::InvalidSensorCount { actual: 2, .. })
        ));
    }

    #[test]
    fn missing_sensor_file_is_fatal() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let cfg = Config {
            sensor_files: vec![dir.path().join("sensor1.json")],
            ..Config::default()
        };
        assert!(matches!(run(&cfg), Err(TrilocError::Io { .. })));
    }
}
