//! `triloc-perception` – position estimation for a three-sensor radial array.
//!
//! Each sensor reports a sweep of distance samples paired with signal
//! intensity.  The pipeline turns three such sweeps into one position and a
//! presence verdict:
//!
//! ```text
//! readings ─▶ find_peak (×3) ─▶ project (×3) ─▶ average ─▶ is_object_present
//! ```
//!
//! # Modules
//!
//! - [`peak`] – [`find_peak`][peak::find_peak]: distance and intensity at the
//!   strongest sample of a sweep.
//! - [`projection`] – [`Projector`][projection::Projector] and the default
//!   [`RadialProjector`][projection::RadialProjector]: polar-to-Cartesian
//!   mapping relative to the sensor's mount point, plus the fixed
//!   [`MountingConfig`][projection::MountingConfig].
//! - [`fusion`] – [`PositionFuser`][fusion::PositionFuser]: threshold check
//!   and averaging of the three projected peaks.
//! - [`presence`] – [`PresenceClassifier`][presence::PresenceClassifier]:
//!   inclusive detection-radius test.

pub mod fusion;
pub mod peak;
pub mod presence;
pub mod projection;

pub use fusion::{FusionConfig, PositionFuser};
pub use peak::find_peak;
pub use presence::{PresenceClassifier, is_object_present};
pub use projection::{MountingConfig, Projector, RadialProjector};
