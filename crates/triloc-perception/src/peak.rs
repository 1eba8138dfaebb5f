//! Peak Extractor.
//!
//! Picks the strongest return out of one sensor sweep.  Ties resolve to the
//! lowest index, the same result a left-to-right argmax scan gives.

use triloc_types::{PeakResult, SensorReading, TrilocError};

/// Return the distance and intensity at the maximum-intensity sample of
/// `reading`.
///
/// # Errors
///
/// Returns [`TrilocError::InvalidReading`] when the reading is empty, its
/// sequences differ in length, an intensity is NaN, or the peak distance is
/// not finite.
pub fn find_peak(reading: &SensorReading) -> Result<PeakResult, TrilocError> {
    reading.validate()?;

    let mut best = 0;
    for (i, &value) in reading.intensities.iter().enumerate() {
        if value.is_nan() {
            return Err(TrilocError::invalid_reading(
                &reading.id,
                format!("intensity at index {i} is NaN"),
            ));
        }
        // Strict comparison keeps the first index on ties.
        if value > reading.intensities[best] {
            best = i;
        }
    }

    let distance = reading.distances[best];
    if !distance.is_finite() {
        return Err(TrilocError::invalid_reading(
            &reading.id,
            format!("distance at peak index {best} is not finite"),
        ));
    }

    Ok(PeakResult {
        index: best,
        distance,
        intensity: reading.intensities[best],
    })
}
