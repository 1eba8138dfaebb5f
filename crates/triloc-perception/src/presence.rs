//! Presence Classifier.
//!
//! Decides whether a fused position lies inside the detection circle centred
//! on the array origin.  The boundary is inclusive.

use triloc_types::EstimatedPosition;

/// Default radius of the detection circle.
pub const DEFAULT_DETECTION_RADIUS: f64 = 600.0;

/// Classifies fused positions against a fixed detection radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceClassifier {
    radius: f64,
}

impl PresenceClassifier {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_object_present(&self, position: &EstimatedPosition) -> bool {
        is_object_present(position, self.radius)
    }
}

impl Default for PresenceClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DETECTION_RADIUS)
    }
}

/// `true` iff `position` was found and its distance from the origin is at
/// most `radius`.  An absent position is never present.
pub fn is_object_present(position: &EstimatedPosition, radius: f64) -> bool {
    match position {
        EstimatedPosition::Found(p) => p.norm() <= radius,
        EstimatedPosition::Absent { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triloc_types::Point2D;

    fn found(x: f64, y: f64) -> EstimatedPosition {
        EstimatedPosition::Found(Point2D::new(x, y))
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(is_object_present(&found(600.0, 0.0), 600.0));
    }

    #[test]
    fn just_outside_boundary() {
        assert!(!is_object_present(&found(600.0001, 0.0), 600.0));
    }

    #[test]
    fn origin_is_present() {
        assert!(is_object_present(&found(0.0, 0.0), 600.0));
    }

    #[test]
    fn uses_euclidean_distance() {
        // (400, 450) is 602 units out even though both components are < 600.
        assert!(!is_object_present(&found(400.0, 450.0), 600.0));
        assert!(is_object_present(&found(-300.0, -399.0), 500.0));
    }

    #[test]
    fn huge_finite_point_is_classified_by_magnitude() {
        assert!(is_object_present(&found(3e200, 4e200), 6e200));
        assert!(!is_object_present(&found(3e200, 4e200), 4e200));
    }

    #[test]
    fn absent_is_never_present() {
        let absent = EstimatedPosition::Absent {
            sensor_id: "1".to_string(),
            peak_intensity: 0.0,
        };
        assert!(!is_object_present(&absent, 600.0));
        assert!(!is_object_present(&absent, f64::INFINITY));
    }

    #[test]
    fn classifier_uses_its_radius() {
        let classifier = PresenceClassifier::new(100.0);
        assert_eq!(classifier.radius(), 100.0);
        assert!(classifier.is_object_present(&found(60.0, 79.0)));
        assert!(!classifier.is_object_present(&found(60.0, 81.0)));
        assert_eq!(PresenceClassifier::default().radius(), 600.0);
    }
}
