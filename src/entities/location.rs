use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to another coordinate, in meters.
    pub fn distance_meters(&self, other: &Coordinates) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

        2.0 * a.sqrt().asin() * EARTH_RADIUS_METERS
    }
}

/// A single device fix emitted by the position watcher.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Position {
    pub coordinates: Coordinates,
    pub timestamp: DateTime<Utc>,
}

impl Position {
    pub fn now(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same_point() {
        let paris = Coordinates::new(48.8566, 2.3522);
        assert!(paris.distance_meters(&paris) < f64::EPSILON);
    }

    #[test]
    fn test_distance_paris_to_lyon() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let lyon = Coordinates::new(45.7640, 4.8357);

        // great-circle distance is roughly 392 km
        let d = paris.distance_meters(&lyon);
        assert!(d > 380_000.0 && d < 400_000.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinates::new(48.8566, 2.3522);
        let b = Coordinates::new(48.8570, 2.3530);

        let ab = a.distance_meters(&b);
        let ba = b.distance_meters(&a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_small_move_is_meters_scale() {
        // ~0.0001 deg of latitude is about 11 meters
        let a = Coordinates::new(48.8566, 2.3522);
        let b = Coordinates::new(48.8567, 2.3522);

        let d = a.distance_meters(&b);
        assert!(d > 5.0 && d < 20.0);
    }
}
