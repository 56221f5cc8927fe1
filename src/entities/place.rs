use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A coordinate as it appears on the wire.
///
/// The backend is not consistent about the JSON type of latitude/longitude:
/// freshly registered places come back as numbers, while some stored rows are
/// returned as strings ("48.85"). Values are kept as received and only
/// projected to f64 at the point of use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CoordinateValue::Number(value) => Some(*value),
            CoordinateValue::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

impl From<f64> for CoordinateValue {
    fn from(value: f64) -> Self {
        CoordinateValue::Number(value)
    }
}

impl From<&str> for CoordinateValue {
    fn from(raw: &str) -> Self {
        CoordinateValue::Text(raw.into())
    }
}

/// A named geographic point saved by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: CoordinateValue,
    pub longitude: CoordinateValue,
}

impl Place {
    pub fn new(name: String, coordinates: Coordinates) -> Self {
        Self {
            name,
            latitude: coordinates.latitude.into(),
            longitude: coordinates.longitude.into(),
        }
    }

    /// Numeric coordinates, if this place passes render validation.
    ///
    /// A coordinate component equal to 0.0 is treated as invalid alongside
    /// unparseable, NaN and non-finite values, so places on the equator or
    /// the prime meridian are never rendered. Known limitation, kept to
    /// match the historical check.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let latitude = self.latitude.as_f64()?;
        let longitude = self.longitude.as_f64()?;

        if !Self::is_valid_component(latitude) || !Self::is_valid_component(longitude) {
            return None;
        }

        Some(Coordinates::new(latitude, longitude))
    }

    fn is_valid_component(value: f64) -> bool {
        value.is_finite() && value != 0.0
    }
}

/// Renderable projection of a place or of the current position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub title: String,
    pub coordinates: Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(latitude: CoordinateValue, longitude: CoordinateValue) -> Place {
        Place {
            name: "Cafe".into(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_numeric_coordinates_pass() {
        let p = place(48.85.into(), 2.35.into());
        assert_eq!(p.coordinates(), Some(Coordinates::new(48.85, 2.35)));
    }

    #[test]
    fn test_string_coordinates_are_parsed() {
        let p = place("48.85".into(), "2.35".into());
        assert_eq!(p.coordinates(), Some(Coordinates::new(48.85, 2.35)));
    }

    #[test]
    fn test_unparseable_latitude_is_invalid() {
        let p = place("abc".into(), "2.35".into());
        assert_eq!(p.coordinates(), None);
    }

    #[test]
    fn test_zero_component_is_invalid() {
        let p = place(0.0.into(), 2.35.into());
        assert_eq!(p.coordinates(), None);

        let p = place(48.85.into(), "0".into());
        assert_eq!(p.coordinates(), None);
    }

    #[test]
    fn test_non_finite_component_is_invalid() {
        let p = place(f64::NAN.into(), 2.35.into());
        assert_eq!(p.coordinates(), None);

        let p = place(f64::INFINITY.into(), 2.35.into());
        assert_eq!(p.coordinates(), None);
    }

    #[test]
    fn test_wire_deserialization_accepts_both_forms() {
        let json = r#"{"name":"Cafe","latitude":"48.85","longitude":2.35}"#;
        let p: Place = serde_json::from_str(json).unwrap();

        assert_eq!(p.latitude, CoordinateValue::Text("48.85".into()));
        assert_eq!(p.longitude, CoordinateValue::Number(2.35));
        assert_eq!(p.coordinates(), Some(Coordinates::new(48.85, 2.35)));
    }
}
