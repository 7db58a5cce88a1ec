//! Core types for outlet records served by the upstream `/outlets` API.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether the point lies inside -90..90 / -180..180.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// A retail outlet as returned by the upstream API.
///
/// Coordinates stay optional: the upstream fills them in after geocoding,
/// so freshly scraped rows arrive with `null` latitude/longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "string_or_null")]
    pub operating_hours: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub waze_link: String,
}

impl Outlet {
    /// Usable map position, or `None` when either coordinate is missing,
    /// zero or non-finite.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if is_set(lat) && is_set(lon) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }
}

fn is_set(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /outlets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletsEnvelope {
    pub outlets: Vec<Outlet>,
}

/// Failures while fetching the outlet list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("Invalid outlet response: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Text shown in place of results when a fetch fails.
    pub fn user_message(&self) -> String {
        format!("Error: {}. Please try again later.", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet(lat: Option<f64>, lon: Option<f64>) -> Outlet {
        Outlet {
            id: 1,
            name: "Subway Bangsar".into(),
            address: "Jalan Telawi, Bangsar".into(),
            latitude: lat,
            longitude: lon,
            operating_hours: "8:00 AM - 10:00 PM".into(),
            waze_link: String::new(),
        }
    }

    #[test]
    fn test_coordinates_present() {
        let c = outlet(Some(3.13), Some(101.67)).coordinates().unwrap();
        assert_eq!(c, Coordinates::new(3.13, 101.67));
    }

    #[test]
    fn test_coordinates_missing_or_zero() {
        assert!(outlet(None, Some(101.67)).coordinates().is_none());
        assert!(outlet(Some(3.13), None).coordinates().is_none());
        assert!(outlet(Some(0.0), Some(101.67)).coordinates().is_none());
        assert!(outlet(Some(3.13), Some(0.0)).coordinates().is_none());
        assert!(outlet(Some(f64::NAN), Some(101.67)).coordinates().is_none());
    }

    #[test]
    fn test_deserialize_nulls() {
        let json = r#"{
            "outlets": [
                {"id": 7, "name": "Subway KLCC", "address": "Suria KLCC",
                 "latitude": null, "longitude": null,
                 "operating_hours": null, "waze_link": "https://waze.com/ul?q=klcc"}
            ]
        }"#;
        let env: OutletsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.outlets.len(), 1);
        let o = &env.outlets[0];
        assert_eq!(o.id, 7);
        assert!(o.latitude.is_none());
        assert_eq!(o.operating_hours, "");
        assert!(o.coordinates().is_none());
    }

    #[test]
    fn test_status_message() {
        let e = FetchError::Status(500);
        assert_eq!(e.user_message(), "Error: HTTP error! Status: 500. Please try again later.");
    }

    #[test]
    fn test_in_range() {
        assert!(Coordinates::new(3.139, 101.6869).in_range());
        assert!(!Coordinates::new(91.0, 0.0).in_range());
        assert!(!Coordinates::new(0.0, -181.0).in_range());
    }
}
