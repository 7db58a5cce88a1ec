//! Data behind the outlet map: markers, neighbour markers and view bounds.

use serde::Serialize;

use crate::outlet::{Coordinates, Outlet};
use crate::proximity::{detect_among, located, Bounds, ProximityFlag};

/// Kuala Lumpur city centre.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 3.1390,
    lon: 101.6869,
};
pub const DEFAULT_ZOOM: u8 = 12;

/// Extra room around the outlets when limiting panning.
pub const BOUNDS_PADDING: f64 = 0.5;

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub operating_hours: String,
    pub waze_link: String,
    pub position: Coordinates,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub proximity: Vec<ProximityFlag>,
    /// Padded extent of all markers; `None` when no outlet has coordinates.
    pub max_bounds: Option<Bounds>,
}

impl MapView {
    pub fn build(outlets: &[Outlet], radius_km: f64) -> Self {
        let points = located(outlets);
        let markers: Vec<Marker> = points
            .iter()
            .map(|&(o, position)| Marker {
                id: o.id,
                name: o.name.clone(),
                address: o.address.clone(),
                operating_hours: o.operating_hours.clone(),
                waze_link: o.waze_link.clone(),
                position,
            })
            .collect();

        let max_bounds = Bounds::from_points(markers.iter().map(|m| m.position))
            .map(|b| b.pad(BOUNDS_PADDING));

        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers,
            proximity: detect_among(&points, radius_km),
            max_bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proximity::PROXIMITY_RADIUS_KM;

    fn outlet(id: i64, lat: Option<f64>, lon: Option<f64>) -> Outlet {
        Outlet {
            id,
            name: format!("Subway {}", id),
            address: String::new(),
            latitude: lat,
            longitude: lon,
            operating_hours: "8:00 AM - 10:00 PM".into(),
            waze_link: format!("https://waze.com/ul?id={}", id),
        }
    }

    #[test]
    fn test_build_map_view() {
        let outlets = vec![
            outlet(1, Some(3.1579), Some(101.7116)),
            outlet(2, Some(3.1466), Some(101.7108)),
            outlet(3, None, Some(101.7)),
        ];
        let view = MapView::build(&outlets, PROXIMITY_RADIUS_KM);

        assert_eq!(view.center, DEFAULT_CENTER);
        assert_eq!(view.zoom, 12);
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.proximity.len(), 2);

        let bounds = view.max_bounds.unwrap();
        assert!(bounds.south < 3.1466 && bounds.north > 3.1579);
        assert!(!bounds.contains(DEFAULT_CENTER));
    }

    #[test]
    fn test_empty_map_view() {
        let view = MapView::build(&[outlet(1, None, None)], PROXIMITY_RADIUS_KM);
        assert!(view.markers.is_empty());
        assert!(view.proximity.is_empty());
        assert!(view.max_bounds.is_none());
    }
}
