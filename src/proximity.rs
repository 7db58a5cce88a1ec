//! Great-circle distance and outlet neighbourhood detection.
//!
//! Distances use the haversine formula on a spherical Earth (R = 6371 km).
//! Outlets without usable coordinates never take part in any comparison.

use serde::Serialize;

use crate::outlet::{Coordinates, Outlet};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Two outlets closer than this are flagged as neighbours.
pub const PROXIMITY_RADIUS_KM: f64 = 5.0;

/// Haversine distance between two points, in kilometres.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// `near` lies within the radius of `anchor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityFlag {
    pub anchor_id: i64,
    pub anchor_name: String,
    pub near_id: i64,
    pub near_name: String,
    pub near: Coordinates,
    pub distance_km: f64,
}

/// Outlets that carry usable coordinates. Others are logged and dropped.
pub fn located(outlets: &[Outlet]) -> Vec<(&Outlet, Coordinates)> {
    outlets
        .iter()
        .filter_map(|o| match o.coordinates() {
            Some(c) => Some((o, c)),
            None => {
                tracing::warn!(
                    "Skipping outlet {}: invalid coordinates ({:?}, {:?})",
                    o.id,
                    o.latitude,
                    o.longitude
                );
                None
            }
        })
        .collect()
}

/// Flag every ordered pair of distinct outlets within `radius_km`.
///
/// The result is not deduplicated: a close pair shows up once from each
/// side, so the map draws a marker on both outlets.
pub fn detect_proximity(outlets: &[Outlet], radius_km: f64) -> Vec<ProximityFlag> {
    detect_among(&located(outlets), radius_km)
}

/// Same as [`detect_proximity`] over points already passed through [`located`].
pub fn detect_among(points: &[(&Outlet, Coordinates)], radius_km: f64) -> Vec<ProximityFlag> {
    let mut flags = Vec::new();

    for (anchor, a) in points {
        for (other, b) in points {
            if anchor.id == other.id {
                continue;
            }
            let distance_km = haversine_km(*a, *b);
            if distance_km <= radius_km {
                flags.push(ProximityFlag {
                    anchor_id: anchor.id,
                    anchor_name: anchor.name.clone(),
                    near_id: other.id,
                    near_name: other.name.clone(),
                    near: *b,
                    distance_km,
                });
            }
        }
    }

    flags
}

/// An outlet paired with its distance from a query point.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyOutlet {
    #[serde(flatten)]
    pub outlet: Outlet,
    pub distance_km: f64,
}

/// Outlets within `radius_km` of `point`, closest first.
pub fn outlets_within(outlets: &[Outlet], point: Coordinates, radius_km: f64) -> Vec<NearbyOutlet> {
    let mut nearby: Vec<NearbyOutlet> = located(outlets)
        .into_iter()
        .filter_map(|(o, c)| {
            let distance_km = haversine_km(point, c);
            (distance_km <= radius_km).then(|| NearbyOutlet {
                outlet: o.clone(),
                distance_km,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// A lat/lon rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest rectangle holding every point, `None` for no points.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds {
                    south: p.lat,
                    west: p.lon,
                    north: p.lat,
                    east: p.lon,
                },
                Some(b) => Bounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lon),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lon),
                },
            })
        })
    }

    /// Grow each side by `ratio` times the current span.
    pub fn pad(&self, ratio: f64) -> Self {
        let dy = (self.north - self.south).abs() * ratio;
        let dx = (self.east - self.west).abs() * ratio;
        Bounds {
            south: self.south - dy,
            west: self.west - dx,
            north: self.north + dy,
            east: self.east + dx,
        }
    }

    pub fn contains(&self, p: Coordinates) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lon)
    }
}
