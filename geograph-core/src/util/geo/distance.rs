use serde::{Deserialize, Serialize};

use super::Position;

pub const APPROX_EARTH_RADIUS_M: f64 = 6_371_000.0;

/// the distance functions the core consumes from the geometry layer.
/// euclidean and manhattan are planar; haversine reads coordinates as
/// WGS84 lon/lat and returns meters.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
    Haversine,
}

impl DistanceMetric {
    pub fn distance(&self, src: &Position, dst: &Position) -> f64 {
        match self {
            DistanceMetric::Euclidean => {
                let dx = dst.x() - src.x();
                let dy = dst.y() - src.y();
                dx.hypot(dy)
            }
            DistanceMetric::Manhattan => {
                (dst.x() - src.x()).abs() + (dst.y() - src.y()).abs()
            }
            DistanceMetric::Haversine => {
                haversine_distance_meters(src.x(), src.y(), dst.x(), dst.y())
            }
        }
    }
}

/// haversine distance formula, based on the one published to rosetta code.
/// https://rosettacode.org/wiki/Haversine_formula#Rust
/// computes the great circle distance between two points in meters.
/// assumes input data is in WGS84 projection (aka EPSG:4326 CRS)
pub fn haversine_distance_meters(src_x: f64, src_y: f64, dst_x: f64, dst_y: f64) -> f64 {
    let lat1 = src_y.to_radians();
    let lat2 = dst_y.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (dst_x - src_x).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().asin();
    APPROX_EARTH_RADIUS_M * c
}
