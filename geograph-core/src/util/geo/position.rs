use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use geo::{coord, Coord, Point};
use serde::{Deserialize, Serialize};

use super::DistanceMetric;

/// a location in the plane (or on the globe, when coordinates are read as
/// WGS84 lon/lat). thin wrapper over [`geo::Coord`] so the geometry crate
/// stays behind one seam.
#[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Coord<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(coord! {x: x, y: y})
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// coordinate values in x, y order
    pub fn values(&self) -> [f64; 2] {
        [self.0.x, self.0.y]
    }

    pub fn distance_to(&self, other: &Position, metric: DistanceMetric) -> f64 {
        metric.distance(self, other)
    }

    pub fn to_point(&self) -> Point<f64> {
        Point(self.0)
    }
}

impl Deref for Position {
    type Target = Coord<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Position {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Coord<f64>> for Position {
    fn from(value: Coord<f64>) -> Self {
        Self(value)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
