use itertools::Itertools;
use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Number(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    Coord(#[from] CoordError),
    #[error("Unexpected number of coordinates")]
    Arity,
}

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    fn to_scaled(self, max_abs: f64) -> f64 {
        if self.is_valid() {
            let scaled = f64::from(self.0) * max_abs / f64::from(RAW_COORD_MAX);
            debug_assert!(scaled.abs() <= max_abs);
            scaled
        } else {
            f64::NAN
        }
    }

    fn try_from_scaled(value: f64, max_abs: f64) -> Option<Self> {
        // NaN fails both comparisons
        if value >= -max_abs && value <= max_abs {
            let raw = f64::round(value * f64::from(RAW_COORD_MAX) / max_abs) as RawCoord;
            Some(Self(raw.max(RAW_COORD_MIN)))
        } else {
            None
        }
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.0.cmp(&other.0))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
pub struct LatCoord(GeoCoord);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;

    pub const fn min() -> Self {
        Self(GeoCoord::from_raw(RAW_COORD_MIN))
    }

    pub const fn max() -> Self {
        Self(GeoCoord::from_raw(RAW_COORD_MAX))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_deg(self) -> f64 {
        self.0.to_scaled(Self::DEG_MAX)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        GeoCoord::try_from_scaled(deg.into(), Self::DEG_MAX).map(Self)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd)]
pub struct LngCoord(GeoCoord);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;

    pub const fn min() -> Self {
        Self(GeoCoord::from_raw(RAW_COORD_MIN))
    }

    pub const fn max() -> Self {
        Self(GeoCoord::from_raw(RAW_COORD_MAX))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_deg(self) -> f64 {
        self.0.to_scaled(Self::DEG_MAX)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        GeoCoord::try_from_scaled(deg.into(), Self::DEG_MAX).map(Self)
    }
}

/// A geographical position (WGS84).
///
/// Constructors take latitude first, even though the
/// storage and the GIS convention put longitude on the x-axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, CoordError> {
        let lat = LatCoord::try_from_deg(lat).ok_or(CoordError::Latitude)?;
        let lng = LngCoord::try_from_deg(lng).ok_or(CoordError::Longitude)?;
        Ok(Self::new(lat, lng))
    }

    /// Panics on out-of-range input, only meant for constants and tests.
    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        match Self::try_from_lat_lng_deg(lat, lng) {
            Ok(pt) => pt,
            Err(err) => panic!("{err}"),
        }
    }

    /// Euclidean distance measured in degrees on the plain
    /// latitude/longitude grid.
    pub fn planar_distance_deg(p1: MapPoint, p2: MapPoint) -> Option<f64> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }
        let (lat1, lng1) = p1.to_lat_lng_deg();
        let (lat2, lng2) = p2.to_lat_lng_deg();
        Some((lat1 - lat2).hypot(lng1 - lng2))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let (lat, lng) = self.to_lat_lng_deg();
        write!(f, "{lat},{lng}")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// Axis-aligned rectangle on the latitude/longitude grid.
///
/// Boxes never wrap around the antimeridian.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// Square around `center` that extends `half_extent_deg`
    /// in every direction, clipped at the valid coordinate ranges.
    pub fn centered_at(center: MapPoint, half_extent_deg: f64) -> Self {
        let (lat, lng) = center.to_lat_lng_deg();
        let clip = |v: f64, max: f64| v.max(-max).min(max);
        let sw = MapPoint::new(
            LatCoord::try_from_deg(clip(lat - half_extent_deg, 90.0)).unwrap_or_else(LatCoord::min),
            LngCoord::try_from_deg(clip(lng - half_extent_deg, 180.0))
                .unwrap_or_else(LngCoord::min),
        );
        let ne = MapPoint::new(
            LatCoord::try_from_deg(clip(lat + half_extent_deg, 90.0)).unwrap_or_else(LatCoord::max),
            LngCoord::try_from_deg(clip(lng + half_extent_deg, 180.0))
                .unwrap_or_else(LngCoord::max),
        );
        Self::new(sw, ne)
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat() <= self.ne.lat()
            && self.sw.lng() <= self.ne.lng()
    }

    /// Inclusive on all edges.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        if !pt.is_valid() {
            return false;
        }
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }
}

impl std::str::FromStr for MapBbox {
    type Err = ParseError;

    /// Parses `lon_min,lat_min,lon_max,lat_max`.
    ///
    /// Swapped bounds are normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng1, lat1, lng2, lat2) = s
            .split(',')
            .map(|x| x.trim().parse::<f64>())
            .collect_tuple()
            .ok_or(ParseError::Arity)?;
        let (lng1, lat1, lng2, lat2) = (lng1?, lat1?, lng2?, lat2?);
        let sw = MapPoint::try_from_lat_lng_deg(lat1.min(lat2), lng1.min(lng2))?;
        let ne = MapPoint::try_from_lat_lng_deg(lat1.max(lat2), lng1.max(lng2))?;
        Ok(Self::new(sw, ne))
    }
}
