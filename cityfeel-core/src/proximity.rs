//! Matching of coordinates to nearby locations.
//!
//! Distances are measured on the plain latitude/longitude grid
//! with a constant conversion factor between meters and degrees.
//! This is only a rough approximation away from the equator.

use crate::entities::*;

pub const METERS_PER_DEGREE: f64 = 111_320.0;

pub const DEFAULT_PROXIMITY_RADIUS: Distance = Distance::from_meters(50.0);

pub fn radius_in_degrees(radius: Distance) -> f64 {
    radius.to_meters() / METERS_PER_DEGREE
}

/// Bounding box that contains all points within `radius`.
pub fn search_bbox(center: MapPoint, radius: Distance) -> MapBbox {
    MapBbox::centered_at(center, radius_in_degrees(radius))
}

/// Planar distance in degrees, `None` if out of range.
pub fn distance_within(center: MapPoint, pos: MapPoint, radius: Distance) -> Option<f64> {
    MapPoint::planar_distance_deg(center, pos).filter(|d| *d <= radius_in_degrees(radius))
}

pub fn is_within(center: MapPoint, pos: MapPoint, radius: Distance) -> bool {
    distance_within(center, pos, radius).is_some()
}

/// The nearest location within `radius`. Equal distances
/// are decided by the lower id.
pub fn nearest<'a>(
    center: MapPoint,
    radius: Distance,
    candidates: impl IntoIterator<Item = &'a Location>,
) -> Option<&'a Location> {
    candidates
        .into_iter()
        .filter_map(|l| distance_within(center, l.pos, radius).map(|d| (d, l)))
        .min_by(|(d1, l1), (d2, l2)| d1.total_cmp(d2).then_with(|| l1.id.cmp(&l2.id)))
        .map(|(_, l)| l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, lat: f64, lng: f64) -> Location {
        Location {
            id: Id::new(id),
            name: String::new(),
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        }
    }

    #[test]
    fn fifty_meters_in_degrees() {
        let deg = radius_in_degrees(DEFAULT_PROXIMITY_RADIUS);
        assert!((deg - 0.000_449_15).abs() < 1e-8);
    }

    #[test]
    fn within_radius() {
        let center = MapPoint::from_lat_lng_deg(52.2297, 21.0122);
        let near = MapPoint::from_lat_lng_deg(52.2300, 21.0122);
        let far = MapPoint::from_lat_lng_deg(52.2310, 21.0122);
        assert!(is_within(center, center, DEFAULT_PROXIMITY_RADIUS));
        assert!(is_within(center, near, DEFAULT_PROXIMITY_RADIUS));
        assert!(!is_within(center, far, DEFAULT_PROXIMITY_RADIUS));
    }

    #[test]
    fn radius_does_not_depend_on_latitude() {
        let radius = Distance::from_meters(100.0);
        let offset = 0.0008;
        for lat in [0.0, 45.0, 70.0] {
            let center = MapPoint::from_lat_lng_deg(lat, 10.0);
            let east = MapPoint::from_lat_lng_deg(lat, 10.0 + offset);
            assert!(is_within(center, east, radius));
        }
    }

    #[test]
    fn nearest_candidate_wins() {
        let center = MapPoint::from_lat_lng_deg(50.0, 20.0);
        let candidates = [
            location(1, 50.0003, 20.0),
            location(2, 50.0001, 20.0),
            location(3, 50.01, 20.0),
        ];
        let found = nearest(center, DEFAULT_PROXIMITY_RADIUS, &candidates);
        assert_eq!(Some(Id::new(2)), found.map(|l| l.id));
    }

    #[test]
    fn lower_id_wins_on_equal_distance() {
        let center = MapPoint::from_lat_lng_deg(50.0, 20.0);
        let candidates = [location(7, 50.0, 20.0002), location(4, 50.0, 20.0002)];
        let found = nearest(center, DEFAULT_PROXIMITY_RADIUS, &candidates);
        assert_eq!(Some(Id::new(4)), found.map(|l| l.id));
    }

    #[test]
    fn nothing_in_range() {
        let center = MapPoint::from_lat_lng_deg(50.0, 20.0);
        let candidates = [location(1, 50.01, 20.01)];
        assert!(nearest(center, DEFAULT_PROXIMITY_RADIUS, &candidates).is_none());
        assert!(nearest(center, DEFAULT_PROXIMITY_RADIUS, &[]).is_none());
    }
}
