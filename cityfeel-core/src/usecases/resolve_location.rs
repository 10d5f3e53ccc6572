use super::prelude::*;
use crate::proximity;

#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub location: Location,
    pub created: bool,
}

/// Finds the nearest existing location within `radius`
/// or creates a new one at `pos`.
pub fn resolve_location<R: LocationRepo>(
    repo: &R,
    pos: MapPoint,
    name: Option<&str>,
    radius: Distance,
) -> Result<ResolvedLocation> {
    debug_assert!(pos.is_valid());
    let query = LocationQuery {
        bbox: Some(proximity::search_bbox(pos, radius)),
        ..Default::default()
    };
    let candidates = repo.query_locations(&query)?;
    if let Some(location) = proximity::nearest(pos, radius, &candidates) {
        log::debug!("Resolved {pos} to location {}", location.id);
        return Ok(ResolvedLocation {
            location: location.clone(),
            created: false,
        });
    }
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| default_name(pos));
    let mut location = Location {
        id: Id::default(),
        name,
        pos,
    };
    location.id = repo.create_location(&location)?;
    log::info!("Created location {} '{}' at {pos}", location.id, location.name);
    Ok(ResolvedLocation {
        location,
        created: true,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::proximity::DEFAULT_PROXIMITY_RADIUS;

    #[test]
    fn create_location_with_generated_name() {
        let db = MockDb::default();
        let pos = MapPoint::from_lat_lng_deg(52.2297, 21.0122);
        let resolved = resolve_location(&db, pos, None, DEFAULT_PROXIMITY_RADIUS).unwrap();
        assert!(resolved.created);
        assert_eq!("Lat: 52.2297, Lon: 21.0122", resolved.location.name);
        assert_eq!(1, db.locations.borrow().len());
    }

    #[test]
    fn reuse_location_within_radius() {
        let db = MockDb::default();
        let pos = MapPoint::from_lat_lng_deg(52.2297, 21.0122);
        let first = resolve_location(&db, pos, Some("Palace"), DEFAULT_PROXIMITY_RADIUS).unwrap();
        let near = MapPoint::from_lat_lng_deg(52.2299, 21.0124);
        let second = resolve_location(&db, near, Some("Other"), DEFAULT_PROXIMITY_RADIUS).unwrap();
        assert!(!second.created);
        assert_eq!(first.location.id, second.location.id);
        assert_eq!("Palace", second.location.name);
        assert_eq!(1, db.locations.borrow().len());
    }

    #[test]
    fn create_location_outside_radius() {
        let db = MockDb::default();
        let pos = MapPoint::from_lat_lng_deg(52.2297, 21.0122);
        resolve_location(&db, pos, None, DEFAULT_PROXIMITY_RADIUS).unwrap();
        // 0.0005 degrees are about 56 meters
        let far = MapPoint::from_lat_lng_deg(52.2302, 21.0122);
        let resolved = resolve_location(&db, far, None, DEFAULT_PROXIMITY_RADIUS).unwrap();
        assert!(resolved.created);
        assert_eq!(2, db.locations.borrow().len());
    }

    #[test]
    fn blank_names_are_generated() {
        let db = MockDb::default();
        let pos = MapPoint::from_lat_lng_deg(-33.8568, 151.2153);
        let resolved = resolve_location(&db, pos, Some("  "), DEFAULT_PROXIMITY_RADIUS).unwrap();
        assert_eq!("Lat: -33.8568, Lon: 151.2153", resolved.location.name);
    }
}
