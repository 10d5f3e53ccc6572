use std::cmp::Ordering;

use super::{load_location_stats, prelude::*, LocationWithStats};
use crate::proximity;

/// Raw filter parameters as received from the client.
#[derive(Debug, Clone, Default)]
pub struct LocationFilter {
    pub name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// Meters
    pub radius: Option<String>,
    /// `lon_min,lat_min,lon_max,lat_max`
    pub bbox: Option<String>,
    /// Comma separated list of values
    pub emotional_value: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct ParsedFilter {
    query: LocationQuery,
    circle: Option<(MapPoint, Distance)>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// `None` if the filter can never match.
fn parse_filter(filter: &LocationFilter) -> Option<ParsedFilter> {
    let mut parsed = ParsedFilter::default();

    parsed.query.name = non_empty(&filter.name).map(ToString::to_string);

    if let (Some(lat), Some(lon), Some(radius)) = (
        non_empty(&filter.lat),
        non_empty(&filter.lon),
        non_empty(&filter.radius),
    ) {
        let lat = lat.parse::<f64>().ok()?;
        let lon = lon.parse::<f64>().ok()?;
        let radius = radius.parse::<f64>().ok()?;
        let center = MapPoint::try_from_lat_lng_deg(lat, lon).ok()?;
        if !(radius > 0.0 && radius.is_finite()) {
            return None;
        }
        parsed.circle = Some((center, Distance::from_meters(radius)));
    }

    if let Some(bbox) = non_empty(&filter.bbox) {
        parsed.query.bbox = Some(bbox.parse::<MapBbox>().ok()?);
    }

    if let Some(values) = non_empty(&filter.emotional_value) {
        let values = values
            .split(',')
            .map(|v| v.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .ok()?;
        // values out of range never match
        parsed.query.emotional_values = Some(
            values
                .into_iter()
                .filter_map(|v| EmotionValue::try_new(v).ok())
                .collect(),
        );
    }

    Some(parsed)
}

/// Highest public average first, locations without any
/// public emotion point last, then by name.
fn cmp_by_avg_and_name(a: &LocationWithStats, b: &LocationWithStats) -> Ordering {
    match (a.summary.avg, b.summary.avg) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.location.name.cmp(&b.location.name))
    .then_with(|| a.location.id.cmp(&b.location.id))
}

pub fn query_locations<D: Db>(
    db: &D,
    filter: &LocationFilter,
    page: u64,
    page_size: u64,
) -> Result<Page<LocationWithStats>> {
    let page = page.max(1);
    let Some(ParsedFilter { mut query, circle }) = parse_filter(filter) else {
        log::debug!("Invalid location filter: {filter:?}");
        return Ok(Page::empty(page, page_size));
    };
    if query
        .emotional_values
        .as_ref()
        .map(Vec::is_empty)
        .unwrap_or(false)
    {
        return Ok(Page::empty(page, page_size));
    }
    if let Some((center, radius)) = circle {
        let search_bbox = proximity::search_bbox(center, radius);
        query.bbox = match query.bbox {
            // both boxes must contain the location
            Some(bbox) => intersect(&bbox, &search_bbox),
            None => Some(search_bbox),
        };
        if query.bbox.is_none() {
            return Ok(Page::empty(page, page_size));
        }
    }

    // The average decides the order, so every matching location is
    // loaded with its stats before the requested page is cut out.
    let mut locations = db.query_locations(&query)?;
    if let Some((center, radius)) = circle {
        locations.retain(|l| proximity::is_within(center, l.pos, radius));
    }
    let mut locations = load_location_stats(db, locations)?;
    locations.sort_by(cmp_by_avg_and_name);

    let total = locations.len() as u64;
    let items = Pagination::page(page, page_size).apply(locations);
    Ok(Page {
        items,
        total,
        page,
        page_size,
    })
}

fn intersect(a: &MapBbox, b: &MapBbox) -> Option<MapBbox> {
    let (a_sw, a_ne) = (a.south_west(), a.north_east());
    let (b_sw, b_ne) = (b.south_west(), b.north_east());
    let sw_lat = a_sw.lat().to_deg().max(b_sw.lat().to_deg());
    let sw_lng = a_sw.lng().to_deg().max(b_sw.lng().to_deg());
    let ne_lat = a_ne.lat().to_deg().min(b_ne.lat().to_deg());
    let ne_lng = a_ne.lng().to_deg().min(b_ne.lng().to_deg());
    if sw_lat > ne_lat || sw_lng > ne_lng {
        return None;
    }
    let sw = MapPoint::try_from_lat_lng_deg(sw_lat, sw_lng).ok()?;
    let ne = MapPoint::try_from_lat_lng_deg(ne_lat, ne_lng).ok()?;
    Some(MapBbox::new(sw, ne))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use cityfeel_entities::builders::*;

    fn rate(db: &MockDb, user: i64, location: Id, value: i64, private: bool) {
        let mut point = EmotionPoint::build()
            .user(user)
            .location(location.to_raw())
            .value(value);
        if private {
            point = point.private();
        }
        db.upsert_emotion_point(&point.finish()).unwrap();
    }

    fn names(page: &Page<LocationWithStats>) -> Vec<&str> {
        page.items
            .iter()
            .map(|l| l.location.name.as_str())
            .collect()
    }

    fn query(db: &MockDb, filter: LocationFilter) -> Page<LocationWithStats> {
        query_locations(db, &filter, 1, 20).unwrap()
    }

    #[test]
    fn order_by_public_average_then_name() {
        let db = MockDb::default();
        let a = db.add_named_location("A", 1.0, 1.0).id;
        let b = db.add_named_location("B", 2.0, 2.0).id;
        let c = db.add_named_location("C", 3.0, 3.0).id;
        db.add_named_location("D", 4.0, 4.0);
        rate(&db, 1, a, 2, false);
        rate(&db, 1, b, 4, false);
        rate(&db, 1, c, 2, false);
        // private ratings are ignored
        rate(&db, 2, a, 5, true);
        let page = query(&db, LocationFilter::default());
        assert_eq!(vec!["B", "A", "C", "D"], names(&page));
        assert_eq!(4, page.total);
    }

    #[test]
    fn list_shows_public_stats() {
        let db = MockDb::default();
        let id = db.add_location(52.0, 21.0).id;
        rate(&db, 1, id, 5, false);
        rate(&db, 2, id, 3, false);
        rate(&db, 3, id, 1, true);
        let page = query(&db, LocationFilter::default());
        assert_eq!(Some(4.0), page.items[0].summary.avg);
        assert_eq!(2, page.items[0].summary.count);
    }

    #[test]
    fn filter_by_name() {
        let db = MockDb::default();
        db.add_named_location("Old Town Square", 1.0, 1.0);
        db.add_named_location("Central Park", 2.0, 2.0);
        let filter = LocationFilter {
            name: Some("town".into()),
            ..Default::default()
        };
        assert_eq!(vec!["Old Town Square"], names(&query(&db, filter)));
    }

    #[test]
    fn filter_by_radius() {
        let db = MockDb::default();
        db.add_named_location("near", 52.2297, 21.0122);
        db.add_named_location("far", 52.2397, 21.0122);
        let filter = LocationFilter {
            lat: Some("52.2297".into()),
            lon: Some("21.0122".into()),
            radius: Some("500".into()),
            ..Default::default()
        };
        assert_eq!(vec!["near"], names(&query(&db, filter)));
    }

    #[test]
    fn incomplete_radius_filter_is_ignored() {
        let db = MockDb::default();
        db.add_location(1.0, 1.0);
        db.add_location(2.0, 2.0);
        let filter = LocationFilter {
            lat: Some("1.0".into()),
            lon: Some("1.0".into()),
            radius: Some("".into()),
            ..Default::default()
        };
        assert_eq!(2, query(&db, filter).total);
    }

    #[test]
    fn invalid_radius_filter_yields_nothing() {
        let db = MockDb::default();
        db.add_location(1.0, 1.0);
        for (lat, lon, radius) in [("x", "1", "100"), ("91", "1", "100"), ("1", "1", "0")] {
            let filter = LocationFilter {
                lat: Some(lat.into()),
                lon: Some(lon.into()),
                radius: Some(radius.into()),
                ..Default::default()
            };
            assert_eq!(0, query(&db, filter).total);
        }
    }

    #[test]
    fn filter_by_bbox() {
        let db = MockDb::default();
        db.add_named_location("Gdansk", 54.35, 18.65);
        db.add_named_location("Warsaw", 52.2297, 21.0122);
        let filter = LocationFilter {
            bbox: Some("18.5,54.3,18.7,54.4".into()),
            ..Default::default()
        };
        assert_eq!(vec!["Gdansk"], names(&query(&db, filter)));
        let filter = LocationFilter {
            bbox: Some("18.5,54.3,18.7".into()),
            ..Default::default()
        };
        assert_eq!(0, query(&db, filter).total);
    }

    #[test]
    fn filter_by_public_emotional_values() {
        let db = MockDb::default();
        let a = db.add_named_location("A", 1.0, 1.0).id;
        let b = db.add_named_location("B", 2.0, 2.0).id;
        let c = db.add_named_location("C", 3.0, 3.0).id;
        rate(&db, 1, a, 1, false);
        rate(&db, 1, b, 5, false);
        rate(&db, 1, c, 1, true);
        let filter = |v: &str| LocationFilter {
            emotional_value: Some(v.into()),
            ..Default::default()
        };
        assert_eq!(vec!["A"], names(&query(&db, filter("1"))));
        assert_eq!(vec!["B", "A"], names(&query(&db, filter("1, 5"))));
        assert_eq!(0, query(&db, filter("1,x")).total);
        assert_eq!(0, query(&db, filter("9")).total);
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let db = MockDb::default();
        db.add_location(1.0, 1.0);
        db.add_location(2.0, 2.0);
        let filter = LocationFilter {
            name: Some(" ".into()),
            bbox: Some("".into()),
            emotional_value: Some("".into()),
            ..Default::default()
        };
        assert_eq!(2, query(&db, filter).total);
    }

    #[test]
    fn page_beyond_the_end_is_empty() {
        let db = MockDb::default();
        db.add_location(1.0, 1.0);
        let page = query_locations(&db, &LocationFilter::default(), u64::MAX, 20).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(1, page.total);
        assert!(!page.has_next());
    }

    #[test]
    fn paginate() {
        let db = MockDb::default();
        for i in 0..5 {
            db.add_named_location(&format!("L{i}"), f64::from(i), 0.0);
        }
        let page = query_locations(&db, &LocationFilter::default(), 2, 2).unwrap();
        assert_eq!(vec!["L2", "L3"], names(&page));
        assert_eq!(5, page.total);
        assert!(page.has_next());
        let page = query_locations(&db, &LocationFilter::default(), 4, 2).unwrap();
        assert!(page.items.is_empty());
    }
}
