use crate::{geo::MapPoint, id::Id};

pub const MAX_NAME_LEN: usize = 200;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id   : Id,
    pub name : String,
    pub pos  : MapPoint,
}

/// Name for locations that were created without one.
pub fn default_name(pos: MapPoint) -> String {
    let (lat, lng) = pos.to_lat_lng_deg();
    format!("Lat: {lat:.4}, Lon: {lng:.4}")
}
