// NOTE:
// All timestamps with the `_at` postfix and `date_joined`
// are stored as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::FromPrimitive as _;

use cityfeel_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod emotion_point;
mod friendship;
mod location;
mod photo;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Fails with `NotFound` if no row has been affected.
fn expect_single_row(count: usize) -> Result<()> {
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_privacy_status(status: &str) -> Result<PrivacyStatus> {
    status
        .parse()
        .map_err(|_| anyhow!("Invalid privacy status: {status}").into())
}

fn load_emotion_value(value: i16) -> Result<EmotionValue> {
    EmotionValue::try_new(value.into())
        .map_err(|_| anyhow!("Invalid emotional value: {value}").into())
}

fn load_role(role: i16) -> Result<Role> {
    Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role: {role}").into())
}

fn load_map_point(lat: f64, lon: f64) -> Result<MapPoint> {
    MapPoint::try_from_lat_lng_deg(lat, lon)
        .map_err(|err| anyhow!("Invalid position ({lat},{lon}): {err}").into())
}

/// Escapes the wildcards of a `LIKE` pattern with a backslash.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn ids_to_raw(ids: &[Id]) -> Vec<i64> {
    ids.iter().copied().map(Id::to_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_wildcards() {
        assert_eq!("%park%", contains_pattern("park"));
        assert_eq!("%50\\%\\_off\\\\%", contains_pattern("50%_off\\"));
    }
}
