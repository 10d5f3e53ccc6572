use super::{not_found_as, parse_privacy_status, prelude::*, required, resolve_location};
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewEmotionPoint {
    pub location_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    pub emotional_value: Option<i64>,
    pub privacy_status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmittedEmotionPoint {
    pub emotion_point: EmotionPoint,
    pub location: Location,
    /// `false` if an existing emotion point has been updated
    pub created: bool,
}

/// Creates or updates the emotion point of `user` for
/// the location at or near the submitted coordinate.
pub fn submit_emotion_point<D: Db>(
    db: &D,
    user: &User,
    new: NewEmotionPoint,
    radius: Distance,
) -> Result<SubmittedEmotionPoint> {
    let NewEmotionPoint {
        location_id,
        latitude,
        longitude,
        location_name,
        emotional_value,
        privacy_status,
    } = new;
    let value = EmotionValue::try_new(required(emotional_value, "emotional_value")?)?;
    let privacy = parse_privacy_status(privacy_status.as_deref())?;

    let location = if let Some(id) = location_id {
        not_found_as(
            db.get_location(Id::new(id)),
            Error::UnknownLocation("location_id"),
        )?
    } else {
        let lat = required(latitude, "latitude")?;
        let lng = required(longitude, "longitude")?;
        let lat = LatCoord::try_from_deg(lat).ok_or(Error::Latitude)?;
        let lng = LngCoord::try_from_deg(lng).ok_or(Error::Longitude)?;
        if let Some(name) = &location_name {
            if !validate::is_valid_location_name(name.trim()) {
                return Err(Error::LocationName);
            }
        }
        let pos = MapPoint::new(lat, lng);
        resolve_location(db, pos, location_name.as_deref(), radius)?.location
    };

    let existing = db.try_get_emotion_point_of_user(user.id, location.id)?;
    let now = Timestamp::now();
    let mut emotion_point = EmotionPoint {
        id: existing.as_ref().map(|p| p.id).unwrap_or_default(),
        user_id: user.id,
        location_id: location.id,
        value,
        privacy,
        created_at: existing.as_ref().map(|p| p.created_at).unwrap_or(now),
        updated_at: now,
    };
    emotion_point.id = db.upsert_emotion_point(&emotion_point)?;
    let created = existing.is_none();
    if created {
        log::info!(
            "User {} rated location {} with {value}",
            user.username,
            location.id
        );
    } else {
        log::info!(
            "User {} changed the rating of location {} to {value}",
            user.username,
            location.id
        );
    }
    Ok(SubmittedEmotionPoint {
        emotion_point,
        location,
        created,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::proximity::DEFAULT_PROXIMITY_RADIUS;
    use cityfeel_entities::builders::*;

    fn new_point(lat: f64, lng: f64, value: i64) -> NewEmotionPoint {
        NewEmotionPoint {
            latitude: Some(lat),
            longitude: Some(lng),
            emotional_value: Some(value),
            ..Default::default()
        }
    }

    fn submit(db: &MockDb, user: &User, new: NewEmotionPoint) -> Result<SubmittedEmotionPoint> {
        submit_emotion_point(db, user, new, DEFAULT_PROXIMITY_RADIUS)
    }

    fn user(id: i64) -> User {
        User::build().id(id).username(&format!("user{id}")).finish()
    }

    #[test]
    fn second_submission_updates_in_place() {
        let db = MockDb::default();
        let user = user(1);
        let first = submit(&db, &user, new_point(52.2297, 21.0122, 3)).unwrap();
        assert!(first.created);
        let second = submit(&db, &user, new_point(52.2297, 21.0122, 5)).unwrap();
        assert!(!second.created);
        assert_eq!(first.emotion_point.id, second.emotion_point.id);
        assert_eq!(first.emotion_point.created_at, second.emotion_point.created_at);
        let points = db.emotion_points.borrow();
        assert_eq!(1, points.len());
        assert_eq!(5, points[0].value.to_u8());
    }

    #[test]
    fn different_users_rate_the_same_location() {
        let db = MockDb::default();
        let a = submit(&db, &user(1), new_point(52.2297, 21.0122, 3)).unwrap();
        let b = submit(&db, &user(2), new_point(52.2298, 21.0122, 4)).unwrap();
        assert!(b.created);
        assert_eq!(a.location.id, b.location.id);
        assert_eq!(2, db.emotion_points.borrow().len());
    }

    #[test]
    fn value_bounds() {
        let db = MockDb::default();
        let user = user(1);
        assert!(submit(&db, &user, new_point(10.0, 10.0, 1)).is_ok());
        assert!(submit(&db, &user, new_point(20.0, 20.0, 5)).is_ok());
        for value in [0, 6] {
            let err = submit(&db, &user, new_point(30.0, 30.0, value)).unwrap_err();
            assert_eq!(Some("emotional_value"), err.field());
        }
    }

    #[test]
    fn coordinate_bounds() {
        let db = MockDb::default();
        let user = user(1);
        assert!(submit(&db, &user, new_point(-90.0, 0.0, 3)).is_ok());
        assert!(submit(&db, &user, new_point(90.0, 0.0, 3)).is_ok());
        assert!(submit(&db, &user, new_point(0.0, -180.0, 3)).is_ok());
        assert!(submit(&db, &user, new_point(0.0, 180.0, 3)).is_ok());
        let err = submit(&db, &user, new_point(-90.001, 0.0, 3)).unwrap_err();
        assert_eq!(Some("latitude"), err.field());
        let err = submit(&db, &user, new_point(90.001, 0.0, 3)).unwrap_err();
        assert_eq!(Some("latitude"), err.field());
        let err = submit(&db, &user, new_point(0.0, 180.5, 3)).unwrap_err();
        assert_eq!(Some("longitude"), err.field());
    }

    #[test]
    fn missing_fields() {
        let db = MockDb::default();
        let user = user(1);
        let mut new = new_point(1.0, 2.0, 3);
        new.emotional_value = None;
        assert_eq!(
            Some("emotional_value"),
            submit(&db, &user, new).unwrap_err().field()
        );
        let mut new = new_point(1.0, 2.0, 3);
        new.latitude = None;
        assert_eq!(Some("latitude"), submit(&db, &user, new).unwrap_err().field());
        let mut new = new_point(1.0, 2.0, 3);
        new.longitude = None;
        assert_eq!(Some("longitude"), submit(&db, &user, new).unwrap_err().field());
    }

    #[test]
    fn latitude_and_longitude_are_not_swapped() {
        let db = MockDb::default();
        let res = submit(&db, &user(1), new_point(54.35, 18.65, 4)).unwrap();
        let (lat, lng) = res.location.pos.to_lat_lng_deg();
        assert!((lat - 54.35).abs() < 1e-6);
        assert!((lng - 18.65).abs() < 1e-6);
    }

    #[test]
    fn rate_existing_location_by_id() {
        let db = MockDb::default();
        let user = user(1);
        let first = submit(&db, &user, new_point(1.0, 1.0, 2)).unwrap();
        let new = NewEmotionPoint {
            location_id: Some(first.location.id.to_raw()),
            emotional_value: Some(4),
            privacy_status: Some("private".into()),
            ..Default::default()
        };
        let res = submit(&db, &user, new).unwrap();
        assert!(!res.created);
        assert_eq!(PrivacyStatus::Private, res.emotion_point.privacy);

        let new = NewEmotionPoint {
            location_id: Some(99),
            emotional_value: Some(4),
            ..Default::default()
        };
        let err = submit(&db, &user, new).unwrap_err();
        assert_eq!(Some("location_id"), err.field());
    }

    #[test]
    fn reject_long_location_names() {
        let db = MockDb::default();
        let mut new = new_point(1.0, 1.0, 2);
        new.location_name = Some("x".repeat(201));
        let err = submit(&db, &user(1), new).unwrap_err();
        assert_eq!(Some("location_name"), err.field());
        assert!(db.locations.borrow().is_empty());
    }

    #[test]
    fn reject_unknown_privacy_status() {
        let db = MockDb::default();
        let mut new = new_point(1.0, 1.0, 2);
        new.privacy_status = Some("friends".into());
        let err = submit(&db, &user(1), new).unwrap_err();
        assert_eq!(Some("privacy_status"), err.field());
    }
}
