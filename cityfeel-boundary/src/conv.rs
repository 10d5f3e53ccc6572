use super::*;
use cityfeel_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            User => UserRole::User,
            Staff => UserRole::Staff,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::User => User,
            UserRole::Staff => Staff,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            password: _password,
            first_name,
            last_name,
            avatar,
            role,
            date_joined,
        } = from;
        Self {
            id: id.into(),
            username,
            email: email.into_string(),
            first_name,
            last_name,
            avatar,
            role: role.into(),
            date_joined: date_joined.as_millis(),
        }
    }
}

impl From<e::user::User> for UserSummary {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            first_name,
            last_name,
            avatar,
            ..
        } = from;
        Self {
            id: id.into(),
            username,
            first_name,
            last_name,
            avatar,
        }
    }
}

impl From<e::privacy::PrivacyStatus> for PrivacyStatus {
    fn from(from: e::privacy::PrivacyStatus) -> Self {
        use e::privacy::PrivacyStatus::*;
        match from {
            Public => PrivacyStatus::Public,
            Private => PrivacyStatus::Private,
        }
    }
}

impl From<e::friendship::FriendshipStatus> for FriendshipStatus {
    fn from(from: e::friendship::FriendshipStatus) -> Self {
        use e::friendship::FriendshipStatus::*;
        match from {
            Pending => FriendshipStatus::Pending,
            Accepted => FriendshipStatus::Accepted,
            Rejected => FriendshipStatus::Rejected,
        }
    }
}

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (latitude, longitude) = from.to_lat_lng_deg();
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<e::location::Location> for LocationRef {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location { id, name, pos } = from;
        Self {
            id: id.into(),
            name,
            coordinate: pos.into(),
        }
    }
}

impl From<(e::emotion::EmotionPoint, e::location::Location)> for EmotionPoint {
    fn from((point, location): (e::emotion::EmotionPoint, e::location::Location)) -> Self {
        debug_assert_eq!(point.location_id, location.id);
        let e::emotion::EmotionPoint {
            id,
            user_id,
            location_id: _,
            value,
            privacy,
            created_at,
            updated_at,
        } = point;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            location: location.into(),
            emotional_value: value.to_u8(),
            privacy_status: privacy.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::photo::Photo> for Photo {
    fn from(from: e::photo::Photo) -> Self {
        let e::photo::Photo {
            id,
            user_id,
            location_id,
            image,
            caption,
            privacy,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.map(Into::into),
            location: location_id.into(),
            image,
            caption,
            privacy_status: privacy.into(),
            created_at: created_at.as_millis(),
        }
    }
}

/// The author is resolved by the caller depending on the viewer.
impl From<(e::comment::Comment, String)> for Comment {
    fn from((comment, author): (e::comment::Comment, String)) -> Self {
        let e::comment::Comment {
            id,
            user_id: _,
            location_id,
            emotion_point_id,
            content,
            privacy,
            created_at,
        } = comment;
        Self {
            id: id.into(),
            author,
            location: location_id.into(),
            emotion_point: emotion_point_id.map(Into::into),
            content,
            privacy_status: privacy.into(),
            created_at: created_at.as_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{geo::MapPoint, id::Id, location::Location as LocationEntity};

    #[test]
    fn coordinate_keeps_latitude_and_longitude_apart() {
        let location = LocationEntity {
            id: Id::new(7),
            name: "Old Town".into(),
            pos: MapPoint::from_lat_lng_deg(52.2297, 21.0122),
        };
        let json = serde_json::to_value(LocationRef::from(location)).unwrap();
        assert_eq!(7, json["id"]);
        assert!((json["latitude"].as_f64().unwrap() - 52.2297).abs() < 1e-6);
        assert!((json["longitude"].as_f64().unwrap() - 21.0122).abs() < 1e-6);
    }

    #[test]
    fn omit_missing_error_field() {
        let err = Error {
            http_status: 404,
            message: "not found".into(),
            field: None,
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(r#"{"http_status":404,"message":"not found"}"#, json);
    }
}
