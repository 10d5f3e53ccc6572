use std::collections::HashMap;

use super::prelude::*;

pub const RECENT_PROFILE_EMOTIONS: usize = 10;

#[derive(Debug, Clone)]
pub struct RecentEmotion {
    pub emotion_point: EmotionPoint,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub total_emotions: u64,
    pub public_emotions: u64,
    pub private_emotions: u64,
    /// Newest public emotion points first
    pub recent_emotions: Vec<RecentEmotion>,
    pub is_own_profile: bool,
}

/// Joins the most recent public emotion points with their locations.
pub(crate) fn recent_public_emotions<R: LocationRepo>(
    repo: &R,
    points: &[EmotionPoint],
    limit: usize,
) -> Result<Vec<RecentEmotion>> {
    let recent: Vec<_> = points
        .iter()
        .filter(|p| p.privacy.is_public())
        .take(limit)
        .cloned()
        .collect();
    let location_ids: Vec<_> = recent.iter().map(|p| p.location_id).collect();
    let locations: HashMap<_, _> = repo
        .get_locations(&location_ids)?
        .into_iter()
        .map(|l| (l.id, l))
        .collect();
    Ok(recent
        .into_iter()
        .filter_map(|emotion_point| {
            let location = locations.get(&emotion_point.location_id)?.clone();
            Some(RecentEmotion {
                emotion_point,
                location,
            })
        })
        .collect())
}

pub fn user_profile<D: Db>(db: &D, viewer: &User, id: Id) -> Result<UserProfile> {
    let user = db.get_user(id)?;
    let points = db.emotion_points_of_users(&[user.id])?;
    let public_emotions = points.iter().filter(|p| p.privacy.is_public()).count() as u64;
    let total_emotions = points.len() as u64;
    let recent_emotions = recent_public_emotions(db, &points, RECENT_PROFILE_EMOTIONS)?;
    Ok(UserProfile {
        is_own_profile: user.id == viewer.id,
        user,
        total_emotions,
        public_emotions,
        private_emotions: total_emotions - public_emotions,
        recent_emotions,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use cityfeel_entities::builders::*;

    #[test]
    fn profile_statistics() {
        let db = MockDb::default();
        let mut alice = User::build().username("alice").finish();
        alice.id = db.create_user(&alice).unwrap();
        let bob = User::build().id(99).finish();
        for i in 0..12 {
            let location = db.add_location(f64::from(i), 0.0).id;
            let mut point = EmotionPoint::build()
                .user(alice.id.to_raw())
                .location(location.to_raw())
                .created_at(1_000 + i64::from(i));
            if i % 4 == 0 {
                point = point.private();
            }
            db.upsert_emotion_point(&point.finish()).unwrap();
        }
        let profile = user_profile(&db, &bob, alice.id).unwrap();
        assert!(!profile.is_own_profile);
        assert_eq!(12, profile.total_emotions);
        assert_eq!(9, profile.public_emotions);
        assert_eq!(3, profile.private_emotions);
        assert_eq!(RECENT_PROFILE_EMOTIONS, profile.recent_emotions.len());
        let newest = &profile.recent_emotions[0];
        assert_eq!(1_011, newest.emotion_point.created_at.as_millis());
        assert!(newest.emotion_point.privacy.is_public());
        assert_eq!(newest.emotion_point.location_id, newest.location.id);

        assert!(user_profile(&db, &alice, alice.id).unwrap().is_own_profile);
    }
}
