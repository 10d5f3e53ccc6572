use super::{load_location_stats, prelude::*, LocationWithStats};
use crate::aggregate::{self, Distribution};

#[derive(Debug, Clone)]
pub struct LocationDetails {
    pub stats: LocationWithStats,
    pub distribution: Distribution,
    pub own_emotion_point: Option<EmotionPoint>,
    /// Newest first
    pub photos: Vec<Photo>,
}

pub fn location_detail<D: Db>(db: &D, viewer: &User, id: Id) -> Result<LocationDetails> {
    let location = db.get_location(id)?;
    let stats = load_location_stats(db, vec![location])?
        .pop()
        .ok_or(RepoError::NotFound)?;
    let points = db.emotion_points_of_locations(&[id])?;
    let distribution = aggregate::distribution(&points);
    let own_emotion_point = points.into_iter().find(|p| p.user_id == viewer.id);
    let photos = visible_photos(db.photos_of_location(id)?, viewer);
    Ok(LocationDetails {
        stats,
        distribution,
        own_emotion_point,
        photos,
    })
}

/// Public photos and the private photos of `viewer`.
pub fn visible_photos(photos: Vec<Photo>, viewer: &User) -> Vec<Photo> {
    photos
        .into_iter()
        .filter(|p| p.privacy.is_public() || p.user_id == Some(viewer.id))
        .collect()
}
