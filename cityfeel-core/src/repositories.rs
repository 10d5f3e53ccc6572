// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    /// 1-based page numbers, page 0 is treated like page 1.
    pub fn page(page: u64, page_size: u64) -> Self {
        Self {
            offset: Some(page.saturating_sub(1).saturating_mul(page_size)),
            limit: Some(page_size),
        }
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self
            .offset
            .map_or(0, |o| usize::try_from(o).unwrap_or(usize::MAX));
        let limit = self
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));
        items.into_iter().skip(offset).take(limit).collect()
    }
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<Id>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: Id) -> Result<User>;
    fn get_users(&self, ids: &[Id]) -> Result<Vec<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.try_get_user_by_username(username)?
            .ok_or(Error::NotFound)
    }

    /// Newest users first, optionally filtered by a
    /// case-insensitive substring of the username.
    fn query_users(
        &self,
        username_contains: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<User>>;
    fn count_users(&self, username_contains: Option<&str>) -> Result<u64>;
}

#[derive(Debug, Default, Clone)]
pub struct LocationQuery {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub bbox: Option<MapBbox>,
    /// Locations with at least one public emotion point
    /// of one of these values
    pub emotional_values: Option<Vec<EmotionValue>>,
}

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<Id>;

    fn get_location(&self, id: Id) -> Result<Location>;
    fn get_locations(&self, ids: &[Id]) -> Result<Vec<Location>>;
    fn query_locations(&self, query: &LocationQuery) -> Result<Vec<Location>>;
}

pub trait EmotionPointRepo {
    /// Inserts a new emotion point or replaces value and privacy
    /// of the existing one of the same user for the same location.
    fn upsert_emotion_point(&self, point: &EmotionPoint) -> Result<Id>;

    fn get_emotion_point(&self, id: Id) -> Result<EmotionPoint>;
    fn try_get_emotion_point_of_user(
        &self,
        user_id: Id,
        location_id: Id,
    ) -> Result<Option<EmotionPoint>>;
    fn emotion_points_of_locations(&self, location_ids: &[Id]) -> Result<Vec<EmotionPoint>>;
    /// Newest first
    fn emotion_points_of_users(&self, user_ids: &[Id]) -> Result<Vec<EmotionPoint>>;

    /// Also deletes all comments that refer to the emotion point.
    fn delete_emotion_point(&self, id: Id) -> Result<()>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<Id>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: Id) -> Result<()>;

    fn get_comment(&self, id: Id) -> Result<Comment>;
    /// Newest first
    fn comments_of_locations(&self, location_ids: &[Id]) -> Result<Vec<Comment>>;
    /// Newest first
    fn all_comments(&self) -> Result<Vec<Comment>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<Id>;
    fn delete_photo(&self, id: Id) -> Result<()>;

    fn get_photo(&self, id: Id) -> Result<Photo>;
    /// Newest first
    fn photos_of_location(&self, location_id: Id) -> Result<Vec<Photo>>;
}

pub trait FriendshipRepo {
    /// Inserts a new pending request or resets the status of an
    /// existing request with the same creator and target to pending.
    fn upsert_friendship(&self, friendship: &Friendship) -> Result<Id>;
    fn update_friendship_status(&self, id: Id, status: FriendshipStatus) -> Result<()>;
    fn delete_friendship(&self, id: Id) -> Result<()>;

    fn get_friendship(&self, id: Id) -> Result<Friendship>;
    /// Requests between both users in any direction
    fn friendships_between(&self, a: Id, b: Id) -> Result<Vec<Friendship>>;
    /// Newest first
    fn friendships_of_user(&self, user_id: Id) -> Result<Vec<Friendship>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_offset_saturates() {
        let pagination = Pagination::page(u64::MAX, 20);
        assert_eq!(Some(u64::MAX), pagination.offset);
        assert!(pagination.apply(vec![1, 2, 3]).is_empty());
        assert_eq!(Some(20), Pagination::page(2, 20).offset);
        assert_eq!(Some(0), Pagination::page(0, 20).offset);
    }
}
