use std::collections::HashMap;

use super::{prelude::*, profile::recent_public_emotions, RecentEmotion};

pub const RECENT_COMMUNITY_EMOTIONS: usize = 3;
pub const COMMUNITY_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone)]
pub struct CommunityMember {
    pub user: User,
    /// Public and private
    pub emotions_count: u64,
    pub recent_emotions: Vec<RecentEmotion>,
}

/// Newest members first.
pub fn community<D: Db>(db: &D, q: Option<&str>, page: u64) -> Result<Page<CommunityMember>> {
    let page = page.max(1);
    let q = q.map(str::trim).filter(|q| !q.is_empty());
    let total = db.count_users(q)?;
    let users = db.query_users(q, &Pagination::page(page, COMMUNITY_PAGE_SIZE))?;
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    let mut points_by_user: HashMap<_, Vec<_>> = HashMap::new();
    for point in db.emotion_points_of_users(&ids)? {
        points_by_user.entry(point.user_id).or_default().push(point);
    }
    let mut items = Vec::with_capacity(users.len());
    for user in users {
        let points = points_by_user.remove(&user.id).unwrap_or_default();
        items.push(CommunityMember {
            emotions_count: points.len() as u64,
            recent_emotions: recent_public_emotions(db, &points, RECENT_COMMUNITY_EMOTIONS)?,
            user,
        });
    }
    Ok(Page {
        items,
        total,
        page,
        page_size: COMMUNITY_PAGE_SIZE,
    })
}
