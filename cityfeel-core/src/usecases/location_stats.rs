use std::collections::HashMap;

use super::{prelude::*, ANONYMOUS};
use crate::aggregate::{self, EmotionSummary, Rated};

#[derive(Debug, Clone)]
pub struct LatestComment {
    pub id: Id,
    pub content: String,
    /// Username or a placeholder for private comments
    pub author: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct LocationWithStats {
    pub location: Location,
    pub summary: EmotionSummary,
    pub comments_count: u64,
    pub latest_comment: Option<LatestComment>,
}

/// Attaches the public statistics to each location.
pub fn load_location_stats<D: Db>(
    db: &D,
    locations: Vec<Location>,
) -> Result<Vec<LocationWithStats>> {
    let ids: Vec<_> = locations.iter().map(|l| l.id).collect();
    let points = db.emotion_points_of_locations(&ids)?;
    let comments = db.comments_of_locations(&ids)?;

    let mut latest = Vec::with_capacity(locations.len());
    for location in &locations {
        let stats = aggregate::comment_stats(location.id, &points, &comments);
        latest.push((stats.count, stats.latest.cloned()));
    }
    let author_ids: Vec<_> = latest
        .iter()
        .filter_map(|(_, c)| c.as_ref())
        .filter(|c| c.privacy.is_public())
        .map(|c| c.user_id)
        .collect();
    let authors: HashMap<_, _> = db
        .get_users(&author_ids)?
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();

    Ok(locations
        .into_iter()
        .zip(latest)
        .map(|(location, (comments_count, latest_comment))| {
            let summary = location.emotion_summary(&points);
            let latest_comment = latest_comment.map(|c| LatestComment {
                author: if c.privacy.is_public() {
                    authors
                        .get(&c.user_id)
                        .cloned()
                        .unwrap_or_else(|| ANONYMOUS.to_string())
                } else {
                    ANONYMOUS.to_string()
                },
                id: c.id,
                content: c.content,
                created_at: c.created_at,
            });
            LocationWithStats {
                location,
                summary,
                comments_count,
                latest_comment,
            }
        })
        .collect())
}
