use std::collections::HashMap;

use super::{non_blank, not_found_as, parse_privacy_status, prelude::*, required, ANONYMOUS};
use crate::util::validate::Validate;

#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub location: Option<i64>,
    pub emotion_point: Option<i64>,
    pub content: Option<String>,
    pub privacy_status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CommentUpdate {
    pub content: Option<String>,
    pub privacy_status: Option<String>,
}

/// A comment as presented to a particular viewer.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    /// Username or a placeholder for private comments of others
    pub author: String,
}

pub fn create_comment<D: Db>(db: &D, user: &User, new: NewComment) -> Result<Comment> {
    let location_id = Id::new(required(new.location, "location")?);
    let location = not_found_as(
        db.get_location(location_id),
        Error::UnknownLocation("location"),
    )?;
    let emotion_point_id = match new.emotion_point {
        Some(id) => {
            let point = not_found_as(
                db.get_emotion_point(Id::new(id)),
                Error::CommentEmotionPoint,
            )?;
            if point.location_id != location.id {
                return Err(Error::CommentEmotionPoint);
            }
            Some(point.id)
        }
        None => None,
    };
    let content = non_blank(new.content).ok_or(Error::EmptyComment)?;
    let mut comment = Comment {
        id: Id::default(),
        user_id: user.id,
        location_id: location.id,
        emotion_point_id,
        content: content.trim().to_string(),
        privacy: parse_privacy_status(new.privacy_status.as_deref())?,
        created_at: Timestamp::now(),
    };
    comment.validate()?;
    comment.id = db.create_comment(&comment)?;
    log::info!(
        "User {} commented on location {}",
        user.username,
        location.id
    );
    Ok(comment)
}

fn authorize_comment_change<R: CommentRepo>(repo: &R, user: &User, id: Id) -> Result<Comment> {
    let comment = repo.get_comment(id)?;
    if !user.may_moderate(Some(comment.user_id)) {
        return Err(Error::Forbidden);
    }
    Ok(comment)
}

pub fn update_comment<R: CommentRepo>(
    repo: &R,
    user: &User,
    id: Id,
    update: CommentUpdate,
) -> Result<Comment> {
    let mut comment = authorize_comment_change(repo, user, id)?;
    if let Some(content) = update.content {
        comment.content = content.trim().to_string();
    }
    if update.privacy_status.is_some() {
        comment.privacy = parse_privacy_status(update.privacy_status.as_deref())?;
    }
    comment.validate()?;
    repo.update_comment(&comment)?;
    log::info!("User {} updated comment {id}", user.username);
    Ok(comment)
}

pub fn delete_comment<R: CommentRepo>(repo: &R, user: &User, id: Id) -> Result<()> {
    authorize_comment_change(repo, user, id)?;
    repo.delete_comment(id)?;
    log::info!("User {} deleted comment {id}", user.username);
    Ok(())
}

fn present_comments<R: UserRepo>(
    repo: &R,
    viewer: Option<&User>,
    comments: Vec<Comment>,
) -> Result<Vec<CommentView>> {
    let viewer_id = viewer.map(|u| u.id);
    let shown = |c: &Comment| c.privacy.is_public() || Some(c.user_id) == viewer_id;
    let author_ids: Vec<_> = comments
        .iter()
        .filter(|c| shown(c))
        .map(|c| c.user_id)
        .collect();
    let authors: HashMap<_, _> = repo
        .get_users(&author_ids)?
        .into_iter()
        .map(|u| (u.id, u.username))
        .collect();
    Ok(comments
        .into_iter()
        .map(|comment| {
            let author = if shown(&comment) {
                authors.get(&comment.user_id).cloned()
            } else {
                None
            }
            .unwrap_or_else(|| ANONYMOUS.to_string());
            CommentView { comment, author }
        })
        .collect())
}

pub fn get_comment<D: Db>(db: &D, viewer: Option<&User>, id: Id) -> Result<CommentView> {
    let comment = db.get_comment(id)?;
    present_comments(db, viewer, vec![comment])?
        .pop()
        .ok_or_else(|| RepoError::NotFound.into())
}

/// Newest first
pub fn list_comments<D: Db>(
    db: &D,
    viewer: Option<&User>,
    location: Option<Id>,
) -> Result<Vec<CommentView>> {
    let comments = match location {
        Some(id) => db.comments_of_locations(&[id])?,
        None => db.all_comments()?,
    };
    present_comments(db, viewer, comments)
}
