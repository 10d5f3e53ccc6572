use super::prelude::*;

/// Only the owner may delete an emotion point.
pub fn delete_emotion_point<R: EmotionPointRepo>(repo: &R, user: &User, id: Id) -> Result<()> {
    let point = repo.get_emotion_point(id)?;
    if point.user_id != user.id {
        return Err(Error::Forbidden);
    }
    repo.delete_emotion_point(id)?;
    log::info!("User {} deleted emotion point {id}", user.username);
    Ok(())
}
