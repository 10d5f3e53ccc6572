use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    user: &User,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_comment(conn, user, new_comment).map_err(|err| {
            debug!("Rejected comment of user {}: {err}", user.username);
            err
        })
    })?)
}

pub fn update_comment(
    connections: &sqlite::Connections,
    user: &User,
    id: Id,
    update: usecases::CommentUpdate,
) -> Result<Comment> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_comment(conn, user, id, update).map_err(|err| {
            warn!("Failed to update comment {id}: {err}");
            err
        })
    })?)
}

pub fn delete_comment(connections: &sqlite::Connections, user: &User, id: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_comment(conn, user, id).map_err(|err| {
            warn!("Failed to delete comment {id}: {err}");
            err
        })
    })?)
}
