use super::*;

pub fn request_friendship(
    connections: &sqlite::Connections,
    user: &User,
    friend_id: Option<i64>,
) -> Result<usecases::FriendshipView> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::request_friendship(conn, user, friend_id).map_err(|err| {
            debug!("Rejected friend request of user {}: {err}", user.username);
            err
        })
    })?)
}

pub fn respond_to_friendship(
    connections: &sqlite::Connections,
    user: &User,
    id: Id,
    status: Option<&str>,
) -> Result<usecases::FriendshipView> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::respond_to_friendship(conn, user, id, status).map_err(|err| {
            debug!("Rejected answer to friendship {id}: {err}");
            err
        })
    })?)
}

pub fn delete_friendship(connections: &sqlite::Connections, user: &User, id: Id) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_friendship(conn, user, id).map_err(|err| {
            warn!("Failed to delete friendship {id}: {err}");
            err
        })
    })?)
}
