use super::*;

#[post("/friendship", format = "application/json", data = "<new_friendship>")]
pub fn post_friendship(
    connections: sqlite::Connections,
    account: Account,
    new_friendship: JsonResult<json::NewFriendship>,
) -> CustomStatusResult<json::Friendship> {
    let json::NewFriendship { friend_id } = new_friendship?.into_inner();
    let user = account.user(&connections.shared()?)?;
    let friendship = flows::request_friendship(&connections, &user, friend_id)?;
    Ok(created(to_json::friendship(friendship)))
}

#[get("/friendship/requests")]
pub fn get_friendship_requests(
    connections: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Friendship>> {
    let db = connections.shared()?;
    let user = account.user(&db)?;
    let requests = usecases::friendship_requests(&db, &user)?;
    Ok(Json(requests.into_iter().map(to_json::friendship).collect()))
}

#[get("/friendship/<id>")]
pub fn get_friendship(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> Result<json::Friendship> {
    let db = connections.shared()?;
    let user = account.user(&db)?;
    let friendship = usecases::get_friendship(&db, &user, Id::new(id))?;
    Ok(Json(to_json::friendship(friendship)))
}

#[patch("/friendship/<id>", format = "application/json", data = "<update>")]
pub fn patch_friendship(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
    update: JsonResult<json::FriendshipStatusUpdate>,
) -> Result<json::Friendship> {
    let json::FriendshipStatusUpdate { status } = update?.into_inner();
    let user = account.user(&connections.shared()?)?;
    let friendship =
        flows::respond_to_friendship(&connections, &user, Id::new(id), status.as_deref())?;
    Ok(Json(to_json::friendship(friendship)))
}

#[delete("/friendship/<id>")]
pub fn delete_friendship(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> StatusResult {
    let user = account.user(&connections.shared()?)?;
    flows::delete_friendship(&connections, &user, Id::new(id))?;
    Ok(Status::NoContent)
}

#[get("/friends")]
pub fn get_friends(
    connections: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Friend>> {
    let db = connections.shared()?;
    let user = account.user(&db)?;
    let friends = usecases::friends(&db, &user)?;
    Ok(Json(friends.into_iter().map(to_json::friend).collect()))
}
