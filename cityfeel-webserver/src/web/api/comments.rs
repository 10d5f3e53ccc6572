use super::*;

#[get("/comments?<location>")]
pub fn get_comments(
    connections: sqlite::Connections,
    auth: Auth,
    location: Option<i64>,
) -> Result<Vec<json::Comment>> {
    let db = connections.shared()?;
    let viewer = auth.viewer(&db)?;
    let comments = usecases::list_comments(&db, viewer.as_ref(), location.map(Id::new))?;
    Ok(Json(comments.into_iter().map(to_json::comment).collect()))
}

#[get("/comments/<id>")]
pub fn get_comment(
    connections: sqlite::Connections,
    auth: Auth,
    id: i64,
) -> Result<json::Comment> {
    let db = connections.shared()?;
    let viewer = auth.viewer(&db)?;
    let comment = usecases::get_comment(&db, viewer.as_ref(), Id::new(id))?;
    Ok(Json(to_json::comment(comment)))
}

#[post("/comments", format = "application/json", data = "<new_comment>")]
pub fn post_comment(
    connections: sqlite::Connections,
    account: Account,
    new_comment: JsonResult<json::NewComment>,
) -> CustomStatusResult<json::Comment> {
    let new_comment = from_json::new_comment(new_comment?.into_inner());
    let user = account.user(&connections.shared()?)?;
    let comment = flows::create_comment(&connections, &user, new_comment)?;
    Ok(created((comment, user.username).into()))
}

#[patch("/comments/<id>", format = "application/json", data = "<update>")]
pub fn patch_comment(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
    update: JsonResult<json::CommentUpdate>,
) -> Result<json::Comment> {
    let update = from_json::comment_update(update?.into_inner());
    let user = account.user(&connections.shared()?)?;
    let id = Id::new(id);
    flows::update_comment(&connections, &user, id, update)?;
    let comment = usecases::get_comment(&connections.shared()?, Some(&user), id)?;
    Ok(Json(to_json::comment(comment)))
}

#[delete("/comments/<id>")]
pub fn delete_comment(
    connections: sqlite::Connections,
    account: Account,
    id: i64,
) -> StatusResult {
    let user = account.user(&connections.shared()?)?;
    flows::delete_comment(&connections, &user, Id::new(id))?;
    Ok(Status::NoContent)
}
