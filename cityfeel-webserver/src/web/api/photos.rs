use super::*;
use rocket::form::{self, Form, FromForm};

#[derive(FromForm)]
pub struct PhotoUpload<'r> {
    location: Option<i64>,
    image: Option<&'r [u8]>,
    caption: Option<String>,
    privacy_status: Option<String>,
}

#[post("/photos", data = "<upload>")]
pub fn post_photo(
    connections: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    upload: result::Result<Form<PhotoUpload<'_>>, form::Errors<'_>>,
) -> CustomStatusResult<json::Photo> {
    let PhotoUpload {
        location,
        image,
        caption,
        privacy_status,
    } = upload?.into_inner();
    let new_photo = usecases::NewPhoto {
        location,
        image,
        caption,
        privacy_status,
    };
    let user = account.user(&connections.shared()?)?;
    let photo = flows::create_photo(&connections, &cfg.media_dir, &user, new_photo)?;
    Ok(created(photo.into()))
}

#[delete("/photos/<id>")]
pub fn delete_photo(
    connections: sqlite::Connections,
    account: Account,
    cfg: &State<Cfg>,
    id: i64,
) -> StatusResult {
    let user = account.user(&connections.shared()?)?;
    flows::delete_photo(&connections, &cfg.media_dir, &user, Id::new(id))?;
    Ok(Status::NoContent)
}
