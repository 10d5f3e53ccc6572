use super::{not_found_as, parse_privacy_status, prelude::*, required};
use crate::util::{image_format, validate};

#[derive(Debug, Clone, Default)]
pub struct NewPhoto<'a> {
    pub location: Option<i64>,
    pub image: Option<&'a [u8]>,
    pub caption: Option<String>,
    pub privacy_status: Option<String>,
}

/// Validates an upload and prepares the photo record.
///
/// The returned photo has no id yet and its image path
/// points to a file that still needs to be written.
pub fn prepare_new_photo<R: LocationRepo>(
    repo: &R,
    user: &User,
    new: NewPhoto,
) -> Result<Photo> {
    let data = required(new.image, "image")?;
    let format = image_format::check_image(data)?;
    let location_id = Id::new(required(new.location, "location")?);
    let location = not_found_as(
        repo.get_location(location_id),
        Error::UnknownLocation("location"),
    )?;
    let caption = new.caption.unwrap_or_default().trim().to_string();
    if !validate::is_valid_caption(&caption) {
        return Err(Error::Caption);
    }
    let privacy = parse_privacy_status(new.privacy_status.as_deref())?;
    let created_at = Timestamp::now();
    Ok(Photo {
        id: Id::default(),
        user_id: Some(user.id),
        location_id: location.id,
        image: ImagePath::new_unique(created_at, format).into_string(),
        caption,
        privacy,
        created_at,
    })
}

pub fn create_photo<R: PhotoRepo>(repo: &R, mut photo: Photo) -> Result<Photo> {
    photo.id = repo.create_photo(&photo)?;
    log::info!(
        "Added photo {} to location {}",
        photo.id,
        photo.location_id
    );
    Ok(photo)
}

/// Deletes the record and returns it, so that the
/// image file can be removed afterwards.
pub fn delete_photo<R: PhotoRepo>(repo: &R, user: &User, id: Id) -> Result<Photo> {
    let photo = repo.get_photo(id)?;
    if !user.may_moderate(photo.user_id) {
        return Err(Error::Forbidden);
    }
    repo.delete_photo(id)?;
    log::info!("User {} deleted photo {id}", user.username);
    Ok(photo)
}
