use super::{error::AppError, prelude::MediaDir, *};

/// Validates the upload, writes the image file and adds the photo.
///
/// The file is removed again if the photo could not be stored.
pub fn create_photo(
    connections: &sqlite::Connections,
    media: &MediaDir,
    user: &User,
    new_photo: usecases::NewPhoto,
) -> Result<Photo> {
    let data = new_photo.image;
    let photo = usecases::prepare_new_photo(&connections.shared()?, user, new_photo).map_err(
        |err| {
            debug!("Rejected photo of user {}: {err}", user.username);
            err
        },
    )?;
    let data = data.ok_or(usecases::Error::MissingField("image"))?;
    let image = photo.image.clone();
    media.store(&image, data)?;
    let stored = connections
        .exclusive()
        .map_err(AppError::from)
        .and_then(|mut db| {
            db.transaction(|conn| usecases::create_photo(conn, photo))
                .map_err(AppError::from)
        });
    if let Err(err) = &stored {
        warn!("Failed to add photo {image}: {err}");
        media.remove(&image);
    }
    stored
}

/// Deletes the photo and its image file.
pub fn delete_photo(
    connections: &sqlite::Connections,
    media: &MediaDir,
    user: &User,
    id: Id,
) -> Result<()> {
    let photo = connections.exclusive()?.transaction(|conn| {
        usecases::delete_photo(conn, user, id).map_err(|err| {
            warn!("Failed to delete photo {id}: {err}");
            err
        })
    })?;
    media.remove(&photo.image);
    Ok(())
}
