use crate::entities::ImageFormat;
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageInvalidation {
    #[error("The image is too large")]
    TooLarge,
    #[error("Unsupported image format")]
    Format,
}

/// Checks the size and sniffs the format from the content.
///
/// Only JPEG and PNG images with a readable header are accepted.
pub fn check_image(data: &[u8]) -> Result<ImageFormat, ImageInvalidation> {
    if data.len() > crate::entities::MAX_IMAGE_SIZE {
        return Err(ImageInvalidation::TooLarge);
    }
    let (format, image_format) = match image::guess_format(data) {
        Ok(image::ImageFormat::Jpeg) => (ImageFormat::Jpeg, image::ImageFormat::Jpeg),
        Ok(image::ImageFormat::Png) => (ImageFormat::Png, image::ImageFormat::Png),
        Ok(other) => {
            log::debug!("Rejecting image of format {other:?}");
            return Err(ImageInvalidation::Format);
        }
        Err(_) => return Err(ImageInvalidation::Format),
    };
    image::ImageReader::with_format(Cursor::new(data), image_format)
        .into_dimensions()
        .map_err(|err| {
            log::debug!("Rejecting unreadable image: {err}");
            ImageInvalidation::Format
        })?;
    Ok(format)
}
