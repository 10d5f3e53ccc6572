use std::fmt;

use strum::{Display, EnumString};

use crate::{id::Id, privacy::PrivacyStatus, time::Timestamp};

pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
pub const MAX_CAPTION_LEN: usize = 255;

const STORAGE_DIR: &str = "location_photos";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id          : Id,
    /// Missing for photos whose owner is unknown.
    pub user_id     : Option<Id>,
    pub location_id : Id,
    /// Path relative to the media directory.
    pub image       : String,
    pub caption     : String,
    pub privacy     : PrivacyStatus,
    pub created_at  : Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

/// Relative storage path of a new image file
/// in a per-day directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath(String);

impl ImagePath {
    pub fn new_unique(created_at: Timestamp, format: ImageFormat) -> Self {
        let date = created_at.as_offset_date_time().date();
        let stem = uuid::Uuid::new_v4().simple();
        Self(format!(
            "{STORAGE_DIR}/{:04}/{:02}/{:02}/{stem}.{}",
            date.year(),
            u8::from(date.month()),
            date.day(),
            format.extension()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_contains_date_and_extension() {
        // 2024-03-07T10:00:00Z
        let created_at = Timestamp::from_millis(1_709_805_600_000);
        let path = ImagePath::new_unique(created_at, ImageFormat::Png);
        assert!(path.as_str().starts_with("location_photos/2024/03/07/"));
        assert!(path.as_str().ends_with(".png"));
        let other = ImagePath::new_unique(created_at, ImageFormat::Png);
        assert_ne!(path, other);
    }

    #[test]
    fn jpeg_files_use_jpg_extension() {
        assert_eq!("jpg", ImageFormat::Jpeg.extension());
        assert_eq!("jpeg", ImageFormat::Jpeg.to_string());
    }
}
