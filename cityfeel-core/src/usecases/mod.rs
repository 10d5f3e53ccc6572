mod change_user_role;
mod comments;
mod community;
mod create_new_user;
mod delete_emotion_point;
mod error;
mod friendship;
mod location_detail;
mod location_stats;
mod login;
mod photos;
mod profile;
mod query_locations;
mod resolve_location;
mod submit_emotion_point;
mod update_user;


pub use self::{
    change_user_role::*, comments::*, community::*, create_new_user::*, delete_emotion_point::*,
    error::Error, friendship::*, location_detail::*, location_stats::*, login::*, photos::*,
    profile::*, query_locations::*, resolve_location::*, submit_emotion_point::*, update_user::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use super::Page;
    pub use crate::{db::*, entities::*, repositories::*};
    pub use crate::repositories::Error as RepoError;
}
use self::prelude::*;

/// Placeholder for the author of private content.
pub const ANONYMOUS: &str = "anonymous";

/// A single page of a paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items on all pages
    pub total: u64,
    /// 1-based
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn empty(page: u64, page_size: u64) -> Self {
        Self {
            items: vec![],
            total: 0,
            page,
            page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.total
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(field))
}

fn parse_privacy_status(value: Option<&str>) -> Result<PrivacyStatus> {
    match value.map(str::trim) {
        None | Some("") => Ok(PrivacyStatus::default()),
        Some(s) => s.parse().map_err(|_| Error::PrivacyStatus),
    }
}

/// Blank strings are treated like missing values.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Maps a missing entity to `err` instead of a generic not found error.
fn not_found_as<T>(res: std::result::Result<T, RepoError>, err: Error) -> Result<T> {
    res.map_err(|e| match e {
        RepoError::NotFound => err,
        e => Error::Repo(e),
    })
}
