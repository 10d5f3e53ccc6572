use crate::{id::Id, privacy::PrivacyStatus, time::Timestamp};

/// Free text attached to a location and optionally
/// to one of its emotion points.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id               : Id,
    pub user_id          : Id,
    pub location_id      : Id,
    pub emotion_point_id : Option<Id>,
    pub content          : String,
    pub privacy          : PrivacyStatus,
    pub created_at       : Timestamp,
}
