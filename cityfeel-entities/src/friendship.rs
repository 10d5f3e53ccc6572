use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FriendshipStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl FriendshipStatus {
    /// Active relationships block new requests
    /// between the same users in either direction.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }
}

/// Directed friendship request from `creator_id` to `target_id`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id         : Id,
    pub creator_id : Id,
    pub target_id  : Id,
    pub status     : FriendshipStatus,
    pub created_at : Timestamp,
}

impl Friendship {
    pub fn involves(&self, user_id: Id) -> bool {
        self.creator_id == user_id || self.target_id == user_id
    }

    /// The participant that is not `user_id`.
    pub fn other_participant(&self, user_id: Id) -> Option<Id> {
        if self.creator_id == user_id {
            Some(self.target_id)
        } else if self.target_id == user_id {
            Some(self.creator_id)
        } else {
            None
        }
    }
}
