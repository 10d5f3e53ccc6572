use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

pub const MAX_USERNAME_LEN: usize = 150;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub username    : String,
    pub email       : EmailAddress,
    pub password    : Password,
    pub first_name  : String,
    pub last_name   : String,
    pub avatar      : Option<String>,
    pub role        : Role,
    pub date_joined : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    #[default]
    User  = 0,
    Staff = 1,
    Admin = 2,
}

impl Role {
    /// Staff members and admins moderate content of other users.
    pub fn is_staff(self) -> bool {
        self >= Role::Staff
    }
}

impl User {
    pub fn may_moderate(&self, owner_id: Option<Id>) -> bool {
        owner_id == Some(self.id) || self.role.is_staff()
    }
}
