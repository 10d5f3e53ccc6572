use std::fmt;

use thiserror::Error;

use crate::{id::Id, privacy::PrivacyStatus, time::Timestamp};

/// Sentiment rating on a scale from 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmotionValue(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Emotional value must be between {} and {}", EmotionValue::min(), EmotionValue::max())]
pub struct EmotionValueError;

impl EmotionValue {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn try_new(value: i64) -> Result<Self, EmotionValueError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::min().0..=Self::max().0).contains(v))
            .map(Self)
            .ok_or(EmotionValueError)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// All valid values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::min().0..=Self::max().0).map(Self)
    }
}

impl From<EmotionValue> for f64 {
    fn from(from: EmotionValue) -> Self {
        f64::from(from.0)
    }
}

impl fmt::Display for EmotionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionPoint {
    pub id          : Id,
    pub user_id     : Id,
    pub location_id : Id,
    pub value       : EmotionValue,
    pub privacy     : PrivacyStatus,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
}
