use std::{fmt, ops::Add};

use time::{Duration, OffsetDateTime};

/// Point in time with millisecond precision (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self::from_millis(Self::from(OffsetDateTime::now_utc()).as_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        let nanos = i128::from(millis) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map(Self)
            .unwrap_or_else(|_| Self(OffsetDateTime::UNIX_EPOCH))
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub const fn as_offset_date_time(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_roundtrip_truncates_sub_millis() {
        let ts = Timestamp::now();
        assert_eq!(ts, Timestamp::from_millis(ts.as_millis()));
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = Timestamp::from_millis(1_000);
        let later = earlier + Duration::milliseconds(1);
        assert!(earlier < later);
        assert_eq!(1_001, later.as_millis());
    }
}
