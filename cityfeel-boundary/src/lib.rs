use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// All timestamps are unix timestamps in milliseconds.

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    /// Name of the offending input field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ---   users   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Staff,
    Admin,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id          : i64,
    pub username    : String,
    pub email       : String,
    pub first_name  : String,
    pub last_name   : String,
    pub avatar      : Option<String>,
    pub role        : UserRole,
    pub date_joined : i64,
}

/// Public data of another user.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password1: Option<String>,
    pub password2: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserProfile {
    pub user: UserSummary,
    pub total_emotions: u64,
    pub public_emotions: u64,
    pub private_emotions: u64,
    /// Newest public emotion points first
    pub recent_emotions: Vec<EmotionPoint>,
    pub is_own_profile: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CommunityMember {
    pub user: UserSummary,
    pub emotions_count: u64,
    pub recent_emotions: Vec<EmotionPoint>,
}

// ---   paging   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

// ---   locations   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    Public,
    Private,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location without statistics.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocationRef {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LatestComment {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub created_at: i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Location {
    pub id                   : i64,
    pub name                 : String,
    #[serde(flatten)]
    pub coordinate           : Coordinate,
    /// Average over public emotion points, `null` if there are none
    pub avg_emotional_value  : Option<f64>,
    /// Number of public emotion points
    pub emotion_points_count : u64,
    pub comments_count       : u64,
    pub latest_comment       : Option<LatestComment>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct EmotionValueCount {
    pub emotional_value: u8,
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct LocationDetail {
    #[serde(flatten)]
    pub location: Location,
    /// Public emotion points per value in ascending order
    pub emotional_value_distribution: Vec<EmotionValueCount>,
    pub own_emotion_point: Option<EmotionPoint>,
    pub photos: Vec<Photo>,
}

// ---   emotion points   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewEmotionPoint {
    pub location_id     : Option<i64>,
    pub latitude        : Option<f64>,
    pub longitude       : Option<f64>,
    pub location_name   : Option<String>,
    pub emotional_value : Option<i64>,
    pub privacy_status  : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EmotionPoint {
    pub id              : i64,
    pub user_id         : i64,
    pub location        : LocationRef,
    pub emotional_value : u8,
    pub privacy_status  : PrivacyStatus,
    pub created_at      : i64,
    pub updated_at      : i64,
}

// ---   comments   --- //

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewComment {
    pub location: Option<i64>,
    pub emotion_point: Option<i64>,
    pub content: Option<String>,
    pub privacy_status: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct CommentUpdate {
    pub content: Option<String>,
    pub privacy_status: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Comment {
    pub id             : i64,
    /// Username or `anonymous`
    pub author         : String,
    pub location       : i64,
    pub emotion_point  : Option<i64>,
    pub content        : String,
    pub privacy_status : PrivacyStatus,
    pub created_at     : i64,
}

// ---   photos   --- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Photo {
    pub id             : i64,
    pub user_id        : Option<i64>,
    pub location       : i64,
    /// Path relative to the media directory
    pub image          : String,
    pub caption        : String,
    pub privacy_status : PrivacyStatus,
    pub created_at     : i64,
}

// ---   friendship   --- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct NewFriendship {
    pub friend_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(default)]
pub struct FriendshipStatusUpdate {
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Friendship {
    pub id: i64,
    pub creator: UserSummary,
    pub target: UserSummary,
    pub status: FriendshipStatus,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Friend {
    pub friendship_id: i64,
    pub user: UserSummary,
    pub since: i64,
}
