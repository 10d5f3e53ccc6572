#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix and `date_joined`
// are stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub avatar: Option<&'a str>,
    pub role: i16,
    pub date_joined: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub role: i16,
    pub date_joined: i64,
}

#[derive(Insertable)]
#[diesel(table_name = location)]
pub struct NewLocation<'a> {
    pub name: &'a str,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Queryable)]
pub struct LocationEntity {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Insertable)]
#[diesel(table_name = emotion_point)]
pub struct NewEmotionPoint<'a> {
    pub user_id: i64,
    pub location_id: i64,
    pub emotional_value: i16,
    pub privacy_status: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EmotionPointEntity {
    pub id: i64,
    pub user_id: i64,
    pub location_id: i64,
    pub emotional_value: i16,
    pub privacy_status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = comment)]
pub struct NewComment<'a> {
    pub user_id: i64,
    pub location_id: i64,
    pub emotion_point_id: Option<i64>,
    pub content: &'a str,
    pub privacy_status: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub id: i64,
    pub user_id: i64,
    pub location_id: i64,
    pub emotion_point_id: Option<i64>,
    pub content: String,
    pub privacy_status: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = photo)]
pub struct NewPhoto<'a> {
    pub user_id: Option<i64>,
    pub location_id: i64,
    pub image: &'a str,
    pub caption: &'a str,
    pub privacy_status: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PhotoEntity {
    pub id: i64,
    pub user_id: Option<i64>,
    pub location_id: i64,
    pub image: String,
    pub caption: String,
    pub privacy_status: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = friendship)]
pub struct NewFriendship<'a> {
    pub creator_id: i64,
    pub target_id: i64,
    pub status: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct FriendshipEntity {
    pub id: i64,
    pub creator_id: i64,
    pub target_id: i64,
    pub status: String,
    pub created_at: i64,
}
