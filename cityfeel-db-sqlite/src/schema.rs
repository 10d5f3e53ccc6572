///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        email -> Text,
        password -> Text,
        first_name -> Text,
        last_name -> Text,
        avatar -> Nullable<Text>,
        role -> SmallInt,
        date_joined -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    location (id) {
        id -> BigInt,
        name -> Text,
        lat -> Double,
        lon -> Double,
    }
}

///////////////////////////////////////////////////////////////////////
// Emotion points
///////////////////////////////////////////////////////////////////////

table! {
    emotion_point (id) {
        id -> BigInt,
        user_id -> BigInt,
        location_id -> BigInt,
        emotional_value -> SmallInt,
        privacy_status -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(emotion_point -> users (user_id));
joinable!(emotion_point -> location (location_id));

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    comment (id) {
        id -> BigInt,
        user_id -> BigInt,
        location_id -> BigInt,
        emotion_point_id -> Nullable<BigInt>,
        content -> Text,
        privacy_status -> Text,
        created_at -> BigInt,
    }
}

joinable!(comment -> users (user_id));
joinable!(comment -> location (location_id));
joinable!(comment -> emotion_point (emotion_point_id));

///////////////////////////////////////////////////////////////////////
// Photos
///////////////////////////////////////////////////////////////////////

table! {
    photo (id) {
        id -> BigInt,
        user_id -> Nullable<BigInt>,
        location_id -> BigInt,
        image -> Text,
        caption -> Text,
        privacy_status -> Text,
        created_at -> BigInt,
    }
}

joinable!(photo -> location (location_id));

///////////////////////////////////////////////////////////////////////
// Friendships
///////////////////////////////////////////////////////////////////////

table! {
    friendship (id) {
        id -> BigInt,
        creator_id -> BigInt,
        target_id -> BigInt,
        status -> Text,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(users, location, emotion_point, comment, photo, friendship);
