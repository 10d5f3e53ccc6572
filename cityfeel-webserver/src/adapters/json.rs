pub use cityfeel_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            username,
            email,
            password1,
            password2,
            first_name,
            last_name,
        } = from;
        usecases::NewUser {
            username,
            email,
            password1,
            password2,
            first_name,
            last_name,
        }
    }

    pub fn user_update(from: UserUpdate) -> usecases::UserUpdate {
        let UserUpdate {
            first_name,
            last_name,
            email,
        } = from;
        usecases::UserUpdate {
            first_name,
            last_name,
            email,
        }
    }

    pub fn new_emotion_point(from: NewEmotionPoint) -> usecases::NewEmotionPoint {
        let NewEmotionPoint {
            location_id,
            latitude,
            longitude,
            location_name,
            emotional_value,
            privacy_status,
        } = from;
        usecases::NewEmotionPoint {
            location_id,
            latitude,
            longitude,
            location_name,
            emotional_value,
            privacy_status,
        }
    }

    pub fn new_comment(from: NewComment) -> usecases::NewComment {
        let NewComment {
            location,
            emotion_point,
            content,
            privacy_status,
        } = from;
        usecases::NewComment {
            location,
            emotion_point,
            content,
            privacy_status,
        }
    }

    pub fn comment_update(from: CommentUpdate) -> usecases::CommentUpdate {
        let CommentUpdate {
            content,
            privacy_status,
        } = from;
        usecases::CommentUpdate {
            content,
            privacy_status,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn page<T, U>(from: usecases::Page<T>, item: impl FnMut(T) -> U) -> Page<U> {
        let has_next = from.has_next();
        let usecases::Page {
            items,
            total,
            page,
            page_size,
        } = from;
        Page {
            items: items.into_iter().map(item).collect(),
            total,
            page,
            page_size,
            has_next,
        }
    }

    fn latest_comment(from: usecases::LatestComment) -> LatestComment {
        let usecases::LatestComment {
            id,
            content,
            author,
            created_at,
        } = from;
        LatestComment {
            id: id.into(),
            content,
            author,
            created_at: created_at.as_millis(),
        }
    }

    pub fn location(from: usecases::LocationWithStats) -> Location {
        let usecases::LocationWithStats {
            location,
            summary,
            comments_count,
            latest_comment,
        } = from;
        let LocationRef {
            id,
            name,
            coordinate,
        } = location.into();
        Location {
            id,
            name,
            coordinate,
            avg_emotional_value: summary.avg,
            emotion_points_count: summary.count,
            comments_count,
            latest_comment: latest_comment.map(self::latest_comment),
        }
    }

    pub fn location_detail(from: usecases::LocationDetails) -> LocationDetail {
        let usecases::LocationDetails {
            stats,
            distribution,
            own_emotion_point,
            photos,
        } = from;
        let own_emotion_point =
            own_emotion_point.map(|point| (point, stats.location.clone()).into());
        let emotional_value_distribution = distribution
            .iter()
            .map(|(value, count)| EmotionValueCount {
                emotional_value: value.to_u8(),
                count,
            })
            .collect();
        LocationDetail {
            location: location(stats),
            emotional_value_distribution,
            own_emotion_point,
            photos: photos.into_iter().map(Into::into).collect(),
        }
    }

    pub fn recent_emotion(from: usecases::RecentEmotion) -> EmotionPoint {
        let usecases::RecentEmotion {
            emotion_point,
            location,
        } = from;
        (emotion_point, location).into()
    }

    pub fn user_profile(from: usecases::UserProfile) -> UserProfile {
        let usecases::UserProfile {
            user,
            total_emotions,
            public_emotions,
            private_emotions,
            recent_emotions,
            is_own_profile,
        } = from;
        UserProfile {
            user: user.into(),
            total_emotions,
            public_emotions,
            private_emotions,
            recent_emotions: recent_emotions.into_iter().map(recent_emotion).collect(),
            is_own_profile,
        }
    }

    pub fn community_member(from: usecases::CommunityMember) -> CommunityMember {
        let usecases::CommunityMember {
            user,
            emotions_count,
            recent_emotions,
        } = from;
        CommunityMember {
            user: user.into(),
            emotions_count,
            recent_emotions: recent_emotions.into_iter().map(recent_emotion).collect(),
        }
    }

    pub fn comment(from: usecases::CommentView) -> Comment {
        let usecases::CommentView { comment, author } = from;
        (comment, author).into()
    }

    pub fn friendship(from: usecases::FriendshipView) -> Friendship {
        let usecases::FriendshipView {
            friendship,
            creator,
            target,
        } = from;
        Friendship {
            id: friendship.id.into(),
            creator: creator.into(),
            target: target.into(),
            status: friendship.status.into(),
            created_at: friendship.created_at.as_millis(),
        }
    }

    pub fn friend(from: usecases::Friend) -> Friend {
        let usecases::Friend {
            friendship_id,
            user,
            since,
        } = from;
        Friend {
            friendship_id: friendship_id.into(),
            user: user.into(),
            since: since.as_millis(),
        }
    }
}
