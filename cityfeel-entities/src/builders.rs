pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{emotion_point_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        /// Stores the password in plain text, use `hashed_password` where it is verified.
        pub fn password(mut self, pw: &str) -> Self {
            self.user.password = Password::from(pw.to_string());
            self
        }
        pub fn hashed_password(mut self, pw: &str) -> Self {
            self.user.password = pw.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn date_joined(mut self, millis: i64) -> Self {
            self.user.date_joined = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::default(),
                    username: "user".into(),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    password: Password::from(String::new()),
                    first_name: String::new(),
                    last_name: String::new(),
                    avatar: None,
                    role: Role::default(),
                    date_joined: Timestamp::now(),
                },
            }
        }
    }
}

pub mod emotion_point_builder {

    use super::*;
    use crate::{emotion::*, id::*, privacy::*, time::*};

    #[derive(Debug)]
    pub struct EmotionPointBuild {
        point: EmotionPoint,
    }

    impl EmotionPointBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.point.id = id.into();
            self
        }
        pub fn user(mut self, id: i64) -> Self {
            self.point.user_id = id.into();
            self
        }
        pub fn location(mut self, id: i64) -> Self {
            self.point.location_id = id.into();
            self
        }
        pub fn value(mut self, v: i64) -> Self {
            self.point.value = EmotionValue::try_new(v).unwrap();
            self
        }
        pub fn private(mut self) -> Self {
            self.point.privacy = PrivacyStatus::Private;
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.point.created_at = Timestamp::from_millis(millis);
            self.point.updated_at = self.point.created_at;
            self
        }
        pub fn finish(self) -> EmotionPoint {
            self.point
        }
    }

    impl Builder for EmotionPoint {
        type Build = EmotionPointBuild;
        fn build() -> EmotionPointBuild {
            let now = Timestamp::now();
            EmotionPointBuild {
                point: EmotionPoint {
                    id: Id::default(),
                    user_id: Id::default(),
                    location_id: Id::default(),
                    value: EmotionValue::max(),
                    privacy: PrivacyStatus::Public,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
