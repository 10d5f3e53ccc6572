pub mod prelude {
    use std::io::Cursor;

    pub use cityfeel_core::{
        db::*,
        entities::*,
        proximity::DEFAULT_PROXIMITY_RADIUS,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude::{self as flows, MediaDir},
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub media: MediaDir,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            cityfeel_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            let media = MediaDir::new(
                std::env::temp_dir().join(format!("cityfeel-media-{}", uuid::Uuid::new_v4())),
            );
            Self {
                db_connections,
                media,
            }
        }

        pub fn create_user(&self, username: &str) -> User {
            let new_user = usecases::NewUser {
                username: Some(username.into()),
                email: Some(format!("{username}@example.com")),
                password1: Some("secret123".into()),
                password2: Some("secret123".into()),
                ..Default::default()
            };
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_new_user(&db, new_user).unwrap()
        }

        pub fn try_get_user(&self, username: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user_by_username(username)
                .unwrap()
        }

        pub fn submit(
            &self,
            user: &User,
            lat: f64,
            lng: f64,
            value: i64,
        ) -> usecases::SubmittedEmotionPoint {
            let new_point = usecases::NewEmotionPoint {
                latitude: Some(lat),
                longitude: Some(lng),
                emotional_value: Some(value),
                ..Default::default()
            };
            flows::submit_emotion_point(
                &self.db_connections,
                user,
                new_point,
                DEFAULT_PROXIMITY_RADIUS,
            )
            .unwrap()
        }
    }

    impl Drop for BackendFixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(self.media.root());
        }
    }

    pub fn png_image() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(16, 16, image::Rgb([20, 120, 200]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }
}
