use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use time::Duration;

use crate::{
    core::{prelude::*, proximity::DEFAULT_PROXIMITY_RADIUS, usecases},
    web::{sqlite, Cfg},
};
use cityfeel_application::prelude::MediaDir;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Cookie, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{default_cfg, register_user, rocket_test_setup_with_cfg};

    pub use crate::core::{db::*, prelude::*};
}

/// Images are stored in a new temporary directory.
pub fn default_cfg() -> Cfg {
    let media_dir = std::env::temp_dir().join(format!("cityfeel-media-{}", uuid::Uuid::new_v4()));
    Cfg {
        proximity_radius: DEFAULT_PROXIMITY_RADIUS,
        page_size: 20,
        media_dir: MediaDir::new(media_dir),
        token_expire_in: Duration::days(1),
    }
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections = cityfeel_db_sqlite::Connections::init(":memory:", 1).unwrap();
    cityfeel_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn rocket_test_setup_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg {
        limits: super::upload_limits(),
        ..RocketCfg::debug_default()
    };
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, cfg, rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn register_user(pool: &sqlite::Connections, username: &str, pw: &str) -> User {
    let db = pool.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::NewUser {
            username: Some(username.to_string()),
            email: Some(format!("{username}@example.com")),
            password1: Some(pw.to_string()),
            password2: Some(pw.to_string()),
            ..Default::default()
        },
    )
    .unwrap()
}
