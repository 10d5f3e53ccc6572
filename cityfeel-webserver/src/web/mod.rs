use cityfeel_application::prelude::MediaDir;
use rocket::{
    config::Config as RocketCfg,
    data::{Limits, ToByteUnit as _},
    fs::{FileServer, Options},
    Rocket, Route,
};
use time::Duration;

use crate::core::entities::Distance;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Submissions within this distance resolve to an existing location
    pub proximity_radius: Distance,
    /// Number of locations per page
    pub page_size: u64,
    pub media_dir: MediaDir,
    /// Lifetime of issued tokens
    pub token_expire_in: Duration,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

/// Multipart uploads carry images of up to 5 MB.
fn upload_limits() -> Limits {
    Limits::default()
        .limit("bytes", 8.mebibytes())
        .limit("file", 8.mebibytes())
        .limit("data-form", 10.mebibytes())
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.token_expire_in);
    let media_root = cfg.media_dir.root().to_owned();
    info!("Serving uploaded images from {}", media_root.display());

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::custom(RocketCfg::figment().merge(("limits", upload_limits()))),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(cfg)
        .register("/", api::catchers())
        .mount("/media", FileServer::new(media_root, Options::Missing));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
