use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cityfeel.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub locations: Locations,
    pub media: Media,
    pub auth: Auth,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Locations {
    pub proximity_radius_meters: f64,
    pub page_size: u64,
}

pub struct Media {
    /// File system directory for uploaded photos.
    pub dir: PathBuf,
}

pub struct Auth {
    pub token_expire_in: time::Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            locations,
            media,
            auth,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Locations {
            proximity_radius,
            page_size,
        } = locations.unwrap_or_default();
        if !(proximity_radius.is_finite() && proximity_radius > 0.0) {
            return Err(anyhow!("Invalid proximity radius: {proximity_radius}"));
        }
        if page_size == 0 {
            return Err(anyhow!("The page size must be positive"));
        }
        let locations = Locations {
            proximity_radius_meters: proximity_radius,
            page_size,
        };

        let raw::Media { dir } = media.unwrap_or_default();
        log::info!("Store uploaded images in {}", dir.display());
        let media = Media { dir };

        let raw::Auth { token_expire_in } = auth.unwrap_or_default();
        let auth = Auth {
            token_expire_in: time::Duration::try_from(token_expire_in)?,
        };

        Ok(Self {
            db,
            webserver,
            locations,
            media,
            auth,
        })
    }
}
