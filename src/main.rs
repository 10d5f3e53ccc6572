use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cityfeel_core::entities::{Distance, Role};
use cityfeel_db_sqlite::Connections;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Change the role of a user (user, staff or admin)
    ChangeUserRole {
        #[arg(long)]
        username: String,
        #[arg(long)]
        role: Role,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections =
        Connections::init(&cfg.db.conn_sqlite, u32::from(cfg.db.conn_pool_size))?;
    cityfeel_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Some(Command::ChangeUserRole { username, role }) => {
            let user =
                cityfeel_application::prelude::change_user_role(&connections, &username, role)?;
            println!("{} is now {}", user.username, user.role);
        }
        None => run_webserver(connections, cfg)?,
    }
    Ok(())
}

fn run_webserver(connections: Connections, cfg: config::Config) -> Result<()> {
    let config::Config {
        webserver,
        locations,
        media,
        auth,
        ..
    } = cfg;
    let web_cfg = cityfeel_webserver::Cfg {
        proximity_radius: Distance::from_meters(locations.proximity_radius_meters),
        page_size: locations.page_size,
        media_dir: cityfeel_application::prelude::MediaDir::new(media.dir),
        token_expire_in: auth.token_expire_in,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(cityfeel_webserver::run(
        connections,
        webserver.enable_cors,
        web_cfg,
    ));
    Ok(())
}
