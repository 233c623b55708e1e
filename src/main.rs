use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pet_directory_server::directory_store::{DirectoryStore, SqliteDirectoryStore};
use pet_directory_server::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite directory database file.
    #[clap(value_parser = parse_path)]
    pub directory_db: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5555)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!(
        "Opening SQLite directory database at {:?}...",
        cli_args.directory_db
    );
    let directory_store = Arc::new(SqliteDirectoryStore::new(&cli_args.directory_db)?);
    info!(
        "Directory has {} owners and {} pets",
        directory_store.get_owners_count(),
        directory_store.get_pets_count()
    );

    info!("Ready to serve at port {}!", cli_args.port);
    run_server(directory_store, cli_args.logging_level, cli_args.port).await
}
