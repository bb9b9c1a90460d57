use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use seedlog_store::{SessionStore, resolve_data_dir};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let store = SessionStore::open(&data_dir)?;

    // A broken config must not take recording down with it; fall back to
    // defaults and keep going.
    let config_path = data_dir.join("config.toml");
    let config = Config::load_from(&config_path).unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load {}: {}; using defaults",
            config_path.display(),
            e
        );
        Config::default()
    });

    match cli.command {
        Commands::Record {
            seed,
            label,
            notes,
            session,
            disabled,
        } => handlers::record::handle(&store, &config, seed, label, notes, session, disabled),

        Commands::Export { session, format } => handlers::export::handle(&store, session, format),

        Commands::Sessions { format } => handlers::sessions::handle(&store, &format),
    }
}
