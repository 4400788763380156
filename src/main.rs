use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use folio::config::{Config, FileStorage, PreferenceHandle, PreferenceStore};
use folio::{logging, ui};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Terminal portfolio shell")]
struct Cli {
    /// Config file (defaults to <config_dir>/folio/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preferences file (defaults to <config_dir>/folio/preferences.toml)
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Write logs to this file; logging is off otherwise
    #[arg(long, value_name = "PATH", env = "FOLIO_LOG")]
    log_file: Option<PathBuf>,

    /// Skip animations, as a system reduced-motion setting would
    #[arg(long, env = "FOLIO_PREFERS_REDUCED_MOTION")]
    prefers_reduced_motion: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only go to an explicit file.
    if let Some(log_path) = &cli.log_file {
        logging::init_tracing(log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    }

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let prefs_path = cli.prefs.unwrap_or_else(FileStorage::default_path);
    let mut store = PreferenceStore::new(Box::new(FileStorage::open_or_empty(&prefs_path)));
    store.initialize(cli.prefers_reduced_motion);

    tracing::info!(
        config = %config_path.display(),
        prefs = %prefs_path.display(),
        reduce_motion = cli.prefers_reduced_motion,
        "Starting folio"
    );

    ui::run(&config, PreferenceHandle::new(store)).context("terminal UI failed")?;

    tracing::info!("Shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_paths_and_motion_flag() {
        let cli = Cli::try_parse_from([
            "folio",
            "--config",
            "/tmp/config.toml",
            "--prefs",
            "/tmp/prefs.toml",
            "--prefers-reduced-motion",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert_eq!(cli.prefs, Some(PathBuf::from("/tmp/prefs.toml")));
        assert!(cli.prefers_reduced_motion);
    }
}
