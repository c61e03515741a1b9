use std::fmt;

use dossier_server::config::loader::load_config;
use dossier_server::observability::{apply_logging_level, init_tracing};
use dossier_server::server::ServerBuilder;

enum ConfigSource {
    CliArgument,
    EnvironmentVariable,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument (--config)"),
            ConfigSource::EnvironmentVariable => write!(f, "environment variable (DOSSIER_CONFIG)"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

fn resolve_config_path() -> (String, ConfigSource) {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return (path, ConfigSource::CliArgument);
            }
        }
    }

    if let Ok(path) = std::env::var("DOSSIER_CONFIG") {
        if !path.trim().is_empty() {
            return (path, ConfigSource::EnvironmentVariable);
        }
    }

    ("dossier.toml".to_string(), ConfigSource::Default)
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env file is fine, anything else is worth surfacing.
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Failed to load .env file: {e}");
        }
    }

    init_tracing();

    let (config_path, source) = resolve_config_path();
    let config = match load_config(Some(&config_path)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };
    tracing::info!(path = %config_path, source = %source, "Configuration loaded");

    apply_logging_level(&config.logging.level);

    let server = match ServerBuilder::new().with_config(config).build() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Server initialization failed: {e}");
            std::process::exit(2);
        }
    };

    if let Err(err) = server.run().await {
        eprintln!("Server error: {err}");
    }
}
