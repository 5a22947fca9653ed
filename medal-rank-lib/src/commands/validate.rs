use super::Host;
use super::config::Config;
use crate::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `medals.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Loads a configuration file and checks its values
///
/// An unrecognized `sort` value is accepted, since it falls back to gold when ranking.
pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match Config::load(&base_dir, config_path) {
        Ok(config) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }
            let _ = writeln!(host.output(), "Source: {}", config.source);
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e:#}");
            host.exit(1);
            Err(e)
        }
    }
}
