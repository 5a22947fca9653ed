//! Command dispatch logic for medal-rank

use super::{InitArgs, ShowArgs, ValidateArgs, init_config, show_table, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "medal-rank", version, author, long_about = None)]
#[command(about = "Rank countries by their medal counts")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: MedalSubcommand,
}

#[derive(Subcommand, Debug)]
enum MedalSubcommand {
    /// Fetch the medal table and print it in ranked order
    Show(Box<ShowArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        MedalSubcommand::Show(show_args) => show_table(host, show_args).await,
        MedalSubcommand::Init(init_args) => init_config(host, init_args),
        MedalSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
