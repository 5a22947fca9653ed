use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::medals::{HttpSource, MedalService, MedalSource, RankedView};
use crate::ranking::{SortKey, determine_sort_key};
use crate::reports::{generate_console, generate_json};
use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "      show";

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// URL of the medal data (overrides the configuration file)
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,

    /// Metric to rank by: total, gold, silver or bronze (anything else ranks by gold)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Number of rows to show
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Path to configuration file (default is `medals.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Output the ranked table to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output the ranked table to the console. If omitted, console output is shown only when no JSON file is written.
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,
}

/// Fetches the medal table and renders its ranked view
///
/// # Errors
///
/// Returns an error if configuration is invalid, if the data cannot be retrieved after
/// retries, or if a report cannot be written
pub async fn show_table<H: Host>(host: &mut H, args: &ShowArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(&Utf8PathBuf::from("."), args.config.as_ref())?;
    let source = HttpSource::new(config.request_timeout)?;
    show_with_source(host, args, &config, source).await
}

async fn show_with_source<H: Host, S: MedalSource>(host: &mut H, args: &ShowArgs, config: &Config, source: S) -> Result<()> {
    let locator = args.source.as_deref().unwrap_or(&config.source);
    let sort_key = determine_sort_key(args.sort.as_deref().or(config.sort.as_deref()));
    let limit = args.limit.unwrap_or(config.limit);

    log::info!(target: LOG_TARGET, "Ranking '{locator}' by {sort_key}, showing up to {limit} rows");

    let service = MedalService::new(source, config.retry_policy());
    let view = service.fetch_ranked_view(sort_key, locator, limit).await;

    if let Some(e) = view.error {
        let _ = writeln!(host.error(), "❌ Could not load medal data: {e}");
        host.exit(1);
        return Err(anyhow!(e));
    }

    render(host, args, &view, sort_key)
}

fn render<H: Host>(host: &mut H, args: &ShowArgs, view: &RankedView, sort_key: SortKey) -> Result<()> {
    let rows = view.data.as_deref().unwrap_or_default();

    if let Some(path) = &args.json {
        let mut text = String::new();
        generate_json(rows, sort_key, &mut text)?;
        fs::write(path, text).with_context(|| format!("writing JSON report to '{path}'"))?;
        log::info!(target: LOG_TARGET, "Wrote JSON report to '{path}'");
    }

    if args.console || args.json.is_none() {
        let mut text = String::new();
        generate_console(rows, sort_key, args.color.use_colors(), &mut text)?;
        host.output().write_all(text.as_bytes()).context("writing console report")?;
    }

    Ok(())
}
