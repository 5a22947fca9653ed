//! Command-line interface and orchestration for medal-rank
//!
//! This module implements the CLI commands and ties the medal service, the ranking
//! engine and the report generators together.
//!
//! ## Commands
//!
//! - **show**: Fetch the medal table from a source URL, rank it by a sort key and
//!   print the top rows to the console and/or a JSON file
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. `show` loads the configuration, lets command-line
//! flags override it, builds a [`MedalService`](crate::medals::MedalService) over an
//! HTTP source and renders the settled ranked view.
//!
//! Configuration is an optional `medals.toml` file; see `default_config.toml` for the
//! available keys.

mod common;
mod config;
mod host;
mod init;
mod run;
mod show;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use show::{ShowArgs, show_table};
pub use validate::{ValidateArgs, validate_config};
