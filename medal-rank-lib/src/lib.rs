#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for medal-rank
//!
//! This library holds everything behind the `medal-rank` tool, which fetches medal
//! counts per country from a remote source and prints them as a ranked table.
//!
//! # Module Organization
//!
//! - [`ranking`]: Sort keys, tie-break cascades and the ordering of medal tables
//! - [`medals`]: Retrieval, total derivation, caching and ranked views
//! - [`commands`]: Command-line interface, configuration and orchestration
//! - [`reports`]: Rendering of ranked views for the console and as JSON

pub type Result<T, E = anyhow::Error> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

pub mod medals;
pub mod ranking;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
