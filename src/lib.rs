//! invscan library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;

use api::InventoryApi;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::endpoint::EndpointStore;
use errors::AppResult;
use std::time::Duration;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config, api: &InventoryApi) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg, api).await,
        Commands::Health => cli::commands::health::handle(api).await,
        Commands::Lookup { .. } => cli::commands::lookup::handle(&cli.command, api).await,
        Commands::Add { .. } | Commands::Remove { .. } => {
            cli::commands::adjust::handle(&cli.command, cfg, api).await
        }
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command, cfg, api).await,
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let cfg = Config::load()?;

    // 3️⃣ endpoint store seeded from config, `--server` wins for this run
    let endpoints = EndpointStore::new(&cfg.server_url);
    if let Some(server) = &cli.server
        && !endpoints.set_base_url(server)
    {
        tracing::warn!("ignoring empty --server value");
    }
    tracing::debug!(base_url = %endpoints.base_url(), "backend endpoint resolved");

    // 4️⃣ hand everything to the dispatcher
    let timeout = Duration::from_secs(cfg.request_timeout_secs.max(1));
    let api = InventoryApi::new(endpoints, timeout)?;
    dispatch(&cli, &cfg, &api).await
}
