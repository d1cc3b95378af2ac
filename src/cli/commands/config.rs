use crate::api::InventoryApi;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{server_badge, success, warning};

/// Handle the `config` subcommand
pub async fn handle(cli: &Cli, cfg: &Config, api: &InventoryApi) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set_server,
    } = &cli.command
    {
        let mut cfg = cfg.clone();

        // ---- SET SERVER ----
        if let Some(url) = set_server {
            let saved = ConfigLogic::set_server(&mut cfg, url, cli.test)?;
            api.endpoints().set_base_url(&saved);
            success(format!("Server URL saved: {}", saved));

            let ok = api.health().await;
            server_badge(ok, &api.endpoints().base_url());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::render(&cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                warning("No configuration file yet, writing defaults first");
                cfg.save()?;
            }
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited successfully using '{}'", used));
        }
    }

    Ok(())
}
