use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{detail, success};

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file, seeded with `--server` or the build-time default
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.server.as_deref(), cli.test)?;

    println!("⚙️  Initializing invscan…");
    detail("Config:", Config::config_file().display());
    detail("Server:", &cfg.server_url);

    tracing::info!(server_url = %cfg.server_url, test = cli.test, "configuration initialized");
    success("invscan initialization completed!");
    Ok(())
}
