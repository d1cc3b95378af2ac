use crate::api::InventoryApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::{ScanLogic, spawn_line_reader};
use crate::core::session::ScanSession;
use crate::errors::AppResult;
use crate::ui::feedback::TerminalFeedback;
use crate::ui::messages::{header, info, server_badge};
use std::io::{self, BufReader};

/// Handle the `scan` command: an interactive session on stdin
pub async fn handle(cmd: &Commands, cfg: &Config, api: &InventoryApi) -> AppResult<()> {
    if let Commands::Scan { amount, no_bell } = cmd {
        let feedback = TerminalFeedback::new(cfg.bell && !*no_bell);
        let mut session = ScanSession::new(api.clone(), feedback, &cfg.default_amount);
        if let Some(a) = amount {
            session.set_amount(a);
        }

        header("Inventory Scanner");
        let ok = session.refresh_health().await;
        server_badge(ok, &session.base_url());
        info("Scan a code, then :+ / :- to change stock. :help for commands.");

        let input = spawn_line_reader(BufReader::new(io::stdin()));
        let summary = ScanLogic::run(&mut session, input).await?;

        info(format!(
            "{} scan(s) accepted, {} update(s) applied",
            summary.accepted, summary.applied
        ));
    }
    Ok(())
}
