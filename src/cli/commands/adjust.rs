use crate::api::InventoryApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::core::session::{Direction, ScanSession};
use crate::errors::AppResult;
use crate::ui::feedback::TerminalFeedback;

/// Handle the `add` and `remove` commands
pub async fn handle(cmd: &Commands, cfg: &Config, api: &InventoryApi) -> AppResult<()> {
    let (barcode, amount, note, direction) = match cmd {
        Commands::Add {
            barcode,
            amount,
            note,
        } => (barcode, amount, note, Direction::Add),
        Commands::Remove {
            barcode,
            amount,
            note,
        } => (barcode, amount, note, Direction::Remove),
        _ => return Ok(()),
    };

    // One-shot commands never ring the bell.
    let mut session = ScanSession::new(
        api.clone(),
        TerminalFeedback::new(false),
        &cfg.default_amount,
    );

    AdjustLogic::apply(
        &mut session,
        barcode,
        direction,
        amount.as_deref(),
        note.as_deref(),
    )
    .await
}
