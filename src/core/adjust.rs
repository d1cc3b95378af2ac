use crate::core::session::{AdjustOutcome, Direction, Feedback, ScanSession};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::detail;

/// High-level business logic for the `add` / `remove` commands.
pub struct AdjustLogic;

impl AdjustLogic {
    /// Select `barcode`, apply `amount` in `direction` and report the result.
    /// Anything short of a confirmed update is returned as an error carrying
    /// the session status text.
    pub async fn apply<F: Feedback>(
        session: &mut ScanSession<F>,
        barcode: &str,
        direction: Direction,
        amount: Option<&str>,
        note: Option<&str>,
    ) -> AppResult<()> {
        if let Some(a) = amount {
            session.set_amount(a);
        }
        session.select_code(barcode).await;

        let outcome = session.apply(direction, note).await;

        match outcome {
            AdjustOutcome::Applied { qty } => {
                if !session.product_name().is_empty() {
                    detail("Item:", session.product_name());
                }
                if let Some(q) = qty {
                    detail("Qty after:", q);
                }
                Ok(())
            }
            AdjustOutcome::Invalid | AdjustOutcome::NotApplied | AdjustOutcome::Failed => {
                Err(AppError::Rejected(session.status().to_string()))
            }
        }
    }
}
