use crate::api::InventoryApi;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{detail, success};

/// Handle the `lookup` command
pub async fn handle(cmd: &Commands, api: &InventoryApi) -> AppResult<()> {
    if let Commands::Lookup { barcode } = cmd {
        let product = api
            .lookup_product(barcode)
            .await
            .ok_or_else(|| AppError::Rejected(format!("No product found for {}", barcode)))?;

        success(format!("Barcode {}", product.barcode));
        if !product.display_name().is_empty() {
            detail("Item:", product.display_name());
        }
        for (key, value) in &product.extra {
            detail(&format!("{}:", key), value);
        }
    }
    Ok(())
}
