use crate::api::InventoryApi;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::server_badge;

/// Handle the `health` command. Exits non-zero when the backend is down.
pub async fn handle(api: &InventoryApi) -> AppResult<()> {
    let ok = api.health().await;
    let base = api.endpoints().base_url();
    server_badge(ok, &base);

    if ok {
        Ok(())
    } else {
        Err(AppError::Rejected(format!("backend at {} is not reachable", base)))
    }
}
