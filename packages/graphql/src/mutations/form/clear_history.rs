use crate::errors::HistoryErr;
use crate::session::FormSession;
use async_graphql::{Context, Result};

pub(super) async fn clear_history(ctx: &Context<'_>) -> Result<bool, HistoryErr> {
    let session = ctx
        .data::<FormSession>()
        .map_err(|e| HistoryErr { message: e.message })?;
    let mut form = session.lock().await;

    if let Err(e) = form.clear_history() {
        tracing::warn!(error = %e, "failed to clear submission history");
        return Err(e.into());
    }
    tracing::info!("submission history cleared");
    Ok(true)
}
