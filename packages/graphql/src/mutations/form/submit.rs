use super::SubmitResult;
use crate::errors::ValidationErrorType;
use crate::session::FormSession;
use async_graphql::{Context, Result};
use services::SubmitOutcome;

pub(super) async fn submit(ctx: &Context<'_>) -> Result<SubmitResult> {
    let session = ctx.data::<FormSession>()?;
    let mut form = session.lock().await;

    match form.submit().await {
        SubmitOutcome::Committed(record) => Ok(SubmitResult::Submitted(record.into())),
        SubmitOutcome::Rejected(errors) => {
            Ok(SubmitResult::ValidationFailed(ValidationErrorType::from(&errors)))
        }
    }
}
