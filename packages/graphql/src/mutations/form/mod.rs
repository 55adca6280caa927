use crate::errors::{HistoryErr, ValidationErrorType};
use crate::types::form::{ContactFormType, FormField};
use crate::types::submission::SubmittedRecordType;
use async_graphql::{Context, Object, Result, Union};

mod clear_history;
mod set_field;
mod submit;

#[derive(Union)]
pub enum SubmitResult {
    Submitted(SubmittedRecordType),
    ValidationFailed(ValidationErrorType),
}

#[derive(Default)]
pub struct FormMutation;

#[Object]
impl FormMutation {
    /// Overwrite one field and wait for its live validation
    async fn set_field(
        &self,
        ctx: &Context<'_>,
        field: FormField,
        value: String,
    ) -> Result<ContactFormType> {
        set_field::set_field(ctx, field, value).await
    }

    /// Validate the whole form; commit and clear it when every field passes
    async fn submit(&self, ctx: &Context<'_>) -> Result<SubmitResult> {
        submit::submit(ctx).await
    }

    async fn clear_history(&self, ctx: &Context<'_>) -> Result<bool, HistoryErr> {
        clear_history::clear_history(ctx).await
    }
}
