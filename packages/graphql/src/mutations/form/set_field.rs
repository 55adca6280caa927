use crate::session::FormSession;
use crate::types::form::{ContactFormType, FormField};
use async_graphql::{Context, Result};
use models::Field;

pub(super) async fn set_field(
    ctx: &Context<'_>,
    field: FormField,
    value: String,
) -> Result<ContactFormType> {
    let session = ctx.data::<FormSession>()?;
    let mut form = session.lock().await;

    let field = Field::from(field);
    form.update(field, value);
    form.settle().await;
    tracing::debug!(field = %field, errors = form.errors().len(), "field updated");

    Ok(ContactFormType::from(&*form))
}
