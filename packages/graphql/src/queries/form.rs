use crate::session::FormSession;
use crate::types::form::ContactFormType;
use async_graphql::{Context, Object, Result};

#[derive(Default)]
pub struct FormQueries;

#[Object]
impl FormQueries {
    /// Current values, errors and last commit of the contact form
    async fn contact_form(&self, ctx: &Context<'_>) -> Result<ContactFormType> {
        let session = ctx.data::<FormSession>()?;
        let form = session.lock().await;
        Ok(ContactFormType::from(&*form))
    }
}
