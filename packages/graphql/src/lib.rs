pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;
pub mod session;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use services::ContactForm;

pub type ContactFormSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;

/// Build the schema around a single form session
pub fn build_schema(form: ContactForm) -> ContactFormSchema {
    Schema::build(queries::Queries::default(), mutations::Mutations::default(), EmptySubscription)
        .data(session::FormSession::new(form))
        .finish()
}
