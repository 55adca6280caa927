use async_graphql::MergedObject;
mod form;

#[derive(MergedObject, Default)]
pub struct Mutations(form::FormMutation);
