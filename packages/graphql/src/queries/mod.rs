use async_graphql::MergedObject;
mod form;
mod history;

#[derive(MergedObject, Default)]
pub struct Queries(form::FormQueries, history::HistoryQueries);
